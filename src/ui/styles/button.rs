// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style pour les boutons de vitesse; le bouton actif prend la couleur de marque.
pub fn rate(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let extended = theme.extended_palette();

        if active {
            return button::Style {
                background: Some(Background::Color(palette::PRIMARY_500)),
                text_color: WHITE,
                border: Border {
                    color: palette::PRIMARY_600,
                    width: border::WIDTH_SM,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                ..Default::default()
            };
        }

        let background = match status {
            button::Status::Hovered => extended.background.strong.color,
            button::Status::Pressed => palette::PRIMARY_400,
            _ => extended.background.weak.color,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: extended.background.base.text,
            border: Border {
                color: extended.background.strong.color,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            ..Default::default()
        }
    }
}

/// Round close button in the corner of the detail panel.
pub fn close(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_STRONG,
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        _ => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
