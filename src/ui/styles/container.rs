// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface; the border lights up while the card previews.
///
/// AI cards keep an accent outline while idle so the section stands apart.
pub fn card(playing: bool, ai: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        let border_color = if playing {
            palette::PRIMARY_500
        } else if ai {
            palette::ACCENT_500
        } else {
            Color::TRANSPARENT
        };
        container::Style {
            background: Some(Background::Color(extended.background.weak.color)),
            text_color: Some(extended.background.weak.text),
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            shadow: if playing { shadow::LG } else { shadow::SM },
            ..Default::default()
        }
    }
}

/// Preview area behind posters and frames.
pub fn media_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Detail panel surface.
///
/// Derived from the active theme background so it stays readable in both
/// light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Category badge.
pub fn pill(ai: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(if ai {
            palette::ACCENT_500
        } else {
            palette::PRIMARY_500
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Box around the rendered formula.
pub fn formula(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            color: palette::ACCENT_500,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Thin horizontal rule under section headers.
pub fn section_rule(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        ..Default::default()
    }
}
