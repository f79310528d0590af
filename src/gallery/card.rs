// SPDX-License-Identifier: MPL-2.0
//! Grid card: thumbnail, category badge, title and description of one record.
//!
//! Each card owns a two-state hover machine. Entering starts its clip,
//! leaving stops it and rewinds to the first frame. Pressing a card only
//! reports its id upward; the gallery decides what selection means.

use super::Message;
use crate::catalog::{AnimationRecord, RecordId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::video_player::MediaControl;
use iced::widget::{column, container, image, mouse_area, text};
use iced::{mouse, ContentFit, Element, Length};

/// Hover state of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Idle,
    Playing,
}

#[derive(Debug, Clone)]
pub struct Card {
    record: RecordId,
    state: CardState,
}

impl Card {
    #[must_use]
    pub fn new(record: RecordId) -> Self {
        Self {
            record,
            state: CardState::Idle,
        }
    }

    #[must_use]
    pub fn record(&self) -> RecordId {
        self.record
    }

    #[must_use]
    pub fn state(&self) -> CardState {
        self.state
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.state == CardState::Playing
    }

    /// Idle → Playing; starts `media`.
    ///
    /// Returns whether a transition happened. Entering while already
    /// playing changes nothing.
    pub fn pointer_enter<M: MediaControl>(&mut self, media: &mut M) -> bool {
        if self.is_playing() {
            return false;
        }
        media.play();
        self.state = CardState::Playing;
        true
    }

    /// Playing → Idle; stops `media` and rewinds it to the start.
    pub fn pointer_leave<M: MediaControl>(&mut self, media: &mut M) -> bool {
        if !self.is_playing() {
            return false;
        }
        media.pause();
        media.rewind();
        self.state = CardState::Idle;
        true
    }

    /// The record this card asks the gallery to select.
    #[must_use]
    pub fn activate(&self) -> RecordId {
        self.record
    }
}

/// Renders a card. `picture` is the live frame while playing, else the poster.
pub fn view<'a>(
    record: &'a AnimationRecord,
    card: &Card,
    picture: Option<&image::Handle>,
    i18n: &I18n,
) -> Element<'a, Message> {
    let media: Element<'a, Message> = match picture {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_MEDIA_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text(i18n.tr("card-loading")).size(typography::CAPTION))
            .center(Length::Fill)
            .into(),
    };

    let media = container(media)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_MEDIA_HEIGHT))
        .style(styles::container::media_frame);

    let ai = record.category.is_ai();
    let badge = container(text(record.category.as_str()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::pill(ai));

    let body = column![
        badge,
        text(record.title.as_str()).size(typography::TITLE_SM),
        text(record.description.as_str()).size(typography::BODY),
    ]
    .spacing(spacing::XS)
    .padding(spacing::MD);

    let id = card.record();
    mouse_area(
        container(column![media, body])
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .style(styles::container::card(card.is_playing(), ai)),
    )
    .on_enter(Message::CardEntered(id))
    .on_exit(Message::CardExited(id))
    .on_press(Message::CardPressed(id))
    .interaction(mouse::Interaction::Pointer)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct FakeMedia {
        calls: Vec<&'static str>,
        position: f64,
    }

    impl MediaControl for FakeMedia {
        fn play(&mut self) {
            self.calls.push("play");
            self.position += 1.0;
        }

        fn pause(&mut self) {
            self.calls.push("pause");
        }

        fn rewind(&mut self) {
            self.calls.push("rewind");
            self.position = 0.0;
        }

        fn set_rate(&mut self, _rate: f64) {
            self.calls.push("set_rate");
        }
    }

    #[test]
    fn starts_idle() {
        let card = Card::new(RecordId::new(1));
        assert_eq!(card.state(), CardState::Idle);
    }

    #[test]
    fn enter_plays_and_leave_rewinds() {
        let mut card = Card::new(RecordId::new(1));
        let mut media = FakeMedia::default();

        assert!(card.pointer_enter(&mut media));
        assert_eq!(card.state(), CardState::Playing);
        assert!(media.position > 0.0);

        assert!(card.pointer_leave(&mut media));
        assert_eq!(card.state(), CardState::Idle);
        assert_eq!(media.position, 0.0);
        assert_eq!(media.calls, vec!["play", "pause", "rewind"]);
    }

    #[test]
    fn repeated_transitions_are_noops() {
        let mut card = Card::new(RecordId::new(1));
        let mut media = FakeMedia::default();

        assert!(!card.pointer_leave(&mut media));
        assert!(card.pointer_enter(&mut media));
        assert!(!card.pointer_enter(&mut media));
        assert_eq!(media.calls, vec!["play"]);
    }

    #[test]
    fn states_cycle_indefinitely() {
        let mut card = Card::new(RecordId::new(3));
        let mut media = FakeMedia::default();
        for _ in 0..3 {
            card.pointer_enter(&mut media);
            card.pointer_leave(&mut media);
        }
        assert_eq!(card.state(), CardState::Idle);
        assert_eq!(media.calls.len(), 9);
    }

    #[test]
    fn activate_reports_own_record_without_side_effects() {
        let card = Card::new(RecordId::new(4));
        assert_eq!(card.activate(), RecordId::new(4));
        assert_eq!(card.state(), CardState::Idle);
    }
}
