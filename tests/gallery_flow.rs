// SPDX-License-Identifier: MPL-2.0
//! User flows through the gallery without a running window.

use iced::{mouse, Event, Point};
use iced_test::simulator;
use motion_gallery::catalog::{Catalog, RecordId};
use motion_gallery::gallery::{
    modal, CardState, Gallery, GallerySettings, Glyph, Message, PlaybackRate,
};
use motion_gallery::i18n::fluent::I18n;
use motion_gallery::video_player::{DecoderCommand, DecoderCommandSender, PlaybackMessage};
use tokio::sync::mpsc;

fn ai_gallery() -> Gallery {
    Gallery::new(Catalog::ai_in_motion(), GallerySettings::default())
}

fn ids(gallery: &Gallery) -> Vec<RecordId> {
    gallery.catalog().records().iter().map(|r| r.id).collect()
}

fn send(gallery: &mut Gallery, message: Message) {
    let _ = gallery.update(message);
}

fn press(gallery: &mut Gallery, message: modal::Message) {
    send(gallery, Message::Modal(message));
}

#[test]
fn starts_without_selection_or_overlay() {
    let gallery = ai_gallery();
    let i18n = I18n::default();

    assert!(gallery.selection().is_none());
    assert!(gallery.modal_view(&i18n).is_none());
    assert!(ids(&gallery)
        .into_iter()
        .all(|id| gallery.card(id).map(|c| c.state()) == Some(CardState::Idle)));
}

#[test]
fn hover_is_independent_per_card() {
    let mut gallery = ai_gallery();
    let ids = ids(&gallery);

    send(&mut gallery, Message::CardEntered(ids[0]));
    send(&mut gallery, Message::CardEntered(ids[1]));
    send(&mut gallery, Message::CardExited(ids[0]));

    assert_eq!(gallery.card(ids[0]).map(|c| c.state()), Some(CardState::Idle));
    assert_eq!(gallery.card(ids[1]).map(|c| c.state()), Some(CardState::Playing));
}

#[test]
fn click_opens_detail_and_close_button_clears_it() {
    let mut gallery = ai_gallery();
    let id = ids(&gallery)[0];

    send(&mut gallery, Message::CardPressed(id));
    assert_eq!(gallery.selected_id(), Some(id));
    assert_eq!(gallery.modal().map(|m| m.rate()), Some(PlaybackRate::Normal));

    press(&mut gallery, modal::Message::Close);
    assert!(gallery.selection().is_none());
    assert!(gallery.modal_view(&I18n::default()).is_none());
}

#[test]
fn backdrop_closes_but_panel_does_not() {
    let mut gallery = ai_gallery();
    let id = ids(&gallery)[2];
    send(&mut gallery, Message::CardPressed(id));

    press(&mut gallery, modal::Message::PanelPressed);
    assert_eq!(gallery.selected_id(), Some(id));

    press(&mut gallery, modal::Message::BackdropPressed);
    assert!(gallery.selection().is_none());
    assert!(gallery.modal_view(&I18n::default()).is_none());
}

fn is_backdrop(message: &Message) -> bool {
    matches!(message, Message::Modal(modal::Message::BackdropPressed))
}

#[test]
fn click_on_rendered_panel_never_reaches_backdrop() {
    let mut gallery = ai_gallery();
    let id = ids(&gallery)[0];
    let title = gallery.catalog().get(id).expect("record").title.clone();
    let i18n = I18n::default();
    send(&mut gallery, Message::CardPressed(id));

    let messages: Vec<Message> = {
        let overlay = gallery.modal_view(&i18n).expect("overlay rendered");
        let mut ui = simulator(overlay);
        let _ = ui.click(title.as_str()).expect("title is on screen");
        ui.into_messages().collect()
    };

    assert!(messages
        .iter()
        .any(|m| matches!(m, Message::Modal(modal::Message::PanelPressed))));
    assert!(!messages.iter().any(is_backdrop));
    for message in messages {
        send(&mut gallery, message);
    }
    assert_eq!(gallery.selected_id(), Some(id));
    assert!(gallery.modal_view(&i18n).is_some());
}

#[test]
fn click_on_rendered_backdrop_closes_overlay() {
    let mut gallery = ai_gallery();
    let id = ids(&gallery)[0];
    let i18n = I18n::default();
    send(&mut gallery, Message::CardPressed(id));

    let messages: Vec<Message> = {
        let overlay = gallery.modal_view(&i18n).expect("overlay rendered");
        let mut ui = simulator(overlay);
        // Inside the backdrop padding, outside the panel.
        ui.point_at(Point::new(2.0, 2.0));
        let _ = ui.simulate([
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
        ]);
        ui.into_messages().collect()
    };

    assert!(messages.iter().any(is_backdrop));
    for message in messages {
        send(&mut gallery, message);
    }
    assert!(gallery.selection().is_none());
    assert!(gallery.modal_view(&i18n).is_none());
}

#[test]
fn second_activation_replaces_first() {
    let mut gallery = ai_gallery();
    let ids = ids(&gallery);

    send(&mut gallery, Message::CardPressed(ids[0]));
    send(&mut gallery, Message::CardPressed(ids[3]));

    assert_eq!(gallery.selected_id(), Some(ids[3]));
    press(&mut gallery, modal::Message::Close);
    assert!(gallery.selection().is_none());
}

#[test]
fn exactly_one_rate_is_active() {
    let mut gallery = ai_gallery();
    send(&mut gallery, Message::CardPressed(ids(&gallery)[0]));

    press(&mut gallery, modal::Message::SelectRate(PlaybackRate::OneAndHalf));
    let active: Vec<_> = PlaybackRate::ALL
        .iter()
        .filter(|&&rate| gallery.modal().map(|m| m.rate()) == Some(rate))
        .collect();
    assert_eq!(active, vec![&PlaybackRate::OneAndHalf]);

    press(&mut gallery, modal::Message::FasterRate);
    press(&mut gallery, modal::Message::FasterRate);
    assert_eq!(gallery.modal().map(|m| m.rate()), Some(PlaybackRate::Double));
}

#[test]
fn video_click_toggles_pause_and_shows_glyph() {
    let mut gallery = ai_gallery();
    send(&mut gallery, Message::CardPressed(ids(&gallery)[0]));

    press(&mut gallery, modal::Message::VideoPressed);
    let modal = gallery.modal().expect("modal open");
    assert!(modal.is_paused());
    assert_eq!(modal.glyph(), Some(Glyph::Play));

    press(&mut gallery, modal::Message::VideoPressed);
    let modal = gallery.modal().expect("modal open");
    assert!(!modal.is_paused());
    assert_eq!(modal.glyph(), Some(Glyph::Pause));
}

#[test]
fn modal_playback_applies_rate_when_media_arrives() {
    let mut gallery = ai_gallery();
    send(&mut gallery, Message::CardPressed(ids(&gallery)[1]));
    press(&mut gallery, modal::Message::SelectRate(PlaybackRate::Half));
    let session = gallery.modal().map(|m| m.session()).expect("modal open");

    let (tx, mut rx) = mpsc::unbounded_channel();
    send(
        &mut gallery,
        Message::Playback {
            session,
            event: PlaybackMessage::Started(DecoderCommandSender::new(tx)),
        },
    );

    assert_eq!(rx.try_recv().ok(), Some(DecoderCommand::SetRate(0.5)));
    assert_eq!(rx.try_recv().ok(), Some(DecoderCommand::Play));
    assert!(gallery.modal().is_some_and(|m| m.media().is_mounted()));
}

#[test]
fn reopening_starts_a_new_session() {
    let mut gallery = ai_gallery();
    let id = ids(&gallery)[0];

    send(&mut gallery, Message::CardPressed(id));
    let first = gallery.modal().map(|m| m.session());
    press(&mut gallery, modal::Message::Close);
    send(&mut gallery, Message::CardPressed(id));
    let second = gallery.modal().map(|m| m.session());

    assert_ne!(first, second);
    assert_eq!(gallery.modal().map(|m| m.rate()), Some(PlaybackRate::Normal));
    assert!(!gallery.modal().is_some_and(|m| m.is_paused()));
}
