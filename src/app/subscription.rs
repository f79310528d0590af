// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts only act on the detail view; with nothing selected the
//! gallery ignores them.

use super::Message;
use crate::gallery::{self, modal, Gallery};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

/// Routes uncaptured key presses to the detail view.
///
/// - `Escape` closes it
/// - `Space` toggles playback
/// - `+`/`]` and `-`/`[` step through the playback rates
pub fn create_keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let event::Status::Captured = status {
            return None;
        }
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
            return None;
        };
        shortcut(&key).map(|action| Message::Gallery(gallery::Message::Modal(action)))
    })
}

/// Playback sessions of hovered cards and the open detail view.
pub fn create_playback_subscription(gallery: &Gallery) -> Subscription<Message> {
    gallery.subscription().map(Message::Gallery)
}

fn shortcut(key: &Key) -> Option<modal::Message> {
    match key.as_ref() {
        Key::Named(Named::Escape) => Some(modal::Message::Close),
        Key::Named(Named::Space) => Some(modal::Message::VideoPressed),
        Key::Character("+" | "]") => Some(modal::Message::FasterRate),
        Key::Character("-" | "[") => Some(modal::Message::SlowerRate),
        _ => None,
    }
}
