// SPDX-License-Identifier: MPL-2.0
//! Gallery state: the card grid plus the single selection shown in the modal.
//!
//! Each card and the open modal get their own playback session. A session id
//! is allocated every time media is mounted, so re-entering a card or
//! re-opening a record always starts a fresh decoder at the first frame, and
//! messages from a session that was torn down are recognised and dropped.

pub mod card;
pub mod glyph;
pub mod modal;
mod playback_rate;

pub use card::{Card, CardState};
pub use glyph::{Glyph, GlyphOverlay, GlyphToken};
pub use modal::ModalState;
pub use playback_rate::PlaybackRate;

use crate::catalog::{AnimationRecord, Catalog, RecordId};
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::video_player::{
    extract_poster, video_playback, MediaControl, MediaHandle, PlaybackMessage, SessionId,
};
use iced::widget::{container, image, text, Column, Row, Space};
use iced::{Element, Length, Subscription, Task};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Message {
    CardEntered(RecordId),
    CardExited(RecordId),
    CardPressed(RecordId),
    Playback {
        session: SessionId,
        event: PlaybackMessage,
    },
    PosterLoaded(RecordId, Result<image::Handle, String>),
    Modal(modal::Message),
    GlyphExpired(SessionId, GlyphToken),
}

/// Behaviour knobs taken from the configuration.
#[derive(Debug, Clone)]
pub struct GallerySettings {
    pub media_dir: PathBuf,
    pub hover_preview: bool,
    pub glyph_duration: Duration,
    pub default_rate: PlaybackRate,
}

impl GallerySettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            media_dir: config.media_dir(),
            hover_preview: config.hover_preview(),
            glyph_duration: config.glyph_duration(),
            default_rate: config.default_rate(),
        }
    }
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[derive(Debug, Clone)]
struct CardSlot {
    card: Card,
    media: MediaHandle,
    session: Option<SessionId>,
}

#[derive(Debug)]
pub struct Gallery {
    catalog: Catalog,
    settings: GallerySettings,
    cards: HashMap<RecordId, CardSlot>,
    posters: HashMap<RecordId, image::Handle>,
    modal: Option<ModalState>,
    next_session: SessionId,
}

impl Gallery {
    #[must_use]
    pub fn new(catalog: Catalog, settings: GallerySettings) -> Self {
        let cards = catalog
            .records()
            .iter()
            .map(|record| {
                (
                    record.id,
                    CardSlot {
                        card: Card::new(record.id),
                        media: MediaHandle::new(),
                        session: None,
                    },
                )
            })
            .collect();

        Self {
            catalog,
            settings,
            cards,
            posters: HashMap::new(),
            modal: None,
            next_session: SessionId::new(1),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn settings(&self) -> &GallerySettings {
        &self.settings
    }

    #[must_use]
    pub fn card(&self, id: RecordId) -> Option<&Card> {
        self.cards.get(&id).map(|slot| &slot.card)
    }

    /// Id of the record shown in the modal, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<RecordId> {
        self.modal.as_ref().map(ModalState::record)
    }

    #[must_use]
    pub fn selection(&self) -> Option<&AnimationRecord> {
        self.selected_id().and_then(|id| self.catalog.get(id))
    }

    #[must_use]
    pub fn modal(&self) -> Option<&ModalState> {
        self.modal.as_ref()
    }

    #[must_use]
    pub fn has_poster(&self, id: RecordId) -> bool {
        self.posters.contains_key(&id)
    }

    /// Extracts every poster frame off the UI thread.
    pub fn load_posters(&self) -> Task<Message> {
        let media_dir = &self.settings.media_dir;
        Task::batch(self.catalog.records().iter().map(|record| {
            let id = record.id;
            let path = record.media.resolve(media_dir);
            Task::perform(
                async move {
                    tokio::task::spawn_blocking(move || extract_poster(&path))
                        .await
                        .map_err(|e| e.to_string())
                        .and_then(|result| result.map_err(|e| e.to_string()))
                },
                move |result| Message::PosterLoaded(id, result),
            )
        }))
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CardEntered(id) => {
                self.card_entered(id);
                Task::none()
            }
            Message::CardExited(id) => {
                self.card_exited(id);
                Task::none()
            }
            Message::CardPressed(id) => {
                let Some(record) = self.cards.get(&id).map(|slot| slot.card.activate()) else {
                    return Task::none();
                };
                self.open(record);
                Task::none()
            }
            Message::Playback { session, event } => {
                self.route_playback(session, event);
                Task::none()
            }
            Message::PosterLoaded(id, result) => {
                match result {
                    Ok(handle) => {
                        self.posters.insert(id, handle);
                    }
                    Err(error) => {
                        tracing::warn!(record = %id, %error, "poster unavailable");
                    }
                }
                Task::none()
            }
            Message::Modal(message) => self.update_modal(message),
            Message::GlyphExpired(session, token) => {
                if let Some(modal) = self.modal.as_mut() {
                    if modal.session() == session {
                        modal.hide_glyph(token);
                    }
                }
                Task::none()
            }
        }
    }

    /// Makes `id` the selection, replacing any previous one.
    pub fn open(&mut self, id: RecordId) {
        if self.catalog.get(id).is_none() {
            tracing::debug!(record = %id, "ignoring selection of unknown record");
            return;
        }
        let session = self.allocate_session();
        if let Some(previous) = self.modal.replace(ModalState::new(
            id,
            session,
            self.settings.default_rate,
        )) {
            tracing::debug!(from = %previous.record(), to = %id, "selection replaced");
        } else {
            tracing::debug!(record = %id, %session, "modal opened");
        }
    }

    /// Clears the selection and unmounts the modal media.
    pub fn close(&mut self) {
        if let Some(modal) = self.modal.take() {
            tracing::debug!(record = %modal.record(), "modal closed");
        }
    }

    /// Playback sessions for every hovered card and the open modal.
    pub fn subscription(&self) -> Subscription<Message> {
        let media_dir = &self.settings.media_dir;
        let path_of = |id: RecordId| {
            self.catalog
                .get(id)
                .map(|record| record.media.resolve(media_dir))
        };

        let cards = self.cards.iter().filter_map(|(id, slot)| {
            let session = slot.session?;
            path_of(*id).map(|path| video_playback(path, session))
        });
        let modal = self.modal.as_ref().and_then(|modal| {
            path_of(modal.record()).map(|path| video_playback(path, modal.session()))
        });

        Subscription::batch(cards.chain(modal))
            .map(|(session, event)| Message::Playback { session, event })
    }

    /// Card grid, one titled block per category.
    pub fn view<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let sections = self.catalog.sections();
        let show_headings = sections.len() > 1;

        let mut content = Column::new().spacing(spacing::XL);
        for section in sections {
            let mut block = Column::new().spacing(spacing::MD);
            if show_headings {
                block = block
                    .push(text(section.category.as_str()).size(typography::TITLE_MD))
                    .push(
                        container(Space::new())
                            .width(Length::Fixed(sizing::SECTION_RULE_WIDTH))
                            .height(Length::Fixed(2.0))
                            .style(styles::container::section_rule),
                    );
            }
            for chunk in section.records.chunks(sizing::CARDS_PER_ROW) {
                let cards = chunk.iter().filter_map(|record| self.card_view(record, i18n));
                block = block.push(Row::with_children(cards).spacing(spacing::LG));
            }
            content = content.push(block);
        }

        if self.catalog.is_empty() {
            content = content.push(text(i18n.tr("gallery-empty")).size(typography::BODY_LG));
        }

        container(content).width(Length::Fill).center_x(Length::Fill).into()
    }

    /// Modal overlay, or `None` when nothing is selected.
    pub fn modal_view<'a>(&'a self, i18n: &I18n) -> Option<Element<'a, Message>> {
        let poster = self.selected_id().and_then(|id| self.posters.get(&id));
        modal::overlay(self.selection(), self.modal.as_ref(), poster, i18n)
            .map(|element| element.map(Message::Modal))
    }

    fn card_view<'a>(
        &'a self,
        record: &'a AnimationRecord,
        i18n: &I18n,
    ) -> Option<Element<'a, Message>> {
        let slot = self.cards.get(&record.id)?;
        let picture = slot
            .media
            .frame()
            .or_else(|| self.posters.get(&record.id));
        Some(card::view(record, &slot.card, picture, i18n))
    }

    fn card_entered(&mut self, id: RecordId) {
        let session = self.next_session;
        let hover_preview = self.settings.hover_preview;
        let Some(slot) = self.cards.get_mut(&id) else {
            return;
        };
        if slot.card.pointer_enter(&mut slot.media) && hover_preview {
            slot.session = Some(session);
            self.next_session = session.next();
        }
    }

    fn card_exited(&mut self, id: RecordId) {
        let Some(slot) = self.cards.get_mut(&id) else {
            return;
        };
        if slot.card.pointer_leave(&mut slot.media) {
            slot.session = None;
            slot.media.detach();
        }
    }

    fn update_modal(&mut self, message: modal::Message) -> Task<Message> {
        if matches!(message, modal::Message::Close | modal::Message::BackdropPressed) {
            self.close();
            return Task::none();
        }

        let Some(modal) = self.modal.as_mut() else {
            return Task::none();
        };

        match message {
            modal::Message::VideoPressed => {
                let token = modal.toggle_playback();
                let session = modal.session();
                let delay = self.settings.glyph_duration;
                Task::perform(
                    async move { tokio::time::sleep(delay).await },
                    move |()| Message::GlyphExpired(session, token),
                )
            }
            modal::Message::SelectRate(rate) => {
                modal.select_rate(rate);
                Task::none()
            }
            modal::Message::FasterRate => {
                modal.select_rate(modal.rate().increase());
                Task::none()
            }
            modal::Message::SlowerRate => {
                modal.select_rate(modal.rate().decrease());
                Task::none()
            }
            modal::Message::PanelPressed
            | modal::Message::Close
            | modal::Message::BackdropPressed => Task::none(),
        }
    }

    fn route_playback(&mut self, session: SessionId, event: PlaybackMessage) {
        if let Some(modal) = self.modal.as_mut().filter(|m| m.session() == session) {
            match event {
                PlaybackMessage::Started(sender) => modal.media_started(sender),
                PlaybackMessage::FrameReady {
                    rgba_data,
                    width,
                    height,
                    pts_secs,
                } => modal.push_frame(Arc::unwrap_or_clone(rgba_data), width, height, pts_secs),
                PlaybackMessage::Error(error) => {
                    tracing::warn!(%session, %error, "detail playback failed");
                    modal.media_failed();
                }
            }
            return;
        }

        let Some(slot) = self
            .cards
            .values_mut()
            .find(|slot| slot.session == Some(session))
        else {
            tracing::trace!(%session, "dropping message from ended session");
            return;
        };

        match event {
            PlaybackMessage::Started(sender) => {
                slot.media.attach(sender);
                if slot.card.is_playing() {
                    slot.media.play();
                }
            }
            PlaybackMessage::FrameReady {
                rgba_data,
                width,
                height,
                pts_secs,
            } => slot
                .media
                .push_frame(Arc::unwrap_or_clone(rgba_data), width, height, pts_secs),
            PlaybackMessage::Error(error) => {
                tracing::warn!(%session, %error, "card preview failed");
                slot.session = None;
                slot.media.detach();
            }
        }
    }

    fn allocate_session(&mut self) -> SessionId {
        let session = self.next_session;
        self.next_session = session.next();
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video_player::{DecoderCommand, DecoderCommandSender};
    use tokio::sync::mpsc;

    fn gallery() -> Gallery {
        Gallery::new(Catalog::classic(), GallerySettings::default())
    }

    fn first_id(gallery: &Gallery) -> RecordId {
        gallery.catalog().records()[0].id
    }

    fn card_session(gallery: &Gallery, id: RecordId) -> Option<SessionId> {
        gallery.cards.get(&id).and_then(|slot| slot.session)
    }

    #[test]
    fn hover_mounts_and_leave_unmounts_card_media() {
        let mut gallery = gallery();
        let id = first_id(&gallery);

        let _ = gallery.update(Message::CardEntered(id));
        assert_eq!(gallery.card(id).map(Card::state), Some(CardState::Playing));
        assert!(card_session(&gallery, id).is_some());

        let _ = gallery.update(Message::CardExited(id));
        assert_eq!(gallery.card(id).map(Card::state), Some(CardState::Idle));
        assert!(card_session(&gallery, id).is_none());
    }

    #[test]
    fn every_hover_uses_a_fresh_session() {
        let mut gallery = gallery();
        let id = first_id(&gallery);

        let _ = gallery.update(Message::CardEntered(id));
        let first = card_session(&gallery, id);
        let _ = gallery.update(Message::CardExited(id));
        let _ = gallery.update(Message::CardEntered(id));
        let second = card_session(&gallery, id);

        assert!(first.is_some());
        assert_ne!(first, second);
    }

    #[test]
    fn disabled_hover_preview_changes_state_without_media() {
        let settings = GallerySettings {
            hover_preview: false,
            ..GallerySettings::default()
        };
        let mut gallery = Gallery::new(Catalog::classic(), settings);
        let id = first_id(&gallery);

        let _ = gallery.update(Message::CardEntered(id));
        assert_eq!(gallery.card(id).map(Card::state), Some(CardState::Playing));
        assert!(card_session(&gallery, id).is_none());
    }

    #[test]
    fn card_started_plays_only_while_hovered() {
        let mut gallery = gallery();
        let id = first_id(&gallery);
        let _ = gallery.update(Message::CardEntered(id));
        let session = card_session(&gallery, id).expect("session allocated");

        let (tx, mut rx) = mpsc::unbounded_channel();
        let _ = gallery.update(Message::Playback {
            session,
            event: PlaybackMessage::Started(DecoderCommandSender::new(tx)),
        });
        assert_eq!(rx.try_recv().ok(), Some(DecoderCommand::Play));

        let _ = gallery.update(Message::CardExited(id));
        assert_eq!(rx.try_recv().ok(), Some(DecoderCommand::Pause));
        assert_eq!(rx.try_recv().ok(), Some(DecoderCommand::Rewind));
    }

    #[test]
    fn messages_from_ended_sessions_are_dropped() {
        let mut gallery = gallery();
        let id = first_id(&gallery);
        let _ = gallery.update(Message::CardEntered(id));
        let stale = card_session(&gallery, id).expect("session allocated");
        let _ = gallery.update(Message::CardExited(id));

        let _ = gallery.update(Message::Playback {
            session: stale,
            event: PlaybackMessage::FrameReady {
                rgba_data: Arc::new(vec![0; 4]),
                width: 1,
                height: 1,
                pts_secs: 0.0,
            },
        });
        assert!(gallery.cards[&id].media.frame().is_none());
    }

    #[test]
    fn new_activation_replaces_selection() {
        let mut gallery = gallery();
        let ids: Vec<RecordId> = gallery.catalog().records().iter().map(|r| r.id).collect();

        let _ = gallery.update(Message::CardPressed(ids[0]));
        let first_session = gallery.modal().map(ModalState::session);
        let _ = gallery.update(Message::CardPressed(ids[1]));

        assert_eq!(gallery.selected_id(), Some(ids[1]));
        assert_ne!(gallery.modal().map(ModalState::session), first_session);
    }

    #[test]
    fn modal_opens_with_configured_rate() {
        let settings = GallerySettings {
            default_rate: PlaybackRate::Half,
            ..GallerySettings::default()
        };
        let mut gallery = Gallery::new(Catalog::classic(), settings);
        let id = first_id(&gallery);

        let _ = gallery.update(Message::CardPressed(id));
        let _ = gallery.update(Message::Modal(modal::Message::FasterRate));

        assert_eq!(
            gallery.modal().map(ModalState::rate),
            Some(PlaybackRate::ThreeQuarters)
        );
    }

    #[test]
    fn glyph_expiry_is_scoped_to_session_and_token() {
        let mut gallery = gallery();
        let id = first_id(&gallery);
        let _ = gallery.update(Message::CardPressed(id));

        let (session, token) = {
            let modal = gallery.modal.as_mut().expect("modal open");
            (modal.session(), modal.toggle_playback())
        };

        let _ = gallery.update(Message::GlyphExpired(session.next(), token));
        assert_eq!(gallery.modal().and_then(ModalState::glyph), Some(Glyph::Play));

        let _ = gallery.update(Message::GlyphExpired(session, token));
        assert_eq!(gallery.modal().and_then(ModalState::glyph), None);
    }

    #[test]
    fn modal_messages_without_selection_are_noops() {
        let mut gallery = gallery();
        for message in [
            modal::Message::VideoPressed,
            modal::Message::SelectRate(PlaybackRate::Double),
            modal::Message::PanelPressed,
            modal::Message::Close,
        ] {
            let _ = gallery.update(Message::Modal(message));
        }
        assert!(gallery.selection().is_none());
    }

    #[test]
    fn posters_are_kept_and_failures_ignored() {
        let mut gallery = gallery();
        let ids: Vec<RecordId> = gallery.catalog().records().iter().map(|r| r.id).collect();
        let handle = image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]);

        let _ = gallery.update(Message::PosterLoaded(ids[0], Ok(handle)));
        let _ = gallery.update(Message::PosterLoaded(ids[1], Err("missing".to_string())));

        assert!(gallery.has_poster(ids[0]));
        assert!(!gallery.has_poster(ids[1]));
    }

    #[test]
    fn unknown_record_is_not_selected() {
        let mut gallery = gallery();
        gallery.open(RecordId::new(9_999));
        assert!(gallery.selection().is_none());
    }
}
