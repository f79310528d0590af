// SPDX-License-Identifier: MPL-2.0
//! Detail view of the selected record.
//!
//! The modal owns its own media handle, independent from the card that was
//! clicked. Its playback rate is always one of [`PlaybackRate::ALL`] and
//! survives pause/resume. Clicks on the video toggle playback and flash a
//! [`Glyph`] for a short while.

use super::glyph::{Glyph, GlyphOverlay, GlyphToken};
use super::PlaybackRate;
use crate::catalog::{AnimationRecord, RecordId};
use crate::formula::{FormulaRenderer, UnicodeFormula};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::video_player::{DecoderCommandSender, MediaControl, MediaHandle, SessionId};
use iced::widget::{
    button, center, column, container, image, mouse_area, opaque, row, scrollable, stack, text,
    Space,
};
use iced::{mouse, Alignment, ContentFit, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Close button pressed.
    Close,
    /// Click outside the panel.
    BackdropPressed,
    /// Click inside the panel; swallowed so it never reaches the backdrop.
    PanelPressed,
    VideoPressed,
    SelectRate(PlaybackRate),
    FasterRate,
    SlowerRate,
}

/// State of an open modal.
#[derive(Debug, Clone)]
pub struct ModalState {
    record: RecordId,
    session: SessionId,
    media: MediaHandle,
    rate: PlaybackRate,
    paused: bool,
    glyph: GlyphOverlay,
}

impl ModalState {
    /// Opens on `record`, playing at `rate` once the media is mounted.
    #[must_use]
    pub fn new(record: RecordId, session: SessionId, rate: PlaybackRate) -> Self {
        Self {
            record,
            session,
            media: MediaHandle::new(),
            rate,
            paused: false,
            glyph: GlyphOverlay::default(),
        }
    }

    #[must_use]
    pub fn record(&self) -> RecordId {
        self.record
    }

    #[must_use]
    pub fn session(&self) -> SessionId {
        self.session
    }

    #[must_use]
    pub fn rate(&self) -> PlaybackRate {
        self.rate
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn glyph(&self) -> Option<Glyph> {
        self.glyph.visible()
    }

    #[must_use]
    pub fn media(&self) -> &MediaHandle {
        &self.media
    }

    /// Makes `rate` the single active rate and applies it to the media.
    pub fn select_rate(&mut self, rate: PlaybackRate) {
        self.rate = rate;
        self.media.set_rate(rate.multiplier());
    }

    /// Flips between playing and paused.
    ///
    /// The glyph offers the opposite action: Play once paused, Pause once
    /// resumed. The returned token hides it for this toggle, and only this one.
    pub fn toggle_playback(&mut self) -> GlyphToken {
        self.paused = !self.paused;
        let glyph = if self.paused {
            self.media.pause();
            Glyph::Play
        } else {
            self.media.play();
            Glyph::Pause
        };
        self.glyph.show(glyph)
    }

    pub fn hide_glyph(&mut self, token: GlyphToken) -> bool {
        self.glyph.hide(token)
    }

    /// Mounts the decoder and brings it in line with the current rate and
    /// pause state.
    pub fn media_started(&mut self, sender: DecoderCommandSender) {
        self.media.attach(sender);
        self.media.set_rate(self.rate.multiplier());
        if !self.paused {
            self.media.play();
        }
    }

    pub fn push_frame(&mut self, rgba_data: Vec<u8>, width: u32, height: u32, pts_secs: f64) {
        self.media.push_frame(rgba_data, width, height, pts_secs);
    }

    /// Unmounts the media; the view falls back to the poster.
    pub fn media_failed(&mut self) {
        self.media.detach();
    }
}

/// Full-window overlay for the selection, or `None` when nothing is selected.
///
/// The backdrop, the panel and the video each capture their own clicks, so a
/// press lands on exactly one of them.
pub fn overlay<'a>(
    record: Option<&'a AnimationRecord>,
    state: Option<&'a ModalState>,
    poster: Option<&image::Handle>,
    i18n: &I18n,
) -> Option<Element<'a, Message>> {
    let (record, state) = record.zip(state)?;

    let panel = container(scrollable(panel_content(record, state, poster, i18n)))
        .max_width(sizing::MODAL_MAX_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::panel);

    let backdrop = center(opaque(mouse_area(panel).on_press(Message::PanelPressed)))
        .padding(spacing::XL)
        .style(styles::overlay::backdrop);

    Some(opaque(mouse_area(backdrop).on_press(Message::BackdropPressed)))
}

fn panel_content<'a>(
    record: &'a AnimationRecord,
    state: &'a ModalState,
    poster: Option<&image::Handle>,
    i18n: &I18n,
) -> Element<'a, Message> {
    let header = row![
        column![
            text(record.title.as_str()).size(typography::TITLE_MD),
            container(text(record.category.as_str()).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::pill(record.category.is_ai())),
        ]
        .spacing(spacing::XS),
        Space::new().width(Length::Fill),
        button(text(i18n.tr("modal-close")).size(typography::BODY))
            .on_press(Message::Close)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .style(styles::button::close),
    ]
    .align_y(Alignment::Start);

    let mut content = column![
        header,
        video(state, poster, i18n),
        text(i18n.tr("modal-click-hint")).size(typography::CAPTION),
        rate_selector(state.rate(), i18n),
    ]
    .spacing(spacing::MD);

    if let Some(formula) = &record.formula {
        let rendered = UnicodeFormula.render(formula);
        content = content.push(section(
            i18n.tr("modal-section-formula"),
            container(text(rendered).size(typography::FORMULA))
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(styles::container::formula)
                .into(),
        ));
    }

    if let Some(explanation) = &record.explanation {
        content = content.push(section(
            i18n.tr("modal-section-explanation"),
            text(explanation.as_str()).size(typography::BODY_LG).into(),
        ));
    }

    if let Some(concept) = &record.concept {
        content = content.push(section(
            i18n.tr("modal-section-concept"),
            text(concept.as_str()).size(typography::BODY_LG).into(),
        ));
    }

    content.into()
}

fn video<'a>(
    state: &'a ModalState,
    poster: Option<&image::Handle>,
    i18n: &I18n,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match state.media().frame().or(poster) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        None => center(text(i18n.tr("card-loading"))).into(),
    };

    let mut layers = stack![picture];
    if let Some(glyph) = state.glyph() {
        let symbol = match glyph {
            Glyph::Play => "▶",
            Glyph::Pause => "❚❚",
        };
        layers = layers.push(center(
            container(text(symbol).size(typography::TITLE_LG))
                .center(Length::Fixed(sizing::GLYPH))
                .style(styles::overlay::glyph),
        ));
    }

    mouse_area(
        container(layers)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::MODAL_MEDIA_HEIGHT))
            .style(styles::container::media_frame),
    )
    .on_press(Message::VideoPressed)
    .interaction(mouse::Interaction::Pointer)
    .into()
}

fn rate_selector<'a>(active: PlaybackRate, i18n: &I18n) -> Element<'a, Message> {
    let buttons = PlaybackRate::ALL.iter().fold(row![].spacing(spacing::XS), |row, &rate| {
        row.push(
            button(text(rate.label()).size(typography::BODY).center())
                .width(Length::Fixed(sizing::RATE_BUTTON_WIDTH))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .on_press(Message::SelectRate(rate))
                .style(styles::button::rate(rate == active)),
        )
    });

    row![
        text(i18n.tr("modal-speed-label")).size(typography::BODY),
        buttons
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center)
    .into()
}

fn section<'a>(title: String, body: Element<'a, Message>) -> Element<'a, Message> {
    column![
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fixed(1.0))
            .style(styles::container::section_rule),
        text(title).size(typography::TITLE_SM),
        body,
    ]
    .spacing(spacing::SM)
    .into()
}
