// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the shell.
//!
//! The `App` struct wires together configuration, localization and the
//! gallery, and decides at startup which catalog is shown. Everything the
//! user does afterwards is handled by [`Gallery`].

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{self, Catalog, Variant};
use crate::config::{self, Config};
use crate::gallery::{Gallery, GallerySettings};
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use crate::video_player;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Where the displayed catalog came from; selects the page heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin(Variant),
    Manifest,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: Gallery,
    source: CatalogSource,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("source", &self.source)
            .field("clips", &self.gallery.catalog().len())
            .field("selection", &self.gallery.selected_id())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1180;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration, picks the catalog and starts poster extraction.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());

        let (mut config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }
        apply_flags(&mut config, &flags);

        if let Err(e) = video_player::init_ffmpeg() {
            tracing::error!(error = %e, "video playback unavailable");
        }

        let i18n = I18n::new(flags.lang.clone(), &config);
        let (catalog, source) = resolve_catalog(&config);
        tracing::info!(
            clips = catalog.len(),
            source = ?source,
            media_dir = %config.media_dir().display(),
            "gallery ready"
        );

        let gallery = Gallery::new(catalog, GallerySettings::from_config(&config));
        let task = gallery.load_posters().map(Message::Gallery);

        let app = App {
            i18n,
            gallery,
            source,
            theme_mode: config.general.theme_mode,
        };
        (app, task)
    }

    fn title(&self) -> String {
        match self.gallery.selection() {
            Some(record) => self
                .i18n
                .tr_with_args("window-title-detail", &[("title", record.title.as_str())]),
            None => self.i18n.tr("app-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => self.gallery.update(message).map(Message::Gallery),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            source: self.source,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_keyboard_subscription(),
            subscription::create_playback_subscription(&self.gallery),
        ])
    }
}

/// Command-line flags win over the configuration file.
fn apply_flags(config: &mut Config, flags: &Flags) {
    if let Some(dir) = &flags.media_dir {
        config.gallery.media_dir = Some(PathBuf::from(dir));
    }
    if let Some(manifest) = &flags.catalog {
        config.gallery.catalog = Some(PathBuf::from(manifest));
    }
    if let Some(variant) = flags.variant {
        config.gallery.variant = Some(variant);
        // An explicit variant asks for the built-in catalog.
        if flags.catalog.is_none() {
            config.gallery.catalog = None;
        }
    }
}

/// Loads the configured manifest, falling back to the built-in catalog when
/// none is set or it cannot be read.
fn resolve_catalog(config: &Config) -> (Catalog, CatalogSource) {
    let variant = config.variant();
    let Some(path) = &config.gallery.catalog else {
        return (Catalog::builtin(variant), CatalogSource::Builtin(variant));
    };

    match catalog::load_manifest(path) {
        Ok(catalog) => (catalog, CatalogSource::Manifest),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "falling back to built-in catalog");
            (Catalog::builtin(variant), CatalogSource::Builtin(variant))
        }
    }
}
