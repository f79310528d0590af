// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::Variant;
use crate::gallery;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
}

impl From<gallery::Message> for Message {
    fn from(message: gallery::Message) -> Self {
        Message::Gallery(message)
    }
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `MOTION_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Directory holding the clips; overrides `[gallery] media_dir`.
    pub media_dir: Option<String>,
    /// TOML catalog manifest; overrides `[gallery] catalog`.
    pub catalog: Option<String>,
    /// Built-in catalog to show when no manifest is given.
    pub variant: Option<Variant>,
}
