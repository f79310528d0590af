// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Media location
//! - **Playback**: Hover previews, glyph timing and rate

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Directory, relative to the working directory, holding the clips.
pub const DEFAULT_MEDIA_DIR: &str = "videos";

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Cards play their clip while hovered.
pub const DEFAULT_HOVER_PREVIEW: bool = true;

/// How long the play/pause glyph stays visible (in milliseconds).
pub const DEFAULT_GLYPH_DURATION_MS: u64 = 600;

/// Minimum glyph duration (in milliseconds).
pub const MIN_GLYPH_DURATION_MS: u64 = 100;

/// Maximum glyph duration (in milliseconds).
pub const MAX_GLYPH_DURATION_MS: u64 = 3_000;

/// Playback rate a freshly opened modal starts with.
pub const DEFAULT_PLAYBACK_RATE: f64 = 1.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_GLYPH_DURATION_MS > 0);
    assert!(MAX_GLYPH_DURATION_MS >= MIN_GLYPH_DURATION_MS);
    assert!(DEFAULT_GLYPH_DURATION_MS >= MIN_GLYPH_DURATION_MS);
    assert!(DEFAULT_GLYPH_DURATION_MS <= MAX_GLYPH_DURATION_MS);

    assert!(DEFAULT_PLAYBACK_RATE > 0.0);
};
