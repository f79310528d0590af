// SPDX-License-Identifier: MPL-2.0
//! Transient play/pause indicator shown over the detail video.
//!
//! Each `show` bumps a generation counter and hands out a token. The hide
//! timer carries that token back; a token from an earlier `show` no longer
//! hides anything, so overlapping timers and timers outliving their modal are
//! harmless.

/// Which symbol the overlay displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Shown after pausing: a click resumes.
    Play,
    /// Shown after resuming: a click pauses.
    Pause,
}

/// Generation marker returned by [`GlyphOverlay::show`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphToken(u64);

#[derive(Debug, Clone, Default)]
pub struct GlyphOverlay {
    visible: Option<Glyph>,
    generation: u64,
}

impl GlyphOverlay {
    /// Displays `glyph` and returns the token that may later hide it.
    pub fn show(&mut self, glyph: Glyph) -> GlyphToken {
        self.generation = self.generation.wrapping_add(1);
        self.visible = Some(glyph);
        GlyphToken(self.generation)
    }

    /// Hides the overlay if `token` comes from the latest `show`.
    ///
    /// Returns whether the overlay was hidden.
    pub fn hide(&mut self, token: GlyphToken) -> bool {
        if token.0 != self.generation || self.visible.is_none() {
            return false;
        }
        self.visible = None;
        true
    }

    #[must_use]
    pub fn visible(&self) -> Option<Glyph> {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert_eq!(GlyphOverlay::default().visible(), None);
    }

    #[test]
    fn current_token_hides() {
        let mut overlay = GlyphOverlay::default();
        let token = overlay.show(Glyph::Pause);
        assert_eq!(overlay.visible(), Some(Glyph::Pause));
        assert!(overlay.hide(token));
        assert_eq!(overlay.visible(), None);
    }

    #[test]
    fn stale_token_is_ignored() {
        let mut overlay = GlyphOverlay::default();
        let first = overlay.show(Glyph::Pause);
        let second = overlay.show(Glyph::Play);

        assert!(!overlay.hide(first));
        assert_eq!(overlay.visible(), Some(Glyph::Play));
        assert!(overlay.hide(second));
    }

    #[test]
    fn hiding_twice_is_harmless() {
        let mut overlay = GlyphOverlay::default();
        let token = overlay.show(Glyph::Play);
        assert!(overlay.hide(token));
        assert!(!overlay.hide(token));
    }
}
