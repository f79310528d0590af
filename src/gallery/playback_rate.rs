// SPDX-License-Identifier: MPL-2.0
//! Discrete playback rates offered by the detail view.

use std::fmt;

/// One of the fixed playback rate presets.
///
/// The set is closed, so an active rate is always one of [`PlaybackRate::ALL`].
///
/// # Example
///
/// ```
/// use motion_gallery::gallery::PlaybackRate;
///
/// assert_eq!(PlaybackRate::default().multiplier(), 1.0);
/// assert_eq!(PlaybackRate::Normal.increase(), PlaybackRate::OneAndHalf);
/// assert_eq!(PlaybackRate::Half.decrease(), PlaybackRate::Half);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaybackRate {
    Half,
    ThreeQuarters,
    #[default]
    Normal,
    OneAndHalf,
    Double,
}

impl PlaybackRate {
    /// All presets in ascending order.
    pub const ALL: [PlaybackRate; 5] = [
        PlaybackRate::Half,
        PlaybackRate::ThreeQuarters,
        PlaybackRate::Normal,
        PlaybackRate::OneAndHalf,
        PlaybackRate::Double,
    ];

    /// Speed multiplier applied to the decoder (1.0 = real time).
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            PlaybackRate::Half => 0.5,
            PlaybackRate::ThreeQuarters => 0.75,
            PlaybackRate::Normal => 1.0,
            PlaybackRate::OneAndHalf => 1.5,
            PlaybackRate::Double => 2.0,
        }
    }

    /// Button label, e.g. `0.75x`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PlaybackRate::Half => "0.5x",
            PlaybackRate::ThreeQuarters => "0.75x",
            PlaybackRate::Normal => "1x",
            PlaybackRate::OneAndHalf => "1.5x",
            PlaybackRate::Double => "2x",
        }
    }

    /// Looks up the preset matching `multiplier`.
    #[must_use]
    pub fn from_multiplier(multiplier: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rate| (rate.multiplier() - multiplier).abs() < 0.001)
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|rate| *rate == self)
            .unwrap_or_default()
    }

    /// Next faster preset, saturating at the fastest.
    #[must_use]
    pub fn increase(self) -> Self {
        Self::ALL
            .get(self.index() + 1)
            .copied()
            .unwrap_or(PlaybackRate::Double)
    }

    /// Next slower preset, saturating at the slowest.
    #[must_use]
    pub fn decrease(self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or(PlaybackRate::Half)
    }
}

impl fmt::Display for PlaybackRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
