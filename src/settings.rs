//! Playback Settings
//!
//! Configuration shared by every player variant.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ossa::settings::PlaybackSettings;
//! use ossa::animation::LoopMode;
//!
//! // Default: looping at normal speed
//! let settings = PlaybackSettings::default();
//!
//! // One-shot at half speed
//! let settings = PlaybackSettings {
//!     loop_mode: LoopMode::Once,
//!     time_scale: 0.5,
//! };
//!
//! let player = SkeletonAnimator::new(clip, &template).with_settings(settings);
//! ```

use crate::animation::action::LoopMode;

/// How a player advances through its clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSettings {
    /// Wrap around at the end of the clip or stop there.
    pub loop_mode: LoopMode,
    /// Multiplier applied to every `dt`. Negative values play backwards.
    pub time_scale: f32,
}

impl PlaybackSettings {
    /// Looping playback at normal speed.
    pub const LOOPING: Self = Self {
        loop_mode: LoopMode::Loop,
        time_scale: 1.0,
    };

    /// One-shot playback at normal speed.
    pub const ONCE: Self = Self {
        loop_mode: LoopMode::Once,
        time_scale: 1.0,
    };

    #[inline]
    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.loop_mode == LoopMode::Loop
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self::LOOPING
    }
}
