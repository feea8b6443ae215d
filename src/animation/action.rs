use std::sync::Arc;

use crate::animation::clip::AnimationClip;
use crate::settings::PlaybackSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopMode {
    /// Play to the end and stop there.
    Once,
    /// Wrap around to the start.
    #[default]
    Loop,
}

/// Time cursor over an optional clip, shared by every player variant.
///
/// Two states: playing, where `update` advances time, and finished, where it
/// is a no-op. Only [`LoopMode::Once`] ever finishes.
#[derive(Debug, Clone)]
pub struct AnimationAction {
    clip: Option<Arc<AnimationClip>>,

    time: f32,
    finished: bool,

    pub settings: PlaybackSettings,
}

impl AnimationAction {
    #[must_use]
    pub fn new(clip: Option<Arc<AnimationClip>>, settings: PlaybackSettings) -> Self {
        Self {
            clip,
            time: 0.0,
            finished: false,
            settings,
        }
    }

    #[inline]
    #[must_use]
    pub fn clip(&self) -> Option<&Arc<AnimationClip>> {
        self.clip.as_ref()
    }

    /// Binds a different clip and rewinds.
    pub fn set_clip(&mut self, clip: Option<Arc<AnimationClip>>) {
        self.clip = clip;
        self.reset();
    }

    #[inline]
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn duration(&self) -> f32 {
        self.clip.as_ref().map_or(0.0, |clip| clip.duration)
    }

    /// Jumps to `time`, wrapped or clamped like a regular update.
    pub fn set_time(&mut self, time: f32) {
        self.time = time;
        self.finished = false;
        self.wrap_time();
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
        self.finished = false;
    }

    /// Core logic: advance time.
    ///
    /// Returns `false` when nothing moved (finished, no clip, or a clip
    /// without length).
    pub fn update(&mut self, dt: f32) -> bool {
        if self.finished || self.duration() <= 0.0 {
            return false;
        }

        self.time += dt * self.settings.time_scale;
        self.wrap_time();
        true
    }

    fn wrap_time(&mut self) {
        let duration = self.duration();
        if duration <= 0.0 {
            self.time = 0.0;
            return;
        }

        match self.settings.loop_mode {
            LoopMode::Once => {
                if self.time >= duration {
                    self.time = duration;
                    self.finished = true;
                } else if self.time < 0.0 {
                    // Held at the start, still playing
                    self.time = 0.0;
                }
            }
            LoopMode::Loop => {
                if self.time >= duration || self.time < 0.0 {
                    self.time = self.time.rem_euclid(duration);
                    // rem_euclid can round up to `duration` for tiny negatives
                    if self.time >= duration {
                        self.time = 0.0;
                    }
                }
            }
        }
    }
}
