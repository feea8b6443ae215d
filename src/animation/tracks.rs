use crate::animation::values::Interpolatable;
use crate::errors::{AnimationError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    #[default]
    Linear,
    Step,
}

const MAX_SCAN_OFFSET: usize = 3;

/// A single `(time, value)` sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe<T> {
    pub time: f32,
    pub value: T,
}

impl<T> Keyframe<T> {
    #[must_use]
    pub fn new(time: f32, value: T) -> Self {
        Self { time, value }
    }
}

/// Remembers the last bracketing key of a track so monotonic playback
/// avoids a full search every frame.
#[derive(Debug, Clone, Default)]
pub struct KeyframeCursor {
    pub last_index: usize,
}

/// One animated channel: key times in seconds and the values at those times.
///
/// Times must be non-decreasing. This is checked by [`KeyframeTrack::validate`]
/// at import time and assumed by every sampling method.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    pub times: Vec<f32>,
    pub values: Vec<T>,
    pub interpolation: InterpolationMode,
}

impl<T: Interpolatable> Default for KeyframeTrack<T> {
    fn default() -> Self {
        Self {
            times: Vec::new(),
            values: Vec::new(),
            interpolation: InterpolationMode::Linear,
        }
    }
}

impl<T: Interpolatable> KeyframeTrack<T> {
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>, interpolation: InterpolationMode) -> Self {
        Self {
            times,
            values,
            interpolation,
        }
    }

    /// Builds a linear track from `(time, value)` samples.
    #[must_use]
    pub fn from_keyframes(keyframes: impl IntoIterator<Item = Keyframe<T>>) -> Self {
        let (times, values) = keyframes.into_iter().map(|k| (k.time, k.value)).unzip();
        Self::new(times, values, InterpolationMode::Linear)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    #[must_use]
    pub fn keyframe(&self, index: usize) -> Option<Keyframe<T>> {
        Some(Keyframe::new(*self.times.get(index)?, *self.values.get(index)?))
    }

    /// Time of the last key, or `0.0` for an empty track.
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Checks the shape and ordering the sampling methods rely on.
    ///
    /// Adjacent keys with identical times are rejected: the interval between
    /// them has no width to interpolate across.
    pub fn validate(&self) -> Result<()> {
        if self.times.is_empty() {
            return Err(AnimationError::EmptyTrack);
        }
        if self.times.len() != self.values.len() {
            return Err(AnimationError::LengthMismatch {
                times: self.times.len(),
                values: self.values.len(),
            });
        }
        if let Some(index) = self.times.iter().position(|t| !t.is_finite()) {
            return Err(AnimationError::NonFiniteTime { index });
        }
        for (index, pair) in self.times.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(AnimationError::DecreasingTime {
                    index: index + 1,
                    time: pair[1],
                });
            }
            if pair[1] == pair[0] {
                return Err(AnimationError::ZeroWidthInterval {
                    index,
                    time: pair[0],
                });
            }
        }
        Ok(())
    }

    /// Samples the track at `time` using a binary search.
    ///
    /// Times before the first key clamp to the first value, times after the
    /// last key clamp to the last value.
    ///
    /// # Panics
    /// Panics if the track is empty. Use [`KeyframeTrack::try_sample`] when an
    /// empty channel is a legitimate state.
    #[must_use]
    pub fn sample(&self, time: f32) -> T {
        assert!(!self.times.is_empty(), "Track is empty");

        // partition_point finds the first index where t > time, i.e. next_index
        let next_idx = self.times.partition_point(|&t| t <= time);
        let idx = next_idx.saturating_sub(1);

        self.sample_at_frame(idx, time)
    }

    /// Like [`KeyframeTrack::sample`], but returns `None` for an empty track.
    #[must_use]
    pub fn try_sample(&self, time: f32) -> Option<T> {
        if self.is_empty() || self.values.len() < self.times.len() {
            return None;
        }
        Some(self.sample(time))
    }

    /// Sampling with a cursor: O(1) for small forward or backward steps,
    /// binary search otherwise. Returns `None` for an empty track.
    pub fn sample_with_cursor(&self, time: f32, cursor: &mut KeyframeCursor) -> Option<T> {
        if self.is_empty() || self.values.len() < self.times.len() {
            return None;
        }

        let len = self.times.len();
        if len == 1 {
            return Some(self.values[0]);
        }

        // A cursor left over from a longer track restarts at the beginning.
        let i = if cursor.last_index < len { cursor.last_index } else { 0 };

        let found_index = if time >= self.times[i] {
            // Forward: check [i, i+1), [i+1, i+2) ...
            let mut res = None;
            for offset in 0..=MAX_SCAN_OFFSET {
                let idx = i + offset;
                if idx >= len - 1 {
                    res = Some(len - 1);
                    break;
                }
                if time < self.times[idx + 1] {
                    res = Some(idx);
                    break;
                }
            }
            res
        } else {
            // Backward: time < times[i], so scan left for the first key <= time.
            let mut res = None;
            for offset in 1..=MAX_SCAN_OFFSET {
                if i < offset {
                    break;
                }
                let idx = i - offset;
                if time >= self.times[idx] {
                    res = Some(idx);
                    break;
                }
            }
            res
        };

        let idx = found_index.unwrap_or_else(|| {
            // Large jump (scrubbing, loop wrap): binary search fallback
            self.times.partition_point(|&t| t <= time).saturating_sub(1)
        });
        cursor.last_index = idx;

        Some(self.sample_at_frame(idx, time))
    }

    fn sample_at_frame(&self, index: usize, time: f32) -> T {
        let len = self.times.len();

        if index >= len - 1 {
            return self.values[len - 1];
        }

        let next_idx = index + 1;
        let t0 = self.times[index];
        let t1 = self.times[next_idx];
        let dt = t1 - t0;

        // Zero-width intervals are rejected by `validate`; hold the left key
        // if one slipped through.
        let t = if dt > 0.0 { (time - t0) / dt } else { 0.0 };
        let t = t.clamp(0.0, 1.0);

        match self.interpolation {
            InterpolationMode::Step => self.values[index],
            InterpolationMode::Linear => {
                T::interpolate_linear(self.values[index], self.values[next_idx], t)
            }
        }
    }
}
