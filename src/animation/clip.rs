use glam::{Affine3A, Quat, Vec3};
use rustc_hash::FxHashMap;

use crate::animation::binding::TargetPath;
use crate::animation::tracks::KeyframeTrack;
use crate::errors::{AnimationError, Result};
use crate::scene::transform::JointTransform;

/// The three independent channels animating one named node.
///
/// An empty track means the channel is not animated and the node keeps
/// whatever value it already had for it.
#[derive(Debug, Clone, Default)]
pub struct NodeAnimation {
    pub node_name: String,
    pub translation: KeyframeTrack<Vec3>,
    pub rotation: KeyframeTrack<Quat>,
    pub scale: KeyframeTrack<Vec3>,
}

impl NodeAnimation {
    #[must_use]
    pub fn new(node_name: impl Into<String>) -> Self {
        Self {
            node_name: node_name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_translation(mut self, track: KeyframeTrack<Vec3>) -> Self {
        self.translation = track;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, track: KeyframeTrack<Quat>) -> Self {
        self.rotation = track;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, track: KeyframeTrack<Vec3>) -> Self {
        self.scale = track;
        self
    }

    /// Latest key time over all populated channels.
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.translation
            .end_time()
            .max(self.rotation.end_time())
            .max(self.scale.end_time())
    }

    /// Overwrites the animated channels of `transform` with their values at
    /// `time`. Channels with no keys leave `transform` untouched.
    pub fn apply(&self, time: f32, transform: &mut JointTransform) {
        if let Some(v) = self.translation.try_sample(time) {
            transform.translation = v;
        }
        if let Some(q) = self.rotation.try_sample(time) {
            transform.rotation = q;
        }
        if let Some(v) = self.scale.try_sample(time) {
            transform.scale = v;
        }
    }

    /// Samples every channel at `time`, filling unanimated ones with identity.
    #[must_use]
    pub fn sample_matrix(&self, time: f32) -> Affine3A {
        let mut transform = JointTransform::IDENTITY;
        self.apply(time, &mut transform);
        transform.to_matrix()
    }

    fn validate(&self) -> Result<()> {
        let wrap = |target: TargetPath| {
            let node = self.node_name.clone();
            move |source: AnimationError| AnimationError::InvalidTrack {
                node,
                target,
                source: Box::new(source),
            }
        };

        // Empty channels are simply not animated.
        if !self.translation.is_empty() {
            self.translation
                .validate()
                .map_err(wrap(TargetPath::Translation))?;
        }
        if !self.rotation.is_empty() {
            self.rotation.validate().map_err(wrap(TargetPath::Rotation))?;
        }
        if !self.scale.is_empty() {
            self.scale.validate().map_err(wrap(TargetPath::Scale))?;
        }
        Ok(())
    }
}

/// A named, immutable bundle of per-node animations.
///
/// Clips are loaded once and shared as `Arc<AnimationClip>` by every player
/// that plays them.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
    animations: Vec<NodeAnimation>,
    by_node: FxHashMap<String, usize>,
}

impl AnimationClip {
    /// Creates a clip whose duration is the latest key time of any channel.
    #[must_use]
    pub fn new(name: impl Into<String>, animations: Vec<NodeAnimation>) -> Self {
        let duration = animations
            .iter()
            .map(NodeAnimation::end_time)
            .fold(0.0_f32, f32::max);
        Self::with_duration(name, duration, animations)
    }

    /// Creates a clip with an explicit duration (e.g. from the source file's
    /// tick count rather than its last key).
    ///
    /// If two animations target the same node, the first one wins.
    #[must_use]
    pub fn with_duration(
        name: impl Into<String>,
        duration: f32,
        animations: Vec<NodeAnimation>,
    ) -> Self {
        let name = name.into();
        let mut by_node = FxHashMap::default();
        for (i, anim) in animations.iter().enumerate() {
            if by_node.contains_key(&anim.node_name) {
                log::warn!(
                    "Clip '{name}': duplicate animation for node '{}', keeping the first",
                    anim.node_name
                );
                continue;
            }
            by_node.insert(anim.node_name.clone(), i);
        }

        Self {
            name,
            duration,
            animations,
            by_node,
        }
    }

    /// Looks up the animation driving `node_name`.
    #[must_use]
    pub fn node_animation(&self, node_name: &str) -> Option<&NodeAnimation> {
        self.by_node
            .get(node_name)
            .and_then(|&i| self.animations.get(i))
    }

    #[must_use]
    pub fn animation_index(&self, node_name: &str) -> Option<usize> {
        self.by_node.get(node_name).copied()
    }

    #[inline]
    #[must_use]
    pub fn animation(&self, index: usize) -> Option<&NodeAnimation> {
        self.animations.get(index)
    }

    #[inline]
    #[must_use]
    pub fn animations(&self) -> &[NodeAnimation] {
        &self.animations
    }

    /// Checks every populated track and the duration.
    pub fn validate(&self) -> Result<()> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(AnimationError::InvalidDuration {
                name: self.name.clone(),
                duration: self.duration,
            });
        }
        self.animations.iter().try_for_each(NodeAnimation::validate)
    }
}
