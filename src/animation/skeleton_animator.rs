use std::sync::Arc;

use crate::animation::action::AnimationAction;
use crate::animation::binder::Binder;
use crate::animation::binding::JointBinding;
use crate::animation::clip::{AnimationClip, NodeAnimation};
use crate::animation::playback::Playback;
use crate::animation::tracks::KeyframeCursor;
use crate::scene::skeleton::Skeleton;
use crate::scene::transform::JointTransform;
use crate::settings::PlaybackSettings;

/// Per-binding sampling cursors, one per channel.
#[derive(Debug, Clone, Default)]
struct ChannelCursors {
    translation: KeyframeCursor,
    rotation: KeyframeCursor,
    scale: KeyframeCursor,
}

impl ChannelCursors {
    fn apply(&mut self, anim: &NodeAnimation, time: f32, transform: &mut JointTransform) {
        if let Some(v) = anim.translation.sample_with_cursor(time, &mut self.translation) {
            transform.translation = v;
        }
        if let Some(q) = anim.rotation.sample_with_cursor(time, &mut self.rotation) {
            transform.rotation = q;
        }
        if let Some(v) = anim.scale.sample_with_cursor(time, &mut self.scale) {
            transform.scale = v;
        }
    }
}

/// Plays a clip on a private copy of a skeleton.
///
/// Each update advances time, resamples every bound joint, then recomputes
/// local and hierarchy matrices in one forward pass. Joints the clip does not
/// animate keep their bind-pose transform.
#[derive(Debug, Clone)]
pub struct SkeletonAnimator {
    action: AnimationAction,
    skeleton: Skeleton,
    bindings: Vec<JointBinding>,
    cursors: Vec<ChannelCursors>,
}

impl SkeletonAnimator {
    /// Copies `template` and poses it at time zero.
    #[must_use]
    pub fn new(clip: Arc<AnimationClip>, template: &Skeleton) -> Self {
        let skeleton = template.clone();
        let bindings = Binder::bind(&skeleton, &clip);
        let cursors = vec![ChannelCursors::default(); bindings.len()];

        let mut animator = Self {
            action: AnimationAction::new(Some(clip), PlaybackSettings::default()),
            skeleton,
            bindings,
            cursors,
        };
        animator.apply_pose();
        animator
    }

    #[must_use]
    pub fn with_settings(mut self, settings: PlaybackSettings) -> Self {
        self.action.settings = settings;
        self
    }

    #[inline]
    #[must_use]
    pub fn clip(&self) -> Option<&Arc<AnimationClip>> {
        self.action.clip()
    }

    #[inline]
    #[must_use]
    pub fn action(&self) -> &AnimationAction {
        &self.action
    }

    /// Posed skeleton owned by this player.
    #[inline]
    #[must_use]
    pub fn pose(&self) -> &Skeleton {
        &self.skeleton
    }

    #[inline]
    #[must_use]
    pub fn bindings(&self) -> &[JointBinding] {
        &self.bindings
    }

    /// Jumps to `time` and re-poses the skeleton.
    pub fn seek(&mut self, time: f32) {
        self.action.set_time(time);
        self.apply_pose();
    }

    fn apply_pose(&mut self) {
        let time = self.action.time();
        if let Some(clip) = self.action.clip() {
            for (binding, cursors) in self.bindings.iter().zip(&mut self.cursors) {
                let Some(anim) = clip.animation(binding.animation_index) else {
                    continue;
                };
                if let Some(joint) = self.skeleton.joints.get_mut(binding.joint_index) {
                    cursors.apply(anim, time, &mut joint.transform);
                }
            }
        }
        self.skeleton.update_matrices();
    }
}

impl Playback for SkeletonAnimator {
    fn update(&mut self, dt: f32) {
        self.action.update(dt);
        self.apply_pose();
    }

    fn time(&self) -> f32 {
        self.action.time()
    }

    fn reset(&mut self) {
        self.action.reset();
        self.apply_pose();
    }

    fn is_finished(&self) -> bool {
        self.action.is_finished()
    }

    fn skeleton(&self) -> Option<&Skeleton> {
        Some(&self.skeleton)
    }
}
