use std::sync::Arc;

use glam::{Affine3A, Mat4};

use crate::animation::action::AnimationAction;
use crate::animation::clip::AnimationClip;
use crate::animation::playback::Playback;
use crate::settings::PlaybackSettings;

/// Plays a clip against individual named nodes, without a hierarchy.
///
/// Meant for unskinned props: the caller asks for the local matrix of a node
/// by name and gets identity whenever there is nothing to animate it with.
#[derive(Debug, Clone)]
pub struct NodeAnimator {
    action: AnimationAction,
}

impl NodeAnimator {
    #[must_use]
    pub fn new(clip: Option<Arc<AnimationClip>>) -> Self {
        Self {
            action: AnimationAction::new(clip, PlaybackSettings::default()),
        }
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

    /// Binds another clip (or none) and rewinds.
    pub fn set_clip(&mut self, clip: Option<Arc<AnimationClip>>) {
        self.action.set_clip(clip);
    }

    #[inline]
    #[must_use]
    pub fn action(&self) -> &AnimationAction {
        &self.action
    }

    #[inline]
    pub fn action_mut(&mut self) -> &mut AnimationAction {
        &mut self.action
    }

    /// Local transform of `node_name` at the current time.
    #[must_use]
    pub fn local_affine(&self, node_name: &str) -> Affine3A {
        self.action
            .clip()
            .and_then(|clip| clip.node_animation(node_name))
            .map_or(Affine3A::IDENTITY, |anim| {
                anim.sample_matrix(self.action.time())
            })
    }

    /// Local matrix of `node_name` at the current time, identity if no clip is
    /// bound or the clip does not animate that node.
    #[must_use]
    pub fn local_matrix(&self, node_name: &str) -> Mat4 {
        Mat4::from(self.local_affine(node_name))
    }
}

impl Playback for NodeAnimator {
    fn update(&mut self, dt: f32) {
        self.action.update(dt);
    }

    fn time(&self) -> f32 {
        self.action.time()
    }

    fn reset(&mut self) {
        self.action.reset();
    }

    fn is_finished(&self) -> bool {
        self.action.is_finished()
    }
}
