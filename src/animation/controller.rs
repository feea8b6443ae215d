use crate::animation::node_animator::NodeAnimator;
use crate::animation::playback::Playback;
use crate::animation::skeleton_animator::SkeletonAnimator;
use crate::scene::skeleton::Skeleton;

/// A player of either variant, dispatched explicitly.
#[derive(Debug, Clone)]
pub enum AnimationController {
    /// Flat per-node playback.
    Node(NodeAnimator),
    /// Playback on an owned skeleton.
    Skeleton(SkeletonAnimator),
}

impl AnimationController {
    #[must_use]
    pub fn as_node(&self) -> Option<&NodeAnimator> {
        match self {
            Self::Node(n) => Some(n),
            Self::Skeleton(_) => None,
        }
    }

    #[must_use]
    pub fn as_skeleton_animator(&self) -> Option<&SkeletonAnimator> {
        match self {
            Self::Skeleton(s) => Some(s),
            Self::Node(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Skeleton(_))
    }
}

impl Playback for AnimationController {
    fn update(&mut self, dt: f32) {
        match self {
            Self::Node(n) => n.update(dt),
            Self::Skeleton(s) => s.update(dt),
        }
    }

    fn time(&self) -> f32 {
        match self {
            Self::Node(n) => n.time(),
            Self::Skeleton(s) => s.time(),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Node(n) => n.reset(),
            Self::Skeleton(s) => s.reset(),
        }
    }

    fn is_finished(&self) -> bool {
        match self {
            Self::Node(n) => n.is_finished(),
            Self::Skeleton(s) => s.is_finished(),
        }
    }

    fn skeleton(&self) -> Option<&Skeleton> {
        match self {
            Self::Node(_) => None,
            Self::Skeleton(s) => s.skeleton(),
        }
    }
}

impl From<NodeAnimator> for AnimationController {
    fn from(animator: NodeAnimator) -> Self {
        Self::Node(animator)
    }
}

impl From<SkeletonAnimator> for AnimationController {
    fn from(animator: SkeletonAnimator) -> Self {
        Self::Skeleton(animator)
    }
}
