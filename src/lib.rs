//! Skeletal keyframe evaluation and cross-fade blending.
//!
//! Given a time value and a hierarchy of named joints, the players in this
//! crate produce per-joint local and hierarchy-space matrices ready for GPU
//! skinning, and [`BlendController`] cross-fades between two independently
//! running players without popping.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ossa::prelude::*;
//!
//! let template = Skeleton::from_node_tree(&root_node);
//! let walk = library.get("walk").unwrap();
//! let run = library.get("run").unwrap();
//!
//! let mut blend = BlendController::new(SkeletonAnimator::new(walk, &template));
//! blend.start_blend(Some(SkeletonAnimator::new(run, &template).into()), 0.3);
//!
//! blend.update(dt);
//! if let Some(pose) = blend.skeleton() {
//!     upload(pose.hierarchy_matrices());
//! }
//! ```

pub mod animation;
pub mod errors;
pub mod scene;
pub mod settings;
pub mod utils;

pub use animation::{
    AnimationClip, AnimationController, AnimationLibrary, BlendController, NodeAnimation,
    NodeAnimator, Playback, SkeletonAnimator,
};
pub use errors::{AnimationError, Result};
pub use scene::{Joint, JointTransform, Skeleton, SourceNode};
pub use settings::PlaybackSettings;

pub mod prelude {
    pub use crate::animation::{
        AnimationClip, AnimationController, AnimationLibrary, BlendController, InterpolationMode,
        Keyframe, KeyframeTrack, LoopMode, NodeAnimation, NodeAnimator, Playback,
        SkeletonAnimator,
    };
    pub use crate::scene::{JointTransform, Skeleton, SourceNode};
    pub use crate::settings::PlaybackSettings;
}
