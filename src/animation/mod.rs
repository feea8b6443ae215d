//! Animation Module
//!
//! Keyframe tracks, clips and the players that evaluate them:
//!
//! - [`KeyframeTrack`]: one channel of `(time, value)` samples
//! - [`AnimationClip`]: named per-node channel triples, shared via `Arc`
//! - [`NodeAnimator`]: flat per-node playback
//! - [`SkeletonAnimator`]: playback on an owned [`Skeleton`](crate::scene::Skeleton)
//! - [`BlendController`]: timed cross-fade between two players

pub mod values;
pub mod tracks;
pub mod clip;
pub mod library;
pub mod action;
pub mod binding;
pub mod binder;
pub mod playback;
pub mod node_animator;
pub mod skeleton_animator;
pub mod controller;
pub mod blend;

pub use clip::{AnimationClip, NodeAnimation};
pub use library::AnimationLibrary;
pub use action::{AnimationAction, LoopMode};
pub use binder::Binder;
pub use binding::{JointBinding, TargetPath};
pub use tracks::{InterpolationMode, Keyframe, KeyframeCursor, KeyframeTrack};
pub use values::Interpolatable;
pub use playback::Playback;
pub use node_animator::NodeAnimator;
pub use skeleton_animator::SkeletonAnimator;
pub use controller::AnimationController;
pub use blend::{BlendController, blend_skeletons};
