//! Joint hierarchy data model.
//!
//! - [`Skeleton`] / [`Joint`]: flattened, parent-first joint list
//! - [`JointTransform`]: local TRS of a joint
//! - [`SourceNode`]: imported node tree consumed by [`Skeleton::from_node_tree`]

pub mod transform;
pub mod skeleton;
pub mod builder;

pub use builder::SourceNode;
pub use skeleton::{Joint, Skeleton};
pub use transform::JointTransform;
