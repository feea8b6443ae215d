//! Error Types
//!
//! This module defines the error types reported by import-time validation.
//!
//! # Overview
//!
//! Per-frame evaluation never fails: missing clips, missing channels and
//! empty curves all resolve to a defined default (identity, bind pose, `None`).
//! [`AnimationError`] is only produced when data handed over by an importer is
//! checked up front:
//! - Keyframe track shape and ordering problems
//! - Clip duration problems
//! - Skeleton index and ordering invariants
//!
//! # Usage
//!
//! ```rust,ignore
//! use ossa::errors::Result;
//!
//! fn accept(clip: &AnimationClip, skeleton: &Skeleton) -> Result<()> {
//!     clip.validate()?;
//!     skeleton.validate()?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::animation::binding::TargetPath;

/// The error type for animation data validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    // ========================================================================
    // Keyframe Track Errors
    // ========================================================================
    /// A track attached to a channel has no keyframes.
    #[error("Keyframe track is empty")]
    EmptyTrack,

    /// `times` and `values` disagree in length.
    #[error("Keyframe track has {times} times but {values} values")]
    LengthMismatch {
        /// Number of key times
        times: usize,
        /// Number of key values
        values: usize,
    },

    /// A key time is NaN or infinite.
    #[error("Keyframe {index} has a non-finite time")]
    NonFiniteTime {
        /// Offending keyframe index
        index: usize,
    },

    /// A key time is smaller than its predecessor.
    #[error("Keyframe {index} at {time}s precedes the previous keyframe")]
    DecreasingTime {
        /// Offending keyframe index
        index: usize,
        /// Offending time in seconds
        time: f32,
    },

    /// Two adjacent keys share the same time.
    #[error("Keyframe {index} and its successor share time {time}s")]
    ZeroWidthInterval {
        /// Index of the left key of the interval
        index: usize,
        /// Shared time in seconds
        time: f32,
    },

    /// A track error with the node and channel it belongs to.
    #[error("Track '{node}' ({target:?}): {source}")]
    InvalidTrack {
        /// Animated node name
        node: String,
        /// Animated channel
        target: TargetPath,
        /// Underlying track error
        #[source]
        source: Box<AnimationError>,
    },

    // ========================================================================
    // Clip Errors
    // ========================================================================
    /// Clip duration is negative or not finite.
    #[error("Clip '{name}' has invalid duration {duration}")]
    InvalidDuration {
        /// Clip name
        name: String,
        /// Offending duration in seconds
        duration: f32,
    },

    // ========================================================================
    // Skeleton Errors
    // ========================================================================
    /// A skeleton without joints.
    #[error("Skeleton has no joints")]
    EmptySkeleton,

    /// `joints[i].index != i`.
    #[error("Joint at position {position} carries index {index}")]
    IndexMismatch {
        /// Position in the joint list
        position: usize,
        /// Index stored on the joint
        index: usize,
    },

    /// A parent or child link points outside the joint list.
    #[error("Joint {joint} links to out-of-range joint {link}")]
    LinkOutOfRange {
        /// Joint holding the link
        joint: usize,
        /// Invalid link target
        link: usize,
    },

    /// A child is stored before its parent.
    #[error("Joint {child} precedes its parent {parent}")]
    ParentAfterChild {
        /// Parent index
        parent: usize,
        /// Child index
        child: usize,
    },

    /// Zero or several joints without a parent, or a root index that is not one.
    #[error("Skeleton must have exactly one root joint, found {found}")]
    InvalidRoot {
        /// Number of parentless joints found
        found: usize,
    },
}

/// Alias for `Result<T, AnimationError>`.
pub type Result<T> = std::result::Result<T, AnimationError>;
