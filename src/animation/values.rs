use glam::{Quat, Vec3};

/// A value that can be stored in a keyframe track and blended between poses.
pub trait Interpolatable: Copy + Clone + Sized {
    /// Interpolates from `start` to `end` by `t` in `[0, 1]`.
    ///
    /// `t == 0` must return `start` and `t == 1` must return `end`.
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Quat {
    /// Shortest-arc spherical interpolation.
    ///
    /// The endpoints are returned untouched so blends at weight 0 and 1
    /// reproduce their source rotations bit for bit.
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        if t <= 0.0 {
            start
        } else if t >= 1.0 {
            end
        } else {
            start.slerp(end, t)
        }
    }
}
