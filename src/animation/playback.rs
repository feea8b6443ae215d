use crate::scene::skeleton::Skeleton;

/// The capability every player exposes, whatever it drives.
///
/// Implemented by [`NodeAnimator`](super::NodeAnimator),
/// [`SkeletonAnimator`](super::SkeletonAnimator), the
/// [`AnimationController`](super::AnimationController) enum over both, and
/// [`BlendController`](super::BlendController).
pub trait Playback {
    /// Advances by `dt` seconds and refreshes any derived pose.
    fn update(&mut self, dt: f32);

    /// Current playback time in seconds.
    fn time(&self) -> f32;

    /// Rewinds to the start and leaves the finished state.
    fn reset(&mut self);

    /// `true` once one-shot playback has reached its end.
    fn is_finished(&self) -> bool;

    /// Capability query: the posed skeleton, if this player drives one.
    fn skeleton(&self) -> Option<&Skeleton> {
        None
    }
}
