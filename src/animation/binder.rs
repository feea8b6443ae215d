use crate::animation::binding::JointBinding;
use crate::animation::clip::AnimationClip;
use crate::scene::skeleton::Skeleton;

pub struct Binder;

impl Binder {
    /// Resolves each joint's name against the clip, once per player, so the
    /// per-frame pass never touches the name maps.
    ///
    /// Bindings are produced in joint order.
    #[must_use]
    pub fn bind(skeleton: &Skeleton, clip: &AnimationClip) -> Vec<JointBinding> {
        let bindings: Vec<JointBinding> = skeleton
            .joints()
            .iter()
            .filter_map(|joint| {
                clip.animation_index(&joint.name)
                    .map(|animation_index| JointBinding {
                        animation_index,
                        joint_index: joint.index(),
                    })
            })
            .collect();

        let unbound = clip.animations().len().saturating_sub(bindings.len());
        if unbound > 0 {
            log::debug!(
                "Clip '{}': {unbound} node animation(s) match no joint of skeleton '{}'",
                clip.name,
                skeleton.name
            );
        }

        bindings
    }
}
