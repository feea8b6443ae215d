/// Defines the target property for animation data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetPath {
    Translation, // Maps to transform.translation
    Rotation,    // Maps to transform.rotation
    Scale,       // Maps to transform.scale
}

/// Binding relationship: maps node animation `animation_index` of a clip to
/// joint `joint_index` of a skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JointBinding {
    pub animation_index: usize,
    pub joint_index: usize,
}
