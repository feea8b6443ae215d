use glam::{Affine3A, EulerRot, Mat4, Quat, Vec3};

use crate::animation::values::Interpolatable;

/// Local translation / rotation / scale of a joint relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointTransform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl JointTransform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    #[must_use]
    pub fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Decomposes an affine matrix (shear is lost).
    #[must_use]
    pub fn from_matrix(mat: Affine3A) -> Self {
        let (scale, rotation, translation) = mat.to_scale_rotation_translation();
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Sets the rotation from XYZ Euler angles in radians.
    pub fn set_rotation_euler(&mut self, x: f32, y: f32, z: f32) {
        self.rotation = Quat::from_euler(EulerRot::XYZ, x, y, z);
    }

    /// Scale first, then rotate, then translate.
    #[inline]
    #[must_use]
    pub fn to_matrix(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    #[inline]
    #[must_use]
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Per-channel blend: lerp translation and scale, slerp rotation.
    ///
    /// Weights `<= 0` and `>= 1` return the endpoints unchanged.
    #[must_use]
    pub fn blend(&self, other: &Self, weight: f32) -> Self {
        if weight <= 0.0 {
            return *self;
        }
        if weight >= 1.0 {
            return *other;
        }
        Self {
            translation: Vec3::interpolate_linear(self.translation, other.translation, weight),
            rotation: Quat::interpolate_linear(self.rotation, other.rotation, weight),
            scale: Vec3::interpolate_linear(self.scale, other.scale, weight),
        }
    }
}

impl Default for JointTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
