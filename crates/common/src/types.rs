use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Spatial transform: position, rotation, scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_translation(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_rotation(self, rotation: Quat) -> Self {
        Self { rotation, ..self }
    }

    /// Model matrix: scale, then rotate, then translate.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Express this (child-local) transform in the parent's space.
    pub fn then(&self, parent: &Transform) -> Transform {
        let (scale, rotation, position) = (parent.matrix() * self.matrix())
            .to_scale_rotation_translation();
        Transform {
            position,
            rotation,
            scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
        assert_eq!(t.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn child_inherits_group_offset() {
        let group = Transform::from_translation(Vec3::new(10.0, 0.0, -2.0));
        let door = Transform::from_translation(Vec3::new(0.0, 1.5, 3.0));
        let world = door.then(&group);
        assert!(world.position.abs_diff_eq(Vec3::new(10.0, 1.5, 1.0), 1e-5));
    }

    #[test]
    fn rotation_is_applied_to_points() {
        let ground = Transform::default()
            .with_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2));
        // A plane facing +Z ends up facing +Y.
        let normal = ground.rotation * Vec3::Z;
        assert!(normal.abs_diff_eq(Vec3::Y, 1e-6));
    }
}
