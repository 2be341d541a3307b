use crate::path::CameraPathState;
use glam::{Mat4, Vec3};

/// Perspective camera with an explicit orientation.
///
/// Orientation is stored as a forward/up pair and is only changed by
/// [`PerspectiveCamera::look_at`], which derives it from the current position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    forward: Vec3,
    up: Vec3,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 50.0, 100.0),
            fov: 75.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            forward: Vec3::NEG_Z,
            up: Vec3::Y,
        }
    }
}

impl PerspectiveCamera {
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Turn to face `target` from the current position.
    ///
    /// When the camera sits directly above or below the target, world up is
    /// parallel to the view direction, so -Z is used as the up hint instead.
    /// A target equal to the position leaves the orientation unchanged.
    pub fn look_at(&mut self, target: Vec3) {
        let Some(forward) = (target - self.position).try_normalize() else {
            return;
        };
        let hint = if forward.cross(Vec3::Y).length_squared() < 1e-8 {
            Vec3::NEG_Z
        } else {
            Vec3::Y
        };
        let right = forward.cross(hint).normalize();
        self.forward = forward;
        self.up = right.cross(forward).normalize();
    }

    /// Move to the path pose and re-aim at its target.
    pub fn apply(&mut self, state: &CameraPathState) {
        self.position = state.position;
        self.look_at(state.look_at);
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov.to_degrees()
    }
}
