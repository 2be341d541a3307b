//! Camera rig: maps scroll progress to a camera pose that always faces the yurt.
//!
//! # Invariants
//! - The path is piecewise-linear and continuous across phase boundaries.
//! - Progress is clamped to `[0, 1]` before evaluation; the path never fails.
//! - The look-at target is the world origin, and orientation is derived fresh
//!   on every evaluation.

mod path;
mod perspective;

pub use path::{
    CameraPath, CameraPathState, Keyframe, LOOK_AT_TARGET, PathError, PathPhase, camera_position,
};
pub use perspective::PerspectiveCamera;
