//! Shared value types used across the steppe vignette crates.
//!
//! # Invariants
//! - Colors are stored in sRGB space; conversion to linear happens at GPU upload.
//! - Transforms compose scale, then rotation, then translation.

mod color;
mod types;

pub use color::{Color, ColorError};
pub use types::Transform;
