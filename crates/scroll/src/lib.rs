//! Scroll Source: turns wheel and key input into a damped scroll progress in `[0, 1]`.
//!
//! # Invariants
//! - `offset()` and `target()` are always within `[0, 1]`.
//! - Smoothing is framerate independent: two half-steps land where one full step does.

mod controls;

pub use controls::{ScrollConfig, ScrollControls, ScrollError};
