//! Vignette driver: Scroll Source → Camera Path → camera, once per frame.
//!
//! # Invariants
//! - The camera pose depends only on the current scroll offset, never on
//!   previous frames.
//! - Configuration is validated as a whole before any frame is produced.
//!
//! The windowing layer owns the loop and timing; it feeds input through the
//! `on_*` adapters and calls [`Vignette::frame`] once per redraw.

mod config;
mod driver;

pub use config::{ConfigError, VignetteConfig};
pub use driver::{FrameState, Vignette};

/// Overlay hint shown at the bottom of the viewport.
pub const SCROLL_HINT: &str = "Scroll to explore \u{2193}";
