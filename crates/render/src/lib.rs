//! Rendering Adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers never mutate the scene.
//! - Render state derives from the scene and the current camera view.
//!
//! The GPU backend lives in `steppe-render-wgpu`; the debug text renderer here
//! backs the CLI and headless tests through the same trait.

mod renderer;

pub use renderer::{DebugTextRenderer, RenderView, Renderer};

pub fn crate_info() -> &'static str {
    concat!("steppe-render v", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
