//! wgpu render backend for the steppe vignette.
//!
//! Draws a gradient sky with a sun disc, then every scene node as a lit mesh
//! (ambient plus one directional light).
//!
//! # Invariants
//! - Renderer never mutates the scene; geometry is uploaded once at creation.
//! - The camera is owned by the caller and read once per frame.

mod gpu;
mod shaders;

pub use gpu::WgpuRenderer;
