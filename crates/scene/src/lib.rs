//! Scene Composer: static geometry, materials, lights and sky for the vignette.
//!
//! # Invariants
//! - Scenes are built once and never mutated by renderers.
//! - Node transforms are in world space; group offsets are already applied.
//! - Generated meshes have unit normals and counter-clockwise, outward-facing triangles.

mod mesh;
mod scene;

pub use mesh::{MeshData, cone, cuboid, cylinder, plane};
pub use scene::{
    AmbientLight, DirectionalLight, GroundConfig, Lighting, Material, Primitive, Scene,
    SceneConfig, SceneError, SceneNode, Sky, YurtConfig,
};
