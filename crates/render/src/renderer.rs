use glam::Vec3;
use std::fmt::Write;
use steppe_camera::PerspectiveCamera;
use steppe_scene::Scene;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self::from_camera(&PerspectiveCamera::default(), Vec3::ZERO)
    }
}

impl RenderView {
    pub fn from_camera(camera: &PerspectiveCamera, target: Vec3) -> Self {
        Self {
            eye: camera.position,
            target,
            fov_degrees: camera.fov_degrees(),
        }
    }

    pub fn distance_to_target(&self) -> f32 {
        self.eye.distance(self.target)
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the scene and a view configuration, then produces
/// output. It never mutates the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of the scene from the given view.
    fn render(&self, scene: &Scene, view: &RenderView) -> Self::Output;
}

/// Produces a human-readable description of a frame.
///
/// Useful for CLI output, logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, view: &RenderView) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Steppe vignette ({} nodes) ===", scene.nodes().len());
        let _ = writeln!(
            out,
            "Camera: eye=({:.2}, {:.2}, {:.2}) target=({:.1}, {:.1}, {:.1}) fov={:.0} distance={:.2}",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.fov_degrees,
            view.distance_to_target()
        );

        let lighting = scene.lighting();
        let sun = lighting.directional.position;
        let _ = writeln!(
            out,
            "Lights: ambient={:.2} directional={:.2} from ({:.1}, {:.1}, {:.1})",
            lighting.ambient.intensity, lighting.directional.intensity, sun.x, sun.y, sun.z
        );
        let sky = scene.sky();
        let _ = writeln!(
            out,
            "Sky: zenith={} horizon={} sun=({:.0}, {:.0}, {:.0})",
            sky.zenith, sky.horizon, sky.sun_position.x, sky.sun_position.y, sky.sun_position.z
        );

        for node in scene.nodes() {
            let p = node.transform.position;
            let _ = writeln!(
                out,
                "  {:<12} {:<8} pos=({:.2}, {:.2}, {:.2}) color={}",
                node.name,
                node.primitive.kind(),
                p.x,
                p.y,
                p.z,
                node.material.color
            );
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steppe_camera::CameraPath;

    #[test]
    fn lists_every_node() {
        let scene = Scene::steppe_yurt();
        let output = DebugTextRenderer::new().render(&scene, &RenderView::default());

        assert!(output.contains("4 nodes"));
        assert!(output.contains("steppe"));
        assert!(output.contains("yurt/door"));
        assert!(output.contains("#8B7355"));
        assert!(output.contains("ambient=0.50"));
    }

    #[test]
    fn reports_camera_pose() {
        let mut camera = PerspectiveCamera::default();
        let state = CameraPath::default().evaluate(0.5);
        camera.apply(&state);
        let view = RenderView::from_camera(&camera, state.look_at);
        let output = DebugTextRenderer::new().render(&Scene::default(), &view);

        assert!(output.contains("eye=(0.00, 3.50, 17.50)"), "{output}");
        assert!(output.contains("target=(0.0, 0.0, 0.0)"));
    }

    #[test]
    fn render_view_default() {
        let view = RenderView::default();
        assert_eq!(view.target, Vec3::ZERO);
        assert_eq!(view.eye, Vec3::new(0.0, 50.0, 100.0));
        assert!((view.fov_degrees - 75.0).abs() < 1e-3);
    }
}
