use crate::config::{ConfigError, VignetteConfig};
use steppe_camera::{CameraPath, CameraPathState, PerspectiveCamera};
use steppe_render::RenderView;
use steppe_scene::Scene;
use steppe_scroll::ScrollControls;

/// What one call to [`Vignette::frame`] produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// Frames produced so far, starting at 1.
    pub frame: u64,
    pub camera: CameraPathState,
    /// Index of the path phase that owns this frame's progress.
    pub phase: usize,
    /// Scroll offset change since the previous frame.
    pub scroll_delta: f32,
}

/// Owns the scroll source, camera path, camera and scene for one viewport.
pub struct Vignette {
    scroll: ScrollControls,
    path: CameraPath,
    camera: PerspectiveCamera,
    scene: Scene,
    frames: u64,
    last_phase: Option<usize>,
}

impl Vignette {
    pub fn new(config: &VignetteConfig, width: u32, height: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        let scroll = ScrollControls::new(config.scroll, height)?;
        let scene = Scene::from_config(&config.scene)?;
        let path = config.camera_path.clone();

        let mut camera = PerspectiveCamera::default();
        camera.set_viewport(width, height);
        camera.apply(&path.evaluate(scroll.offset()));

        Ok(Self {
            scroll,
            path,
            camera,
            scene,
            frames: 0,
            last_phase: None,
        })
    }

    /// Advance one tick: ease the scroll offset, re-evaluate the path and
    /// re-aim the camera.
    pub fn frame(&mut self, dt: f32) -> FrameState {
        let _span = tracing::trace_span!("vignette_frame", frame = self.frames + 1).entered();

        let progress = self.scroll.update(dt);
        let state = self.path.evaluate(progress);
        self.camera.apply(&state);

        let phase = self.path.phase_index(progress);
        if self.last_phase != Some(phase) {
            tracing::debug!(
                phase = %self.path.phases()[phase].name,
                progress,
                "entered camera phase"
            );
            self.last_phase = Some(phase);
        }

        self.frames += 1;
        FrameState {
            frame: self.frames,
            camera: state,
            phase,
            scroll_delta: self.scroll.delta(),
        }
    }

    /// Mouse wheel in lines; positive scrolls down the page.
    pub fn on_wheel_lines(&mut self, lines: f32) {
        self.scroll.scroll_lines(lines);
    }

    /// Trackpad scroll in pixels; positive scrolls down the page.
    pub fn on_wheel_pixels(&mut self, pixels: f32) {
        self.scroll.scroll_pixels(pixels);
    }

    /// Page Up/Down style stepping in viewport heights.
    pub fn on_page(&mut self, pages: f32) {
        self.scroll.scroll_pages(pages);
    }

    /// Jump to an absolute scroll progress (Home/End, or scripted playback).
    pub fn scroll_to(&mut self, progress: f32) {
        self.scroll.scroll_to(progress);
    }

    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
        self.scroll.set_viewport_height(height);
        tracing::debug!(width, height, "viewport resized");
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scroll(&self) -> &ScrollControls {
        &self.scroll
    }

    pub fn path(&self) -> &CameraPath {
        &self.path
    }

    pub fn render_view(&self) -> RenderView {
        RenderView::from_camera(&self.camera, steppe_camera::LOOK_AT_TARGET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn vignette(damping: f32) -> Vignette {
        let mut config = VignetteConfig::default();
        config.scroll.damping = damping;
        Vignette::new(&config, 1280, 720).unwrap()
    }

    #[test]
    fn starts_high_above_the_steppe() {
        let v = vignette(0.1);
        assert_eq!(v.camera().position, Vec3::new(0.0, 50.0, 100.0));
        assert!((v.camera().aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn frame_counter_and_phase() {
        let mut v = vignette(0.0);
        let first = v.frame(0.016);
        assert_eq!(first.frame, 1);
        assert_eq!(first.phase, 0);

        v.scroll_to(0.5);
        let second = v.frame(0.016);
        assert_eq!(second.frame, 2);
        assert_eq!(second.phase, 1);
        assert!((second.scroll_delta - 0.5).abs() < 1e-6);
        assert!(second.camera.position.abs_diff_eq(Vec3::new(0.0, 3.5, 17.5), 1e-4));
        assert_eq!(v.camera().position, second.camera.position);
    }

    #[test]
    fn wheel_moves_camera_toward_yurt() {
        let mut v = vignette(0.1);
        let start = v.frame(0.016).camera.position;
        v.on_wheel_lines(10.0);
        let mut last = start;
        for _ in 0..30 {
            last = v.frame(0.016).camera.position;
        }
        assert!(last.z < start.z && last.y < start.y);
        assert!(v.scroll().offset() > 0.0);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut v = vignette(0.1);
        v.on_resize(800, 800);
        assert_eq!(v.camera().aspect, 1.0);
    }

    #[test]
    fn render_view_tracks_camera() {
        let mut v = vignette(0.0);
        v.scroll_to(1.0);
        v.frame(0.016);
        let view = v.render_view();
        assert_eq!(view.eye, Vec3::new(0.0, 1.5, 0.0));
        assert_eq!(view.target, Vec3::ZERO);
    }
}
