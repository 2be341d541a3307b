use glam::Vec3;
use steppe_render::{DebugTextRenderer, Renderer};
use steppe_vignette::{SCROLL_HINT, Vignette, VignetteConfig};

const DT: f32 = 1.0 / 60.0;

fn session() -> Vignette {
    Vignette::new(&VignetteConfig::default(), 1280, 720).unwrap()
}

#[test]
fn scrolling_to_the_bottom_enters_the_yurt() {
    let mut v = session();
    // Four scrollable pages of 720px at 50px per wheel line.
    for _ in 0..60 {
        v.on_wheel_lines(1.0);
        v.frame(DT);
    }
    for _ in 0..120 {
        v.frame(DT);
    }

    assert_eq!(v.scroll().offset(), 1.0);
    assert_eq!(v.camera().position, Vec3::new(0.0, 1.5, 0.0));
    assert_eq!(v.frame(DT).phase, 2);
}

#[test]
fn damped_descent_never_climbs() {
    let mut v = session();
    let mut previous = v.frame(DT);
    v.on_page(2.0);
    for i in 0..240 {
        if i == 60 {
            v.on_page(2.0);
        }
        let state = v.frame(DT);
        let (a, b) = (previous.camera.position, state.camera.position);
        assert!(b.is_finite());
        assert!(b.y <= a.y + 1e-5 && b.z <= a.z + 1e-5, "{a} -> {b}");
        assert_eq!(state.camera.look_at, Vec3::ZERO);
        previous = state;
    }
}

#[test]
fn scrolling_back_up_returns_to_the_aerial_view() {
    let mut v = session();
    v.scroll_to(0.8);
    for _ in 0..120 {
        v.frame(DT);
    }
    assert!(v.camera().position.z < 5.0);

    v.scroll_to(0.0);
    for _ in 0..120 {
        v.frame(DT);
    }
    assert_eq!(v.camera().position, Vec3::new(0.0, 50.0, 100.0));
}

#[test]
fn debug_render_of_a_frame() {
    let mut v = session();
    v.scroll_to(0.15);
    for _ in 0..120 {
        v.frame(DT);
    }
    let text = DebugTextRenderer::new().render(v.scene(), &v.render_view());
    assert!(text.contains("eye=(0.00, 27.50, 65.00)"), "{text}");
    assert!(text.contains("yurt/roof"));
}

#[test]
fn overlay_hint() {
    assert_eq!(SCROLL_HINT, "Scroll to explore ↓");
}
