use serde::{Deserialize, Serialize};

/// Distance below which the damped offset snaps onto its target.
const SNAP_EPSILON: f32 = 1e-4;

/// Errors from invalid scroll configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScrollError {
    #[error("pages must be a finite number >= 1, got {0}")]
    Pages(f32),
    #[error("damping must be a finite number >= 0, got {0}")]
    Damping(f32),
    #[error("wheel step must be a finite number > 0, got {0}")]
    WheelStep(f32),
}

/// Scroll container configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Page length in viewport heights. One page means nothing to scroll.
    pub pages: f32,
    /// Smoothing time constant in seconds. Zero follows input immediately.
    pub damping: f32,
    /// Pixels scrolled per wheel line.
    pub wheel_step: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            pages: 5.0,
            damping: 0.1,
            wheel_step: 50.0,
        }
    }
}

impl ScrollConfig {
    pub fn validate(&self) -> Result<(), ScrollError> {
        if !self.pages.is_finite() || self.pages < 1.0 {
            return Err(ScrollError::Pages(self.pages));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(ScrollError::Damping(self.damping));
        }
        if !self.wheel_step.is_finite() || self.wheel_step <= 0.0 {
            return Err(ScrollError::WheelStep(self.wheel_step));
        }
        Ok(())
    }
}

/// Tracks how far the reader has scrolled through a multi-page container.
///
/// Input moves a raw `target`; [`ScrollControls::update`] eases the
/// delivered `offset` toward it once per frame.
#[derive(Debug, Clone)]
pub struct ScrollControls {
    config: ScrollConfig,
    viewport_height: f32,
    target: f32,
    offset: f32,
    delta: f32,
}

impl ScrollControls {
    pub fn new(config: ScrollConfig, viewport_height: u32) -> Result<Self, ScrollError> {
        config.validate()?;
        Ok(Self {
            config,
            viewport_height: viewport_height.max(1) as f32,
            target: 0.0,
            offset: 0.0,
            delta: 0.0,
        })
    }

    /// Normalized, damped scroll progress.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Where the offset is heading.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Offset change produced by the last `update`.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Scrollable distance in pixels.
    pub fn scroll_distance(&self) -> f32 {
        (self.config.pages - 1.0) * self.viewport_height
    }

    /// Keep the normalized position when the window changes size.
    pub fn set_viewport_height(&mut self, height: u32) {
        self.viewport_height = height.max(1) as f32;
    }

    /// Scroll by wheel lines; positive moves down the page.
    pub fn scroll_lines(&mut self, lines: f32) {
        self.scroll_pixels(lines * self.config.wheel_step);
    }

    /// Scroll by pixels; positive moves down the page.
    pub fn scroll_pixels(&mut self, pixels: f32) {
        let distance = self.scroll_distance();
        if distance <= 0.0 || !pixels.is_finite() {
            return;
        }
        self.scroll_to(self.target + pixels / distance);
    }

    /// Scroll by whole viewport heights; positive moves down the page.
    pub fn scroll_pages(&mut self, pages: f32) {
        self.scroll_pixels(pages * self.viewport_height);
    }

    /// Jump the target to an absolute progress.
    pub fn scroll_to(&mut self, progress: f32) {
        if progress.is_nan() {
            return;
        }
        self.target = progress.clamp(0.0, 1.0);
        tracing::trace!(progress = self.target, "scroll target moved");
    }

    /// Ease the offset toward the target over `dt` seconds and return it.
    pub fn update(&mut self, dt: f32) -> f32 {
        let previous = self.offset;
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        if self.config.damping == 0.0 {
            self.offset = self.target;
        } else {
            let blend = 1.0 - (-dt / self.config.damping).exp();
            self.offset += (self.target - self.offset) * blend;
            if (self.target - self.offset).abs() < SNAP_EPSILON {
                self.offset = self.target;
            }
        }

        self.offset = self.offset.clamp(0.0, 1.0);
        self.delta = self.offset - previous;
        self.offset
    }

    /// Progress through the sub-range starting at `from` and `distance` long,
    /// widened by `margin` on both sides: 0 before it, 1 after it.
    pub fn range(&self, from: f32, distance: f32, margin: f32) -> f32 {
        let start = from - margin;
        let end = start + distance + margin * 2.0;
        if self.offset < start {
            0.0
        } else if self.offset > end || end <= start {
            1.0
        } else {
            (self.offset - start) / (end - start)
        }
    }

    /// Rises from 0 to 1 and back to 0 across the sub-range.
    pub fn curve(&self, from: f32, distance: f32, margin: f32) -> f32 {
        (self.range(from, distance, margin) * std::f32::consts::PI).sin()
    }

    /// Whether the offset currently lies inside the sub-range.
    pub fn visible(&self, from: f32, distance: f32, margin: f32) -> bool {
        let start = from - margin;
        let end = start + distance + margin * 2.0;
        self.offset >= start && self.offset <= end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controls(damping: f32) -> ScrollControls {
        ScrollControls::new(
            ScrollConfig {
                damping,
                ..ScrollConfig::default()
            },
            720,
        )
        .unwrap()
    }

    #[test]
    fn default_config() {
        let config = ScrollConfig::default();
        assert_eq!(config.pages, 5.0);
        assert_eq!(config.damping, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_config() {
        let bad = |c: ScrollConfig| ScrollControls::new(c, 720).unwrap_err();
        let base = ScrollConfig::default();
        assert_eq!(
            bad(ScrollConfig { pages: 0.5, ..base }),
            ScrollError::Pages(0.5)
        );
        assert_eq!(
            bad(ScrollConfig {
                damping: -1.0,
                ..base
            }),
            ScrollError::Damping(-1.0)
        );
        assert!(matches!(
            bad(ScrollConfig {
                wheel_step: f32::NAN,
                ..base
            }),
            ScrollError::WheelStep(_)
        ));
    }

    #[test]
    fn pixels_map_onto_four_scrollable_pages() {
        let mut s = controls(0.0);
        assert_eq!(s.scroll_distance(), 4.0 * 720.0);
        s.scroll_pixels(1440.0);
        assert_eq!(s.target(), 0.5);
        assert_eq!(s.update(0.016), 0.5);
        s.scroll_pages(1.0);
        assert_eq!(s.target(), 0.75);
    }

    #[test]
    fn target_and_offset_stay_in_range() {
        let mut s = controls(0.0);
        s.scroll_lines(-10.0);
        assert_eq!(s.target(), 0.0);
        s.scroll_lines(10_000.0);
        assert_eq!(s.target(), 1.0);
        assert_eq!(s.update(1.0), 1.0);
        s.scroll_to(f32::NAN);
        assert_eq!(s.target(), 1.0);
        s.scroll_to(-2.0);
        assert_eq!(s.target(), 0.0);
    }

    #[test]
    fn single_page_does_not_scroll() {
        let mut s = ScrollControls::new(
            ScrollConfig {
                pages: 1.0,
                ..ScrollConfig::default()
            },
            720,
        )
        .unwrap();
        s.scroll_lines(5.0);
        assert_eq!(s.target(), 0.0);
    }

    #[test]
    fn damping_eases_toward_target() {
        let mut s = controls(0.1);
        s.scroll_to(1.0);
        let first = s.update(0.016);
        assert!(first > 0.0 && first < 1.0);
        assert!((s.delta() - first).abs() < 1e-6);
        let second = s.update(0.016);
        assert!(second > first && second < 1.0);
        for _ in 0..200 {
            s.update(0.016);
        }
        assert_eq!(s.offset(), 1.0);
        assert_eq!(s.delta(), 0.0);
    }

    #[test]
    fn damping_is_framerate_independent() {
        let mut coarse = controls(0.1);
        let mut fine = controls(0.1);
        coarse.scroll_to(0.8);
        fine.scroll_to(0.8);
        coarse.update(0.05);
        fine.update(0.025);
        fine.update(0.025);
        assert!((coarse.offset() - fine.offset()).abs() < 1e-5);
    }

    #[test]
    fn bad_frame_time_does_not_move() {
        let mut s = controls(0.1);
        s.scroll_to(1.0);
        assert_eq!(s.update(f32::NAN), 0.0);
        assert_eq!(s.update(-1.0), 0.0);
    }

    #[test]
    fn range_curve_and_visible() {
        let mut s = controls(0.0);
        s.scroll_to(0.5);
        s.update(0.0);
        assert_eq!(s.range(0.0, 0.25, 0.0), 1.0);
        assert_eq!(s.range(0.75, 0.25, 0.0), 0.0);
        assert!((s.range(0.25, 0.5, 0.0) - 0.5).abs() < 1e-6);
        assert!((s.curve(0.25, 0.5, 0.0) - 1.0).abs() < 1e-6);
        assert!(s.visible(0.4, 0.2, 0.0));
        assert!(!s.visible(0.6, 0.2, 0.0));
        assert!(s.visible(0.65, 0.2, 0.2));
        assert_eq!(s.range(0.5, 0.0, 0.0), 1.0);
    }

    #[test]
    fn resizing_keeps_progress() {
        let mut s = controls(0.0);
        s.scroll_to(0.4);
        s.update(0.0);
        s.set_viewport_height(1080);
        assert_eq!(s.offset(), 0.4);
        s.scroll_pixels(1080.0 * 4.0 * 0.1);
        assert!((s.target() - 0.5).abs() < 1e-6);
    }
}
