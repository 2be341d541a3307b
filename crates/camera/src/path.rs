use glam::Vec3;
use serde::{Deserialize, Serialize};

/// The point the camera always faces: the yurt sits at the world origin.
pub const LOOK_AT_TARGET: Vec3 = Vec3::ZERO;

/// Keyframes closer than this are considered continuous when validating a path.
const CONTINUITY_EPSILON: f32 = 1e-4;

/// Errors from building a camera path out of user-supplied phases.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    #[error("camera path has no phases")]
    Empty,
    #[error("phase {index} has non-finite bounds or keyframes")]
    NonFinite { index: usize },
    #[error("camera path must start at progress 0, first phase starts at {start}")]
    BadStart { start: f32 },
    #[error("camera path must end at progress 1, last phase ends at {end}")]
    BadEnd { end: f32 },
    #[error("phase {index} spans nothing: [{start}, {end})")]
    EmptySpan { index: usize, start: f32, end: f32 },
    #[error("phase {index} starts at {start} but the previous phase ends at {previous_end}")]
    Gap {
        index: usize,
        start: f32,
        previous_end: f32,
    },
    #[error("phase {index} starts at {next:?} but the previous phase ends at {previous:?}")]
    Discontinuous {
        index: usize,
        previous: Keyframe,
        next: Keyframe,
    },
}

/// Camera height and distance from the yurt at one end of a phase.
/// The camera never leaves the `x = 0` plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub y: f32,
    pub z: f32,
}

impl Keyframe {
    pub const fn new(y: f32, z: f32) -> Self {
        Self { y, z }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(0.0, self.y, self.z)
    }

    fn is_finite(&self) -> bool {
        self.y.is_finite() && self.z.is_finite()
    }
}

/// One linear leg of the camera path, covering `[start, end)` of scroll progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPhase {
    pub name: String,
    pub start: f32,
    pub end: f32,
    pub from: Keyframe,
    pub to: Keyframe,
}

impl PathPhase {
    pub fn new(
        name: impl Into<String>,
        start: f32,
        end: f32,
        from: Keyframe,
        to: Keyframe,
    ) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            from,
            to,
        }
    }

    /// Progress normalized within this phase.
    pub fn local_t(&self, progress: f32) -> f32 {
        ((progress - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }

    /// Keyframe at local parameter `t`, each axis moving `start - (start - end) * t`.
    pub fn sample(&self, t: f32) -> Keyframe {
        Keyframe {
            y: descend(self.from.y, self.to.y, t),
            z: descend(self.from.z, self.to.z, t),
        }
    }
}

#[inline]
fn descend(start: f32, end: f32, t: f32) -> f32 {
    start - (start - end) * t
}

/// Clamp scroll progress into `[0, 1]`. NaN maps to the top of the page.
fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Camera pose for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPathState {
    pub scroll_progress: f32,
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPathState {
    /// Unit vector from the camera toward its target.
    pub fn forward(&self) -> Vec3 {
        (self.look_at - self.position).normalize_or_zero()
    }
}

/// Piecewise-linear camera path driven by scroll progress.
///
/// Phases are half-open `[start, end)` except the last, which is closed so
/// that progress `1.0` lands on its final keyframe. A progress value sitting
/// exactly on a boundary belongs to the later phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCameraPath", into = "RawCameraPath")]
pub struct CameraPath {
    phases: Vec<PathPhase>,
}

#[derive(Serialize, Deserialize)]
struct RawCameraPath {
    phases: Vec<PathPhase>,
}

impl TryFrom<RawCameraPath> for CameraPath {
    type Error = PathError;

    fn try_from(raw: RawCameraPath) -> Result<Self, Self::Error> {
        CameraPath::new(raw.phases)
    }
}

impl From<CameraPath> for RawCameraPath {
    fn from(path: CameraPath) -> Self {
        RawCameraPath {
            phases: path.phases,
        }
    }
}

impl Default for CameraPath {
    /// High above the steppe, down toward the yurt, then through the door.
    fn default() -> Self {
        Self {
            phases: vec![
                PathPhase::new(
                    "approach",
                    0.0,
                    0.3,
                    Keyframe::new(50.0, 100.0),
                    Keyframe::new(5.0, 30.0),
                ),
                PathPhase::new(
                    "close-in",
                    0.3,
                    0.7,
                    Keyframe::new(5.0, 30.0),
                    Keyframe::new(2.0, 5.0),
                ),
                PathPhase::new(
                    "entry",
                    0.7,
                    1.0,
                    Keyframe::new(2.0, 5.0),
                    Keyframe::new(1.5, 0.0),
                ),
            ],
        }
    }
}

impl CameraPath {
    /// Build a path from ordered phases, checking that they tile `[0, 1]`
    /// and join up without jumps.
    pub fn new(phases: Vec<PathPhase>) -> Result<Self, PathError> {
        if phases.is_empty() {
            return Err(PathError::Empty);
        }

        for (index, phase) in phases.iter().enumerate() {
            let finite = phase.start.is_finite()
                && phase.end.is_finite()
                && phase.from.is_finite()
                && phase.to.is_finite();
            if !finite {
                return Err(PathError::NonFinite { index });
            }
            if phase.end <= phase.start {
                return Err(PathError::EmptySpan {
                    index,
                    start: phase.start,
                    end: phase.end,
                });
            }
            if index == 0 {
                continue;
            }

            let previous = &phases[index - 1];
            if previous.end != phase.start {
                return Err(PathError::Gap {
                    index,
                    start: phase.start,
                    previous_end: previous.end,
                });
            }
            let jump = previous.to.position().distance(phase.from.position());
            if jump > CONTINUITY_EPSILON {
                return Err(PathError::Discontinuous {
                    index,
                    previous: previous.to,
                    next: phase.from,
                });
            }
        }

        let first = &phases[0];
        if first.start != 0.0 {
            return Err(PathError::BadStart { start: first.start });
        }
        let last = &phases[phases.len() - 1];
        if last.end != 1.0 {
            return Err(PathError::BadEnd { end: last.end });
        }

        Ok(Self { phases })
    }

    pub fn phases(&self) -> &[PathPhase] {
        &self.phases
    }

    /// Index of the phase that owns `progress` (after clamping).
    pub fn phase_index(&self, progress: f32) -> usize {
        let progress = clamp_progress(progress);
        self.phases
            .iter()
            .position(|phase| progress < phase.end)
            .unwrap_or(self.phases.len() - 1)
    }

    pub fn phase(&self, progress: f32) -> &PathPhase {
        &self.phases[self.phase_index(progress)]
    }

    /// Camera pose for the given scroll progress.
    pub fn evaluate(&self, progress: f32) -> CameraPathState {
        let progress = clamp_progress(progress);
        let phase = self.phase(progress);
        let t = phase.local_t(progress);
        let key = phase.sample(t);
        tracing::trace!(progress, phase = %phase.name, t, y = key.y, z = key.z, "camera path");

        CameraPathState {
            scroll_progress: progress,
            position: key.position(),
            look_at: LOOK_AT_TARGET,
        }
    }

    /// Evenly spaced samples over `[0, 1]`, inclusive of both ends.
    pub fn samples(&self, count: usize) -> Vec<CameraPathState> {
        match count {
            0 => Vec::new(),
            1 => vec![self.evaluate(0.0)],
            n => (0..n)
                .map(|i| self.evaluate(i as f32 / (n - 1) as f32))
                .collect(),
        }
    }
}

/// Camera position on the default yurt approach.
pub fn camera_position(progress: f32) -> Vec3 {
    CameraPath::default().evaluate(progress).position
}
