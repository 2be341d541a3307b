use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use steppe_camera::{CameraPath, PathError, PathPhase};
use steppe_scene::{SceneConfig, SceneError};
use steppe_scroll::{ScrollConfig, ScrollError};

/// Errors from loading or validating a vignette configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid camera path: {0}")]
    Path(#[from] PathError),
    #[error("invalid scroll config: {0}")]
    Scroll(#[from] ScrollError),
    #[error("invalid scene config: {0}")]
    Scene(#[from] SceneError),
}

/// Everything tunable about the vignette. Missing sections fall back to the
/// defaults, which reproduce the yurt approach exactly.
///
/// ```yaml
/// scroll:
///   pages: 5
///   damping: 0.1
/// scene:
///   yurt:
///     door_color: "#654321"
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VignetteConfig {
    pub scroll: ScrollConfig,
    pub camera_path: CameraPath,
    pub scene: SceneConfig,
}

/// Unchecked file form; the camera path is validated after parsing so its
/// errors keep their own variant.
#[derive(Default, Deserialize)]
#[serde(default)]
struct RawVignetteConfig {
    scroll: ScrollConfig,
    camera_path: RawCameraPath,
    scene: SceneConfig,
}

#[derive(Deserialize)]
struct RawCameraPath {
    phases: Vec<PathPhase>,
}

impl Default for RawCameraPath {
    fn default() -> Self {
        Self {
            phases: CameraPath::default().phases().to_vec(),
        }
    }
}

impl VignetteConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded vignette config");
        Ok(config)
    }

    /// Parse and validate every section.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: RawVignetteConfig = serde_yaml::from_str(text)?;
        let config = Self {
            scroll: raw.scroll,
            camera_path: CameraPath::new(raw.camera_path.phases)?,
            scene: raw.scene,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scroll.validate()?;
        self.scene.validate()?;
        Ok(())
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_is_default() {
        let config = VignetteConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, VignetteConfig::default());
    }

    #[test]
    fn defaults_survive_a_yaml_round_trip() {
        let yaml = VignetteConfig::default().to_yaml_string().unwrap();
        assert!(yaml.contains("approach"));
        assert!(yaml.contains("#8B7355"));
        let back = VignetteConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(back.camera_path, CameraPath::default());
        assert_eq!(back.scroll, ScrollConfig::default());
    }

    #[test]
    fn partial_override() {
        let config =
            VignetteConfig::from_yaml_str("scroll:\n  pages: 8\n  damping: 0.0\n").unwrap();
        assert_eq!(config.scroll.pages, 8.0);
        assert_eq!(config.scroll.damping, 0.0);
        assert_eq!(config.scroll.wheel_step, 50.0);
        assert_eq!(config.scene, SceneConfig::default());
    }

    #[test]
    fn invalid_sections_are_reported() {
        assert!(matches!(
            VignetteConfig::from_yaml_str("scroll:\n  pages: 0.5\n"),
            Err(ConfigError::Scroll(ScrollError::Pages(_)))
        ));
        assert!(matches!(
            VignetteConfig::from_yaml_str("scene:\n  yurt:\n    radial_segments: 2\n"),
            Err(ConfigError::Scene(SceneError::TooFewSegments(2)))
        ));
        assert!(matches!(
            VignetteConfig::from_yaml_str("camera_path:\n  phases: []\n"),
            Err(ConfigError::Path(PathError::Empty))
        ));
        assert!(matches!(
            VignetteConfig::from_yaml_str("scroll:\n  pages: [1]\n"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "scene:\n  ground:\n    size: 120.0").unwrap();
        let config = VignetteConfig::load(file.path()).unwrap();
        assert_eq!(config.scene.ground.size, 120.0);

        let missing = VignetteConfig::load("/definitely/not/here.yaml");
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }
}
