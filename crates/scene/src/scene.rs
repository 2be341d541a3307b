use crate::mesh::{self, MeshData};
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use steppe_common::{Color, Transform};

/// Errors from building a scene out of a configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("{field} must be a finite number > 0, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("radial segments must be at least 3, got {0}")]
    TooFewSegments(u32),
    #[error("the roof must be at least as wide as the walls ({roof} < {walls})")]
    RoofTooNarrow { roof: f32, walls: f32 },
}

/// Geometry kinds the composer knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Plane {
        width: f32,
        height: f32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    Cuboid {
        width: f32,
        height: f32,
        depth: f32,
    },
}

impl Primitive {
    pub fn mesh(&self) -> MeshData {
        match *self {
            Primitive::Plane { width, height } => mesh::plane(width, height),
            Primitive::Cylinder {
                radius_top,
                radius_bottom,
                height,
                radial_segments,
            } => mesh::cylinder(radius_top, radius_bottom, height, radial_segments),
            Primitive::Cone {
                radius,
                height,
                radial_segments,
            } => mesh::cone(radius, height, radial_segments),
            Primitive::Cuboid {
                width,
                height,
                depth,
            } => mesh::cuboid(width, height, depth),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Plane { .. } => "plane",
            Primitive::Cylinder { .. } => "cylinder",
            Primitive::Cone { .. } => "cone",
            Primitive::Cuboid { .. } => "cuboid",
        }
    }
}

/// Matte standard material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub color: Color,
}

/// One drawable object in world space.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub name: String,
    pub primitive: Primitive,
    pub transform: Transform,
    pub material: Material,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

/// Light arriving from `position` toward the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub color: Color,
    pub position: Vec3,
    pub intensity: f32,
}

impl DirectionalLight {
    /// Unit vector pointing from the scene toward the light.
    pub fn direction(&self) -> Vec3 {
        self.position.try_normalize().unwrap_or(Vec3::Y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lighting {
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: Color::WHITE,
                intensity: 0.5,
            },
            directional: DirectionalLight {
                color: Color::WHITE,
                position: Vec3::new(10.0, 10.0, 5.0),
                intensity: 1.0,
            },
        }
    }
}

/// Sky backdrop: blue overhead fading to a pale horizon, with a sun disc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sky {
    pub sun_position: Vec3,
    pub zenith: Color,
    pub horizon: Color,
    pub sun_color: Color,
}

impl Default for Sky {
    fn default() -> Self {
        Self {
            sun_position: Vec3::new(100.0, 20.0, 100.0),
            zenith: Color::rgb(0.25, 0.47, 0.78),
            horizon: Color::rgb(0.85, 0.89, 0.93),
            sun_color: Color::rgb(1.0, 0.96, 0.86),
        }
    }
}

impl Sky {
    pub fn sun_direction(&self) -> Vec3 {
        self.sun_position.try_normalize().unwrap_or(Vec3::Y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    pub size: f32,
    pub color: Color,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            size: 200.0,
            color: Color::rgb(139.0 / 255.0, 115.0 / 255.0, 85.0 / 255.0),
        }
    }
}

/// Yurt proportions. Part placement is derived: walls stand on the ground,
/// the roof sits on the walls, the door is centred on the front wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YurtConfig {
    pub position: Vec3,
    pub wall_radius: f32,
    pub wall_height: f32,
    pub roof_radius: f32,
    pub roof_height: f32,
    pub radial_segments: u32,
    pub door_width: f32,
    pub door_height: f32,
    pub door_depth: f32,
    pub wall_color: Color,
    pub roof_color: Color,
    pub door_color: Color,
}

impl Default for YurtConfig {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            wall_radius: 3.0,
            wall_height: 3.0,
            roof_radius: 3.5,
            roof_height: 2.0,
            radial_segments: 32,
            door_width: 1.0,
            door_height: 2.0,
            door_depth: 0.1,
            wall_color: Color::rgb(232.0 / 255.0, 220.0 / 255.0, 196.0 / 255.0),
            roof_color: Color::rgb(212.0 / 255.0, 184.0 / 255.0, 150.0 / 255.0),
            door_color: Color::rgb(101.0 / 255.0, 67.0 / 255.0, 33.0 / 255.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub ground: GroundConfig,
    pub yurt: YurtConfig,
    pub lighting: Lighting,
    pub sky: Sky,
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), SceneError> {
        let y = &self.yurt;
        for (field, value) in [
            ("ground.size", self.ground.size),
            ("yurt.wall_radius", y.wall_radius),
            ("yurt.wall_height", y.wall_height),
            ("yurt.roof_radius", y.roof_radius),
            ("yurt.roof_height", y.roof_height),
            ("yurt.door_width", y.door_width),
            ("yurt.door_height", y.door_height),
            ("yurt.door_depth", y.door_depth),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SceneError::NonPositive { field, value });
            }
        }
        if y.radial_segments < 3 {
            return Err(SceneError::TooFewSegments(y.radial_segments));
        }
        if y.roof_radius < y.wall_radius {
            return Err(SceneError::RoofTooNarrow {
                roof: y.roof_radius,
                walls: y.wall_radius,
            });
        }
        Ok(())
    }
}

/// The composed vignette scene: steppe ground, yurt, lights and sky.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    nodes: Vec<SceneNode>,
    lighting: Lighting,
    sky: Sky,
}

impl Scene {
    /// The default vignette: a yurt in the middle of a flat steppe.
    pub fn steppe_yurt() -> Self {
        Self::compose(&SceneConfig::default())
    }

    pub fn from_config(config: &SceneConfig) -> Result<Self, SceneError> {
        config.validate()?;
        Ok(Self::compose(config))
    }

    fn compose(config: &SceneConfig) -> Self {
        let y = &config.yurt;
        let group = Transform::from_translation(y.position);

        let ground = SceneNode {
            name: "steppe".into(),
            primitive: Primitive::Plane {
                width: config.ground.size,
                height: config.ground.size,
            },
            transform: Transform::default()
                .with_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
            material: Material {
                color: config.ground.color,
            },
        };

        let part = |name: &str, primitive: Primitive, local: Vec3, color: Color| SceneNode {
            name: format!("yurt/{name}"),
            primitive,
            transform: Transform::from_translation(local).then(&group),
            material: Material { color },
        };

        let walls = part(
            "walls",
            Primitive::Cylinder {
                radius_top: y.wall_radius,
                radius_bottom: y.wall_radius,
                height: y.wall_height,
                radial_segments: y.radial_segments,
            },
            Vec3::new(0.0, y.wall_height * 0.5, 0.0),
            y.wall_color,
        );
        let roof = part(
            "roof",
            Primitive::Cone {
                radius: y.roof_radius,
                height: y.roof_height,
                radial_segments: y.radial_segments,
            },
            Vec3::new(0.0, y.wall_height + y.roof_height * 0.5, 0.0),
            y.roof_color,
        );
        let door = part(
            "door",
            Primitive::Cuboid {
                width: y.door_width,
                height: y.door_height,
                depth: y.door_depth,
            },
            Vec3::new(0.0, y.wall_height * 0.5, y.wall_radius),
            y.door_color,
        );

        let scene = Self {
            nodes: vec![ground, walls, roof, door],
            lighting: config.lighting,
            sky: config.sky,
        };
        tracing::debug!(nodes = scene.nodes.len(), "scene composed");
        scene
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn node(&self, name: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    pub fn sky(&self) -> &Sky {
        &self.sky
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::steppe_yurt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(node: &SceneNode) -> String {
        node.material.color.to_hex()
    }

    #[test]
    fn default_scene_layout() {
        let scene = Scene::steppe_yurt();
        assert_eq!(scene.nodes().len(), 4);

        let ground = scene.node("steppe").unwrap();
        assert_eq!(hex(ground), "#8B7355");
        assert_eq!(
            ground.primitive,
            Primitive::Plane {
                width: 200.0,
                height: 200.0
            }
        );
        let up = ground.transform.rotation * Vec3::Z;
        assert!(up.abs_diff_eq(Vec3::Y, 1e-6));

        let walls = scene.node("yurt/walls").unwrap();
        assert_eq!(hex(walls), "#E8DCC4");
        assert!(walls.transform.position.abs_diff_eq(Vec3::new(0.0, 1.5, 0.0), 1e-6));

        let roof = scene.node("yurt/roof").unwrap();
        assert_eq!(hex(roof), "#D4B896");
        assert!(roof.transform.position.abs_diff_eq(Vec3::new(0.0, 4.0, 0.0), 1e-6));
        assert_eq!(
            roof.primitive,
            Primitive::Cone {
                radius: 3.5,
                height: 2.0,
                radial_segments: 32
            }
        );

        let door = scene.node("yurt/door").unwrap();
        assert_eq!(hex(door), "#654321");
        assert!(door.transform.position.abs_diff_eq(Vec3::new(0.0, 1.5, 3.0), 1e-6));
    }

    #[test]
    fn default_lights_and_sky() {
        let scene = Scene::default();
        assert_eq!(scene.lighting().ambient.intensity, 0.5);
        assert_eq!(scene.lighting().directional.position, Vec3::new(10.0, 10.0, 5.0));
        assert_eq!(scene.lighting().directional.intensity, 1.0);
        assert_eq!(scene.sky().sun_position, Vec3::new(100.0, 20.0, 100.0));
        let sun = scene.sky().sun_direction();
        assert!((sun.length() - 1.0).abs() < 1e-6 && sun.y > 0.0);
    }

    #[test]
    fn moving_the_yurt_moves_every_part() {
        let mut config = SceneConfig::default();
        config.yurt.position = Vec3::new(5.0, 0.0, -5.0);
        let scene = Scene::from_config(&config).unwrap();
        let door = scene.node("yurt/door").unwrap();
        assert!(door.transform.position.abs_diff_eq(Vec3::new(5.0, 1.5, -2.0), 1e-5));
        // Ground stays put.
        assert_eq!(scene.node("steppe").unwrap().transform.position, Vec3::ZERO);
    }

    #[test]
    fn rejects_bad_proportions() {
        let mut config = SceneConfig::default();
        config.yurt.wall_height = 0.0;
        assert!(matches!(
            Scene::from_config(&config),
            Err(SceneError::NonPositive {
                field: "yurt.wall_height",
                ..
            })
        ));

        let mut config = SceneConfig::default();
        config.yurt.radial_segments = 2;
        assert_eq!(
            Scene::from_config(&config),
            Err(SceneError::TooFewSegments(2))
        );

        let mut config = SceneConfig::default();
        config.yurt.roof_radius = 2.0;
        assert!(matches!(
            Scene::from_config(&config),
            Err(SceneError::RoofTooNarrow { .. })
        ));
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: SceneConfig = serde_yaml::from_str(
            "yurt:\n  wall_color: \"#FFFFFF\"\nground:\n  size: 50.0\n",
        )
        .unwrap();
        assert_eq!(config.ground.size, 50.0);
        assert_eq!(config.ground.color.to_hex(), "#8B7355");
        assert_eq!(config.yurt.wall_color.to_hex(), "#FFFFFF");
        assert_eq!(config.yurt.roof_radius, 3.5);
    }

    #[test]
    fn every_primitive_meshes() {
        for node in Scene::steppe_yurt().nodes() {
            let mesh = node.primitive.mesh();
            assert!(mesh.triangle_count() > 0, "{} is empty", node.name);
        }
    }
}
