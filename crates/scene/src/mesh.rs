use glam::Vec3;
use std::f32::consts::TAU;

/// Indexed triangle mesh with per-vertex normals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds as `(min, max)`. Empty meshes report zero bounds.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let mut iter = self.positions.iter().map(|p| Vec3::from_array(*p));
        let Some(first) = iter.next() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };
        iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)))
    }

    fn push_vertex(&mut self, position: Vec3, normal: Vec3) -> u32 {
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
        (self.positions.len() - 1) as u32
    }
}

/// Flat rectangle in the XY plane facing +Z, centred on the origin.
pub fn plane(width: f32, height: f32) -> MeshData {
    let (hw, hh) = (width * 0.5, height * 0.5);
    let mut mesh = MeshData::default();
    for (x, y) in [(-hw, -hh), (hw, -hh), (-hw, hh), (hw, hh)] {
        mesh.push_vertex(Vec3::new(x, y, 0.0), Vec3::Z);
    }
    mesh.indices = vec![0, 1, 3, 0, 3, 2];
    mesh
}

/// Box centred on the origin.
pub fn cuboid(width: f32, height: f32, depth: f32) -> MeshData {
    let (x, y, z) = (width * 0.5, height * 0.5, depth * 0.5);
    #[rustfmt::skip]
    let faces: [(Vec3, [Vec3; 4]); 6] = [
        (Vec3::Z, [Vec3::new(-x, -y,  z), Vec3::new( x, -y,  z), Vec3::new( x,  y,  z), Vec3::new(-x,  y,  z)]),
        (Vec3::NEG_Z, [Vec3::new( x, -y, -z), Vec3::new(-x, -y, -z), Vec3::new(-x,  y, -z), Vec3::new( x,  y, -z)]),
        (Vec3::X, [Vec3::new( x, -y,  z), Vec3::new( x, -y, -z), Vec3::new( x,  y, -z), Vec3::new( x,  y,  z)]),
        (Vec3::NEG_X, [Vec3::new(-x, -y, -z), Vec3::new(-x, -y,  z), Vec3::new(-x,  y,  z), Vec3::new(-x,  y, -z)]),
        (Vec3::Y, [Vec3::new(-x,  y,  z), Vec3::new( x,  y,  z), Vec3::new( x,  y, -z), Vec3::new(-x,  y, -z)]),
        (Vec3::NEG_Y, [Vec3::new(-x, -y, -z), Vec3::new( x, -y, -z), Vec3::new( x, -y,  z), Vec3::new(-x, -y,  z)]),
    ];

    let mut mesh = MeshData::default();
    for (normal, corners) in faces {
        let base = mesh.positions.len() as u32;
        for corner in corners {
            mesh.push_vertex(corner, normal);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }
    mesh
}

/// Capped, possibly tapered cylinder standing on the Y axis, centred on the origin.
///
/// A zero radius at either end collapses that ring to a point and drops its cap,
/// which is how [`cone`] is built.
pub fn cylinder(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    radial_segments: u32,
) -> MeshData {
    let segments = radial_segments.max(3);
    let half = height * 0.5;
    let slope = if height > 0.0 {
        (radius_bottom - radius_top) / height
    } else {
        0.0
    };
    let ring = |i: u32| {
        let theta = i as f32 / segments as f32 * TAU;
        (theta.sin(), theta.cos())
    };

    let mut mesh = MeshData::default();

    // Side wall: bottom and top rings share a seam column at i == segments.
    let mut bottom = Vec::with_capacity(segments as usize + 1);
    let mut top = Vec::with_capacity(segments as usize + 1);
    for i in 0..=segments {
        let (s, c) = ring(i);
        let normal = Vec3::new(s, slope, c).normalize();
        bottom.push(mesh.push_vertex(
            Vec3::new(radius_bottom * s, -half, radius_bottom * c),
            normal,
        ));
        top.push(mesh.push_vertex(Vec3::new(radius_top * s, half, radius_top * c), normal));
    }
    for i in 0..segments as usize {
        let (a, b, c, d) = (bottom[i], bottom[i + 1], top[i + 1], top[i]);
        if radius_bottom > 0.0 {
            mesh.indices.extend_from_slice(&[a, b, c]);
        }
        if radius_top > 0.0 {
            mesh.indices.extend_from_slice(&[a, c, d]);
        }
    }

    if radius_top > 0.0 {
        cap(&mut mesh, radius_top, half, Vec3::Y, segments);
    }
    if radius_bottom > 0.0 {
        cap(&mut mesh, radius_bottom, -half, Vec3::NEG_Y, segments);
    }
    mesh
}

/// Cone with its base on `y = -height / 2` and apex on `y = height / 2`.
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    cylinder(0.0, radius, height, radial_segments)
}

fn cap(mesh: &mut MeshData, radius: f32, y: f32, normal: Vec3, segments: u32) {
    let centre = mesh.push_vertex(Vec3::new(0.0, y, 0.0), normal);
    let first = mesh.positions.len() as u32;
    for i in 0..=segments {
        let theta = i as f32 / segments as f32 * TAU;
        mesh.push_vertex(
            Vec3::new(radius * theta.sin(), y, radius * theta.cos()),
            normal,
        );
    }
    for i in 0..segments {
        let (v0, v1) = (first + i, first + i + 1);
        if normal.y > 0.0 {
            mesh.indices.extend_from_slice(&[centre, v0, v1]);
        } else {
            mesh.indices.extend_from_slice(&[centre, v1, v0]);
        }
    }
}
