use crate::shaders;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use steppe_camera::PerspectiveCamera;
use steppe_common::Color;
use steppe_scene::{Lighting, Scene, SceneNode, Sky};
use wgpu::util::DeviceExt;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct FrameUniforms {
    view_proj: [[f32; 4]; 4],
    inv_view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    ambient: [f32; 4],
    light_dir: [f32; 4],
    light_color: [f32; 4],
    sky_zenith: [f32; 4],
    sky_horizon: [f32; 4],
    sun_dir: [f32; 4],
    sun_color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct NodeUniforms {
    model: [[f32; 4]; 4],
    normal_matrix: [[f32; 4]; 4],
    color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
}

/// Linear RGB scaled by `intensity`, padded to a vec4.
fn radiance(color: Color, intensity: f32) -> [f32; 4] {
    let c = color.to_linear();
    [c.r * intensity, c.g * intensity, c.b * intensity, 1.0]
}

fn direction(v: Vec3) -> [f32; 4] {
    v.extend(0.0).to_array()
}

fn frame_uniforms(camera: &PerspectiveCamera, lighting: &Lighting, sky: &Sky) -> FrameUniforms {
    let view_proj = camera.view_projection();
    FrameUniforms {
        view_proj: view_proj.to_cols_array_2d(),
        inv_view_proj: view_proj.inverse().to_cols_array_2d(),
        camera_pos: camera.position.extend(1.0).to_array(),
        ambient: radiance(lighting.ambient.color, lighting.ambient.intensity),
        light_dir: direction(lighting.directional.direction()),
        light_color: radiance(lighting.directional.color, lighting.directional.intensity),
        sky_zenith: radiance(sky.zenith, 1.0),
        sky_horizon: radiance(sky.horizon, 1.0),
        sun_dir: direction(sky.sun_direction()),
        sun_color: radiance(sky.sun_color, 1.0),
    }
}

fn node_uniforms(node: &SceneNode) -> NodeUniforms {
    let model = node.transform.matrix();
    NodeUniforms {
        model: model.to_cols_array_2d(),
        normal_matrix: model.inverse().transpose().to_cols_array_2d(),
        color: node.material.color.to_linear().to_array(),
    }
}

/// GPU-resident copy of one scene node.
struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    bind_group: wgpu::BindGroup,
}

/// wgpu-based scene renderer.
pub struct WgpuRenderer {
    mesh_pipeline: wgpu::RenderPipeline,
    sky_pipeline: wgpu::RenderPipeline,
    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    meshes: Vec<GpuMesh>,
    lighting: Lighting,
    sky: Sky,
    depth_texture: wgpu::TextureView,
}

impl WgpuRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        scene: &Scene,
    ) -> Self {
        let frame_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("frame_uniform_buffer"),
            contents: bytemuck::bytes_of(&frame_uniforms(
                &PerspectiveCamera::default(),
                scene.lighting(),
                scene.sky(),
            )),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let frame_layout = uniform_layout(
            device,
            "frame_bind_group_layout",
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        );
        let node_layout = uniform_layout(
            device,
            "node_bind_group_layout",
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        );

        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bind_group"),
            layout: &frame_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        // Mesh pipeline
        let mesh_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pipeline_layout"),
            bind_group_layouts: &[&frame_layout, &node_layout],
            push_constant_ranges: &[],
        });
        let mesh_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mesh_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::mesh_shader().into()),
        });
        let mesh_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mesh_pipeline"),
            layout: Some(&mesh_layout),
            vertex: wgpu::VertexState {
                module: &mesh_shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![
                        0 => Float32x3,
                        1 => Float32x3,
                    ],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &mesh_shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        // Sky pipeline: drawn first, never writes depth.
        let sky_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sky_pipeline_layout"),
            bind_group_layouts: &[&frame_layout],
            push_constant_ranges: &[],
        });
        let sky_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sky_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::sky_shader().into()),
        });
        let sky_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sky_pipeline"),
            layout: Some(&sky_layout),
            vertex: wgpu::VertexState {
                module: &sky_shader,
                entry_point: Some("vs_sky"),
                compilation_options: Default::default(),
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &sky_shader,
                entry_point: Some("fs_sky"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Always,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        let meshes = scene
            .nodes()
            .iter()
            .map(|node| upload_node(device, &node_layout, node))
            .collect::<Vec<_>>();
        tracing::debug!(meshes = meshes.len(), "scene uploaded");

        let depth_texture = Self::create_depth_texture(device, width, height);

        Self {
            mesh_pipeline,
            sky_pipeline,
            frame_buffer,
            frame_bind_group,
            meshes,
            lighting: *scene.lighting(),
            sky: *scene.sky(),
            depth_texture,
        }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = Self::create_depth_texture(device, width, height);
    }

    /// Render one frame: sky backdrop, then every scene mesh.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        camera: &PerspectiveCamera,
    ) {
        queue.write_buffer(
            &self.frame_buffer,
            0,
            bytemuck::bytes_of(&frame_uniforms(camera, &self.lighting, &self.sky)),
        );

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        let horizon = self.sky.horizon.to_linear();
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: horizon.r as f64,
                            g: horizon.g as f64,
                            b: horizon.b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_bind_group(0, &self.frame_bind_group, &[]);

            pass.set_pipeline(&self.sky_pipeline);
            pass.draw(0..3, 0..1);

            pass.set_pipeline(&self.mesh_pipeline);
            for mesh in &self.meshes {
                pass.set_bind_group(1, &mesh.bind_group, &[]);
                pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    fn create_depth_texture(
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}

fn uniform_layout(
    device: &wgpu::Device,
    label: &str,
    visibility: wgpu::ShaderStages,
) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

fn upload_node(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, node: &SceneNode) -> GpuMesh {
    let mesh = node.primitive.mesh();
    let vertices: Vec<Vertex> = mesh
        .positions
        .iter()
        .zip(&mesh.normals)
        .map(|(&position, &normal)| Vertex { position, normal })
        .collect();

    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{}_vertex_buffer", node.name)),
        contents: bytemuck::cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{}_index_buffer", node.name)),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{}_uniform_buffer", node.name)),
        contents: bytemuck::bytes_of(&node_uniforms(node)),
        usage: wgpu::BufferUsages::UNIFORM,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(&format!("{}_bind_group", node.name)),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    GpuMesh {
        vertex_buffer,
        index_buffer,
        index_count: mesh.indices.len() as u32,
        bind_group,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steppe_camera::CameraPath;

    #[test]
    fn uniform_layouts_are_vec4_aligned() {
        assert_eq!(std::mem::size_of::<FrameUniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<FrameUniforms>(), 2 * 64 + 8 * 16);
        assert_eq!(std::mem::size_of::<NodeUniforms>(), 2 * 64 + 16);
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
    }

    #[test]
    fn frame_uniforms_follow_camera() {
        let scene = Scene::steppe_yurt();
        let mut camera = PerspectiveCamera::default();
        camera.apply(&CameraPath::default().evaluate(0.5));
        let u = frame_uniforms(&camera, scene.lighting(), scene.sky());

        assert_eq!(u.camera_pos, [0.0, camera.position.y, camera.position.z, 1.0]);
        let vp = Mat4::from_cols_array_2d(&u.view_proj);
        let inv = Mat4::from_cols_array_2d(&u.inv_view_proj);
        assert!((vp * inv).abs_diff_eq(Mat4::IDENTITY, 1e-2));
    }

    #[test]
    fn lights_are_scaled_by_intensity() {
        let scene = Scene::steppe_yurt();
        let u = frame_uniforms(&PerspectiveCamera::default(), scene.lighting(), scene.sky());
        assert!((u.ambient[0] - 0.5).abs() < 1e-6);
        assert!((u.light_color[0] - 1.0).abs() < 1e-6);
        let dir = Vec3::new(u.light_dir[0], u.light_dir[1], u.light_dir[2]);
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert_eq!(u.light_dir[3], 0.0);
    }

    #[test]
    fn node_uniforms_carry_world_transform() {
        let scene = Scene::steppe_yurt();
        let door = scene.node("yurt/door").unwrap();
        let u = node_uniforms(door);
        let model = Mat4::from_cols_array_2d(&u.model);
        assert!(model.w_axis.truncate().abs_diff_eq(Vec3::new(0.0, 1.5, 3.0), 1e-6));
        // Linear door color is darker than its sRGB value.
        assert!(u.color[0] < door.material.color.r);
    }
}
