/// Per-frame uniforms shared by both shaders. Layout matches `FrameUniforms` in gpu.rs.
const FRAME_UNIFORMS: &str = r#"
struct Frame {
    view_proj: mat4x4<f32>,
    inv_view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
    ambient: vec4<f32>,
    light_dir: vec4<f32>,
    light_color: vec4<f32>,
    sky_zenith: vec4<f32>,
    sky_horizon: vec4<f32>,
    sun_dir: vec4<f32>,
    sun_color: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> frame: Frame;
"#;

const MESH_BODY: &str = r#"
struct Node {
    model: mat4x4<f32>,
    normal_matrix: mat4x4<f32>,
    color: vec4<f32>,
};

@group(1) @binding(0)
var<uniform> node: Node;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_normal: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    let world_pos = node.model * vec4<f32>(vertex.position, 1.0);

    var out: VertexOutput;
    out.clip_position = frame.view_proj * world_pos;
    out.world_normal = (node.normal_matrix * vec4<f32>(vertex.normal, 0.0)).xyz;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let n = normalize(in.world_normal);
    let diffuse = max(dot(n, frame.light_dir.xyz), 0.0);
    let lighting = frame.ambient.rgb + frame.light_color.rgb * diffuse;
    return vec4<f32>(node.color.rgb * lighting, node.color.a);
}
"#;

const SKY_BODY: &str = r#"
struct SkyOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) ndc: vec2<f32>,
};

// One oversized triangle covering the viewport.
@vertex
fn vs_sky(@builtin(vertex_index) index: u32) -> SkyOutput {
    let uv = vec2<f32>(f32((index << 1u) & 2u), f32(index & 2u));
    let ndc = uv * 2.0 - 1.0;

    var out: SkyOutput;
    out.clip_position = vec4<f32>(ndc, 0.5, 1.0);
    out.ndc = ndc;
    return out;
}

@fragment
fn fs_sky(in: SkyOutput) -> @location(0) vec4<f32> {
    let far = frame.inv_view_proj * vec4<f32>(in.ndc, 1.0, 1.0);
    let dir = normalize(far.xyz / far.w - frame.camera_pos.xyz);

    let h = clamp(dir.y, 0.0, 1.0);
    let t = 1.0 - (1.0 - h) * (1.0 - h);
    var color = mix(frame.sky_horizon.rgb, frame.sky_zenith.rgb, t);

    let s = max(dot(dir, frame.sun_dir.xyz), 0.0);
    let disc = smoothstep(0.9995, 0.9999, s);
    let glow = pow(s, 64.0) * 0.3;
    color = color + frame.sun_color.rgb * (disc + glow);

    return vec4<f32>(color, 1.0);
}
"#;

/// WGSL shader for lit scene meshes.
pub fn mesh_shader() -> String {
    format!("{FRAME_UNIFORMS}{MESH_BODY}")
}

/// WGSL shader for the sky backdrop.
pub fn sky_shader() -> String {
    format!("{FRAME_UNIFORMS}{SKY_BODY}")
}
