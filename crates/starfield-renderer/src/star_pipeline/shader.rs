pub(crate) const SHADER_SOURCE: &str = r#"
struct Projection {
    near: f32,
    far: f32,
    scale: f32,
    aspect: f32,
};

@group(0) @binding(0) var<uniform> projection: Projection;

struct VertexInput {
    @location(0) position: vec4<f32>,
    @location(1) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip: vec4<f32>,
    @location(0) color: vec4<f32>,
};

// Camera-space input; the rasterizer divides by w = z.
@vertex
fn vs_project(in: VertexInput) -> VertexOutput {
    let q = projection.far / (projection.far - projection.near);
    let p = in.position;

    var out: VertexOutput;
    out.clip = vec4<f32>(
        p.x * projection.aspect * projection.scale,
        p.y * projection.scale,
        p.z * q - projection.near * q,
        p.z,
    );
    out.color = in.color;
    return out;
}

// Already projected on the CPU.
@vertex
fn vs_passthrough(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip = in.position;
    out.color = in.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_has_both_vertex_entry_points() {
        assert!(SHADER_SOURCE.contains("fn vs_project"));
        assert!(SHADER_SOURCE.contains("fn vs_passthrough"));
        assert!(SHADER_SOURCE.contains("fn fs_main"));
    }
}
