//! Star vertex buffer layout.

use starfield_core::{ProjectionUniforms, Vertex};

/// wgpu vertex buffer layout for [`Vertex`]: `vec4` position at location 0,
/// `vec4` color at location 1.
pub const STAR_VERTEX_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<Vertex>() as u64,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &[
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 0,
            shader_location: 0,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 16,
            shader_location: 1,
        },
    ],
};

/// Size of the projection uniform block in bytes.
pub const PROJECTION_UNIFORM_SIZE: u64 = std::mem::size_of::<ProjectionUniforms>() as u64;

// =============================================================================
// Tests
// =============================================================================
