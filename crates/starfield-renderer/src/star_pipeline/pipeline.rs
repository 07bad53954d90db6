//! wgpu render pipeline for stars.

use starfield_config::ProjectionMode;
use starfield_core::ProjectionUniforms;

use super::shader::SHADER_SOURCE;
use super::types::{PROJECTION_UNIFORM_SIZE, STAR_VERTEX_LAYOUT};

/// Vertex entry point for a projection mode.
pub fn vertex_entry_point(mode: ProjectionMode) -> &'static str {
    match mode {
        ProjectionMode::Gpu => "vs_project",
        ProjectionMode::Cpu => "vs_passthrough",
    }
}

/// The star pipeline plus the projection uniform it reads.
pub struct StarPipeline {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    last_uniforms: Option<ProjectionUniforms>,
}

impl StarPipeline {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, mode: ProjectionMode) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("star shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("projection uniforms"),
            size: PROJECTION_UNIFORM_SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("star bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(PROJECTION_UNIFORM_SIZE),
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("star bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("star pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("star pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(vertex_entry_point(mode)),
                buffers: &[STAR_VERTEX_LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        tracing::debug!(entry_point = vertex_entry_point(mode), "Star pipeline created");

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            last_uniforms: None,
        }
    }

    /// Upload `uniforms` if they differ from the last upload.
    ///
    /// Returns `true` when a write was issued.
    pub fn update_uniforms(&mut self, queue: &wgpu::Queue, uniforms: ProjectionUniforms) -> bool {
        if self.last_uniforms == Some(uniforms) {
            return false;
        }
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        self.last_uniforms = Some(uniforms);
        true
    }

    /// Bind the pipeline and uniforms on `pass`.
    pub fn bind(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
    }
}
