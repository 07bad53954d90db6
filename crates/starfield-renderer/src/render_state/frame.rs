use starfield_core::{FrameStats, Starfield};

use crate::gpu::RendererError;

use super::canvas::FrameCanvas;
use super::helpers::log_first_frame;
use super::state::RenderState;

/// What happened to a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Presented(FrameStats),
    /// The surface was not ready; nothing was simulated or drawn.
    Skipped,
}

impl RenderState {
    /// Advance `field` by `dt` frames and present the result.
    pub fn render_frame(&mut self, field: &mut Starfield, dt: f32) -> Result<FrameOutcome, RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::warn!("Surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(FrameOutcome::Skipped);
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!("Surface texture timed out, skipping frame");
                return Ok(FrameOutcome::Skipped);
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(e.into());
            }
        };

        let mut canvas = FrameCanvas::new(&self.gpu.device, &self.gpu.queue, &mut self.buffers);
        let stats = field.tick(dt, &mut canvas);
        let drawn = canvas.into_drawn();

        if self
            .pipeline
            .update_uniforms(&self.gpu.queue, field.projector().uniforms())
        {
            tracing::trace!(fov = field.projector().fov(), "Projection uniforms uploaded");
        }

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("starfield frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("starfield pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.pipeline.bind(&mut pass);
            for slot in drawn {
                let Some(buffers) = self.buffers.get(slot) else {
                    continue;
                };
                pass.set_vertex_buffer(0, buffers.vertex_buffer.slice(..));
                pass.set_index_buffer(buffers.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..buffers.index_count, 0, 0..1);
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(FrameOutcome::Presented(stats))
    }
}
