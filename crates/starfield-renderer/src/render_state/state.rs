use std::sync::Arc;
use winit::window::Window;

use starfield_common::Color;
use starfield_config::StarfieldConfig;

use crate::gpu::{GpuContext, RendererError};
use crate::star_pipeline::{StarBufferSet, StarPipeline};

use super::helpers::srgb_to_linear;

/// GPU context, star pipeline and per-star buffers for one window.
pub struct RenderState {
    pub gpu: GpuContext,
    pub(super) pipeline: StarPipeline,
    pub(super) buffers: StarBufferSet,
    pub clear_color: wgpu::Color,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    pub async fn new(window: Arc<Window>, config: &StarfieldConfig) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window).await?;
        let pipeline = StarPipeline::new(&gpu.device, gpu.format(), config.camera.projection);

        let mut state = Self {
            gpu,
            pipeline,
            buffers: StarBufferSet::new(),
            clear_color: wgpu::Color::BLACK,
        };

        match Color::from_hex(&config.window.background) {
            Some(color) => state.set_clear_color(color),
            None => tracing::warn!(
                "Invalid background color '{}', using black",
                config.window.background
            ),
        }

        Ok(state)
    }

    /// Handle a window resize by reconfiguring the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    /// Set the clear color from an sRGB color.
    pub fn set_clear_color(&mut self, color: Color) {
        let [r, g, b, a] = color.to_unit_rgba();
        let linear = |c: f64| {
            if self.gpu.format().is_srgb() {
                srgb_to_linear(c)
            } else {
                c
            }
        };
        self.clear_color = wgpu::Color {
            r: linear(r),
            g: linear(g),
            b: linear(b),
            a,
        };
    }
}
