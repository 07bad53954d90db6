//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use starfield_common::StarfieldError;
use starfield_renderer::RenderState;

use super::core::StarfieldApp;

impl StarfieldApp {
    /// Create the window and initialize the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should
    /// exit; the error is kept in `fatal`.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fatal = Some(StarfieldError::Window(format!("failed to create window: {e}")));
                return false;
            }
        };

        let render_state = pollster::block_on(RenderState::new(window.clone(), &self.config));
        match render_state {
            Ok(rs) => self.render_state = Some(rs),
            Err(e) => {
                self.fatal = Some(StarfieldError::Renderer(e.to_string()));
                return false;
            }
        }

        let size = window.inner_size();
        self.field.set_viewport(size.width, size.height);
        self.input.set_window_size(size.width, size.height);

        if self.config.controls.mouse_look {
            window.set_cursor_visible(false);
        }

        self.window = Some(window);
        tracing::info!(
            width = size.width,
            height = size.height,
            "Window created and renderer initialized"
        );
        true
    }
}
