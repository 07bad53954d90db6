//! Frame pacing and the per-frame update.

use std::time::{Duration, Instant};

use winit::dpi::PhysicalPosition;
use winit::event_loop::{ActiveEventLoop, ControlFlow};

use starfield_platform::window_center;
use starfield_renderer::FrameOutcome;

use super::controls::apply_frame_input;
use super::core::StarfieldApp;

/// How often frame statistics are logged.
const REPORT_INTERVAL: Duration = Duration::from_secs(5);

impl StarfieldApp {
    /// Check the frame gate and request a redraw when a frame is due.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        if self.pending_dt.is_none() {
            if let Some(dt) = self.gate.poll(Instant::now()) {
                self.pending_dt = Some(dt);
                if let Some(ref window) = self.window {
                    window.request_redraw();
                }
            }
        }
        event_loop.set_control_flow(ControlFlow::Poll);
    }

    /// Sample input, update the field, and render one frame.
    pub(super) fn run_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(dt) = self.pending_dt.take() else {
            return;
        };

        let input = self.input.sample();
        if input.quit {
            tracing::info!("Quit requested");
            self.should_exit = true;
            event_loop.exit();
            return;
        }

        apply_frame_input(&mut self.field, &input, self.input.settings());
        self.recenter_pointer_if_needed();

        let Some(ref mut rs) = self.render_state else {
            return;
        };
        match rs.render_frame(&mut self.field, dt) {
            Ok(FrameOutcome::Presented(stats)) => {
                self.frames += 1;
                self.timer.begin_frame();
                tracing::trace!(dt, drawn = stats.drawn, culled = stats.culled, "Frame");
            }
            Ok(FrameOutcome::Skipped) => {}
            Err(e) => {
                tracing::error!("Render error: {e}");
            }
        }

        if self.last_report.elapsed() >= REPORT_INTERVAL {
            self.last_report = Instant::now();
            tracing::debug!(
                fps = self.timer.fps(),
                frame_ms = self.timer.frame_time_ms(),
                speed = self.field.speed(),
                state = ?self.field.state(),
                "Frame stats"
            );
        }
    }

    /// Put the pointer back at the window center for mouse look. Stops
    /// trying after the first failure; some platforms do not allow it.
    fn recenter_pointer_if_needed(&mut self) {
        if !self.recenter_pointer {
            return;
        }
        let Some(ref window) = self.window else {
            return;
        };

        let (w, h) = self.input.window_size();
        let (cx, cy) = window_center(w, h);
        if let Err(e) = window.set_cursor_position(PhysicalPosition::new(cx, cy)) {
            tracing::warn!("Pointer re-centering unavailable, mouse look uses raw offsets: {e}");
            self.recenter_pointer = false;
        }
    }
}
