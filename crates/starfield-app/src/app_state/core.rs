//! StarfieldApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use starfield_common::StarfieldError;
use starfield_config::StarfieldConfig;
use starfield_core::Starfield;
use starfield_platform::{ControlMap, InputSettings, InputState};
use starfield_renderer::{FrameGate, FrameTimer, RenderState};

/// Top-level application state.
pub struct StarfieldApp {
    pub(super) config: StarfieldConfig,
    pub(super) controls: ControlMap,
    pub(super) input: InputState,
    pub(super) field: Starfield,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,
    pub(super) recenter_pointer: bool,

    // Frame pacing
    pub(super) gate: FrameGate,
    pub(super) timer: FrameTimer,
    pub(super) pending_dt: Option<f32>,
    pub(super) frames: u64,
    pub(super) last_report: Instant,

    pub(super) should_exit: bool,
    /// Startup failure that ended the event loop.
    pub(super) fatal: Option<StarfieldError>,
}

impl StarfieldApp {
    pub fn new(config: StarfieldConfig, controls: ControlMap) -> Self {
        let input = InputState::new(
            InputSettings::from_config(&config.controls),
            config.window.width,
            config.window.height,
        );
        let field = Starfield::from_config(&config);
        let gate = FrameGate::new(config.performance.frame_rate);
        let recenter_pointer = config.controls.mouse_look;

        Self {
            config,
            controls,
            input,
            field,
            window: None,
            render_state: None,
            recenter_pointer,
            gate,
            timer: FrameTimer::new(),
            pending_dt: None,
            frames: 0,
            last_report: Instant::now(),
            should_exit: false,
            fatal: None,
        }
    }

    pub fn take_fatal(&mut self) -> Option<StarfieldError> {
        self.fatal.take()
    }

    /// Log a short summary when the event loop returns.
    pub fn report_exit(&self) {
        tracing::info!(
            frames = self.frames,
            seed = self.field.seed(),
            fps = self.timer.fps(),
            "Event loop finished"
        );
    }
}
