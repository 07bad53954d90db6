use std::collections::HashSet;

use starfield_config::schema::ControlsConfig;

use crate::pointer::{displacement_from_center, displacement_to_rotation};

use super::Control;

/// Tuning for how held controls and pointer offsets become deltas.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSettings {
    pub mouse_look: bool,
    pub mouse_sensitivity_x: f32,
    pub mouse_sensitivity_y: f32,
    /// Velocity change per frame per held axis key.
    pub acceleration: f32,
    pub max_velocity_xy: f32,
    pub max_velocity_z: f32,
    /// Degrees of roll per frame held.
    pub roll_step: f32,
    /// Radius change per frame held.
    pub resize_step: f32,
}

impl InputSettings {
    pub fn from_config(config: &ControlsConfig) -> Self {
        Self {
            mouse_look: config.mouse_look,
            mouse_sensitivity_x: config.mouse_sensitivity_x,
            mouse_sensitivity_y: config.mouse_sensitivity_y,
            acceleration: config.acceleration,
            max_velocity_xy: config.max_velocity_xy,
            max_velocity_z: config.max_velocity_z,
            roll_step: config.roll_step,
            resize_step: config.resize_step,
        }
    }
}

impl Default for InputSettings {
    fn default() -> Self {
        Self::from_config(&ControlsConfig::default())
    }
}

/// One frame's worth of input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Per-axis velocity change, before clamping.
    pub velocity_delta: [f32; 3],
    /// Degrees about the y axis, from horizontal pointer offset.
    pub yaw: f32,
    /// Degrees about the x axis, from vertical pointer offset.
    pub pitch: f32,
    /// Degrees about the z axis.
    pub roll: f32,
    /// Radius change for every star.
    pub resize: f32,
    pub decelerate: bool,
    pub quit: bool,
}

impl FrameInput {
    pub fn accelerates(&self) -> bool {
        self.velocity_delta.iter().any(|d| *d != 0.0)
    }
}

/// Held controls, pending triggers, and pointer position between frames.
pub struct InputState {
    settings: InputSettings,
    held: HashSet<Control>,
    triggered: HashSet<Control>,
    pointer: Option<(f64, f64)>,
    window_size: (u32, u32),
}

impl InputState {
    pub fn new(settings: InputSettings, width: u32, height: u32) -> Self {
        Self {
            settings,
            held: HashSet::new(),
            triggered: HashSet::new(),
            pointer: None,
            window_size: (width, height),
        }
    }

    pub fn settings(&self) -> &InputSettings {
        &self.settings
    }

    pub fn key_event(&mut self, control: Control, pressed: bool) {
        if pressed {
            if control.is_trigger() {
                self.triggered.insert(control);
            }
            self.held.insert(control);
        } else {
            self.held.remove(&control);
        }
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.held.contains(&control)
    }

    /// Record the latest pointer position in physical pixels.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = Some((x, y));
    }

    /// Forget the pointer, e.g. when it leaves the window.
    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    pub fn window_size(&self) -> (u32, u32) {
        self.window_size
    }

    /// Release everything, e.g. on focus loss.
    pub fn clear(&mut self) {
        self.held.clear();
        self.triggered.clear();
        self.pointer = None;
    }

    /// Reduce the current state to one frame of input.
    ///
    /// Consumes pending triggers and the pointer position: the caller is
    /// expected to re-center the pointer, so the next frame only sees new
    /// movement.
    pub fn sample(&mut self) -> FrameInput {
        let s = &self.settings;
        let axis = |plus: Control, minus: Control, step: f32| -> f32 {
            let mut d = 0.0;
            if self.held.contains(&plus) {
                d += step;
            }
            if self.held.contains(&minus) {
                d -= step;
            }
            d
        };

        // Forward pulls stars toward the camera (-z); strafing and rising
        // move stars opposite to the camera.
        let velocity_delta = [
            axis(Control::StrafeLeft, Control::StrafeRight, s.acceleration),
            axis(Control::Sink, Control::Rise, s.acceleration),
            axis(Control::Backward, Control::Forward, s.acceleration),
        ];
        let roll = axis(Control::RollLeft, Control::RollRight, s.roll_step);
        let resize = axis(Control::Grow, Control::Shrink, s.resize_step);

        let (yaw, pitch) = match self.pointer.take() {
            Some((x, y)) if s.mouse_look => {
                let (w, h) = self.window_size;
                let (dx, dy) = displacement_from_center(x, y, w, h);
                displacement_to_rotation(dx, dy, s.mouse_sensitivity_x, s.mouse_sensitivity_y)
            }
            _ => (0.0, 0.0),
        };

        let decelerate = self.triggered.remove(&Control::Decelerate);
        let quit = self.triggered.remove(&Control::Quit) || self.held.contains(&Control::Quit);

        FrameInput {
            velocity_delta,
            yaw,
            pitch,
            roll,
            resize,
            decelerate,
            quit,
        }
    }
}

/// Add `delta` to `velocity`, clamping x and y to `±max_xy` and z to
/// `±max_z`.
pub fn apply_velocity_delta(velocity: [f32; 3], delta: [f32; 3], max_xy: f32, max_z: f32) -> [f32; 3] {
    let clamp = |v: f32, limit: f32| v.max(-limit).min(limit);
    [
        clamp(velocity[0] + delta[0], max_xy),
        clamp(velocity[1] + delta[1], max_xy),
        clamp(velocity[2] + delta[2], max_z),
    ]
}

// =============================================================================
// Tests
// =============================================================================
