//! Interactive control tuning.

use serde::{Deserialize, Serialize};

/// Steering, speed and star-size control settings.
///
/// Steps are applied once per frame while the bound key is held.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Turn pointer displacement into yaw/pitch.
    pub mouse_look: bool,
    /// Degrees of yaw per pixel of horizontal pointer displacement.
    pub mouse_sensitivity_x: f32,
    /// Degrees of pitch per pixel of vertical pointer displacement.
    pub mouse_sensitivity_y: f32,
    /// Velocity change per frame on each axis (valid range: 0.0001-1.0).
    pub acceleration: f32,
    /// Per-axis speed limit for x and y (valid range: 0.001-10.0).
    pub max_velocity_xy: f32,
    /// Speed limit for z (valid range: 0.001-10.0).
    pub max_velocity_z: f32,
    /// Degrees of roll per frame.
    pub roll_step: f32,
    /// Radius change per frame when growing/shrinking stars.
    pub resize_step: f32,
    /// Velocity multiplier per decelerating frame (valid range: 0.0-0.999).
    pub deceleration_decay: f32,
    /// Speed under which deceleration snaps to rest.
    pub deceleration_threshold: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            mouse_look: true,
            mouse_sensitivity_x: 0.01,
            mouse_sensitivity_y: 0.01,
            acceleration: 0.01,
            max_velocity_xy: 0.05,
            max_velocity_z: 0.1,
            roll_step: 0.5,
            resize_step: 0.0005,
            deceleration_decay: 0.90,
            deceleration_threshold: 0.01,
        }
    }
}
