//! Control tuning validation.

use crate::schema::StarfieldConfig;

use super::helpers::validate_range_f32;

pub(crate) fn validate_controls(errors: &mut Vec<String>, config: &StarfieldConfig) {
    let controls = &config.controls;
    validate_range_f32(
        errors,
        "controls.mouse_sensitivity_x",
        controls.mouse_sensitivity_x,
        0.0,
        1.0,
    );
    validate_range_f32(
        errors,
        "controls.mouse_sensitivity_y",
        controls.mouse_sensitivity_y,
        0.0,
        1.0,
    );
    validate_range_f32(errors, "controls.acceleration", controls.acceleration, 0.0001, 1.0);
    validate_range_f32(
        errors,
        "controls.max_velocity_xy",
        controls.max_velocity_xy,
        0.001,
        10.0,
    );
    validate_range_f32(
        errors,
        "controls.max_velocity_z",
        controls.max_velocity_z,
        0.001,
        10.0,
    );
    validate_range_f32(errors, "controls.roll_step", controls.roll_step, 0.0, 45.0);
    validate_range_f32(errors, "controls.resize_step", controls.resize_step, 0.0, 0.1);
    validate_range_f32(
        errors,
        "controls.deceleration_decay",
        controls.deceleration_decay,
        0.0,
        0.999,
    );
    validate_range_f32(
        errors,
        "controls.deceleration_threshold",
        controls.deceleration_threshold,
        0.000001,
        1.0,
    );
}
