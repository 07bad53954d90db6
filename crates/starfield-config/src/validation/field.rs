//! Star population validation.

use crate::schema::StarfieldConfig;

use super::helpers::{validate_range, validate_range_f32};

pub(crate) fn validate_field(errors: &mut Vec<String>, config: &StarfieldConfig) {
    let field = &config.field;
    validate_range(errors, "field.star_count", field.star_count, 1, 20000);
    validate_range(errors, "field.resolution", field.resolution, 3, 256);
    validate_range_f32(errors, "field.star_radius", field.star_radius, 0.0001, 0.5);

    for (axis, value) in ["x", "y", "z"].iter().zip(field.initial_velocity) {
        if !value.is_finite() {
            errors.push(format!("field.initial_velocity.{axis} = {value} is not finite"));
        }
    }
}
