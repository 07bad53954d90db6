//! Validation for smaller config sections: window and performance.

use starfield_common::Color;

use crate::schema::StarfieldConfig;

use super::helpers::validate_range;

/// Validate window size and background color.
pub(crate) fn validate_window(errors: &mut Vec<String>, config: &StarfieldConfig) {
    validate_range(errors, "window.width", config.window.width, 64, 7680);
    validate_range(errors, "window.height", config.window.height, 64, 4320);

    if Color::from_hex(&config.window.background).is_none() {
        errors.push(format!(
            "window.background = '{}' is not a hex color",
            config.window.background
        ));
    }
}

/// Validate frame pacing.
pub(crate) fn validate_performance(errors: &mut Vec<String>, config: &StarfieldConfig) {
    validate_range(
        errors,
        "performance.frame_rate",
        config.performance.frame_rate,
        30,
        360,
    );
}
