//! Camera / projection validation.

use crate::schema::StarfieldConfig;

use super::helpers::validate_range_f32;

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &StarfieldConfig) {
    let camera = &config.camera;
    validate_range_f32(errors, "camera.near", camera.near, 0.001, 1.0);
    validate_range_f32(errors, "camera.far", camera.far, 10.0, 100000.0);
    validate_range_f32(errors, "camera.base_fov", camera.base_fov, 10.0, 170.0);
    validate_range_f32(errors, "camera.fov_speed_gain", camera.fov_speed_gain, 0.0, 1000.0);
    validate_range_f32(errors, "camera.max_fov", camera.max_fov, 10.0, 179.0);

    if camera.max_fov < camera.base_fov {
        errors.push(format!(
            "camera.max_fov = {} is below camera.base_fov = {}",
            camera.max_fov, camera.base_fov
        ));
    }
}
