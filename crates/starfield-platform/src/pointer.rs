//! Pointer-look helpers.
//!
//! Mouse look measures how far the pointer sits from the window center and
//! turns that offset into yaw and pitch. The app re-centers the pointer
//! after each frame where the platform allows it.

/// Center of a `width × height` window in physical pixels.
pub fn window_center(width: u32, height: u32) -> (f64, f64) {
    (width as f64 / 2.0, height as f64 / 2.0)
}

/// Offset of `(x, y)` from the window center. Positive `dx` is right of
/// center, positive `dy` is below it.
pub fn displacement_from_center(x: f64, y: f64, width: u32, height: u32) -> (f64, f64) {
    let (cx, cy) = window_center(width, height);
    (x - cx, y - cy)
}

/// Scale a pixel offset into `(yaw, pitch)` degrees.
pub fn displacement_to_rotation(dx: f64, dy: f64, sensitivity_x: f32, sensitivity_y: f32) -> (f32, f32) {
    (dx as f32 * sensitivity_x, dy as f32 * sensitivity_y)
}
