//! Applying one frame of input to the field.

use starfield_core::{DriveState, Position, Starfield};
use starfield_platform::{apply_velocity_delta, FrameInput, InputSettings};

/// Feed `input` into `field`.
///
/// Acceleration is ignored while the field is decelerating, so a held key
/// cannot fight the brake. Rotation and resizing always apply.
pub(super) fn apply_frame_input(field: &mut Starfield, input: &FrameInput, settings: &InputSettings) {
    if input.decelerate {
        field.begin_deceleration();
    }

    if field.state() == DriveState::Cruising && input.accelerates() {
        let v = field.velocity();
        let [x, y, z] = apply_velocity_delta(
            [v.x, v.y, v.z],
            input.velocity_delta,
            settings.max_velocity_xy,
            settings.max_velocity_z,
        );
        field.set_velocity(Position::point(x, y, z));
    }

    if input.yaw != 0.0 {
        field.rotate_around_y(input.yaw);
    }
    if input.pitch != 0.0 {
        field.rotate_around_x(input.pitch);
    }
    if input.roll != 0.0 {
        field.rotate_around_z(input.roll);
    }
    if input.resize != 0.0 {
        field.resize_all(input.resize);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starfield_config::StarfieldConfig;

    const EPS: f32 = 1e-6;

    fn field() -> Starfield {
        let mut config = StarfieldConfig::default();
        config.field.star_count = 4;
        config.field.seed = Some(5);
        Starfield::from_config(&config)
    }

    fn forward() -> FrameInput {
        FrameInput {
            velocity_delta: [0.0, 0.0, -0.01],
            ..FrameInput::default()
        }
    }

    #[test]
    fn acceleration_is_clamped() {
        let mut field = field();
        let settings = InputSettings::default();
        for _ in 0..50 {
            apply_frame_input(&mut field, &forward(), &settings);
        }
        assert!((field.velocity().z + 0.1).abs() < EPS);
    }

    #[test]
    fn acceleration_ignored_while_decelerating() {
        let mut field = field();
        let settings = InputSettings::default();
        field.set_velocity(Position::point(0.0, 0.0, -0.05));

        let brake = FrameInput {
            decelerate: true,
            ..forward()
        };
        apply_frame_input(&mut field, &brake, &settings);
        assert_eq!(field.state(), DriveState::Decelerating);
        assert!((field.velocity().z + 0.05).abs() < EPS);
    }

    #[test]
    fn rotation_and_resize_apply() {
        let mut field = field();
        let settings = InputSettings::default();
        let before = field.stars()[0].center();
        let radius = field.stars()[0].radius();

        let input = FrameInput {
            roll: 90.0,
            resize: 0.0005,
            ..FrameInput::default()
        };
        apply_frame_input(&mut field, &input, &settings);

        let after = field.stars()[0].center();
        assert!((after.x + before.y).abs() < 1e-4);
        assert!((after.y - before.x).abs() < 1e-4);
        assert!((field.stars()[0].radius() - radius - 0.0005).abs() < EPS);
    }

    #[test]
    fn idle_input_changes_nothing() {
        let mut field = field();
        let before: Vec<_> = field.stars().iter().map(|s| s.center()).collect();
        apply_frame_input(&mut field, &FrameInput::default(), &InputSettings::default());
        for (star, c) in field.stars().iter().zip(&before) {
            assert_eq!(star.center(), *c);
        }
        assert_eq!(field.velocity(), Position::point(0.0, 0.0, 0.0));
    }
}
