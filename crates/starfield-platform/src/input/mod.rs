//! Keyboard and pointer input, reduced to per-frame control deltas.
//!
//! [`ControlMap`] resolves normalized key names to [`Control`]s using the
//! `[keybinds]` config section. [`InputState`] tracks which controls are
//! held and where the pointer is, and [`InputState::sample`] turns that
//! into one [`FrameInput`] per frame.

mod control_map;
mod state;

pub use control_map::ControlMap;
pub use state::{apply_velocity_delta, FrameInput, InputSettings, InputState};

/// Everything a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
    Rise,
    Sink,
    RollLeft,
    RollRight,
    Grow,
    Shrink,
    Decelerate,
    Quit,
}

impl Control {
    pub const ALL: [Control; 12] = [
        Control::Forward,
        Control::Backward,
        Control::StrafeLeft,
        Control::StrafeRight,
        Control::Rise,
        Control::Sink,
        Control::RollLeft,
        Control::RollRight,
        Control::Grow,
        Control::Shrink,
        Control::Decelerate,
        Control::Quit,
    ];

    /// Controls acted on once per press rather than every frame held.
    pub fn is_trigger(self) -> bool {
        matches!(self, Control::Decelerate | Control::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starfield_config::schema::KeybindConfig;

    #[test]
    fn default_map_binds_every_control() {
        let map = ControlMap::from_config(&KeybindConfig::default());
        assert_eq!(map.len(), Control::ALL.len());
        for control in Control::ALL {
            assert!(map.key_for(control).is_some(), "{control:?} unbound");
        }
    }

    #[test]
    fn triggers() {
        assert!(Control::Quit.is_trigger());
        assert!(Control::Decelerate.is_trigger());
        assert!(!Control::Forward.is_trigger());
        assert!(!Control::Grow.is_trigger());
    }

    #[test]
    fn keyboard_to_frame_input() {
        let map = ControlMap::from_config(&KeybindConfig::default());
        let mut input = InputState::new(InputSettings::default(), 480, 480);

        for key in ["w", "d", "Q"] {
            if let Some(control) = map.lookup(&crate::normalize_winit_key(key)) {
                input.key_event(control, true);
            }
        }
        let frame = input.sample();
        assert!(frame.velocity_delta[2] < 0.0);
        assert!(frame.velocity_delta[0] < 0.0);
        assert!(frame.roll > 0.0);
        assert!(!frame.quit);
    }
}
