use std::collections::HashMap;

use starfield_config::keybinds::all_keybinds;
use starfield_config::schema::KeybindConfig;

use crate::winit_keys::normalize_winit_key;

use super::Control;

/// Maps normalized key names to [`Control`]s.
pub struct ControlMap {
    bindings: HashMap<String, Control>,
}

impl ControlMap {
    /// Build the map from the config keybind section.
    ///
    /// Config key names go through [`normalize_winit_key`] so `"w"` and
    /// `"W"` are the same binding. A key bound twice keeps its first
    /// control and logs a warning.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mut bindings = HashMap::new();

        for (name, binding) in all_keybinds(config) {
            let Some(control) = control_for_name(name) else {
                continue;
            };
            let key = normalize_winit_key(binding.trim());
            if let Some(existing) = bindings.get(&key) {
                tracing::warn!("key '{key}' already bound to {existing:?}, ignoring '{name}'");
                continue;
            }
            bindings.insert(key, control);
        }

        Self { bindings }
    }

    /// Look up the control for an already-normalized key name.
    pub fn lookup(&self, key: &str) -> Option<Control> {
        self.bindings.get(key).copied()
    }

    /// Reverse lookup: the key bound to `control`.
    pub fn key_for(&self, control: Control) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(_, c)| **c == control)
            .map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

fn control_for_name(name: &str) -> Option<Control> {
    Some(match name {
        "forward" => Control::Forward,
        "backward" => Control::Backward,
        "strafe_left" => Control::StrafeLeft,
        "strafe_right" => Control::StrafeRight,
        "rise" => Control::Rise,
        "sink" => Control::Sink,
        "roll_left" => Control::RollLeft,
        "roll_right" => Control::RollRight,
        "grow" => Control::Grow,
        "shrink" => Control::Shrink,
        "decelerate" => Control::Decelerate,
        "quit" => Control::Quit,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lookups() {
        let map = ControlMap::from_config(&KeybindConfig::default());
        assert_eq!(map.lookup("W"), Some(Control::Forward));
        assert_eq!(map.lookup("Space"), Some(Control::Decelerate));
        assert_eq!(map.lookup("Escape"), Some(Control::Quit));
        assert_eq!(map.lookup("="), Some(Control::Grow));
        assert_eq!(map.lookup("Z"), None);
    }

    #[test]
    fn lowercase_config_keys_are_normalized() {
        let config = KeybindConfig {
            forward: "i".into(),
            ..KeybindConfig::default()
        };
        let map = ControlMap::from_config(&config);
        assert_eq!(map.lookup("I"), Some(Control::Forward));
        assert_eq!(map.lookup("W"), None);
    }

    #[test]
    fn arrow_keys_in_config() {
        let config = KeybindConfig {
            forward: "ArrowUp".into(),
            backward: "Down".into(),
            ..KeybindConfig::default()
        };
        let map = ControlMap::from_config(&config);
        assert_eq!(map.lookup("Up"), Some(Control::Forward));
        assert_eq!(map.lookup("Down"), Some(Control::Backward));
    }

    #[test]
    fn duplicate_key_keeps_first() {
        let config = KeybindConfig {
            backward: "W".into(),
            ..KeybindConfig::default()
        };
        let map = ControlMap::from_config(&config);
        assert_eq!(map.lookup("W"), Some(Control::Forward));
        assert_eq!(map.len(), 11);
    }

    #[test]
    fn reverse_lookup() {
        let map = ControlMap::from_config(&KeybindConfig::default());
        assert_eq!(map.key_for(Control::Quit), Some("Escape"));
        assert_eq!(map.key_for(Control::Shrink), Some("-"));
    }
}
