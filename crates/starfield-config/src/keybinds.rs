//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use starfield_common::ConfigError;
use std::collections::HashMap;

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("forward", &config.forward),
        ("backward", &config.backward),
        ("strafe_left", &config.strafe_left),
        ("strafe_right", &config.strafe_right),
        ("rise", &config.rise),
        ("sink", &config.sink),
        ("roll_left", &config.roll_left),
        ("roll_right", &config.roll_right),
        ("grow", &config.grow),
        ("shrink", &config.shrink),
        ("decelerate", &config.decelerate),
        ("quit", &config.quit),
    ]
}

/// Validate that no two controls share a key and none is left empty.
pub fn validate_keybinds(config: &KeybindConfig) -> Result<(), ConfigError> {
    let binds = all_keybinds(config);
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for (name, binding) in &binds {
        if binding.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "keybind '{name}' is empty"
            )));
        }
        if let Some(existing_name) = seen.get(binding) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(binding, name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keybinds_are_valid() {
        let config = KeybindConfig::default();
        assert!(validate_keybinds(&config).is_ok());
    }

    #[test]
    fn all_keybinds_returns_12_entries() {
        let config = KeybindConfig::default();
        assert_eq!(all_keybinds(&config).len(), 12);
    }

    #[test]
    fn detects_duplicate() {
        let mut config = KeybindConfig::default();
        config.backward = "W".into();
        let err = validate_keybinds(&config).unwrap_err().to_string();
        assert!(err.contains("duplicate keybind 'W'"));
        assert!(err.contains("forward"));
        assert!(err.contains("backward"));
    }

    #[test]
    fn detects_empty() {
        let mut config = KeybindConfig::default();
        config.grow = "  ".into();
        let err = validate_keybinds(&config).unwrap_err().to_string();
        assert!(err.contains("keybind 'grow' is empty"));
    }
}
