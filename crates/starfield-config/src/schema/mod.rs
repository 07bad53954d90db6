//! Configuration schema types for Starfield.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults of the classic 480×480 demo.

mod camera;
mod controls;
mod field;
mod keybind_config;
mod system;
mod window;

pub use camera::*;
pub use controls::*;
pub use field::*;
pub use keybind_config::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub window: WindowConfig,
    pub field: FieldConfig,
    pub camera: CameraConfig,
    pub controls: ControlsConfig,
    pub keybinds: KeybindConfig,
    pub performance: PerformanceConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: StarfieldConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.width, 480);
        assert_eq!(config.field.resolution, 16);
        assert_eq!(config.camera.projection, ProjectionMode::Gpu);
        assert_eq!(config.performance.frame_rate, 144);
    }

    #[test]
    fn partial_toml_keeps_other_sections() {
        let toml_str = r#"
[field]
star_count = 1000
seed = 42

[camera]
projection = "cpu"
"#;
        let config: StarfieldConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.field.star_count, 1000);
        assert_eq!(config.field.seed, Some(42));
        assert_eq!(config.camera.projection, ProjectionMode::Cpu);
        // Defaults preserved
        assert!((config.camera.near - 0.1).abs() < f32::EPSILON);
        assert_eq!(config.keybinds.forward, "W");
        assert!((config.controls.deceleration_decay - 0.90).abs() < f32::EPSILON);
    }
}
