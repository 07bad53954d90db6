//! Keybinding configuration types.

use serde::{Deserialize, Serialize};

/// Key names bound to each control.
///
/// Names use the normalized vocabulary: letters upper-case, `Up`/`Down`/
/// `Left`/`Right` for arrows, `Space`, `Escape`, and punctuation as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub forward: String,
    pub backward: String,
    pub strafe_left: String,
    pub strafe_right: String,
    pub rise: String,
    pub sink: String,
    pub roll_left: String,
    pub roll_right: String,
    pub grow: String,
    pub shrink: String,
    pub decelerate: String,
    pub quit: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            forward: "W".into(),
            backward: "S".into(),
            strafe_left: "A".into(),
            strafe_right: "D".into(),
            rise: "R".into(),
            sink: "F".into(),
            roll_left: "Q".into(),
            roll_right: "E".into(),
            grow: "=".into(),
            shrink: "-".into(),
            decelerate: "Space".into(),
            quit: "Escape".into(),
        }
    }
}
