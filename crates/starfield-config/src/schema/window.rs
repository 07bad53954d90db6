//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Inner width in logical pixels (valid range: 64-7680).
    pub width: u32,
    /// Inner height in logical pixels (valid range: 64-4320).
    pub height: u32,
    /// Clear color as `#rrggbb`.
    pub background: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Starfield".into(),
            width: 480,
            height: 480,
            background: "#1a1a1a".into(),
        }
    }
}
