//! Star population settings.

use serde::{Deserialize, Serialize};

/// Star population and mesh settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of stars spawned at startup (valid range: 1-20000).
    pub star_count: u32,
    /// Random seed. A fresh one is drawn (and logged) when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Initial star radius in camera-space units (valid range: 0.0001-0.5).
    pub star_radius: f32,
    /// Polygon sides per star (valid range: 3-256).
    pub resolution: u32,
    /// Shared velocity at startup, `[x, y, z]`.
    pub initial_velocity: [f32; 3],
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            star_count: 500,
            seed: None,
            star_radius: 0.01,
            resolution: 16,
            initial_velocity: [0.0, 0.0, 0.0],
        }
    }
}
