//! Camera / projection configuration types.

use serde::{Deserialize, Serialize};

/// Where the perspective divide happens.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    /// Vertices are projected on the CPU and uploaded in clip space
    /// with `w = 1`. Stars behind the near plane are culled.
    Cpu,
    /// Vertices are uploaded in camera space and the shader projects them
    /// from the projection uniforms, leaving the divide to the rasterizer.
    #[default]
    Gpu,
}

impl std::str::FromStr for ProjectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpu" => Ok(Self::Cpu),
            "gpu" => Ok(Self::Gpu),
            other => Err(format!("unknown projection mode '{other}' (expected cpu or gpu)")),
        }
    }
}

/// Camera and field-of-view settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub projection: ProjectionMode,
    /// Near plane distance (valid range: 0.001-1.0).
    pub near: f32,
    /// Far plane distance, must exceed `near` (valid range: 10-100000).
    pub far: f32,
    /// Field of view in degrees at rest (valid range: 10-170).
    pub base_fov: f32,
    /// Degrees added per unit of normalized speed (valid range: 0-1000).
    pub fov_speed_gain: f32,
    /// Upper bound on the dynamic field of view (valid range: 10-179).
    pub max_fov: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            projection: ProjectionMode::Gpu,
            near: 0.1,
            far: 10000.0,
            base_fov: 45.0,
            fov_speed_gain: 360.0,
            max_fov: 179.0,
        }
    }
}
