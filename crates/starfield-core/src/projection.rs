//! Perspective projection with a speed-driven field of view.
//!
//! ```text
//! f  = 1 / tan(fov / 2)
//! q  = far / (far - near)
//! x' = x · aspect · f / z
//! y' = y · f / z
//! z' = z · q - near · q
//! ```
//!
//! In [`ProjectionMode::Gpu`] the divide by `z` is left to the rasterizer:
//! the projected point carries `w = z`. In [`ProjectionMode::Cpu`] the
//! divide is done here (depth included, so it lands in the `[0, 1]` clip
//! range) and `w = 1`.

use starfield_config::{ProjectionMode, StarfieldConfig};

use crate::position::Position;

/// Static parameters of a [`PerspectiveProjector`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectorSettings {
    pub mode: ProjectionMode,
    pub near: f32,
    pub far: f32,
    /// Field of view at rest, degrees.
    pub base_fov: f32,
    /// Degrees added per unit of normalized speed.
    pub fov_speed_gain: f32,
    /// Field of view ceiling, degrees.
    pub max_fov: f32,
    /// Per-axis speed limits used to normalize the current speed.
    pub max_velocity_xy: f32,
    pub max_velocity_z: f32,
}

impl ProjectorSettings {
    pub fn from_config(config: &StarfieldConfig) -> Self {
        Self {
            mode: config.camera.projection,
            near: config.camera.near,
            far: config.camera.far,
            base_fov: config.camera.base_fov,
            fov_speed_gain: config.camera.fov_speed_gain,
            max_fov: config.camera.max_fov,
            max_velocity_xy: config.controls.max_velocity_xy,
            max_velocity_z: config.controls.max_velocity_z,
        }
    }

    /// Length of the fastest allowed velocity, `sqrt(2·xy² + z²)`.
    fn top_speed(&self) -> f32 {
        (2.0 * self.max_velocity_xy * self.max_velocity_xy
            + self.max_velocity_z * self.max_velocity_z)
            .sqrt()
    }
}

impl Default for ProjectorSettings {
    fn default() -> Self {
        Self::from_config(&StarfieldConfig::default())
    }
}

/// The four scalars the star shader needs to project camera-space vertices.
///
/// Layout: 4 × f32 = 16 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ProjectionUniforms {
    pub near: f32,
    pub far: f32,
    /// `1 / tan(fov / 2)` for the current frame.
    pub scale: f32,
    pub aspect: f32,
}

/// Maps camera-space points to clip space.
#[derive(Debug, Clone)]
pub struct PerspectiveProjector {
    settings: ProjectorSettings,
    aspect: f32,
    fov: f32,
    scale: f32,
}

impl PerspectiveProjector {
    pub fn new(settings: ProjectorSettings, aspect: f32) -> Self {
        let fov = settings.base_fov;
        Self {
            settings,
            aspect,
            fov,
            scale: scale_for_fov(fov),
        }
    }

    pub fn mode(&self) -> ProjectionMode {
        self.settings.mode
    }

    pub fn near(&self) -> f32 {
        self.settings.near
    }

    pub fn far(&self) -> f32 {
        self.settings.far
    }

    pub fn q(&self) -> f32 {
        self.settings.far / (self.settings.far - self.settings.near)
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Current field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Current `f = 1 / tan(fov / 2)`.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Recompute the aspect ratio (`width / height`) after a resize.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = if height > 0 {
            width as f32 / height as f32
        } else {
            1.0
        };
    }

    /// Field of view for a given speed, clamped to `[base_fov, max_fov]`.
    pub fn fov_for_speed(&self, speed: f32) -> f32 {
        let s = &self.settings;
        let top = s.top_speed();
        if top <= 0.0 || !speed.is_finite() {
            return s.base_fov;
        }
        let fov = speed / top * s.fov_speed_gain + s.base_fov;
        fov.min(s.max_fov).max(s.base_fov)
    }

    /// Refresh the field of view from the current speed.
    ///
    /// Returns `true` when the projection scale changed.
    pub fn update_for_speed(&mut self, speed: f32) -> bool {
        let fov = self.fov_for_speed(speed);
        if fov == self.fov {
            return false;
        }
        self.fov = fov;
        self.scale = scale_for_fov(fov);
        true
    }

    /// Project a camera-space point. `None` when `z <= 0`, where the
    /// perspective divide is undefined.
    pub fn project(&self, p: &Position) -> Option<Position> {
        if p.z <= 0.0 {
            return None;
        }

        let q = self.q();
        let x = p.x * self.aspect * self.scale;
        let y = p.y * self.scale;
        let z = p.z * q - self.settings.near * q;

        Some(match self.settings.mode {
            ProjectionMode::Cpu => Position::new(x / p.z, y / p.z, z / p.z, 1.0),
            ProjectionMode::Gpu => Position::new(x, y, z, p.z),
        })
    }

    pub fn uniforms(&self) -> ProjectionUniforms {
        ProjectionUniforms {
            near: self.settings.near,
            far: self.settings.far,
            scale: self.scale,
            aspect: self.aspect,
        }
    }
}

fn scale_for_fov(fov_degrees: f32) -> f32 {
    1.0 / (fov_degrees.to_radians() * 0.5).tan()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn projector(mode: ProjectionMode) -> PerspectiveProjector {
        let settings = ProjectorSettings {
            mode,
            ..ProjectorSettings::default()
        };
        PerspectiveProjector::new(settings, 1.0)
    }

    #[test]
    fn uniforms_size_is_16_bytes() {
        assert_eq!(std::mem::size_of::<ProjectionUniforms>(), 16);
    }

    #[test]
    fn rest_scale_matches_base_fov() {
        let p = projector(ProjectionMode::Gpu);
        let expected = 1.0 / (45.0_f32.to_radians() / 2.0).tan();
        assert!((p.fov() - 45.0).abs() < EPS);
        assert!((p.scale() - expected).abs() < EPS);
    }

    #[test]
    fn gpu_projection_keeps_depth_in_w() {
        let p = projector(ProjectionMode::Gpu);
        let out = p.project(&Position::point(1.0, 0.5, 2.0)).unwrap();
        let f = p.scale();
        assert!((out.x - f).abs() < EPS);
        assert!((out.y - 0.5 * f).abs() < EPS);
        assert!((out.z - (2.0 * p.q() - 0.1 * p.q())).abs() < 1e-4);
        assert!((out.w - 2.0).abs() < EPS);
    }

    #[test]
    fn cpu_projection_matches_gpu_after_divide() {
        let gpu = projector(ProjectionMode::Gpu);
        let cpu = projector(ProjectionMode::Cpu);
        let point = Position::point(-0.75, 1.25, 3.5);

        let g = gpu.project(&point).unwrap();
        let c = cpu.project(&point).unwrap();
        assert!((c.w - 1.0).abs() < EPS);
        assert!((c.x - g.x / g.w).abs() < EPS);
        assert!((c.y - g.y / g.w).abs() < EPS);
        assert!((c.z - g.z / g.w).abs() < EPS);
    }

    #[test]
    fn depth_maps_near_and_far_planes() {
        let p = projector(ProjectionMode::Cpu);
        let near = p.project(&Position::point(0.0, 0.0, 0.1)).unwrap();
        let far = p.project(&Position::point(0.0, 0.0, 10000.0)).unwrap();
        assert!(near.z.abs() < 1e-4);
        assert!((far.z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn aspect_scales_x_only() {
        let mut p = projector(ProjectionMode::Cpu);
        p.set_viewport(960, 480);
        assert!((p.aspect() - 2.0).abs() < EPS);
        let out = p.project(&Position::point(1.0, 1.0, 1.0)).unwrap();
        assert!((out.x - 2.0 * out.y).abs() < EPS);
    }

    #[test]
    fn zero_height_viewport_gives_aspect_one() {
        let mut p = projector(ProjectionMode::Gpu);
        p.set_viewport(800, 0);
        assert!((p.aspect() - 1.0).abs() < EPS);
    }

    #[test]
    fn points_at_or_behind_camera_are_not_projected() {
        let p = projector(ProjectionMode::Cpu);
        assert!(p.project(&Position::point(0.0, 0.0, 0.0)).is_none());
        assert!(p.project(&Position::point(1.0, 1.0, -2.0)).is_none());
    }

    #[test]
    fn fov_grows_with_speed() {
        let p = projector(ProjectionMode::Gpu);
        // top speed = sqrt(2 · 0.05² + 0.1²)
        let top = (2.0_f32 * 0.05 * 0.05 + 0.1 * 0.1).sqrt();
        let slow = p.fov_for_speed(0.0);
        let fast = p.fov_for_speed(top * 0.25);
        assert!((slow - 45.0).abs() < EPS);
        assert!((fast - (0.25 * 360.0 + 45.0)).abs() < 1e-3);
    }

    #[test]
    fn fov_is_capped() {
        let p = projector(ProjectionMode::Gpu);
        assert!((p.fov_for_speed(100.0) - 179.0).abs() < EPS);
        assert!(p.scale() > 0.0);
    }

    #[test]
    fn update_for_speed_reports_changes() {
        let mut p = projector(ProjectionMode::Gpu);
        assert!(!p.update_for_speed(0.0));
        assert!(p.update_for_speed(0.01));
        assert!(!p.update_for_speed(0.01));
        assert!(p.fov() > 45.0);
        assert!(p.uniforms().scale < scale_for_fov(45.0));
    }

    #[test]
    fn uniforms_reflect_state() {
        let mut p = projector(ProjectionMode::Gpu);
        p.set_viewport(640, 480);
        let u = p.uniforms();
        assert!((u.near - 0.1).abs() < EPS);
        assert!((u.far - 10000.0).abs() < EPS);
        assert!((u.scale - p.scale()).abs() < EPS);
        assert!((u.aspect - 640.0 / 480.0).abs() < EPS);
    }
}
