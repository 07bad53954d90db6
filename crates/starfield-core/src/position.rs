//! Homogeneous 4-component positions.

/// A point in camera or clip space.
///
/// `w` is 1 for camera-space points. After a GPU-style projection it holds
/// the camera-space depth used for the perspective divide. Equality only
/// looks at `x`, `y`, `z`.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Position {
    pub const ORIGIN: Self = Self::point(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// A camera-space point (`w = 1`).
    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Euclidean length of `(x, y, z)`.
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// `(x, y, z)` scaled by `k`, `w` untouched.
    pub fn scaled(&self, k: f32) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k, self.w)
    }

    /// Move by `velocity · dt`. `w` is not integrated.
    pub fn advance(&mut self, velocity: &Position, dt: f32) {
        self.x += velocity.x * dt;
        self.y += velocity.y * dt;
        self.z += velocity.z * dt;
    }

    /// Rotate about the origin's x axis by `degrees` (right-handed).
    pub fn rotate_x(&mut self, degrees: f32) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let (y, z) = (self.y, self.z);
        self.y = y * cos - z * sin;
        self.z = y * sin + z * cos;
    }

    /// Rotate about the origin's y axis by `degrees` (right-handed).
    pub fn rotate_y(&mut self, degrees: f32) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let (x, z) = (self.x, self.z);
        self.x = x * cos + z * sin;
        self.z = -x * sin + z * cos;
    }

    /// Rotate about the origin's z axis by `degrees` (right-handed).
    pub fn rotate_z(&mut self, degrees: f32) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let (x, y) = (self.x, self.y);
        self.x = x * cos - y * sin;
        self.y = x * sin + y * cos;
    }

    /// Component-wise comparison of `(x, y, z)` within `eps`.
    pub fn approx_eq(&self, other: &Position, eps: f32) -> bool {
        (self.x - other.x).abs() < eps
            && (self.y - other.y).abs() < eps
            && (self.z - other.z).abs() < eps
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl From<[f32; 3]> for Position {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::point(x, y, z)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ {}, {}, {}, {} }}", self.x, self.y, self.z, self.w)
    }
}

// =============================================================================
// Tests
// =============================================================================
