//! Extents of the simulated volume in camera space.
//!
//! Stars live in a box of half-width [`FIELD_HALF_XY`] on x/y and
//! half-depth [`FIELD_HALF_Z`] on z. A star leaving the box is respawned
//! on the opposite side at least [`RESPAWN_MIN`] away from the origin.

/// Half-width of the field on the x and y axes.
pub const FIELD_HALF_XY: f32 = 2.5;

/// Half-depth of the field on the z axis.
pub const FIELD_HALF_Z: f32 = 5.0;

/// Smallest distance from the origin a respawned coordinate can have.
pub const RESPAWN_MIN: f32 = 1.0;
