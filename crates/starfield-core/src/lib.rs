//! Starfield simulation core.
//!
//! Everything here is CPU-side and deterministic for a given seed: star
//! positions, boundary recycling, the shared velocity and its deceleration
//! state machine, perspective projection math, and the per-star circle
//! meshes handed to a [`MeshCanvas`] each frame.

pub mod bounds;
pub mod canvas;
pub mod field;
pub mod mesh;
pub mod position;
pub mod projection;
pub mod random;
pub mod star;

pub use canvas::{DrawRecord, FrameRecorder, MeshCanvas};
pub use field::{DriveState, FieldSettings, FrameStats, Starfield};
pub use mesh::{CircleMesh, Vertex};
pub use position::Position;
pub use projection::{PerspectiveProjector, ProjectionUniforms, ProjectorSettings};
pub use random::RandomFieldGenerator;
pub use star::{Star, StarTick};
pub use starfield_config::ProjectionMode;
