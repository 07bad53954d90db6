//! Star rendering: one vertex and index buffer per star, a shared
//! projection uniform, and a pipeline whose vertex stage either projects
//! camera-space vertices or passes pre-projected ones through.

mod buffers;
mod pipeline;
mod shader;
mod types;

pub use buffers::*;
pub use pipeline::*;
pub use types::*;
