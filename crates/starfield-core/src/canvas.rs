//! The seam between the simulation and whatever draws it.

use crate::mesh::CircleMesh;
use crate::position::Position;

/// Receives one star mesh per draw.
///
/// `slot` identifies the star's buffers and is stable for the star's
/// lifetime. Implementations upload the vertices in place and issue an
/// indexed draw of the mesh's triangles.
pub trait MeshCanvas {
    fn draw_mesh(&mut self, slot: usize, mesh: &CircleMesh);
}

/// What a [`FrameRecorder`] saw for one draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRecord {
    pub slot: usize,
    pub vertex_count: usize,
    pub index_count: usize,
    /// Position of vertex 0 as handed over.
    pub first_vertex: Position,
}

/// A canvas that only remembers what it was asked to draw. Used for
/// headless runs and tests.
#[derive(Debug, Default)]
pub struct FrameRecorder {
    draws: Vec<DrawRecord>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draws(&self) -> &[DrawRecord] {
        &self.draws
    }

    /// Total triangles across all recorded draws.
    pub fn triangle_count(&self) -> usize {
        self.draws.iter().map(|d| d.index_count / 3).sum()
    }

    pub fn clear(&mut self) {
        self.draws.clear();
    }
}

impl MeshCanvas for FrameRecorder {
    fn draw_mesh(&mut self, slot: usize, mesh: &CircleMesh) {
        self.draws.push(DrawRecord {
            slot,
            vertex_count: mesh.vertices().len(),
            index_count: mesh.indices().len(),
            first_vertex: mesh
                .vertices()
                .first()
                .map(|v| v.position)
                .unwrap_or_default(),
        });
    }
}
