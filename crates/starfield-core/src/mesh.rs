//! Filled N-gon approximation of a circle.

use crate::canvas::MeshCanvas;
use crate::position::Position;
use crate::projection::PerspectiveProjector;

/// Fewest sides that still form a closed polygon.
pub const MIN_RESOLUTION: u32 = 3;

/// One vertex as uploaded to the GPU: position then RGBA color.
///
/// Layout: 8 × f32 = 32 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: Position,
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(position: Position, [r, g, b]: [f32; 3]) -> Self {
        Self {
            position,
            color: [r, g, b, 1.0],
        }
    }
}

/// Vertex and index data for one star.
///
/// The vertex count is fixed at construction and the index list is built
/// once; later calls only rewrite vertex positions and colors.
#[derive(Debug, Clone)]
pub struct CircleMesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    radius: f32,
}

impl CircleMesh {
    pub fn new(resolution: u32, center: Position, radius: f32, color: [f32; 3]) -> Self {
        let n = resolution.max(MIN_RESOLUTION);
        let indices = (0..n - 2).flat_map(|i| [0, i + 1, i + 2]).collect();

        let mut mesh = Self {
            vertices: vec![Vertex::default(); n as usize],
            indices,
            radius: if radius > 0.0 { radius } else { f32::EPSILON },
        };
        mesh.refresh(center, color);
        mesh
    }

    pub fn resolution(&self) -> usize {
        self.vertices.len()
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Lay the vertices out on a circle of `radius` around `center`, in the
    /// center's XY plane. Vertex `i` sits at `360° · i / N`.
    pub fn generate(&mut self, center: Position, radius: f32) {
        let n = self.vertices.len() as f32;
        for (i, vertex) in self.vertices.iter_mut().enumerate() {
            let (sin, cos) = (std::f32::consts::TAU * i as f32 / n).sin_cos();
            vertex.position = Position::new(
                center.x + radius * cos,
                center.y + radius * sin,
                center.z,
                center.w,
            );
        }
    }

    /// Regenerate positions at the current radius and repaint every vertex.
    pub fn refresh(&mut self, center: Position, [r, g, b]: [f32; 3]) {
        self.generate(center, self.radius);
        for vertex in &mut self.vertices {
            vertex.color = [r, g, b, 1.0];
        }
    }

    /// Grow or shrink by `dr`. A change that would leave the radius at or
    /// below zero is rejected and `false` is returned.
    pub fn resize(&mut self, dr: f32) -> bool {
        let radius = self.radius + dr;
        if radius <= 0.0 || !radius.is_finite() {
            return false;
        }
        self.radius = radius;
        true
    }

    /// Replace every vertex position with its projection.
    ///
    /// Returns `false`, leaving the mesh untouched, if any vertex cannot be
    /// projected.
    pub fn project(&mut self, projector: &PerspectiveProjector) -> bool {
        let projected: Option<Vec<Position>> = self
            .vertices
            .iter()
            .map(|v| projector.project(&v.position))
            .collect();

        match projected {
            Some(positions) => {
                for (vertex, position) in self.vertices.iter_mut().zip(positions) {
                    vertex.position = position;
                }
                true
            }
            None => false,
        }
    }

    pub fn draw(&self, slot: usize, canvas: &mut dyn MeshCanvas) {
        canvas.draw_mesh(slot, self);
    }
}

// =============================================================================
// Tests
// =============================================================================
