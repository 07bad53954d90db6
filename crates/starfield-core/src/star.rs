//! A single star: a camera-space center plus the mesh that draws it.

use starfield_config::ProjectionMode;
use tracing::trace;

use crate::bounds::{FIELD_HALF_XY, FIELD_HALF_Z};
use crate::canvas::MeshCanvas;
use crate::mesh::CircleMesh;
use crate::position::Position;
use crate::projection::PerspectiveProjector;
use crate::random::RandomFieldGenerator;

/// Outcome of one [`Star::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StarTick {
    /// At least one axis was wrapped to the opposite side of the field.
    pub recycled: bool,
    /// The mesh was handed to the canvas.
    pub drawn: bool,
}

#[derive(Debug, Clone)]
pub struct Star {
    slot: usize,
    center: Position,
    color: [f32; 3],
    mesh: CircleMesh,
}

impl Star {
    pub fn new(slot: usize, center: Position, radius: f32, color: [f32; 3], resolution: u32) -> Self {
        Self {
            slot,
            center,
            color,
            mesh: CircleMesh::new(resolution, center, radius, color),
        }
    }

    /// A star somewhere in the field with a pastel color.
    pub fn spawn(
        slot: usize,
        rng: &mut RandomFieldGenerator,
        radius: f32,
        resolution: u32,
    ) -> Self {
        let center = Position::point(rng.spawn_xy(), rng.spawn_xy(), rng.spawn_z());
        let color = rng.pastel_color();
        Self::new(slot, center, radius, color, resolution)
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn center(&self) -> Position {
        self.center
    }

    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    pub fn radius(&self) -> f32 {
        self.mesh.radius()
    }

    /// Wrap any axis that left the field to the opposite side.
    ///
    /// `|x| >= 2.5` and `|y| >= 2.5` respawn at a magnitude in `[1, 2.5]`
    /// with the opposite sign. `z` past either end respawns at a magnitude
    /// in `[1, 5]` on the other side. Returns `true` if anything moved.
    pub fn recycle(&mut self, rng: &mut RandomFieldGenerator) -> bool {
        let mut recycled = false;

        if self.center.x.abs() >= FIELD_HALF_XY {
            self.center.x = -self.center.x.signum() * rng.respawn_xy_magnitude();
            recycled = true;
        }
        if self.center.y.abs() >= FIELD_HALF_XY {
            self.center.y = -self.center.y.signum() * rng.respawn_xy_magnitude();
            recycled = true;
        }
        if self.center.z < -FIELD_HALF_Z {
            self.center.z = rng.respawn_z_magnitude();
            recycled = true;
        } else if self.center.z > FIELD_HALF_Z {
            self.center.z = -rng.respawn_z_magnitude();
            recycled = true;
        }

        if recycled {
            trace!(slot = self.slot, center = %self.center, "Star recycled");
        }
        recycled
    }

    /// Recycle, integrate, then rebuild and draw the mesh.
    ///
    /// In [`ProjectionMode::Cpu`] the mesh is projected here and a star in
    /// front of the near plane is not drawn. In [`ProjectionMode::Gpu`] the
    /// camera-space mesh is always drawn and the shader projects it.
    pub fn tick(
        &mut self,
        dt: f32,
        velocity: &Position,
        rng: &mut RandomFieldGenerator,
        projector: &PerspectiveProjector,
        canvas: &mut dyn MeshCanvas,
    ) -> StarTick {
        let recycled = self.recycle(rng);
        self.center.advance(velocity, dt);
        self.mesh.refresh(self.center, self.color);

        let drawn = match projector.mode() {
            ProjectionMode::Gpu => true,
            ProjectionMode::Cpu => {
                self.center.z >= projector.near() && self.mesh.project(projector)
            }
        };
        if drawn {
            self.mesh.draw(self.slot, canvas);
        }

        StarTick { recycled, drawn }
    }

    pub fn rotate_x(&mut self, degrees: f32) {
        self.center.rotate_x(degrees);
    }

    pub fn rotate_y(&mut self, degrees: f32) {
        self.center.rotate_y(degrees);
    }

    pub fn rotate_z(&mut self, degrees: f32) {
        self.center.rotate_z(degrees);
    }

    /// Change the radius by `dr`; rejected if it would reach zero.
    pub fn resize(&mut self, dr: f32) -> bool {
        self.mesh.resize(dr)
    }
}

// =============================================================================
// Tests
// =============================================================================
