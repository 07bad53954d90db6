//! The star population, its shared velocity, and the deceleration state
//! machine.

use starfield_config::StarfieldConfig;
use tracing::{debug, info, trace};

use crate::canvas::MeshCanvas;
use crate::position::Position;
use crate::projection::{PerspectiveProjector, ProjectorSettings};
use crate::random::RandomFieldGenerator;
use crate::star::Star;

/// Whether the field is coasting under the user's control or braking
/// towards a full stop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DriveState {
    #[default]
    Cruising,
    Decelerating,
}

/// Construction parameters for a [`Starfield`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSettings {
    pub star_count: usize,
    pub star_radius: f32,
    pub resolution: u32,
    pub initial_velocity: Position,
    /// `None` draws a seed from entropy.
    pub seed: Option<u64>,
    /// Per-tick velocity multiplier while decelerating.
    pub deceleration_decay: f32,
    /// Speed below which deceleration snaps to a full stop.
    pub deceleration_threshold: f32,
}

impl FieldSettings {
    pub fn from_config(config: &StarfieldConfig) -> Self {
        Self {
            star_count: config.field.star_count as usize,
            star_radius: config.field.star_radius,
            resolution: config.field.resolution,
            initial_velocity: Position::from(config.field.initial_velocity),
            seed: config.field.seed,
            deceleration_decay: config.controls.deceleration_decay,
            deceleration_threshold: config.controls.deceleration_threshold,
        }
    }
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self::from_config(&StarfieldConfig::default())
    }
}

/// Per-frame counters returned by [`Starfield::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub drawn: usize,
    pub culled: usize,
    pub recycled: usize,
}

impl FrameStats {
    pub fn accumulate(&mut self, other: &FrameStats) {
        self.drawn += other.drawn;
        self.culled += other.culled;
        self.recycled += other.recycled;
    }
}

pub struct Starfield {
    stars: Vec<Star>,
    velocity: Position,
    state: DriveState,
    rng: RandomFieldGenerator,
    projector: PerspectiveProjector,
    decay: f32,
    threshold: f32,
}

impl Starfield {
    pub fn new(settings: &FieldSettings, projector: PerspectiveProjector) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => RandomFieldGenerator::new(seed),
            None => RandomFieldGenerator::from_entropy(),
        };

        let stars = (0..settings.star_count)
            .map(|slot| Star::spawn(slot, &mut rng, settings.star_radius, settings.resolution))
            .collect();

        info!(
            stars = settings.star_count,
            seed = rng.seed(),
            mode = ?projector.mode(),
            "Starfield created"
        );

        Self {
            stars,
            velocity: settings.initial_velocity,
            state: DriveState::Cruising,
            rng,
            projector,
            decay: settings.deceleration_decay,
            threshold: settings.deceleration_threshold,
        }
    }

    /// Build the field and its projector from a loaded config.
    pub fn from_config(config: &StarfieldConfig) -> Self {
        let mut projector =
            PerspectiveProjector::new(ProjectorSettings::from_config(config), 1.0);
        projector.set_viewport(config.window.width, config.window.height);
        Self::new(&FieldSettings::from_config(config), projector)
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn velocity(&self) -> Position {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Position) {
        self.velocity = velocity;
    }

    pub fn speed(&self) -> f32 {
        self.velocity.magnitude()
    }

    pub fn state(&self) -> DriveState {
        self.state
    }

    pub fn projector(&self) -> &PerspectiveProjector {
        &self.projector
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.projector.set_viewport(width, height);
        debug!(width, height, aspect = self.projector.aspect(), "Viewport changed");
    }

    /// Start braking. Does nothing if already decelerating.
    pub fn begin_deceleration(&mut self) {
        if self.state == DriveState::Cruising {
            self.state = DriveState::Decelerating;
            debug!(speed = self.speed(), "Cruising -> Decelerating");
        }
    }

    /// One step of the drive state machine.
    ///
    /// While decelerating, the velocity is multiplied by the decay factor
    /// until its magnitude drops below the threshold, at which point it is
    /// zeroed and the field returns to cruising.
    pub fn advance_drive(&mut self) {
        if self.state != DriveState::Decelerating {
            return;
        }
        if self.speed() >= self.threshold {
            self.velocity = self.velocity.scaled(self.decay);
        } else {
            self.velocity = Position::point(0.0, 0.0, 0.0);
            self.state = DriveState::Cruising;
            debug!("Decelerating -> Cruising");
        }
    }

    /// Advance one frame and draw every star into `canvas`.
    pub fn tick(&mut self, dt: f32, canvas: &mut dyn MeshCanvas) -> FrameStats {
        self.advance_drive();
        if self.projector.update_for_speed(self.speed()) {
            trace!(fov = self.projector.fov(), "Field of view updated");
        }

        let velocity = self.velocity;
        let mut stats = FrameStats::default();
        for star in &mut self.stars {
            let tick = star.tick(dt, &velocity, &mut self.rng, &self.projector, canvas);
            if tick.drawn {
                stats.drawn += 1;
            } else {
                stats.culled += 1;
            }
            if tick.recycled {
                stats.recycled += 1;
            }
        }

        trace!(
            drawn = stats.drawn,
            culled = stats.culled,
            recycled = stats.recycled,
            "Field ticked"
        );
        stats
    }

    pub fn rotate_around_x(&mut self, degrees: f32) {
        self.stars.iter_mut().for_each(|s| s.rotate_x(degrees));
    }

    pub fn rotate_around_y(&mut self, degrees: f32) {
        self.stars.iter_mut().for_each(|s| s.rotate_y(degrees));
    }

    pub fn rotate_around_z(&mut self, degrees: f32) {
        self.stars.iter_mut().for_each(|s| s.rotate_z(degrees));
    }

    /// Resize every star by `dr`. Returns how many accepted the change.
    pub fn resize_all(&mut self, dr: f32) -> usize {
        self.stars
            .iter_mut()
            .map(|s| s.resize(dr))
            .filter(|&accepted| accepted)
            .count()
    }
}

#[cfg(test)]
mod tests;
