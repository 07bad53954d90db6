//! Seeded random source for spawn and respawn coordinates.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bounds::{FIELD_HALF_XY, FIELD_HALF_Z, RESPAWN_MIN};

/// Lower bound of each pastel color channel.
const PASTEL_FLOOR: f32 = 0.6;

/// Deterministic generator for star coordinates and colors.
///
/// Two generators built from the same seed produce the same sequence for
/// the same order of calls.
#[derive(Debug, Clone)]
pub struct RandomFieldGenerator {
    seed: u64,
    rng: StdRng,
}

impl RandomFieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator with a seed drawn from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform in `[-2.5, 2.5]`.
    pub fn spawn_xy(&mut self) -> f32 {
        self.rng.gen_range(-FIELD_HALF_XY..=FIELD_HALF_XY)
    }

    /// Uniform in `[1.0, 2.5]`. The caller picks the sign.
    pub fn respawn_xy_magnitude(&mut self) -> f32 {
        self.rng.gen_range(RESPAWN_MIN..=FIELD_HALF_XY)
    }

    /// Uniform in `[-5, 5]`.
    pub fn spawn_z(&mut self) -> f32 {
        self.rng.gen_range(-FIELD_HALF_Z..=FIELD_HALF_Z)
    }

    /// Uniform in `[1.0, 5.0]`. The caller picks the sign.
    pub fn respawn_z_magnitude(&mut self) -> f32 {
        self.rng.gen_range(RESPAWN_MIN..=FIELD_HALF_Z)
    }

    /// Uniform in `[0, 1]`.
    pub fn color_jitter(&mut self) -> f32 {
        self.rng.gen_range(0.0..=1.0)
    }

    /// Light, desaturated RGB with every channel in `[0.6, 1.0]`.
    pub fn pastel_color(&mut self) -> [f32; 3] {
        let mut channel = || PASTEL_FLOOR + (1.0 - PASTEL_FLOOR) * self.color_jitter();
        [channel(), channel(), channel()]
    }
}
