use crate::{config::Config, types::Extent};
use glam::Vec2;
use rand::Rng;

/// A single animated point in the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Current radius; pulses inside a band around `rest_radius`.
    pub radius: f32,
    /// Radius at spawn; the center of the pulse band.
    pub rest_radius: f32,
    /// Base opacity, fixed at spawn.
    pub alpha: f32,
    /// Pulse direction: growing when `true`, shrinking otherwise.
    pub growing: bool,
}

/// The full particle set for one viewport-size session.
///
/// The set is created once per extent and mutated in place every frame;
/// a resize discards it and spawns a fresh one at the new dimensions.
#[derive(Debug)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
}

impl ParticleField {
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Spawns `cfg.count` particles uniformly over the extent.
    ///
    /// Positions are uniform in `[0, width) x [0, height)`, velocities in
    /// `[-speed_limit, speed_limit]` per component, radii in `radius_range`,
    /// alphas in `alpha_range`, with a random initial pulse direction.
    ///
    /// A zero-sized axis pins that coordinate to `0.0` instead of sampling,
    /// so a degenerate extent still yields a valid field.
    pub fn spawn(extent: Extent, cfg: &Config, rng: &mut impl Rng) -> Self {
        let particles = (0..cfg.count)
            .map(|_| {
                let x = if extent.width > 0.0 {
                    rng.random_range(0.0..extent.width)
                } else {
                    0.0
                };
                let y = if extent.height > 0.0 {
                    rng.random_range(0.0..extent.height)
                } else {
                    0.0
                };
                let radius = rng.random_range(cfg.radius_range.0..cfg.radius_range.1);
                let s = cfg.speed_limit;

                Particle {
                    pos: Vec2::new(x, y),
                    vel: Vec2::new(rng.random_range(-s..=s), rng.random_range(-s..=s)),
                    radius,
                    rest_radius: radius,
                    alpha: rng.random_range(cfg.alpha_range.0..cfg.alpha_range.1),
                    growing: rng.random_bool(0.5),
                }
            })
            .collect();

        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
