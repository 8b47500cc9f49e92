//! Per-frame update pipeline for the particle field.
//!
//! One frame of simulation is:
//! 1. [`motion_phase`] — Euler position step, pointer attraction, damping.
//! 2. [`pulse_phase`] — triangle-wave radius oscillation.
//! 3. [`bounce_phase`] — elastic reflection off the viewport edges.
//!
//! [`advance`] composes the three in that order. Each phase touches every
//! particle independently; no phase reads another particle's state.

use crate::{config::Config, particle::ParticleField, types::Extent};
use glam::Vec2;

/// Integrates positions and velocities for one frame.
///
/// For each particle:
///
/// 1. `pos += vel` (unit time step).
/// 2. If `pointer` is present, at a nonzero distance, and closer than
///    `cfg.attraction_radius`, add a pull of magnitude
///    `(attraction_radius - d) / cfg.attraction_scale` along the unit
///    vector toward the pointer. The scale keeps the pull tiny relative
///    to the drift speed, so motion stays ambient rather than reactive.
/// 3. Multiply the velocity by `cfg.damping`.
///
/// ### Parameters
/// - `field` - Particle set to mutate.
/// - `pointer` - Pointer position in field coordinates, if one is known.
/// - `cfg` - Global configuration.
pub fn motion_phase(field: &mut ParticleField, pointer: Option<Vec2>, cfg: &Config) {
    for p in &mut field.particles {
        p.pos += p.vel;

        if let Some(m) = pointer {
            let to_pointer = m - p.pos;
            let d = to_pointer.length();
            if d > 0.0 && d < cfg.attraction_radius {
                let pull = (cfg.attraction_radius - d) / cfg.attraction_scale;
                p.vel += to_pointer / d * pull;
            }
        }

        p.vel *= cfg.damping;
    }
}

/// Advances each particle's radius one step along its triangle wave.
///
/// The wave runs between `rest_radius * (1 - cfg.pulse_band)` and
/// `rest_radius * (1 + cfg.pulse_band)`, with the lower end never below
/// `cfg.radius_floor`. Hitting either end clamps the radius to it and
/// flips the direction.
pub fn pulse_phase(field: &mut ParticleField, cfg: &Config) {
    for p in &mut field.particles {
        let lo = (p.rest_radius * (1.0 - cfg.pulse_band)).max(cfg.radius_floor);
        let hi = (p.rest_radius * (1.0 + cfg.pulse_band)).max(lo);

        if p.growing {
            p.radius += cfg.pulse_step;
            if p.radius >= hi {
                p.radius = hi;
                p.growing = false;
            }
        } else {
            p.radius -= cfg.pulse_step;
            if p.radius <= lo {
                p.radius = lo;
                p.growing = true;
            }
        }
    }
}

/// Reflects particles off the viewport edges.
///
/// A coordinate past a boundary is clamped to it and the matching velocity
/// component is negated. The bounce is elastic: no speed is lost on the
/// reflected axis (damping happens in [`motion_phase`]).
pub fn bounce_phase(field: &mut ParticleField, extent: Extent) {
    for p in &mut field.particles {
        if p.pos.x > extent.width {
            p.pos.x = extent.width;
            p.vel.x = -p.vel.x;
        } else if p.pos.x < 0.0 {
            p.pos.x = 0.0;
            p.vel.x = -p.vel.x;
        }

        if p.pos.y > extent.height {
            p.pos.y = extent.height;
            p.vel.y = -p.vel.y;
        } else if p.pos.y < 0.0 {
            p.pos.y = 0.0;
            p.vel.y = -p.vel.y;
        }
    }
}

/// Runs one full simulation frame over the field.
pub fn advance(field: &mut ParticleField, extent: Extent, pointer: Option<Vec2>, cfg: &Config) {
    motion_phase(field, pointer, cfg);
    pulse_phase(field, cfg);
    bounce_phase(field, extent);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Particle;
    use rand::{SeedableRng, rngs::StdRng};

    fn one_particle(pos: Vec2, vel: Vec2) -> ParticleField {
        ParticleField::from_particles(vec![Particle {
            pos,
            vel,
            radius: 1.0,
            rest_radius: 1.0,
            alpha: 0.3,
            growing: true,
        }])
    }

    #[test]
    fn positions_stay_inside_the_extent() {
        let cfg = Config::default();
        let extent = Extent::new(400.0, 300.0);
        let mut rng = StdRng::seed_from_u64(9);
        let mut field = ParticleField::spawn(extent, &cfg, &mut rng);

        // Pointer near a corner so the pull drags particles toward an edge.
        let pointer = Some(Vec2::new(390.0, 290.0));
        for _ in 0..2000 {
            advance(&mut field, extent, pointer, &cfg);
        }

        for p in &field.particles {
            assert!(p.pos.x >= 0.0 && p.pos.x <= extent.width, "x out of bounds: {}", p.pos.x);
            assert!(p.pos.y >= 0.0 && p.pos.y <= extent.height, "y out of bounds: {}", p.pos.y);
        }
    }

    #[test]
    fn radius_never_drops_below_the_floor() {
        let cfg = Config::default();
        let extent = Extent::new(400.0, 300.0);
        let mut rng = StdRng::seed_from_u64(11);
        let mut field = ParticleField::spawn(extent, &cfg, &mut rng);

        for _ in 0..10_000 {
            pulse_phase(&mut field, &cfg);
            for p in &field.particles {
                assert!(p.radius >= cfg.radius_floor);
                assert!(p.radius <= p.rest_radius * (1.0 + cfg.pulse_band) + cfg.pulse_step);
            }
        }
    }

    #[test]
    fn pulse_flips_direction_at_both_band_ends() {
        let cfg = Config::default();
        let mut field = one_particle(Vec2::ZERO, Vec2::ZERO);
        let band_hi = 1.0 * (1.0 + cfg.pulse_band);
        let band_lo = 1.0 * (1.0 - cfg.pulse_band);

        // Grow until the top of the band is hit.
        while field.particles[0].growing {
            pulse_phase(&mut field, &cfg);
        }
        assert_eq!(field.particles[0].radius, band_hi);

        // Shrink back down to the bottom.
        while !field.particles[0].growing {
            pulse_phase(&mut field, &cfg);
        }
        assert_eq!(field.particles[0].radius, band_lo);
    }

    #[test]
    fn right_edge_reflection_clamps_and_negates_vx() {
        let mut cfg = Config::default();
        cfg.damping = 1.0; // isolate the reflection law
        let extent = Extent::new(100.0, 100.0);

        let mut field = one_particle(Vec2::new(99.5, 50.0), Vec2::new(1.0, 0.0));
        advance(&mut field, extent, None, &cfg);

        let p = &field.particles[0];
        assert_eq!(p.pos.x, 100.0);
        assert_eq!(p.vel.x, -1.0);
        assert_eq!(p.vel.y, 0.0);
    }

    #[test]
    fn pointer_outside_attraction_radius_leaves_velocity_untouched() {
        let mut cfg = Config::default();
        cfg.damping = 1.0;
        let extent = Extent::new(1000.0, 1000.0);

        let mut field = one_particle(Vec2::new(50.0, 50.0), Vec2::new(0.5, -0.25));
        let vel_before = field.particles[0].vel;
        advance(&mut field, extent, Some(Vec2::new(900.0, 900.0)), &cfg);

        assert_eq!(field.particles[0].vel, vel_before);
    }

    #[test]
    fn pointer_inside_attraction_radius_pulls_toward_it() {
        let mut cfg = Config::default();
        cfg.damping = 1.0;
        let extent = Extent::new(1000.0, 1000.0);

        // At rest, 100 units left of the pointer: the pull is purely +x.
        let mut field = one_particle(Vec2::new(400.0, 500.0), Vec2::ZERO);
        advance(&mut field, extent, Some(Vec2::new(500.0, 500.0)), &cfg);

        let p = &field.particles[0];
        let expected = (cfg.attraction_radius - 100.0) / cfg.attraction_scale;
        assert!((p.vel.x - expected).abs() < 1e-6);
        assert_eq!(p.vel.y, 0.0);
    }

    #[test]
    fn particle_sitting_on_the_pointer_feels_no_pull() {
        let cfg = Config::default();
        let extent = Extent::new(100.0, 100.0);

        let mut field = one_particle(Vec2::new(50.0, 50.0), Vec2::ZERO);
        advance(&mut field, extent, Some(Vec2::new(50.0, 50.0)), &cfg);

        assert_eq!(field.particles[0].vel, Vec2::ZERO);
    }

    #[test]
    fn drifting_particle_bounces_once_within_sixty_steps() {
        let cfg = Config::default();
        let extent = Extent::new(100.0, 100.0);

        let mut field = one_particle(Vec2::new(50.0, 50.0), Vec2::new(1.0, 0.0));
        // Pointer far outside the attraction radius.
        let pointer = Some(Vec2::new(1000.0, 1000.0));

        let mut flips = 0;
        let mut hit_right_edge = false;
        let mut prev_sign = field.particles[0].vel.x.signum();

        for _ in 0..60 {
            advance(&mut field, extent, pointer, &cfg);
            let p = &field.particles[0];
            if p.pos.x == extent.width {
                hit_right_edge = true;
            }
            let sign = p.vel.x.signum();
            if sign != prev_sign {
                flips += 1;
                prev_sign = sign;
            }
        }

        assert!(hit_right_edge, "particle never reached the right edge");
        assert_eq!(flips, 1, "velocity sign should flip exactly once");
        let p = &field.particles[0];
        assert!(p.pos.x < extent.width, "x should decrease after the bounce");
        assert!(p.vel.x < 0.0);
    }

    #[test]
    fn advance_on_degenerate_extent_does_not_panic() {
        let cfg = Config::default();
        let extent = Extent::new(0.0, 0.0);
        let mut rng = StdRng::seed_from_u64(5);
        let mut field = ParticleField::spawn(extent, &cfg, &mut rng);

        for _ in 0..10 {
            advance(&mut field, extent, Some(Vec2::ZERO), &cfg);
        }

        for p in &field.particles {
            assert_eq!(p.pos, Vec2::ZERO);
        }
    }
}
