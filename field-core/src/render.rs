//! Geometry of one rendered frame.
//!
//! The simulator does not draw; it produces a [`RenderFrame`] of plain
//! dots and links that a host surface paints. This keeps the whole
//! pointer-proximity and connection logic testable without a GUI.

use crate::{config::Config, particle::ParticleField};
use glam::Vec2;

/// A filled circle to draw for one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub pos: Vec2,
    /// Rendered radius, already clamped strictly positive.
    pub radius: f32,
    /// Rendered opacity in `[0, 1]`.
    pub alpha: f32,
}

/// A connection line between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: Vec2,
    pub b: Vec2,
    /// Opacity, fading linearly with pair distance.
    pub alpha: f32,
}

/// Everything the host paints for one frame.
#[derive(Debug, Default)]
pub struct RenderFrame {
    pub dots: Vec<Dot>,
    pub links: Vec<Link>,
}

/// Builds the frame geometry for the current field state.
///
/// Dots: each particle's base alpha and current radius, boosted linearly
/// by pointer closeness inside `cfg.proximity_radius`. The rendered
/// radius is clamped to `cfg.min_render_radius` before it ever reaches a
/// drawing API; some surfaces reject non-positive circle radii.
///
/// Links: exactly one per unordered pair closer than
/// `cfg.connection_radius`, with alpha
/// `connection_alpha * (1 - d / connection_radius)`.
///
/// The pair scan is quadratic. That is fine at the default count of ~150
/// particles and a known scaling limit beyond it; thinning the links at
/// higher counts would change the visual, so it is not done here.
pub fn build_frame(field: &ParticleField, pointer: Option<Vec2>, cfg: &Config) -> RenderFrame {
    let mut dots = Vec::with_capacity(field.len());

    for p in &field.particles {
        let mut alpha = p.alpha;
        let mut radius = p.radius.max(cfg.min_render_radius);

        if let Some(m) = pointer {
            let d = (m - p.pos).length();
            if d < cfg.proximity_radius {
                let closeness = cfg.proximity_radius - d;
                alpha = (p.alpha + closeness / cfg.alpha_boost_scale).min(1.0);
                radius = (radius * (1.0 + closeness / cfg.radius_boost_scale))
                    .max(cfg.min_render_radius);
            }
        }

        dots.push(Dot {
            pos: p.pos,
            radius,
            alpha,
        });
    }

    let mut links = Vec::new();
    let r2 = cfg.connection_radius * cfg.connection_radius;
    let ps = &field.particles;

    for i in 0..ps.len() {
        for j in (i + 1)..ps.len() {
            let d2 = (ps[i].pos - ps[j].pos).length_squared();
            if d2 < r2 {
                let d = d2.sqrt();
                links.push(Link {
                    a: ps[i].pos,
                    b: ps[j].pos,
                    alpha: cfg.connection_alpha * (1.0 - d / cfg.connection_radius),
                });
            }
        }
    }

    RenderFrame { dots, links }
}
