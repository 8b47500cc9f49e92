/// Global configuration for the particle field.
///
/// The defaults reproduce the reference look: a slow, low-opacity drift
/// with a barely perceptible pull toward the pointer.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Number of particles in the field.
    pub count: usize,

    /// Spawn radius range `[min, max)`.
    pub radius_range: (f32, f32),
    /// Spawn velocity components are uniform in `[-speed_limit, speed_limit]`.
    pub speed_limit: f32,
    /// Spawn base-opacity range `[min, max)`.
    pub alpha_range: (f32, f32),

    /// Pointer pull applies within this distance.
    pub attraction_radius: f32,
    /// Divisor for the pull magnitude; larger means gentler.
    pub attraction_scale: f32,
    /// Per-frame velocity multiplier, just under 1.
    pub damping: f32,

    /// Radius change per frame while pulsing.
    pub pulse_step: f32,
    /// Half-width of the pulse band as a fraction of the rest radius.
    pub pulse_band: f32,
    /// Hard lower bound for any particle radius.
    pub radius_floor: f32,

    /// Pointer proximity boosts rendered alpha and radius within this distance.
    pub proximity_radius: f32,
    /// Divisor for the alpha boost; larger means subtler.
    pub alpha_boost_scale: f32,
    /// Divisor for the radius boost; larger means subtler.
    pub radius_boost_scale: f32,

    /// Particles closer than this are joined by a link.
    pub connection_radius: f32,
    /// Link opacity at zero distance; fades linearly to nothing at the radius.
    pub connection_alpha: f32,

    /// Lower bound for any radius handed to a drawing API.
    pub min_render_radius: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: 150,
            radius_range: (0.5, 2.5),
            speed_limit: 0.01,
            alpha_range: (0.1, 0.6),
            attraction_radius: 300.0,
            attraction_scale: 150_000.0,
            damping: 0.9995,
            pulse_step: 0.0005,
            pulse_band: 0.2,
            radius_floor: 0.5,
            proximity_radius: 150.0,
            alpha_boost_scale: 500.0,
            radius_boost_scale: 300.0,
            connection_radius: 100.0,
            connection_alpha: 0.15,
            min_render_radius: 0.1,
        }
    }
}
