/// Viewport extent in surface coordinates.
///
/// The field lives in `[0, width] x [0, height]`. A zero-area extent is
/// valid input everywhere in this crate; it produces a degenerate field
/// (all positions pinned to the origin) rather than an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `true` when there is no drawable area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
