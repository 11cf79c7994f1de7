//! Axis-aligned rectangle geometry shared by the collision scan.

/// Axis-aligned rectangle in canvas coordinates (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// AABB overlap test. Non-strict on the separating side, so rectangles
    /// whose edges exactly touch count as overlapping. Exact float
    /// comparisons, no epsilon; the formula is part of the game's observable
    /// behavior and must stay deterministic.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.x + self.w < other.x
            || self.x > other.x + other.w
            || self.y + self.h < other.y
            || self.y > other.y + other.h)
    }
}
