//! Planar warehouse coordinates.
//!
//! Layout coordinates are metres on the warehouse floor plan, so plain
//! Euclidean geometry in `f64` is used throughout.  `f64` keeps interpolated
//! endpoints bit-exact with the input waypoints (`lerp(a, b, 1.0) == b` is
//! enforced explicitly, not left to rounding).

/// A point on the warehouse floor plan.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation from `self` (t = 0) to `other` (t = 1).
    ///
    /// The endpoints are returned exactly, without floating-point drift.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        if t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return other;
        }
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Euclidean distance in metres.
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
