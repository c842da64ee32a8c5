//! Geometric primitives for arc centers.
//!
//! # Coordinate System
//!
//! Centers are described in the same frame as SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! This only describes where `x` and `y` point. How a renderer maps them to
//! its own canvas is up to that renderer.

/// A 2D point in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use diagram_arc::geometry::Point;
/// let center = Point::new(10.0, 20.0);
/// assert_eq!(center.x(), 10.0);
/// assert_eq!(center.with_y(5.0).y(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    /// Checks if both coordinates are zero
    pub fn is_origin(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_origin() {
        assert!(Point::default().is_origin());
        assert!(!Point::new(0.0, 1.0).is_origin());
    }

    #[test]
    fn test_with_coordinates() {
        let p = Point::default().with_x(3.0).with_y(-4.0);
        assert_eq!(p, Point::new(3.0, -4.0));
    }
}
