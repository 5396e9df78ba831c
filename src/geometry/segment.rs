use approx::AbsDiffEq;

use super::point::Point;

/// An ordered pair of endpoints.
///
/// Copying a segment copies both points by value, so a snapshot taken from
/// a working segment never aliases it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub const fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            start: Point::new(x0, y0),
            end: Point::new(x1, y1),
        }
    }

    /// The same segment walked from `end` to `start`.
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Returns `(x0, y0, x1, y1)`.
    pub fn coords(&self) -> (f64, f64, f64, f64) {
        (self.start.x, self.start.y, self.end.x, self.end.y)
    }

    /// Compares the endpoints as an unordered pair within `epsilon`.
    pub fn same_points_as(&self, other: &Self, epsilon: f64) -> bool {
        let forward = self.start.abs_diff_eq(&other.start, epsilon)
            && self.end.abs_diff_eq(&other.end, epsilon);
        let backward = self.start.abs_diff_eq(&other.end, epsilon)
            && self.end.abs_diff_eq(&other.start, epsilon);
        forward || backward
    }
}
