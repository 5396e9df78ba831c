use super::point::Point;
use crate::error::ClipError;

/// An axis-aligned clip window.
///
/// Built from a lower-left corner plus a size, so `xmin <= xmax` and
/// `ymin <= ymax` always hold for a validated rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Rectangle {
    /// Creates a window from its lower-left corner, width and height.
    ///
    /// # Errors
    /// Returns [`ClipError`] if the corner is not finite or the size is
    /// negative or not finite.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, ClipError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ClipError::NonFiniteCoordinate { x, y });
        }
        let valid_size = |v: f64| v.is_finite() && v >= 0.0;
        if !valid_size(width) || !valid_size(height) {
            return Err(ClipError::InvalidRectangle { width, height });
        }
        Ok(Self {
            xmin: x,
            xmax: x + width,
            ymin: y,
            ymax: y + height,
        })
    }

    /// The unit window `[0, 1] x [0, 1]`.
    pub const fn unit() -> Self {
        Self {
            xmin: 0.0,
            xmax: 1.0,
            ymin: 0.0,
            ymax: 1.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Boundary-inclusive containment test.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    /// Corners counter-clockwise from the lower-left one.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.xmin, self.ymin),
            Point::new(self.xmax, self.ymin),
            Point::new(self.xmax, self.ymax),
            Point::new(self.xmin, self.ymax),
        ]
    }
}
