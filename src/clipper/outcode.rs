//! Cohen-Sutherland region codes.
//!
//! Each point is classified against the four window boundaries:
//!
//! ```text
//!  1001 | 1000 | 1010
//! ------+------+------
//!  0001 | 0000 | 0010
//! ------+------+------
//!  0101 | 0100 | 0110
//! ```
//!
//! A code of zero means the point is inside the window or on its border.

use std::fmt;
use std::ops::{BitAnd, BitOr};

use crate::geometry::{Point, Rectangle};

/// A 4-bit set of violated window boundaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Outcode(u8);

impl Outcode {
    pub const INSIDE: Self = Self(0);
    pub const LEFT: Self = Self(1 << 0);
    pub const RIGHT: Self = Self(1 << 1);
    pub const BOTTOM: Self = Self(1 << 2);
    pub const TOP: Self = Self(1 << 3);

    /// Classifies `p` against `rect`.
    ///
    /// LEFT/RIGHT and BOTTOM/TOP are mutually exclusive pairs. Comparisons
    /// are strict, so a point on a boundary gets no bit for it.
    pub fn of(p: Point, rect: &Rectangle) -> Self {
        let mut code = 0;
        if p.x < rect.xmin {
            code |= Self::LEFT.0;
        } else if p.x > rect.xmax {
            code |= Self::RIGHT.0;
        }
        if p.y < rect.ymin {
            code |= Self::BOTTOM.0;
        } else if p.y > rect.ymax {
            code |= Self::TOP.0;
        }
        Self(code)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_inside(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    /// The first violated boundary in priority order left, right, bottom, top.
    pub fn first_violated(self) -> Option<Boundary> {
        Boundary::PRIORITY
            .into_iter()
            .find(|boundary| self.contains(boundary.outcode()))
    }
}

impl BitOr for Outcode {
    type Output = Self;
    fn bitor(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitAnd for Outcode {
    type Output = Self;
    fn bitand(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }
}

impl fmt::Display for Outcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}", self.0)
    }
}

/// One side of the clip window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// x = xmin
    Left,
    /// x = xmax
    Right,
    /// y = ymin
    Bottom,
    /// y = ymax
    Top,
}

impl Boundary {
    /// Order in which a multi-bit outcode is resolved.
    pub const PRIORITY: [Boundary; 4] = [
        Boundary::Left,
        Boundary::Right,
        Boundary::Bottom,
        Boundary::Top,
    ];

    pub fn outcode(self) -> Outcode {
        match self {
            Self::Left => Outcode::LEFT,
            Self::Right => Outcode::RIGHT,
            Self::Bottom => Outcode::BOTTOM,
            Self::Top => Outcode::TOP,
        }
    }

    /// Intersects the infinite line through `p0` and `p1` with this boundary.
    ///
    /// The coordinate along the boundary is pinned exactly; the other one is
    /// interpolated. An axis-parallel line tested against a parallel
    /// boundary divides by zero and yields a non-finite point, which the
    /// caller must check.
    pub fn intersect(self, p0: Point, p1: Point, rect: &Rectangle) -> Point {
        match self {
            Self::Left | Self::Right => {
                let x = if self == Self::Left { rect.xmin } else { rect.xmax };
                let y = p0.y + (p1.y - p0.y) / (p1.x - p0.x) * (x - p0.x);
                Point::new(x, y)
            }
            Self::Bottom | Self::Top => {
                let y = if self == Self::Bottom { rect.ymin } else { rect.ymax };
                let x = p0.x + (p1.x - p0.x) / (p1.y - p0.y) * (y - p0.y);
                Point::new(x, y)
            }
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Top => "top",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit() -> Rectangle {
        Rectangle::unit()
    }

    #[test]
    fn test_inside_and_on_boundary() {
        assert_eq!(Outcode::of(Point::new(0.5, 0.5), &unit()), Outcode::INSIDE);
        assert_eq!(Outcode::of(Point::new(0.0, 0.5), &unit()), Outcode::INSIDE);
        assert_eq!(Outcode::of(Point::new(1.0, 1.0), &unit()), Outcode::INSIDE);
    }

    #[test]
    fn test_regions() {
        let r = unit();
        assert_eq!(Outcode::of(Point::new(-1.0, 0.5), &r), Outcode::LEFT);
        assert_eq!(Outcode::of(Point::new(2.0, 0.5), &r), Outcode::RIGHT);
        assert_eq!(Outcode::of(Point::new(0.5, -1.0), &r), Outcode::BOTTOM);
        assert_eq!(Outcode::of(Point::new(0.5, 2.0), &r), Outcode::TOP);
        assert_eq!(
            Outcode::of(Point::new(-1.0, 2.0), &r),
            Outcode::LEFT | Outcode::TOP
        );
        assert_eq!(Outcode::of(Point::new(2.0, -1.0), &r).bits(), 0b0110);
    }

    #[test]
    fn test_priority_prefers_x_boundaries() {
        let code = Outcode::LEFT | Outcode::BOTTOM;
        assert_eq!(code.first_violated(), Some(Boundary::Left));
        let code = Outcode::RIGHT | Outcode::TOP;
        assert_eq!(code.first_violated(), Some(Boundary::Right));
        assert_eq!(Outcode::TOP.first_violated(), Some(Boundary::Top));
        assert_eq!(Outcode::INSIDE.first_violated(), None);
    }

    #[test]
    fn test_shared_bit() {
        let a = Outcode::TOP;
        let b = Outcode::TOP | Outcode::RIGHT;
        assert!(!(a & b).is_inside());
        assert!((Outcode::LEFT & Outcode::RIGHT).is_inside());
    }

    #[test]
    fn test_intersect_top() {
        let p = Boundary::Top.intersect(Point::new(0.5, 1.5), Point::new(1.0, 0.0), &unit());
        assert_relative_eq!(p.y, 1.0);
        assert_relative_eq!(p.x, 2.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_intersect_left() {
        let p = Boundary::Left.intersect(Point::new(-1.0, 0.0), Point::new(1.0, 1.0), &unit());
        assert_eq!(p, Point::new(0.0, 0.5));
    }

    #[test]
    fn test_parallel_intersection_is_not_finite() {
        let p = Boundary::Left.intersect(Point::new(0.5, -1.0), Point::new(0.5, 2.0), &unit());
        assert!(!p.is_finite());
    }

    #[test]
    fn test_display() {
        assert_eq!((Outcode::LEFT | Outcode::TOP).to_string(), "1001");
        assert_eq!(Boundary::Bottom.to_string(), "bottom");
    }
}
