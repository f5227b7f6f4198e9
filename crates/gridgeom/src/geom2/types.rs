//! Basic planar value types.
//!
//! - `Point`: nalgebra point, exact `==`.
//! - `Rect`: axis-aligned rectangle `[x1, x2] × [y1, y2]`.
//! - `Orientation`: turn direction of an ordered point triple.
//! - `ShapeKind`: display name derived from a vertex count.

use std::fmt;

use nalgebra::Point2;

/// A point on the plane. Grid callers supply integer-valued coordinates.
pub type Point = Point2<f64>;

/// Turn direction of an ordered triple `(p, q, r)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Axis-aligned rectangle.
///
/// Invariant (caller-maintained): `x1 <= x2` and `y1 <= y2`. Use
/// [`Rect::from_corners`] to build one from arbitrary corners.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    /// Construct without normalization.
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Normalized rectangle spanned by two opposite corners in any order.
    #[inline]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x1: a.x.min(b.x),
            y1: a.y.min(b.y),
            x2: a.x.max(b.x),
            y2: a.y.max(b.y),
        }
    }

    /// Same rectangle with `x1 <= x2` and `y1 <= y2` enforced.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::from_corners(Point::new(self.x1, self.y1), Point::new(self.x2, self.y2))
    }

    #[inline]
    pub fn is_normalized(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Area of a normalized rectangle.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

/// Human-facing name of a polygon by its number of sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    Triangle,
    Quadrilateral,
    Pentagon,
    Hexagon,
    /// Any other side count (including degenerate counts below 3).
    Polygon(usize),
}

impl ShapeKind {
    pub fn from_vertex_count(n: usize) -> Self {
        match n {
            3 => ShapeKind::Triangle,
            4 => ShapeKind::Quadrilateral,
            5 => ShapeKind::Pentagon,
            6 => ShapeKind::Hexagon,
            n => ShapeKind::Polygon(n),
        }
    }

    #[inline]
    pub fn sides(&self) -> usize {
        match *self {
            ShapeKind::Triangle => 3,
            ShapeKind::Quadrilateral => 4,
            ShapeKind::Pentagon => 5,
            ShapeKind::Hexagon => 6,
            ShapeKind::Polygon(n) => n,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Triangle => f.write_str("Triangle"),
            ShapeKind::Quadrilateral => f.write_str("Quadrilateral"),
            ShapeKind::Pentagon => f.write_str("Pentagon"),
            ShapeKind::Hexagon => f.write_str("Hexagon"),
            ShapeKind::Polygon(n) => write!(f, "Polygon ({n} sides)"),
        }
    }
}
