//! Planar primitives, measures, hull, and polygon validation.
//!
//! Purpose
//! - Provide the leaf predicates (orientation, segment intersection,
//!   point-in-polygon) and the algorithms built directly on them.
//! - Keep every function a plain transform of borrowed slices into fresh
//!   outputs; inputs are never mutated.
//!
//! Conventions
//! - `Orientation::CounterClockwise` means the cross product of `(q - p)` and
//!   `(r - q)` is positive. All predicates share this convention.
//! - Polygons are vertex slices in drawing order with an implicit closing edge.
//! - Equality of points is exact value equality.
//!
//! Code cross-refs: `crate::containment` (uses `point_in_polygon` and
//! `polygon_area`), `crate::sweep` (independent).

mod hull;
mod measure;
mod predicates;
mod types;
mod validate;

pub use hull::{convex_hull, hull_membership};
pub use measure::{polygon_area, polygon_perimeter, signed_area};
pub use predicates::{on_segment, orientation, point_in_polygon, segments_intersect};
pub use types::{Orientation, Point, Rect, ShapeKind};
pub use validate::{
    is_self_intersecting, polygons_intersect, validate_against, ValidationReport,
};

#[cfg(test)]
mod tests;
