//! Planar geometry engine for grid sketches.
//!
//! Turns raw vertex and rectangle lists into derived facts: convex hulls,
//! self/pairwise intersection status, containment hierarchies, and the area
//! covered by a union of rectangles.
//!
//! API Policy
//! - Every operation is a pure function over value inputs. Nothing is cached;
//!   callers re-invoke after their collections change.
//! - Arithmetic is plain `f64`. Inputs snapped to an integer grid behave
//!   deterministically; near-collinear float inputs carry no robustness
//!   guarantee.

pub mod api;
pub mod containment;
pub mod error;
pub mod geom2;
pub mod rand2;
pub mod sweep;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeomError;
pub use geom2::{Point, Rect};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::containment::{
        build_containment_tree, build_containment_tree_with, ContainmentCfg, ContainmentTree,
        NestedNode, ProbeMode, TaggedPolygon,
    };
    pub use crate::geom2::{
        convex_hull, is_self_intersecting, orientation, point_in_polygon, polygon_area,
        polygons_intersect, segments_intersect, Orientation, Point, Rect, ShapeKind,
    };
    pub use crate::sweep::rectangle_union_area;
    pub use crate::GeomError;
}
