//! Curated surface for callers (view layers, the CLI, experiments).
//!
//! One import path per operation; prefer these re-exports over reaching into
//! submodules.

// Primitives and measures
pub use crate::geom2::{
    on_segment, orientation, point_in_polygon, polygon_area, polygon_perimeter,
    segments_intersect, signed_area, Orientation, Point, Rect, ShapeKind,
};
// Hull
pub use crate::geom2::{convex_hull, hull_membership};
// Validation
pub use crate::geom2::{is_self_intersecting, polygons_intersect, validate_against, ValidationReport};
// Containment
pub use crate::containment::{
    build_containment_tree, build_containment_tree_with, ContainmentCfg, ContainmentNode,
    ContainmentTree, NestedNode, ProbeMode, TaggedPolygon, ROOT_ID,
};
// Rectangle union
pub use crate::sweep::rectangle_union_area;
// Random scenes
pub use crate::rand2::{
    draw_points, draw_rects, draw_simple_polygon, PointCloudCfg, PolygonCfg, RectCfg, ReplayToken,
};
pub use crate::error::GeomError;
