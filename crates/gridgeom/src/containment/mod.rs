//! Containment forest over a set of polygons.
//!
//! Purpose
//! - Elect, for every polygon, the smallest-area polygon enclosing it and
//!   expose the result as an arena tree rooted at the unbounded plane (id 0).
//!
//! Conventions
//! - The default probe tests only a polygon's first vertex. A non-convex
//!   polygon whose first vertex escapes an otherwise enclosing region is
//!   misclassified; `ProbeMode::AllVertices` is the stricter opt-in.
//! - Equal-area candidates resolve to the earliest in input order.
//! - Parent cycles (e.g. two identical polygons, each probing inside the
//!   other) are broken by re-electing the earliest cycle member among
//!   candidates outside the cycle; it reaches the root only when none
//!   encloses it.
//!
//! Code cross-refs: `geom2::{point_in_polygon, polygon_area}`.

mod build;
mod types;

pub use build::{build_containment_tree, build_containment_tree_with};
pub use types::{
    ContainmentCfg, ContainmentNode, ContainmentTree, NestedNode, ProbeMode, TaggedPolygon, ROOT_ID,
};
