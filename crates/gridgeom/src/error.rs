//! Error types for geometry operations.
//!
//! Only hull construction can fail; every other operation is total.

use thiserror::Error;

/// Errors surfaced by the geometry core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeomError {
    /// Too few distinct input points to span a polygon.
    #[error("need at least 3 distinct points for a convex hull, got {distinct}")]
    InsufficientPoints {
        /// Number of distinct points that were supplied.
        distinct: usize,
    },
}
