//! Advisory polygon validation.
//!
//! Nothing here rejects or repairs a shape: callers get a status and decide
//! whether to warn, block, or ignore.

use super::predicates::segments_intersect;
use super::types::Point;

/// True if two non-adjacent edges of `polygon` share a point.
///
/// Edge pairs sharing an endpoint value are skipped, which covers adjacent
/// edges and the closing edge. Polygons with at most 3 vertices are never
/// self-intersecting.
pub fn is_self_intersecting(polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n <= 3 {
        return false;
    }
    for i in 0..n {
        let p1 = &polygon[i];
        let q1 = &polygon[(i + 1) % n];
        for j in (i + 2)..n {
            let p2 = &polygon[j];
            let q2 = &polygon[(j + 1) % n];
            if p1 == p2 || p1 == q2 || q1 == p2 || q1 == q2 {
                continue;
            }
            if segments_intersect(p1, q1, p2, q2) {
                tracing::trace!(i, j, "self-intersection");
                return true;
            }
        }
    }
    false
}

/// True if any edge of `a` touches or crosses any edge of `b`.
///
/// Containment without boundary contact is not an intersection.
pub fn polygons_intersect(a: &[Point], b: &[Point]) -> bool {
    let (na, nb) = (a.len(), b.len());
    for i in 0..na {
        let (p1, q1) = (&a[i], &a[(i + 1) % na]);
        for j in 0..nb {
            let (p2, q2) = (&b[j], &b[(j + 1) % nb]);
            if segments_intersect(p1, q1, p2, q2) {
                return true;
            }
        }
    }
    false
}

/// Outcome of checking a freshly drawn polygon against its own edges and the
/// polygons already accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationReport {
    pub self_intersecting: bool,
    /// Indices into `existing` whose boundary touches or crosses the candidate.
    pub overlaps: Vec<usize>,
}

impl ValidationReport {
    #[inline]
    pub fn is_clean(&self) -> bool {
        !self.self_intersecting && self.overlaps.is_empty()
    }
}

/// Check `candidate` for self-intersection and for boundary contact with each
/// polygon in `existing`.
pub fn validate_against<P: AsRef<[Point]>>(candidate: &[Point], existing: &[P]) -> ValidationReport {
    let self_intersecting = is_self_intersecting(candidate);
    let overlaps: Vec<usize> = existing
        .iter()
        .enumerate()
        .filter(|(_, other)| polygons_intersect(other.as_ref(), candidate))
        .map(|(k, _)| k)
        .collect();
    if !self_intersecting && overlaps.is_empty() {
        tracing::trace!(vertices = candidate.len(), "candidate polygon is clean");
    } else {
        tracing::debug!(self_intersecting, overlaps = ?overlaps, "candidate polygon flagged");
    }
    ValidationReport {
        self_intersecting,
        overlaps,
    }
}
