use std::cmp::Ordering;

use super::predicates::orientation;
use super::types::{Orientation, Point};
use crate::error::GeomError;

#[inline]
fn lex_cmp(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Append `p` to a monotone chain, first popping every vertex that would not
/// make a strict left turn.
#[inline]
fn push_strict_ccw(chain: &mut Vec<Point>, p: Point) {
    while chain.len() >= 2
        && orientation(&chain[chain.len() - 2], &chain[chain.len() - 1], &p)
            != Orientation::CounterClockwise
    {
        chain.pop();
    }
    chain.push(p);
}

/// Andrew’s monotone chain convex hull (returns hull in CCW order).
///
/// - Starts at the lexicographically smallest point (min x, then min y).
/// - Collinear boundary points are dropped; only extreme vertices remain.
/// - If every distinct point is collinear the result degenerates to the two
///   extreme points.
///
/// Errors with `InsufficientPoints` when fewer than 3 distinct points are given.
pub fn convex_hull(points: &[Point]) -> Result<Vec<Point>, GeomError> {
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup();
    if pts.len() < 3 {
        tracing::debug!(
            supplied = points.len(),
            distinct = pts.len(),
            "convex hull rejected: insufficient points"
        );
        return Err(GeomError::InsufficientPoints {
            distinct: pts.len(),
        });
    }

    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        push_strict_ccw(&mut lower, *p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        push_strict_ccw(&mut upper, *p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    tracing::trace!(input = points.len(), hull = hull.len(), "convex hull built");
    Ok(hull)
}

/// For each input point, whether it is a vertex of `hull`.
///
/// Duplicated input points are all flagged when their value is on the hull.
pub fn hull_membership(points: &[Point], hull: &[Point]) -> Vec<bool> {
    points.iter().map(|p| hull.contains(p)).collect()
}
