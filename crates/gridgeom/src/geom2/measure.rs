//! Polygon measures: shoelace area and closed-ring perimeter.

use super::types::Point;

/// Signed shoelace area; positive for counter-clockwise vertex order.
///
/// Returns 0 for fewer than 3 vertices.
pub fn signed_area(polygon: &[Point]) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..n {
        let p = polygon[i];
        let q = polygon[(i + 1) % n];
        acc += p.x * q.y - q.x * p.y;
    }
    0.5 * acc
}

/// Unsigned shoelace area, independent of vertex order.
///
/// For self-intersecting input this is the absolute net signed area, not the
/// enclosed region.
#[inline]
pub fn polygon_area(polygon: &[Point]) -> f64 {
    signed_area(polygon).abs()
}

/// Length of the closed ring through all vertices (closing edge included).
pub fn polygon_perimeter(polygon: &[Point]) -> f64 {
    let n = polygon.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| nalgebra::distance(&polygon[i], &polygon[(i + 1) % n]))
        .sum()
}
