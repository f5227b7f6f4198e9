//! Leaf predicates shared by every polygon algorithm.

use super::types::{Orientation, Point};

/// Cross product of `(q - p)` and `(r - q)`; positive for a left turn.
#[inline]
fn turn(p: &Point, q: &Point, r: &Point) -> f64 {
    let pq = q - p;
    let qr = r - q;
    pq.x * qr.y - pq.y * qr.x
}

/// Turn direction of the ordered triple `(p, q, r)`.
#[inline]
pub fn orientation(p: &Point, q: &Point, r: &Point) -> Orientation {
    let val = turn(p, q, r);
    if val > 0.0 {
        Orientation::CounterClockwise
    } else if val < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// For collinear `p, q, r`: true iff `q` lies in the bounding box of segment `p–r`.
#[inline]
pub fn on_segment(p: &Point, q: &Point, r: &Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// True if the closed segments `p1–q1` and `p2–q2` share at least one point.
///
/// Touching endpoints and collinear overlaps count as intersecting.
pub fn segments_intersect(p1: &Point, q1: &Point, p2: &Point, q2: &Point) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }
    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}

/// Even-odd ray cast towards `+x`.
///
/// An edge counts iff exactly one endpoint is strictly above `point.y` and its
/// crossing lies strictly right of `point.x`. Edges horizontal at `point.y`
/// never count. Fewer than 3 vertices is never "inside".
pub fn point_in_polygon(point: &Point, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = &polygon[i];
        let b = &polygon[j];
        j = i;
        if (a.y > point.y) == (b.y > point.y) {
            continue;
        }
        let dy = b.y - a.y;
        if dy == 0.0 {
            continue;
        }
        let x_cross = (b.x - a.x) * (point.y - a.y) / dy + a.x;
        if point.x < x_cross {
            inside = !inside;
        }
    }
    inside
}
