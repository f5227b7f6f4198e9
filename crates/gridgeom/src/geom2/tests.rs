use super::*;
use crate::GeomError;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn square(lo: f64, hi: f64) -> Vec<Point> {
    pts(&[(lo, lo), (hi, lo), (hi, hi), (lo, hi)])
}

#[test]
fn orientation_sign_convention() {
    let (p, q) = (Point::new(0.0, 0.0), Point::new(1.0, 0.0));
    assert_eq!(
        orientation(&p, &q, &Point::new(2.0, 1.0)),
        Orientation::CounterClockwise
    );
    assert_eq!(
        orientation(&p, &q, &Point::new(2.0, -1.0)),
        Orientation::Clockwise
    );
    assert_eq!(
        orientation(&p, &q, &Point::new(5.0, 0.0)),
        Orientation::Collinear
    );
}

#[test]
fn segments_cross_touch_and_miss() {
    let p = pts(&[(0.0, 0.0), (2.0, 2.0), (0.0, 2.0), (2.0, 0.0)]);
    assert!(segments_intersect(&p[0], &p[1], &p[2], &p[3]));

    // Shared endpoint counts.
    let t = pts(&[(0.0, 0.0), (1.0, 1.0), (1.0, 1.0), (2.0, 0.0)]);
    assert!(segments_intersect(&t[0], &t[1], &t[2], &t[3]));

    // T-junction: endpoint lands on the interior of the other segment.
    let tj = pts(&[(0.0, 0.0), (4.0, 0.0), (2.0, 0.0), (2.0, 3.0)]);
    assert!(segments_intersect(&tj[0], &tj[1], &tj[2], &tj[3]));

    // Collinear overlap and collinear disjoint.
    let ov = pts(&[(0.0, 0.0), (3.0, 0.0), (2.0, 0.0), (5.0, 0.0)]);
    assert!(segments_intersect(&ov[0], &ov[1], &ov[2], &ov[3]));
    let dj = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
    assert!(!segments_intersect(&dj[0], &dj[1], &dj[2], &dj[3]));

    // Parallel, offset.
    let par = pts(&[(0.0, 0.0), (3.0, 0.0), (0.0, 1.0), (3.0, 1.0)]);
    assert!(!segments_intersect(&par[0], &par[1], &par[2], &par[3]));
}

#[test]
fn segments_intersect_is_symmetric_seeded() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let mut draw = || Point::new(rng.gen_range(-4..=4) as f64, rng.gen_range(-4..=4) as f64);
        let (a, b, c, d) = (draw(), draw(), draw(), draw());
        assert_eq!(
            segments_intersect(&a, &b, &c, &d),
            segments_intersect(&c, &d, &a, &b)
        );
    }
}

#[test]
fn point_in_polygon_basic() {
    let sq = square(0.0, 2.0);
    assert!(point_in_polygon(&Point::new(1.0, 1.0), &sq));
    assert!(!point_in_polygon(&Point::new(3.0, 3.0), &sq));
    assert!(!point_in_polygon(&Point::new(-1.0, 1.0), &sq));
}

#[test]
fn point_in_polygon_degenerate_inputs() {
    let p = Point::new(0.0, 0.0);
    assert!(!point_in_polygon(&p, &[]));
    assert!(!point_in_polygon(&p, &pts(&[(-1.0, -1.0), (1.0, 1.0)])));
    // Ray passes exactly through a horizontal edge: must not produce NaN flips.
    let l = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (2.0, 2.0), (2.0, 4.0), (0.0, 4.0)]);
    assert!(point_in_polygon(&Point::new(1.0, 2.0), &l));
    assert!(!point_in_polygon(&Point::new(3.0, 3.0), &l));
}

#[test]
fn point_in_concave_polygon() {
    // U shape opening upwards.
    let u = pts(&[
        (0.0, 0.0),
        (6.0, 0.0),
        (6.0, 6.0),
        (4.0, 6.0),
        (4.0, 2.0),
        (2.0, 2.0),
        (2.0, 6.0),
        (0.0, 6.0),
    ]);
    assert!(point_in_polygon(&Point::new(1.0, 5.0), &u));
    assert!(point_in_polygon(&Point::new(5.0, 5.0), &u));
    assert!(!point_in_polygon(&Point::new(3.0, 5.0), &u));
}

#[test]
fn area_and_perimeter() {
    let sq = square(0.0, 2.0);
    assert_eq!(polygon_area(&sq), 4.0);
    assert_eq!(signed_area(&sq), 4.0);
    let mut cw = sq.clone();
    cw.reverse();
    assert_eq!(signed_area(&cw), -4.0);
    assert_eq!(polygon_area(&cw), 4.0);
    assert_eq!(polygon_perimeter(&sq), 8.0);

    let tri = pts(&[(0.0, 0.0), (3.0, 0.0), (0.0, 4.0)]);
    assert_eq!(polygon_area(&tri), 6.0);
    assert!((polygon_perimeter(&tri) - 12.0).abs() < 1e-12);

    assert_eq!(polygon_area(&pts(&[(0.0, 0.0), (5.0, 5.0)])), 0.0);
    assert_eq!(polygon_area(&[]), 0.0);
    assert_eq!(polygon_perimeter(&[]), 0.0);
}

#[test]
fn area_of_bowtie_is_finite() {
    let bowtie = pts(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
    let a = polygon_area(&bowtie);
    assert!(a.is_finite() && a >= 0.0);
}

#[test]
fn hull_reference_example() {
    let input = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.0, 2.0), (2.0, 0.0)]);
    let hull = convex_hull(&input).unwrap();
    assert_eq!(hull, pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]));
    assert_eq!(
        hull_membership(&input, &hull),
        vec![true, false, true, true, true]
    );
}

#[test]
fn hull_drops_collinear_boundary_points() {
    let input = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (1.0, 2.0)]);
    let hull = convex_hull(&input).unwrap();
    assert_eq!(hull.len(), 4);
    assert!(!hull.contains(&Point::new(1.0, 0.0)));
    assert!(!hull.contains(&Point::new(1.0, 2.0)));
    assert!(signed_area(&hull) > 0.0);
}

#[test]
fn hull_insufficient_points() {
    assert_eq!(
        convex_hull(&[]),
        Err(GeomError::InsufficientPoints { distinct: 0 })
    );
    let dup = pts(&[(1.0, 1.0), (1.0, 1.0), (2.0, 2.0), (2.0, 2.0)]);
    assert_eq!(
        convex_hull(&dup),
        Err(GeomError::InsufficientPoints { distinct: 2 })
    );
}

#[test]
fn hull_all_collinear_degenerates() {
    let line = pts(&[(0.0, 0.0), (1.0, 1.0), (3.0, 3.0), (2.0, 2.0)]);
    let hull = convex_hull(&line).unwrap();
    assert_eq!(hull, pts(&[(0.0, 0.0), (3.0, 3.0)]));
}

#[test]
fn self_intersection_cases() {
    let bowtie = pts(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
    assert!(is_self_intersecting(&bowtie));
    assert!(!is_self_intersecting(&square(0.0, 2.0)));
    // Triangles never count, even degenerate ones.
    assert!(!is_self_intersecting(&pts(&[(0.0, 0.0), (2.0, 0.0), (1.0, 0.0)])));
    // Concave but simple.
    let arrow = pts(&[(0.0, 0.0), (4.0, 2.0), (0.0, 4.0), (1.0, 2.0)]);
    assert!(!is_self_intersecting(&arrow));
}

#[test]
fn pairwise_intersection_and_report() {
    let a = square(0.0, 10.0);
    let inner = square(2.0, 8.0);
    let crossing = square(5.0, 15.0);
    let touching = pts(&[(10.0, 0.0), (12.0, 0.0), (12.0, 2.0), (10.0, 2.0)]);
    assert!(!polygons_intersect(&a, &inner));
    assert!(polygons_intersect(&a, &crossing));
    assert!(polygons_intersect(&a, &touching));
    assert!(!polygons_intersect(&a, &[]));

    let existing = vec![a.clone(), inner.clone()];
    let report = validate_against(&crossing, &existing);
    assert!(!report.self_intersecting);
    assert_eq!(report.overlaps, vec![0, 1]);
    assert!(!report.is_clean());

    let far = square(20.0, 21.0);
    assert!(validate_against(&far, &existing).is_clean());
}

#[test]
fn rect_normalization_and_area() {
    let r = Rect::from_corners(Point::new(3.0, 1.0), Point::new(0.0, 4.0));
    assert_eq!(r, Rect::new(0.0, 1.0, 3.0, 4.0));
    assert!(r.is_normalized());
    assert_eq!(r.area(), 9.0);
    let flipped = Rect::new(3.0, 4.0, 0.0, 1.0);
    assert!(!flipped.is_normalized());
    assert_eq!(flipped.normalized(), r);
}

#[test]
fn shape_names() {
    assert_eq!(ShapeKind::from_vertex_count(3).to_string(), "Triangle");
    assert_eq!(ShapeKind::from_vertex_count(6).to_string(), "Hexagon");
    assert_eq!(
        ShapeKind::from_vertex_count(9).to_string(),
        "Polygon (9 sides)"
    );
    assert_eq!(ShapeKind::from_vertex_count(5).sides(), 5);
}
