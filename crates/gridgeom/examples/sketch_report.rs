//! Print hull, validation, containment, and union-area results for a random
//! sketch, for quick visual sanity on the algorithms.
//!
//! Usage:
//!   cargo run -p gridgeom --example sketch_report -- [seed]

use gridgeom::api::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);

    let points = draw_points(PointCloudCfg::default(), ReplayToken::new(seed, 0));
    match convex_hull(&points) {
        Ok(hull) => println!(
            "hull: {} of {} points, area {:.2}",
            hull.len(),
            points.len(),
            polygon_area(&hull)
        ),
        Err(e) => println!("hull: {e}"),
    }

    let shapes: Vec<TaggedPolygon> = [(0.0, 0.0, 30.0), (0.0, 0.0, 10.0), (60.0, 0.0, 12.0)]
        .iter()
        .enumerate()
        .map(|(i, &(cx, cy, r))| {
            let cfg = PolygonCfg {
                center: Point::new(cx, cy),
                base_radius: r,
                radial_jitter: 0.2,
                ..PolygonCfg::default()
            };
            TaggedPolygon::new(i as u64 + 1, draw_simple_polygon(cfg, ReplayToken::new(seed, i as u64 + 1)))
        })
        .collect();
    for (k, s) in shapes.iter().enumerate() {
        let report = validate_against(&s.vertices, &shapes[..k]);
        println!(
            "shape {}: {} area {:.2} perimeter {:.2} clean={}",
            s.id,
            ShapeKind::from_vertex_count(s.vertices.len()),
            polygon_area(&s.vertices),
            polygon_perimeter(&s.vertices),
            report.is_clean()
        );
    }
    let tree = build_containment_tree(&shapes);
    for (depth, idx) in tree.preorder() {
        let id = tree.nodes()[idx].id;
        let label = if id == ROOT_ID {
            "plane".to_string()
        } else {
            format!("shape {id}")
        };
        println!("{}{}", "  ".repeat(depth), label);
    }

    let rects = draw_rects(RectCfg::default(), ReplayToken::new(seed, 99));
    println!(
        "union of {} rectangles covers {}",
        rects.len(),
        rectangle_union_area(&rects)
    );
}
