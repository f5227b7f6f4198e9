//! Command bodies: scene in, JSON document out. No I/O here.

use gridgeom::api::*;
use serde_json::{json, Value};

use crate::scene::{Scene, SceneShape};

/// Convex hull of `scene.points`. Too few distinct points is reported in the
/// document rather than as a failure.
pub fn hull(scene: &Scene) -> Value {
    match convex_hull(&scene.points) {
        Ok(hull) => json!({
            "points": scene.points.len(),
            "hull": hull,
            "on_hull": hull_membership(&scene.points, &hull),
            "area": polygon_area(&hull),
        }),
        Err(e) => {
            tracing::warn!(error = %e, "hull not computed");
            json!({
                "points": scene.points.len(),
                "hull": Value::Null,
                "error": e.to_string(),
            })
        }
    }
}

/// Per-polygon measures.
pub fn area(scene: &Scene) -> Value {
    let shapes: Vec<Value> = scene
        .polygons
        .iter()
        .enumerate()
        .map(|(k, s)| {
            json!({
                "id": s.id,
                "name": s.label(k),
                "shape": s.kind().to_string(),
                "area": polygon_area(&s.vertices),
                "perimeter": polygon_perimeter(&s.vertices),
            })
        })
        .collect();
    json!({ "polygons": shapes })
}

/// Validate polygons in drawing order: each against itself and every earlier
/// polygon.
pub fn validate(scene: &Scene) -> Value {
    let shapes: Vec<&[Point]> = scene.polygons.iter().map(|s| s.vertices.as_slice()).collect();
    let mut flagged = 0usize;
    let reports: Vec<Value> = scene
        .polygons
        .iter()
        .enumerate()
        .map(|(k, s)| {
            let report = validate_against(&s.vertices, &shapes[..k]);
            if !report.is_clean() {
                flagged += 1;
            }
            let overlaps: Vec<u64> = report
                .overlaps
                .iter()
                .map(|&j| scene.polygons[j].id)
                .collect();
            json!({
                "id": s.id,
                "name": s.label(k),
                "self_intersecting": report.self_intersecting,
                "overlaps": overlaps,
            })
        })
        .collect();
    tracing::info!(polygons = scene.polygons.len(), flagged, "validated");
    json!({ "polygons": reports, "flagged": flagged })
}

/// Containment tree as nested `{id, children}` plus a flat, indented listing.
pub fn tree(scene: &Scene, probe: ProbeMode) -> Value {
    let tagged = scene.tagged_polygons();
    let tree = build_containment_tree_with(&tagged, ContainmentCfg { probe });
    let outline: Vec<String> = tree
        .preorder()
        .into_iter()
        .map(|(depth, idx)| {
            let label = if idx == 0 {
                "Grid (Root)".to_string()
            } else {
                scene.polygons[idx - 1].label(idx - 1)
            };
            format!("{}{}", "  ".repeat(depth), label)
        })
        .collect();
    json!({
        "probe": probe,
        "tree": tree.to_nested(),
        "outline": outline,
    })
}

/// Union area of `scene.rectangles`.
pub fn union_area(scene: &Scene) -> Value {
    let sum: f64 = scene.rectangles.iter().map(Rect::area).sum();
    json!({
        "rectangles": scene.rectangles.len(),
        "area": rectangle_union_area(&scene.rectangles),
        "sum_of_areas": sum,
    })
}

/// A random scene with nested star polygons, a point cloud, and rectangles.
pub fn sample(tok: ReplayToken) -> Scene {
    let points = draw_points(PointCloudCfg::default(), tok);
    let polygons = [(0.0, 0.0, 24.0), (2.0, 1.0, 8.0), (40.0, 0.0, 10.0)]
        .iter()
        .enumerate()
        .map(|(k, &(cx, cy, r))| {
            let cfg = PolygonCfg {
                center: Point::new(cx, cy),
                base_radius: r,
                radial_jitter: 0.2,
                snap_to_grid: true,
                ..PolygonCfg::default()
            };
            let sub = ReplayToken::new(tok.seed, tok.index.wrapping_add(k as u64 + 1));
            SceneShape {
                id: k as u64 + 1,
                name: None,
                vertices: draw_simple_polygon(cfg, sub),
            }
        })
        .collect();
    let rectangles = draw_rects(
        RectCfg {
            count: 6,
            ..RectCfg::default()
        },
        tok,
    );
    Scene {
        points,
        polygons,
        rectangles,
    }
}
