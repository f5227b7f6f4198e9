//! Criterion benchmarks for containment tree construction.
//! Polygons are star-shaped samples scattered over a coarse grid of centers,
//! with a share of them nested inside larger ones.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gridgeom::api::{
    build_containment_tree_with, draw_simple_polygon, ContainmentCfg, Point, PolygonCfg,
    ProbeMode, ReplayToken, TaggedPolygon,
};

fn scene(n: usize) -> Vec<TaggedPolygon> {
    (0..n)
        .map(|i| {
            let cell = (i / 3) as f64;
            let cfg = PolygonCfg {
                vertices: 12,
                center: Point::new((cell % 10.0) * 50.0, (cell / 10.0).floor() * 50.0),
                base_radius: 20.0 / (1 + i % 3) as f64,
                radial_jitter: 0.2,
                ..PolygonCfg::default()
            };
            TaggedPolygon::new(i as u64 + 1, draw_simple_polygon(cfg, ReplayToken::new(46, i as u64)))
        })
        .collect()
}

fn bench_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("containment");
    for &n in &[10usize, 50, 200] {
        let polys = scene(n);
        for probe in [ProbeMode::FirstVertex, ProbeMode::AllVertices] {
            group.bench_with_input(
                BenchmarkId::new(format!("build_{probe:?}"), n),
                &polys,
                |b, polys| b.iter(|| build_containment_tree_with(polys, ContainmentCfg { probe })),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_tree);
criterion_main!(benches);
