//! Containment tree construction (parent election + arena linking).

use super::types::{
    ContainmentCfg, ContainmentNode, ContainmentTree, ProbeMode, TaggedPolygon, ROOT_ID,
};
use crate::geom2::{point_in_polygon, polygon_area, Point};

/// Build the containment tree with the default single-vertex probe.
pub fn build_containment_tree(polygons: &[TaggedPolygon]) -> ContainmentTree {
    build_containment_tree_with(polygons, ContainmentCfg::default())
}

/// Build the containment tree with an explicit probe configuration.
///
/// O(n²) parent election; never fails.
pub fn build_containment_tree_with(
    polygons: &[TaggedPolygon],
    cfg: ContainmentCfg,
) -> ContainmentTree {
    let areas: Vec<f64> = polygons.iter().map(|p| polygon_area(&p.vertices)).collect();

    let mut parent: Vec<Option<usize>> = (0..polygons.len())
        .map(|i| elect_parent(i, polygons, &areas, cfg.probe, &[]))
        .collect();
    break_cycles(&mut parent, polygons, &areas, cfg.probe);

    let mut nodes = Vec::with_capacity(polygons.len() + 1);
    nodes.push(ContainmentNode {
        id: ROOT_ID,
        parent: None,
        children: Vec::new(),
    });
    for p in polygons {
        nodes.push(ContainmentNode {
            id: p.id,
            parent: Some(0),
            children: Vec::new(),
        });
    }
    for (i, par) in parent.iter().enumerate() {
        let at = par.map_or(0, |k| k + 1);
        nodes[i + 1].parent = Some(at);
        nodes[at].children.push(i + 1);
    }
    tracing::debug!(
        polygons = polygons.len(),
        top_level = nodes[0].children.len(),
        probe = ?cfg.probe,
        "containment tree built"
    );
    ContainmentTree { nodes }
}

fn probes_inside(shape: &[Point], container: &[Point], probe: ProbeMode) -> bool {
    match probe {
        ProbeMode::FirstVertex => shape
            .first()
            .is_some_and(|v| point_in_polygon(v, container)),
        ProbeMode::AllVertices => {
            !shape.is_empty() && shape.iter().all(|v| point_in_polygon(v, container))
        }
    }
}

/// Smallest-area container of polygon `i` outside `excluded`; strict `<`
/// keeps the earliest on ties.
fn elect_parent(
    i: usize,
    polygons: &[TaggedPolygon],
    areas: &[f64],
    probe: ProbeMode,
    excluded: &[usize],
) -> Option<usize> {
    let shape = &polygons[i].vertices;
    let mut best: Option<usize> = None;
    let mut best_area = f64::INFINITY;
    for (j, cand) in polygons.iter().enumerate() {
        if j == i || excluded.contains(&j) {
            continue;
        }
        if probes_inside(shape, &cand.vertices, probe) && areas[j] < best_area {
            best_area = areas[j];
            best = Some(j);
        }
    }
    tracing::trace!(
        id = polygons[i].id,
        parent = best.map_or(ROOT_ID, |j| polygons[j].id),
        "parent elected"
    );
    best
}

/// Re-elect the earliest member of each parent cycle with that cycle's
/// members excluded, until no cycle is left. A member with no remaining
/// candidate attaches to the root.
///
/// Invariant: `parent[k]` is never in `excluded[k]`, so every round grows some
/// exclusion list and the loop terminates.
fn break_cycles(
    parent: &mut [Option<usize>],
    polygons: &[TaggedPolygon],
    areas: &[f64],
    probe: ProbeMode,
) {
    let mut excluded: Vec<Vec<usize>> = vec![Vec::new(); parent.len()];
    while let Some(cycle) = find_cycle(parent) {
        let Some(&head) = cycle.iter().min() else {
            break;
        };
        for &m in &cycle {
            if m != head && !excluded[head].contains(&m) {
                excluded[head].push(m);
            }
        }
        parent[head] = elect_parent(head, polygons, areas, probe, &excluded[head]);
        tracing::debug!(
            cycle_len = cycle.len(),
            id = polygons[head].id,
            parent = parent[head].map_or(ROOT_ID, |j| polygons[j].id),
            "containment cycle broken"
        );
    }
}

/// Members of the first parent cycle found, in chain order.
fn find_cycle(parent: &[Option<usize>]) -> Option<Vec<usize>> {
    const UNSEEN: u8 = 0;
    const ON_PATH: u8 = 1;
    const DONE: u8 = 2;
    let mut state = vec![UNSEEN; parent.len()];
    let mut path: Vec<usize> = Vec::new();
    for start in 0..parent.len() {
        if state[start] != UNSEEN {
            continue;
        }
        path.clear();
        let mut cur = Some(start);
        while let Some(k) = cur {
            if state[k] != UNSEEN {
                break;
            }
            state[k] = ON_PATH;
            path.push(k);
            cur = parent[k];
        }
        if let Some(k) = cur {
            if state[k] == ON_PATH {
                if let Some(pos) = path.iter().position(|&m| m == k) {
                    return Some(path[pos..].to_vec());
                }
            }
        }
        for &k in &path {
            state[k] = DONE;
        }
    }
    None
}
