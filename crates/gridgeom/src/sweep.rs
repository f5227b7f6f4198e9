//! Area of a union of axis-aligned rectangles (sweep over x, y compressed).
//!
//! Model
//! - Each rectangle contributes an open event at `x1` and a close event at
//!   `x2`, both carrying the half-open slab range `[y1, y2)`.
//! - Distinct y boundaries are sorted into `ys`; slot `i` covers
//!   `[ys[i], ys[i + 1])` and keeps an active count.
//! - Between consecutive event x positions the covered length (sum of slots
//!   with count > 0) is constant, so area accumulates as width × length.
//!
//! Overlaps count once; rectangles sharing a boundary edge do not double count.
//! Rectangles are expected normalized (`x1 <= x2`, `y1 <= y2`); one with
//! inverted or non-finite extents covers nothing.

use crate::geom2::Rect;

#[derive(Clone, Copy, Debug)]
struct Event {
    x: f64,
    lo: usize,
    hi: usize,
    delta: i32,
}

/// Index of `y` in the sorted, deduplicated boundary list.
#[inline]
fn slot_of(ys: &[f64], y: f64) -> usize {
    match ys.binary_search_by(|probe| probe.total_cmp(&y)) {
        Ok(i) | Err(i) => i,
    }
}

/// Total area covered by at least one rectangle. Empty input yields 0.
pub fn rectangle_union_area(rects: &[Rect]) -> f64 {
    let live: Vec<&Rect> = rects
        .iter()
        .filter(|r| r.x1 < r.x2 && r.y1 < r.y2)
        .collect();
    if live.is_empty() {
        return 0.0;
    }

    let mut ys: Vec<f64> = live.iter().flat_map(|r| [r.y1, r.y2]).collect();
    ys.sort_by(f64::total_cmp);
    ys.dedup();

    let mut events: Vec<Event> = Vec::with_capacity(live.len() * 2);
    for r in &live {
        let (lo, hi) = (slot_of(&ys, r.y1), slot_of(&ys, r.y2));
        events.push(Event {
            x: r.x1,
            lo,
            hi,
            delta: 1,
        });
        events.push(Event {
            x: r.x2,
            lo,
            hi,
            delta: -1,
        });
    }
    events.sort_by(|a, b| a.x.total_cmp(&b.x));

    let mut active = vec![0i32; ys.len().saturating_sub(1)];
    let mut area = 0.0;
    let mut last_x = events[0].x;
    for ev in &events {
        if ev.x > last_x {
            let covered: f64 = active
                .iter()
                .enumerate()
                .filter(|(_, c)| **c > 0)
                .map(|(i, _)| ys[i + 1] - ys[i])
                .sum();
            area += (ev.x - last_x) * covered;
        }
        if let Some(slots) = active.get_mut(ev.lo..ev.hi) {
            for slot in slots {
                *slot += ev.delta;
            }
        }
        last_x = ev.x;
    }
    tracing::trace!(
        rects = rects.len(),
        y_slots = active.len(),
        area,
        "rectangle union swept"
    );
    area
}
