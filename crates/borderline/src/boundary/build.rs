//! Boundary graph construction: edge parity plus interior-side filtering.
//!
//! Model
//! - Every rectangle contributes its four directed edges in clockwise winding
//!   order. Edges are first split at every global rectangle coordinate that
//!   falls strictly inside them, so partially coincident edges cancel
//!   segment-by-segment.
//! - The edge multiset keys segments orientation-independently with signed
//!   occupancy: a segment covered from opposite sides nets to zero and is
//!   interior (touching rectangles merge).
//! - Surviving segments pass a side-coverage test: a segment belongs to the
//!   union boundary iff exactly one of its two adjacent cells is covered by
//!   some input rectangle. This is the winding-jump form of the parity rule
//!   and is what makes area-overlapping rectangles produce the true union
//!   outline. The covered side is recorded so the tracer can tell outer
//!   loops from holes.

use std::collections::HashMap;

use crate::geom::{GridPoint, GridRect};

use super::types::{BoundaryGraph, EdgeKey, InteriorSide};

/// Build the boundary graph for a canonicalized rectangle set.
pub fn build_graph(rects: &[GridRect]) -> BoundaryGraph {
    let mut xs: Vec<i64> = rects.iter().flat_map(|r| [r.left, r.right]).collect();
    xs.sort_unstable();
    xs.dedup();
    let mut ys: Vec<i64> = rects.iter().flat_map(|r| [r.top, r.bottom]).collect();
    ys.sort_unstable();
    ys.dedup();

    let mut counts: HashMap<EdgeKey, i64> = HashMap::new();
    for r in rects {
        // Clockwise: top-left → top-right → bottom-right → bottom-left.
        insert_horizontal(&mut counts, r.top, r.left, r.right, &xs);
        insert_vertical(&mut counts, r.right, r.top, r.bottom, &ys);
        insert_horizontal(&mut counts, r.bottom, r.right, r.left, &xs);
        insert_vertical(&mut counts, r.left, r.bottom, r.top, &ys);
    }

    let mut graph = BoundaryGraph::default();
    for r in rects {
        graph.rect_corners.extend(r.corners());
    }
    for (key, net) in counts {
        if net == 0 {
            continue;
        }
        if let Some(side) = covered_side(rects, key) {
            graph.edges.insert(key, side);
        }
    }
    let endpoints: Vec<GridPoint> = graph.edges.keys().flat_map(|k| [k.a, k.b]).collect();
    for p in endpoints {
        graph.index.insert(p);
    }
    graph
}

/// Split a horizontal run at `y` into elementary segments and record the
/// signed contribution of traveling `from → to`.
fn insert_horizontal(counts: &mut HashMap<EdgeKey, i64>, y: i64, from: i64, to: i64, xs: &[i64]) {
    let sign = EdgeKey::sign(GridPoint::new(from, y), GridPoint::new(to, y));
    let (lo, hi) = (from.min(to), from.max(to));
    for (c0, c1) in elementary(xs, lo, hi) {
        let key = EdgeKey::new(GridPoint::new(c0, y), GridPoint::new(c1, y));
        *counts.entry(key).or_insert(0) += sign;
    }
}

/// Vertical counterpart of `insert_horizontal`.
fn insert_vertical(counts: &mut HashMap<EdgeKey, i64>, x: i64, from: i64, to: i64, ys: &[i64]) {
    let sign = EdgeKey::sign(GridPoint::new(x, from), GridPoint::new(x, to));
    let (lo, hi) = (from.min(to), from.max(to));
    for (c0, c1) in elementary(ys, lo, hi) {
        let key = EdgeKey::new(GridPoint::new(x, c0), GridPoint::new(x, c1));
        *counts.entry(key).or_insert(0) += sign;
    }
}

/// Consecutive coordinate pairs of `coords ∩ [lo, hi]`. `lo` and `hi` are
/// themselves rectangle coordinates, so they are always present.
fn elementary(coords: &[i64], lo: i64, hi: i64) -> impl Iterator<Item = (i64, i64)> + '_ {
    let start = coords.partition_point(|&c| c < lo);
    let end = coords.partition_point(|&c| c <= hi);
    coords[start..end].windows(2).map(|w| (w[0], w[1]))
}

/// Side-coverage test for one elementary segment: `Some(side)` when exactly
/// one adjacent cell is covered by the input set, `None` otherwise.
///
/// The segment is elementary with respect to the global coordinate sets, so
/// any rectangle overlapping it along its axis covers it fully; the test
/// reduces to closed/open interval checks with no epsilons.
fn covered_side(rects: &[GridRect], key: EdgeKey) -> Option<InteriorSide> {
    let (mut low, mut high) = (false, false);
    if key.a.x == key.b.x {
        // Vertical segment at x, spanning (y1, y2): low = left cell.
        let (x, y1, y2) = (key.a.x, key.a.y, key.b.y);
        for r in rects {
            if r.top > y1 || r.bottom < y2 {
                continue;
            }
            low |= r.left < x && r.right >= x;
            high |= r.left <= x && r.right > x;
            if low && high {
                return None;
            }
        }
    } else {
        // Horizontal segment at y, spanning (x1, x2): low = cell above.
        let (y, x1, x2) = (key.a.y, key.a.x, key.b.x);
        for r in rects {
            if r.left > x1 || r.right < x2 {
                continue;
            }
            low |= r.top < y && r.bottom >= y;
            high |= r.top <= y && r.bottom > y;
            if low && high {
                return None;
            }
        }
    }
    match (low, high) {
        (true, false) => Some(InteriorSide::Low),
        (false, true) => Some(InteriorSide::High),
        _ => None,
    }
}
