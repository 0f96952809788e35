//! Boundary tracing: turn-priority walk over the surviving edge set.
//!
//! Algorithm
//! - Start each loop at the lexicographically smallest `(y, x)` endpoint of
//!   the unconsumed edges; its rightward edge is always the smallest key, so
//!   iteration order of the edge map gives the deterministic start.
//! - At each step try relative-left, then straight, then relative-right; a
//!   candidate is the nearest indexed point along that ray whose connecting
//!   edge is still unconsumed. Relative-back is never tried: a walk that can
//!   only go back means the edge set is inconsistent, which is fatal.
//! - Split points introduced by edge subdivision are collapsed while
//!   walking; rectangle corners stay loop vertices even when the walk passes
//!   straight through them (two input edges meeting end to end).
//! - A loop whose starting segment has its interior on the upper side is a
//!   hole (material above, void below); hole loops are stored with reversed
//!   winding.

use crate::error::OutlineError;
use crate::geom::Dir;

use super::types::{BoundaryGraph, EdgeKey, InteriorSide, Loop};

/// Consume every boundary edge exactly once, emitting closed loops.
///
/// `scale` is only used to report stall positions in input units.
pub fn trace_loops(graph: &BoundaryGraph, scale: f64) -> Result<Vec<Loop>, OutlineError> {
    let mut remaining = graph.edges.clone();
    let mut loops = Vec::new();

    while let Some((&start_key, &start_side)) = remaining.iter().next() {
        remaining.remove(&start_key);
        let start = start_key.a;
        // The smallest key at the smallest endpoint is its rightward edge;
        // the loop's top-left corner has no edge going up or left.
        debug_assert_eq!(start.y, start_key.b.y, "start edge must be horizontal");

        let mut dir = match Dir::between(start, start_key.b) {
            Some(d) => d,
            None => {
                return Err(stall(start_key.b, scale));
            }
        };
        let mut cur = start_key.b;
        let mut points = vec![start];

        while cur != start {
            let mut advanced = false;
            for cand in [dir.turn_left(), dir, dir.turn_right()] {
                let Some(next) = graph.index.nearest(cur, cand) else {
                    continue;
                };
                if remaining.remove(&EdgeKey::new(cur, next)).is_none() {
                    continue;
                }
                // Turns are always corners; straight continuations count
                // only at true rectangle corners (edge junctions), not at
                // subdivision split points.
                if cand != dir || graph.rect_corners.contains(&cur) {
                    points.push(cur);
                }
                cur = next;
                dir = cand;
                advanced = true;
                break;
            }
            if !advanced {
                return Err(stall(cur, scale));
            }
        }

        // A rectilinear loop has at least four corners; fewer means the
        // multiset was corrupted.
        if points.len() < 4 {
            return Err(stall(start, scale));
        }
        if start_side == InteriorSide::Low {
            // Hole: reverse the cycle in place, keeping the start point first.
            points[1..].reverse();
        }
        loops.push(Loop { points });
    }

    Ok(loops)
}

fn stall(at: crate::geom::GridPoint, scale: f64) -> OutlineError {
    OutlineError::TraceFailure {
        x: at.x as f64 / scale,
        y: at.y as f64 / scale,
    }
}
