//! Data types for the boundary graph and trace output.
//!
//! Kept small and explicit to make `build` and `trace` easy to read.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::geom::{Dir, GridPoint};

/// Orientation-independent key for one elementary boundary segment.
/// Endpoints are stored sorted by `(y, x)`, so an edge and its reverse map to
/// the same key and a `BTreeSet`/`BTreeMap` iterates keys in the tracer's
/// deterministic start order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey {
    pub a: GridPoint,
    pub b: GridPoint,
}

impl EdgeKey {
    #[inline]
    pub fn new(p: GridPoint, q: GridPoint) -> Self {
        if p <= q {
            Self { a: p, b: q }
        } else {
            Self { a: q, b: p }
        }
    }

    /// Signed occupancy contribution of a directed traversal `from → to`:
    /// +1 along canonical `(y, x)` order, -1 against it. Opposite directions
    /// on the same segment cancel.
    #[inline]
    pub fn sign(from: GridPoint, to: GridPoint) -> i64 {
        if from <= to {
            1
        } else {
            -1
        }
    }
}

/// Which side of a boundary segment the union interior lies on.
/// `Low` is the smaller cross-axis coordinate: above a horizontal segment,
/// left of a vertical one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteriorSide {
    Low,
    High,
}

/// Two sorted mappings (`x → {y}` and `y → {x}`) over points incident to at
/// least one boundary edge; answers nearest-point queries along an axis ray.
#[derive(Clone, Debug, Default)]
pub struct CoordinateIndex {
    x_to_ys: BTreeMap<i64, BTreeSet<i64>>,
    y_to_xs: BTreeMap<i64, BTreeSet<i64>>,
}

impl CoordinateIndex {
    pub fn insert(&mut self, p: GridPoint) {
        self.x_to_ys.entry(p.x).or_default().insert(p.y);
        self.y_to_xs.entry(p.y).or_default().insert(p.x);
    }

    /// Closest indexed point strictly beyond `from` in direction `dir`.
    pub fn nearest(&self, from: GridPoint, dir: Dir) -> Option<GridPoint> {
        match dir {
            Dir::Up => self
                .x_to_ys
                .get(&from.x)?
                .range(..from.y)
                .next_back()
                .map(|&y| GridPoint::new(from.x, y)),
            Dir::Down => self
                .x_to_ys
                .get(&from.x)?
                .range(from.y + 1..)
                .next()
                .map(|&y| GridPoint::new(from.x, y)),
            Dir::Left => self
                .y_to_xs
                .get(&from.y)?
                .range(..from.x)
                .next_back()
                .map(|&x| GridPoint::new(x, from.y)),
            Dir::Right => self
                .y_to_xs
                .get(&from.y)?
                .range(from.x + 1..)
                .next()
                .map(|&x| GridPoint::new(x, from.y)),
        }
    }
}

/// Surviving boundary edges (each annotated with its interior side) plus the
/// coordinate index over their endpoints.
#[derive(Clone, Debug, Default)]
pub struct BoundaryGraph {
    pub edges: BTreeMap<EdgeKey, InteriorSide>,
    pub index: CoordinateIndex,
    /// Corners of the input rectangles. The tracer keeps these as loop
    /// vertices even on straight continuations (edge-to-edge junctions),
    /// while collapsing the split points introduced by subdivision.
    pub rect_corners: HashSet<GridPoint>,
}

/// One closed boundary loop: an ordered cyclic corner sequence
/// (`points[0]` follows `points[last]` implicitly). Outer loops run
/// clockwise on screen; hole loops are stored reversed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Loop {
    pub points: Vec<GridPoint>,
}

impl Loop {
    /// Doubled shoelace area in grid units. Positive for outer loops,
    /// negative for holes (screen coordinates, y down).
    pub fn signed_area2(&self) -> i128 {
        let pts = &self.points;
        let n = pts.len();
        let mut acc: i128 = 0;
        for i in 0..n {
            let p = pts[i];
            let q = pts[(i + 1) % n];
            acc += p.x as i128 * q.y as i128 - q.x as i128 * p.y as i128;
        }
        acc
    }
}
