//! Rectilinear union boundary: edge multiset, coordinate index, and the
//! deterministic turn-priority tracer.
//!
//! Purpose
//! - Turn a canonicalized rectangle set into disjoint closed corner loops,
//!   consuming every true outer-boundary segment exactly once.
//!
//! Code cross-refs: `geom::quantize` produces the input `GridRect`s;
//! `smooth` consumes the emitted `Loop`s.

pub mod build;
pub mod trace;
mod types;

pub use build::build_graph;
pub use trace::trace_loops;
pub use types::{BoundaryGraph, CoordinateIndex, EdgeKey, InteriorSide, Loop};
