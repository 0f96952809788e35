//! Curated re-export surface.
//!
//! One flat module covering the full pipeline, for callers that do not care
//! which internal module a name lives in.

// Input types and canonicalization
pub use crate::geom::{ingest, CornerSharpness, GridPoint, GridRect, OutlineCfg, Rect, KAPPA};
// Randomized rectangle sets for tests and benchmarks
pub use crate::geom::rand::{draw_disjoint_rect_set, draw_rect_set, RectSetCfg, ReplayToken};
// Boundary extraction
pub use crate::boundary::{build_graph, trace_loops, BoundaryGraph, Loop};
// Corner classification and rounding
pub use crate::corners::{find_extremes, ExtremeCorners};
pub use crate::smooth::smooth_loop;
// Pipeline and output
pub use crate::error::OutlineError;
pub use crate::outline::{compute_outline, union_loops};
pub use crate::path::{OutlinePath, PathCommand, Winding};
