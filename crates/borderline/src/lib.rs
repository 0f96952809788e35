//! Rectilinear union outlines with adaptive corner rounding.
//!
//! Pipeline
//! - `geom::ingest` canonicalizes input rectangles onto an integer grid.
//! - `boundary::build_graph` keeps exactly the segments on the union
//!   boundary, and `boundary::trace_loops` walks them into closed loops.
//! - `corners::find_extremes` marks the four global extreme corners.
//! - `smooth::smooth_loop` turns each loop into a cubic-bezier path.
//!
//! `outline::compute_outline` runs the whole pipeline; everything else is
//! exposed for callers that want intermediate results.

pub mod api;
pub mod boundary;
pub mod corners;
pub mod error;
pub mod geom;
pub mod outline;
pub mod path;
pub mod smooth;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::OutlineError;
    pub use crate::geom::{CornerSharpness, OutlineCfg, Rect, KAPPA};
    pub use crate::outline::{compute_outline, union_loops};
    pub use crate::path::{OutlinePath, PathCommand, Winding};
    pub use nalgebra::Vector2 as Vec2;
}
