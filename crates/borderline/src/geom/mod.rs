//! Quantized 2D geometry for the outline kernel.
//!
//! Purpose
//! - Keep all graph work on an exact integer grid (`GridPoint`, `GridRect`)
//!   so edge-multiset and coordinate-index lookups never compare raw floats.
//! - Keep all continuous math (anchors, controls) in `nalgebra` vectors.
//!
//! Code cross-refs: `boundary` consumes `GridRect`; `smooth` converts back
//! via `GridPoint::to_vec2`.

pub mod quantize;
pub mod rand;
mod types;

pub use quantize::{ingest, GridRect};
pub use types::{CornerSharpness, Dir, GridPoint, OutlineCfg, Rect, KAPPA};
