//! Error taxonomy for the outline kernel.
//!
//! Degenerate rectangles are dropped and out-of-range configuration is
//! clamped; neither is an error. Only two conditions abort an invocation.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum OutlineError {
    /// A rectangle carried a NaN or infinite coordinate. Empty input is not
    /// invalid; it yields zero loops.
    #[error("rectangle {index} has a non-finite coordinate")]
    InvalidInput { index: usize },

    /// The boundary walk found no unconsumed continuation edge. This signals
    /// an internal invariant violation (inconsistent edge set); the partial
    /// loop is discarded and nothing is returned.
    #[error("boundary trace stalled at ({x}, {y}): no unconsumed continuation edge")]
    TraceFailure { x: f64, y: f64 },
}
