//! Rectangle ingestion: canonical rounding onto the integer grid.
//!
//! Contract:
//! - every coordinate is rounded to the configured decimal precision, so
//!   points that differ only by measurement jitter collapse onto the same
//!   grid key;
//! - rectangles that are degenerate after rounding (`right <= left` or
//!   `bottom <= top`) are silently dropped;
//! - non-finite coordinates are the only rejected input.

use super::types::{GridPoint, OutlineCfg, Rect};
use crate::error::OutlineError;

/// Magnitude guard so `x * scale` stays exactly representable and far from
/// i64 overflow even for hostile (but finite) inputs.
const GRID_LIMIT: i64 = 1 << 53;

/// Axis-aligned rectangle on the quantized grid, `right > left`,
/// `bottom > top`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridRect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl GridRect {
    /// Corner points in clockwise winding order:
    /// top-left, top-right, bottom-right, bottom-left.
    #[inline]
    pub fn corners(&self) -> [GridPoint; 4] {
        [
            GridPoint::new(self.left, self.top),
            GridPoint::new(self.right, self.top),
            GridPoint::new(self.right, self.bottom),
            GridPoint::new(self.left, self.bottom),
        ]
    }
}

/// Round one coordinate onto the grid.
#[inline]
pub fn quantize(value: f64, scale: f64) -> i64 {
    (value * scale).round().clamp(-(GRID_LIMIT as f64), GRID_LIMIT as f64) as i64
}

/// Validate, round, and filter the raw rectangle list.
///
/// Empty input and input with zero surviving rectangles both yield an empty
/// vector, not an error.
pub fn ingest(rects: &[Rect], cfg: &OutlineCfg) -> Result<Vec<GridRect>, OutlineError> {
    let scale = cfg.scale();
    let mut out = Vec::with_capacity(rects.len());
    for (index, r) in rects.iter().enumerate() {
        if !r.is_finite() {
            return Err(OutlineError::InvalidInput { index });
        }
        let g = GridRect {
            left: quantize(r.left, scale),
            top: quantize(r.top, scale),
            right: quantize(r.right, scale),
            bottom: quantize(r.bottom, scale),
        };
        if g.right <= g.left || g.bottom <= g.top {
            continue;
        }
        out.push(g);
    }
    Ok(out)
}
