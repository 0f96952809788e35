//! Core value types: rectangles, quantized grid points, directions, config.
//!
//! - `Rect`: input rectangle in screen coordinates (rows grow downward).
//! - `GridPoint`: exact point on the quantized integer grid; the only point
//!   type used as a graph key (`Eq + Hash + Ord` with no float comparisons).
//! - `Dir`: the four axis directions of travel, listed clockwise.
//! - `OutlineCfg`: all smoothing/quantization knobs, clamped rather than
//!   rejected.

use nalgebra::Vector2;

/// Cubic-bezier circle-approximation constant, (4/3)·tan(π/8).
pub const KAPPA: f64 = 0.552_284_749_8;

/// Axis-aligned rectangle in screen coordinates (y grows downward).
/// Well-formed when `right > left` and `bottom > top`; degenerate inputs are
/// dropped during ingestion, never reported as errors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    #[inline]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
    }

    /// Bounding box of a rectangle set; `None` for an empty slice.
    pub fn union_bounds(rects: &[Rect]) -> Option<Rect> {
        let first = rects.first()?;
        let mut b = *first;
        for r in &rects[1..] {
            b.left = b.left.min(r.left);
            b.top = b.top.min(r.top);
            b.right = b.right.max(r.right);
            b.bottom = b.bottom.max(r.bottom);
        }
        Some(b)
    }
}

/// Point on the quantized coordinate grid (input units × 10^precision).
///
/// Ordering is lexicographic by `(y, x)`, matching the tracer's rule that the
/// topmost-leftmost point starts a loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: i64,
    pub y: i64,
}

impl GridPoint {
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Back to continuous coordinates for smoothing and emission.
    #[inline]
    pub fn to_vec2(self, scale: f64) -> Vector2<f64> {
        Vector2::new(self.x as f64 / scale, self.y as f64 / scale)
    }
}

impl PartialOrd for GridPoint {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GridPoint {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

/// Axis direction of travel on the grid, in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    /// Clockwise order on screen (y grows downward).
    pub const CLOCKWISE: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

    #[inline]
    fn index(self) -> usize {
        match self {
            Dir::Up => 0,
            Dir::Right => 1,
            Dir::Down => 2,
            Dir::Left => 3,
        }
    }

    /// Relative left of the current heading (e.g. heading Right → Up).
    #[inline]
    pub fn turn_left(self) -> Dir {
        Self::CLOCKWISE[(self.index() + 3) % 4]
    }

    /// Relative right of the current heading (e.g. heading Right → Down).
    #[inline]
    pub fn turn_right(self) -> Dir {
        Self::CLOCKWISE[(self.index() + 1) % 4]
    }

    /// Unit step `(dx, dy)` in grid units.
    #[inline]
    pub fn unit(self) -> (i64, i64) {
        match self {
            Dir::Up => (0, -1),
            Dir::Right => (1, 0),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
        }
    }

    /// Direction from `from` to `to`; `None` unless the pair is axis-aligned
    /// and distinct.
    pub fn between(from: GridPoint, to: GridPoint) -> Option<Dir> {
        if from.x == to.x {
            match to.y.cmp(&from.y) {
                std::cmp::Ordering::Less => Some(Dir::Up),
                std::cmp::Ordering::Greater => Some(Dir::Down),
                std::cmp::Ordering::Equal => None,
            }
        } else if from.y == to.y {
            if to.x > from.x {
                Some(Dir::Right)
            } else {
                Some(Dir::Left)
            }
        } else {
            None
        }
    }
}

/// Per-corner sharpness overrides. Only the four global extreme corners of
/// the whole arrangement are eligible; all other vertices always round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CornerSharpness {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

impl CornerSharpness {
    #[inline]
    pub fn any(self) -> bool {
        self.top_left || self.top_right || self.bottom_left || self.bottom_right
    }
}

/// Outline configuration. Out-of-range values are clamped by `sanitized`,
/// never reported as errors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlineCfg {
    /// Target fillet radius, in input coordinate units.
    pub corner_radius: f64,
    /// Bezier control-point distance ratio in (0, 1]; the default
    /// approximates a circular arc.
    pub control_ratio: f64,
    /// Force named global extreme corners to stay right angles.
    pub sharpness: CornerSharpness,
    /// Keep short protruding edges and re-aim their curve controls instead of
    /// merging them into the neighboring corners.
    pub skip_small_ledges: bool,
    /// Decimal digits of coordinate rounding applied before graph
    /// construction (absorbs layout measurement jitter).
    pub precision: u32,
}

impl Default for OutlineCfg {
    fn default() -> Self {
        Self {
            corner_radius: 20.0,
            control_ratio: KAPPA,
            sharpness: CornerSharpness::default(),
            skip_small_ledges: false,
            precision: 3,
        }
    }
}

impl OutlineCfg {
    /// Clamp every knob to its valid range.
    pub fn sanitized(&self) -> Self {
        let corner_radius = if self.corner_radius.is_finite() && self.corner_radius > 0.0 {
            self.corner_radius
        } else {
            0.0
        };
        let control_ratio = if self.control_ratio.is_finite() && self.control_ratio > 0.0 {
            self.control_ratio.min(1.0)
        } else {
            KAPPA
        };
        Self {
            corner_radius,
            control_ratio,
            sharpness: self.sharpness,
            skip_small_ledges: self.skip_small_ledges,
            // 10^9 keeps on-screen magnitudes far from i64 overflow.
            precision: self.precision.min(9),
        }
    }

    /// Grid units per input unit.
    #[inline]
    pub fn scale(&self) -> f64 {
        10f64.powi(self.precision.min(9) as i32)
    }
}
