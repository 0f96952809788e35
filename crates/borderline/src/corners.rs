//! Global extreme-corner classification.
//!
//! The four extreme points of the whole arrangement (topmost-leftmost,
//! topmost-rightmost, bottommost-leftmost, bottommost-rightmost) are the only
//! vertices eligible for the "keep sharp" override; every other corner always
//! rounds when the radius is positive.

use crate::boundary::Loop;
use crate::geom::{CornerSharpness, GridPoint};

/// The four global extreme corners of an arrangement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtremeCorners {
    pub top_left: GridPoint,
    pub top_right: GridPoint,
    pub bottom_left: GridPoint,
    pub bottom_right: GridPoint,
}

impl ExtremeCorners {
    /// Whether `p` is an extreme corner whose sharpness flag is set.
    #[inline]
    pub fn is_sharp(&self, p: GridPoint, flags: CornerSharpness) -> bool {
        (flags.top_left && p == self.top_left)
            || (flags.top_right && p == self.top_right)
            || (flags.bottom_left && p == self.bottom_left)
            || (flags.bottom_right && p == self.bottom_right)
    }
}

/// Scan all loop vertices for the global extremes. `None` when there are no
/// loops.
pub fn find_extremes(loops: &[Loop]) -> Option<ExtremeCorners> {
    let mut points = loops.iter().flat_map(|l| l.points.iter().copied());
    let first = points.next()?;
    let (mut min_y, mut max_y) = (first.y, first.y);
    for p in loops.iter().flat_map(|l| l.points.iter()) {
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    let row_extremes = |y: i64| -> (i64, i64) {
        let mut min_x = i64::MAX;
        let mut max_x = i64::MIN;
        for p in loops.iter().flat_map(|l| l.points.iter()) {
            if p.y == y {
                min_x = min_x.min(p.x);
                max_x = max_x.max(p.x);
            }
        }
        (min_x, max_x)
    };
    let (top_min_x, top_max_x) = row_extremes(min_y);
    let (bot_min_x, bot_max_x) = row_extremes(max_y);
    Some(ExtremeCorners {
        top_left: GridPoint::new(top_min_x, min_y),
        top_right: GridPoint::new(top_max_x, min_y),
        bottom_left: GridPoint::new(bot_min_x, max_y),
        bottom_right: GridPoint::new(bot_max_x, max_y),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::GridPoint;

    fn square(x0: i64, y0: i64, s: i64) -> Loop {
        Loop {
            points: vec![
                GridPoint::new(x0, y0),
                GridPoint::new(x0 + s, y0),
                GridPoint::new(x0 + s, y0 + s),
                GridPoint::new(x0, y0 + s),
            ],
        }
    }

    #[test]
    fn extremes_across_two_loops() {
        let loops = vec![square(0, 0, 10), square(30, 0, 10)];
        let c = find_extremes(&loops).unwrap();
        assert_eq!(c.top_left, GridPoint::new(0, 0));
        assert_eq!(c.top_right, GridPoint::new(40, 0));
        assert_eq!(c.bottom_left, GridPoint::new(0, 10));
        assert_eq!(c.bottom_right, GridPoint::new(40, 10));
    }

    #[test]
    fn sharp_flag_matches_only_named_corner() {
        let loops = vec![square(0, 0, 10)];
        let c = find_extremes(&loops).unwrap();
        let flags = CornerSharpness {
            top_left: true,
            ..CornerSharpness::default()
        };
        assert!(c.is_sharp(GridPoint::new(0, 0), flags));
        assert!(!c.is_sharp(GridPoint::new(10, 0), flags));
        assert!(!c.is_sharp(GridPoint::new(0, 10), flags));
    }

    #[test]
    fn no_loops_no_extremes() {
        assert!(find_extremes(&[]).is_none());
    }
}
