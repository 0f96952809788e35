//! Pipeline entry points: rectangles in, rounded path loops out.
//!
//! The kernel is a pure function of `(rectangles, config)`; nothing outlives
//! one invocation and identical inputs give bit-identical outputs, so
//! repeated high-frequency calls (resize, scroll) need no locking and no
//! cache.

use crate::boundary::{build_graph, trace_loops, Loop};
use crate::corners::find_extremes;
use crate::error::OutlineError;
use crate::geom::{ingest, OutlineCfg, Rect};
use crate::path::OutlinePath;
use crate::smooth::smooth_loop;

/// Trace the union boundary of `rects` as raw corner loops (no smoothing).
///
/// Empty input, or input where every rectangle is degenerate, yields zero
/// loops.
pub fn union_loops(rects: &[Rect], cfg: &OutlineCfg) -> Result<Vec<Loop>, OutlineError> {
    let cfg = cfg.sanitized();
    let grid = ingest(rects, &cfg)?;
    if grid.is_empty() {
        return Ok(Vec::new());
    }
    let graph = build_graph(&grid);
    trace_loops(&graph, cfg.scale())
}

/// Full kernel: union boundary plus adaptive corner rounding.
///
/// Returns one command sequence per closed loop, outer contours and holes
/// alike, with winding preserved.
pub fn compute_outline(
    rects: &[Rect],
    cfg: &OutlineCfg,
) -> Result<Vec<OutlinePath>, OutlineError> {
    let cfg = cfg.sanitized();
    let loops = union_loops(rects, &cfg)?;
    let extremes = find_extremes(&loops);
    Ok(loops
        .iter()
        .map(|lp| smooth_loop(lp, extremes.as_ref(), &cfg))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::rand::{draw_disjoint_rect_set, RectSetCfg, ReplayToken};
    use crate::geom::CornerSharpness;
    use crate::path::{PathCommand, Winding};
    use proptest::prelude::*;

    fn cfg0(radius: f64) -> OutlineCfg {
        OutlineCfg {
            corner_radius: radius,
            precision: 0,
            ..OutlineCfg::default()
        }
    }

    #[test]
    fn empty_input_yields_no_loops() {
        assert_eq!(compute_outline(&[], &OutlineCfg::default()).unwrap(), vec![]);
    }

    #[test]
    fn degenerate_rectangles_are_dropped_not_errors() {
        let rects = [Rect::new(10.0, 10.0, 10.0, 30.0), Rect::new(5.0, 5.0, 4.0, 9.0)];
        assert_eq!(compute_outline(&rects, &OutlineCfg::default()).unwrap(), vec![]);
    }

    #[test]
    fn non_finite_coordinate_is_invalid_input() {
        let rects = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(f64::NAN, 0.0, 10.0, 10.0),
        ];
        assert_eq!(
            compute_outline(&rects, &OutlineCfg::default()),
            Err(OutlineError::InvalidInput { index: 1 })
        );
    }

    #[test]
    fn out_of_range_config_is_clamped() {
        let rects = [Rect::new(0.0, 0.0, 40.0, 20.0)];
        let bad = OutlineCfg {
            corner_radius: -3.0,
            control_ratio: 7.5,
            ..cfg0(0.0)
        };
        // Negative radius behaves as zero: sharp corners only.
        let paths = compute_outline(&rects, &bad).unwrap();
        assert!(paths[0]
            .commands
            .iter()
            .all(|c| !matches!(c, PathCommand::CurveTo { .. })));
    }

    #[test]
    fn single_rectangle_outline_is_one_outer_loop() {
        let rects = [Rect::new(0.0, 0.0, 40.0, 20.0)];
        let paths = compute_outline(&rects, &cfg0(5.0)).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].winding, Winding::Outer);
        assert!(matches!(paths[0].commands.last(), Some(PathCommand::ClosePath)));
    }

    #[test]
    fn sharp_override_applies_at_pipeline_level() {
        let rects = [Rect::new(0.0, 0.0, 40.0, 20.0)];
        let cfg = OutlineCfg {
            sharpness: CornerSharpness {
                top_left: true,
                ..CornerSharpness::default()
            },
            ..cfg0(5.0)
        };
        let paths = compute_outline(&rects, &cfg).unwrap();
        let curves = paths[0]
            .commands
            .iter()
            .filter(|c| matches!(c, PathCommand::CurveTo { .. }))
            .count();
        assert_eq!(curves, 3);
    }

    #[test]
    fn disjoint_sets_give_one_loop_per_rectangle() {
        for index in 0..8 {
            let set_cfg = RectSetCfg {
                count: 9,
                ..RectSetCfg::default()
            };
            let rects = draw_disjoint_rect_set(set_cfg, ReplayToken { seed: 7, index });
            let loops = union_loops(&rects, &OutlineCfg::default()).unwrap();
            assert_eq!(loops.len(), 9);
            for lp in &loops {
                assert_eq!(lp.points.len(), 4);
            }
        }
    }

    #[test]
    fn svg_emission_of_a_sharp_rectangle() {
        let rects = [Rect::new(0.0, 0.0, 40.0, 20.0)];
        let paths = compute_outline(&rects, &cfg0(0.0)).unwrap();
        let svg = paths[0].to_svg_path();
        assert!(svg.starts_with("M "));
        assert!(svg.ends_with('Z'));
        assert!(!svg.contains('C'));
    }

    fn arbitrary_rects() -> impl Strategy<Value = Vec<Rect>> {
        prop::collection::vec(
            (0i64..60, 0i64..60, 1i64..25, 1i64..25).prop_map(|(x, y, w, h)| {
                Rect::new(x as f64, y as f64, (x + w) as f64, (y + h) as f64)
            }),
            0..8,
        )
    }

    proptest! {
        #[test]
        fn kernel_is_idempotent(rects in arbitrary_rects()) {
            let cfg = OutlineCfg::default();
            let a = compute_outline(&rects, &cfg).unwrap();
            let b = compute_outline(&rects, &cfg).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn zero_radius_never_emits_curves(rects in arbitrary_rects()) {
            let paths = compute_outline(&rects, &cfg0(0.0)).unwrap();
            for p in &paths {
                let no_curves = p
                    .commands
                    .iter()
                    .all(|c| !matches!(c, PathCommand::CurveTo { .. }));
                prop_assert!(no_curves);
            }
        }
    }
}
