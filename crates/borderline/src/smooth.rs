//! Adaptive corner rounding: corner loops → cubic-bezier command sequences.
//!
//! Model
//! - Per edge, anchor points sit `min(radius, len/2)` from each endpoint and
//!   control points at `control_ratio` of that distance, so adjacent corners
//!   never overlap on short edges.
//! - A corner is the curve joining one edge's end anchor to the next edge's
//!   start anchor. Edges shorter than the radius are dropped and their two
//!   corners merge into a single curve.
//! - Merged corners can leave the two control directions anti-parallel (a
//!   thin ledge); with `skip_small_ledges` set, both controls are re-aimed
//!   using the anchor-to-anchor displacement so the curve cannot cross
//!   itself.
//! - A corner covering exactly one vertex that is a flagged global extreme
//!   stays a right angle; `corner_radius == 0` keeps every corner sharp.

use nalgebra::Vector2;

use crate::boundary::Loop;
use crate::corners::ExtremeCorners;
use crate::geom::OutlineCfg;
use crate::path::{OutlinePath, PathCommand, Winding};

type Vec2 = Vector2<f64>;

/// Per-edge rounding geometry in input units.
struct EdgeCurve {
    len: f64,
    /// Unit direction of travel along the loop.
    u: Vec2,
    start_anchor: Vec2,
    start_ctrl: Vec2,
    end_ctrl: Vec2,
    end_anchor: Vec2,
}

enum JointKind {
    /// Right angle through the vertex.
    Sharp(Vec2),
    Curve { c1: Vec2, c2: Vec2, to: Vec2 },
    /// Coincident anchors; the corner contributes no command of its own.
    Collapsed,
}

/// One corner between two surviving edges: the straight lead-in plus the
/// corner command.
struct Joint {
    lead: Vec2,
    kind: JointKind,
}

impl Joint {
    fn end_point(&self) -> Vec2 {
        match self.kind {
            JointKind::Sharp(v) => v,
            JointKind::Curve { to, .. } => to,
            JointKind::Collapsed => self.lead,
        }
    }
}

/// Convert one traced loop into its rounded command sequence.
///
/// `cfg` must already be sanitized; `extremes` are the global extreme corners
/// of the whole arrangement (shared across loops).
pub fn smooth_loop(lp: &Loop, extremes: Option<&ExtremeCorners>, cfg: &OutlineCfg) -> OutlinePath {
    let winding = if lp.signed_area2() >= 0 {
        Winding::Outer
    } else {
        Winding::Hole
    };
    let scale = cfg.scale();
    let pts: Vec<Vec2> = lp.points.iter().map(|p| p.to_vec2(scale)).collect();
    let n = pts.len();
    let r = cfg.corner_radius;
    let ratio = cfg.control_ratio;

    let edges: Vec<EdgeCurve> = (0..n)
        .map(|k| {
            let a = pts[k];
            let b = pts[(k + 1) % n];
            let len = (b - a).norm();
            let u = (b - a) / len;
            let reach = r.min(len / 2.0);
            EdgeCurve {
                len,
                u,
                start_anchor: a + u * reach,
                start_ctrl: a + u * (reach * ratio),
                end_ctrl: b - u * (reach * ratio),
                end_anchor: b - u * reach,
            }
        })
        .collect();

    // Edges too short for the radius are merged away, unless that would
    // leave the loop without a corner pair to round.
    let kept: Vec<usize> = if r > 0.0 {
        let kept: Vec<usize> = (0..n).filter(|&k| edges[k].len >= r).collect();
        if kept.len() >= 2 {
            kept
        } else {
            (0..n).collect()
        }
    } else {
        (0..n).collect()
    };

    let m = kept.len();
    let mut joints: Vec<Joint> = Vec::with_capacity(m);
    for j in 0..m {
        let e = kept[j];
        let e2 = kept[(j + 1) % m];
        let lead = edges[e].end_anchor;
        let single = (e + 1) % n == e2;
        let vertex = (e + 1) % n;
        let kind = if r == 0.0
            || (single
                && extremes.is_some_and(|x| x.is_sharp(lp.points[vertex], cfg.sharpness)))
        {
            JointKind::Sharp(pts[vertex])
        } else {
            let to = edges[e2].start_anchor;
            if to == lead {
                JointKind::Collapsed
            } else {
                let mut c1 = edges[e].end_ctrl;
                let mut c2 = edges[e2].start_ctrl;
                let d_start = edges[e].u;
                let d_end = -edges[e2].u;
                if cfg.skip_small_ledges && is_ledge(d_start, d_end) {
                    // Re-aim both controls from the anchor-to-anchor
                    // displacement instead of the per-edge radius.
                    let ddx = (lead.x - to.x).abs();
                    let ddy = (lead.y - to.y).abs();
                    c1 = Vec2::new(lead.x + d_start.x * ratio * ddx, lead.y + d_start.y * ratio * ddy);
                    c2 = Vec2::new(to.x - d_end.x * ratio * ddx, to.y - d_end.y * ratio * ddy);
                }
                JointKind::Curve { c1, c2, to }
            }
        };
        joints.push(Joint { lead, kind });
    }

    let mut commands = Vec::with_capacity(2 * m + 2);
    commands.push(PathCommand::MoveTo(joints[m - 1].end_point()));
    for joint in &joints {
        commands.push(PathCommand::LineTo(joint.lead));
        match joint.kind {
            JointKind::Sharp(v) => commands.push(PathCommand::LineTo(v)),
            JointKind::Curve { c1, c2, to } => {
                commands.push(PathCommand::CurveTo { c1, c2, to })
            }
            JointKind::Collapsed => {}
        }
    }
    commands.push(PathCommand::ClosePath);
    OutlinePath { commands, winding }
}

/// Zero-respecting sign, unlike `f64::signum` which maps ±0 to ±1.
#[inline]
fn sign(v: f64) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Anti-parallel control directions: the sign pattern disagrees on exactly
/// one axis (the other axis is zero for both, the edges being axis-aligned).
#[inline]
fn is_ledge(d_start: Vec2, d_end: Vec2) -> bool {
    (sign(d_start.x) == sign(d_end.x)) != (sign(d_start.y) == sign(d_end.y))
}
