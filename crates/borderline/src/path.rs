//! Path command model and serialization.
//!
//! The kernel's output is a sequence of loops, each an ordered command list
//! plus its winding. Rendering is the caller's concern; `to_svg_path` is the
//! one pure serialization kept here because the command syntax is
//! renderer-independent.

use std::fmt::Write as _;

use nalgebra::Vector2;

/// One drawing command. Coordinates are in input units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vector2<f64>),
    LineTo(Vector2<f64>),
    CurveTo {
        c1: Vector2<f64>,
        c2: Vector2<f64>,
        to: Vector2<f64>,
    },
    ClosePath,
}

/// Loop orientation: outer contours run clockwise on screen, holes are
/// reversed. Fill-rule interpretation is a rendering concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    Outer,
    Hole,
}

/// One closed loop of the final outline.
#[derive(Clone, Debug, PartialEq)]
pub struct OutlinePath {
    pub commands: Vec<PathCommand>,
    pub winding: Winding,
}

impl OutlinePath {
    /// SVG path-data rendition of the command list.
    pub fn to_svg_path(&self) -> String {
        let mut out = String::new();
        for cmd in &self.commands {
            if !out.is_empty() {
                out.push(' ');
            }
            match *cmd {
                PathCommand::MoveTo(p) => {
                    let _ = write!(out, "M {} {}", p.x, p.y);
                }
                PathCommand::LineTo(p) => {
                    let _ = write!(out, "L {} {}", p.x, p.y);
                }
                PathCommand::CurveTo { c1, c2, to } => {
                    let _ = write!(out, "C {} {}, {} {}, {} {}", c1.x, c1.y, c2.x, c2.y, to.x, to.y);
                }
                PathCommand::ClosePath => out.push('Z'),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    #[test]
    fn svg_serialization_round_numbers() {
        let path = OutlinePath {
            winding: Winding::Outer,
            commands: vec![
                PathCommand::MoveTo(Vector2::new(0.0, 0.0)),
                PathCommand::LineTo(Vector2::new(10.0, 0.0)),
                PathCommand::CurveTo {
                    c1: Vector2::new(12.0, 0.0),
                    c2: Vector2::new(14.0, 2.0),
                    to: Vector2::new(14.0, 4.0),
                },
                PathCommand::ClosePath,
            ],
        };
        assert_eq!(path.to_svg_path(), "M 0 0 L 10 0 C 12 0, 14 2, 14 4 Z");
    }
}
