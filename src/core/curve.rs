use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::layout::ProjectedPoint;

/// One step of a stroked chart path in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    CubicTo {
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    },
}

/// Command buffer for one chart path. Series lengths are screen-bounded, so
/// short paths stay inline.
pub type PathCommands = SmallVec<[PathCommand; 16]>;

/// Builds the smoothed curve through the projected samples.
///
/// Each segment is a cubic with both control points at the horizontal
/// midpoint, the first at the outgoing y and the second at the incoming y.
/// That yields a smoothed step-like interpolation rather than a general
/// spline fit; the shape is intentional. Fewer than two points produce an
/// empty path.
#[must_use]
pub fn build_path(points: &[ProjectedPoint]) -> PathCommands {
    let mut commands = PathCommands::new();
    if points.len() < 2 {
        return commands;
    }

    commands.push(PathCommand::MoveTo {
        x: points[0].x,
        y: points[0].y,
    });

    for pair in points.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        let control_x = (p0.x + p1.x) / 2.0;
        commands.push(PathCommand::CubicTo {
            c1x: control_x,
            c1y: p0.y,
            c2x: control_x,
            c2y: p1.y,
            x: p1.x,
            y: p1.y,
        });
    }

    commands
}
