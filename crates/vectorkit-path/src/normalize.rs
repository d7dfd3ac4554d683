//! Path-command normalizer: absolute drawing commands in, vector network out.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use vectorkit_core::Vector2;

use crate::error::{PathError, Result};
use crate::network::{VectorNetwork, VectorNetworkSegment, VectorNetworkVertex};

/// An absolute path-drawing command.
///
/// The normalizer only handles the closed set below; recognized-but-
/// unhandled kinds travel as [`PathCommand::Unsupported`] so a stream can
/// be represented losslessly and rejected with a typed error at
/// normalization time rather than at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PathCommand {
    /// Start a new anchor without connecting it to any prior vertex.
    MoveTo { x: f64, y: f64 },
    /// Straight segment to `(x, y)`.
    LineTo { x: f64, y: f64 },
    /// Straight horizontal segment to `x`, keeping the current y.
    HorizontalLineTo { x: f64 },
    /// Straight vertical segment to `y`, keeping the current x.
    VerticalLineTo { y: f64 },
    /// Cubic Bezier to `(x, y)` with absolute control points
    /// `(x1, y1)` and `(x2, y2)`.
    CurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    /// Close the path with a straight segment back to the first vertex.
    ClosePath,
    /// A recognized command kind the normalizer rejects.
    Unsupported { command: UnsupportedPathCommand },
}

/// Command kinds the normalizer rejects with
/// [`PathError::UnsupportedCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedPathCommand {
    SmoothCurveTo,
    QuadraticCurveTo,
    SmoothQuadraticCurveTo,
    Arc,
}

/// Converts an ordered stream of absolute path commands into a
/// [`VectorNetwork`].
///
/// The conversion is a single pass holding only the last pen position:
/// `MoveTo` starts a new anchor, line and curve commands append a vertex
/// and, when a pen position exists, a segment from the previous vertex,
/// and `ClosePath` appends a straight segment from the last vertex back to
/// vertex 0. An empty stream yields an empty network.
///
/// Fails fast with [`PathError::UnsupportedCommand`] on the first
/// unsupported command; no partial network is returned.
pub fn normalize(commands: &[PathCommand]) -> Result<VectorNetwork> {
    let mut vertices: Vec<VectorNetworkVertex> = Vec::new();
    let mut segments: Vec<VectorNetworkSegment> = Vec::new();
    let mut last_point: Option<Vector2> = None;

    for command in commands {
        match *command {
            PathCommand::MoveTo { x, y } => {
                vertices.push(VectorNetworkVertex {
                    p: Vector2::new(x, y),
                });
                last_point = Some(Vector2::new(x, y));
            }
            PathCommand::LineTo { x, y } => {
                push_line(&mut vertices, &mut segments, last_point, Vector2::new(x, y));
                last_point = Some(Vector2::new(x, y));
            }
            PathCommand::HorizontalLineTo { x } => {
                // The missing coordinate comes from the pen; 0 when the
                // stream starts with a lone H/V command.
                let y = last_point.map_or(0.0, |p| p.y);
                push_line(&mut vertices, &mut segments, last_point, Vector2::new(x, y));
                last_point = Some(Vector2::new(x, y));
            }
            PathCommand::VerticalLineTo { y } => {
                let x = last_point.map_or(0.0, |p| p.x);
                push_line(&mut vertices, &mut segments, last_point, Vector2::new(x, y));
                last_point = Some(Vector2::new(x, y));
            }
            PathCommand::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let end = Vector2::new(x, y);
                let index = vertices.len();
                vertices.push(VectorNetworkVertex { p: end });
                if let Some(last) = last_point {
                    segments.push(VectorNetworkSegment {
                        a: index - 1,
                        b: index,
                        ta: Vector2::new(x1, y1) - last,
                        tb: Vector2::new(x2, y2) - end,
                    });
                }
                last_point = Some(end);
            }
            PathCommand::ClosePath => {
                // Always closes back to vertex 0, not to the start of the
                // current subpath. Known limitation for multi-subpath
                // streams; pinned by tests until subpath topology is
                // owned elsewhere.
                if vertices.len() > 1 {
                    segments.push(VectorNetworkSegment::line(vertices.len() - 1, 0));
                }
            }
            PathCommand::Unsupported { command } => {
                debug!(?command, "rejecting unsupported path command");
                return Err(PathError::UnsupportedCommand(command));
            }
        }
    }

    trace!(
        commands = commands.len(),
        vertices = vertices.len(),
        segments = segments.len(),
        "normalized path commands"
    );

    Ok(VectorNetwork { vertices, segments })
}

/// Appends a vertex at `end` and, when the pen is down, a straight
/// segment from the previous vertex.
fn push_line(
    vertices: &mut Vec<VectorNetworkVertex>,
    segments: &mut Vec<VectorNetworkSegment>,
    last_point: Option<Vector2>,
    end: Vector2,
) {
    let index = vertices.len();
    vertices.push(VectorNetworkVertex { p: end });
    if last_point.is_some() {
        segments.push(VectorNetworkSegment::line(index - 1, index));
    }
}
