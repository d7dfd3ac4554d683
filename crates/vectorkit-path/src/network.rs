//! Vector network model: a vertex/segment graph with Bezier tangent
//! handles.

use serde::{Deserialize, Serialize};

use vectorkit_core::{Rectangle, Result, Vector2};

/// An anchor point in the network, referenced by index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorNetworkVertex {
    /// Anchor position.
    pub p: Vector2,
}

/// A cubic Bezier edge from vertex `a` to vertex `b`.
///
/// `ta` is the offset from `a` to its outgoing control point and `tb` the
/// offset from `b` to its incoming control point. Zero tangents on both
/// ends encode a straight line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorNetworkSegment {
    /// Index of the starting vertex.
    pub a: usize,
    /// Index of the ending vertex.
    pub b: usize,
    /// Tangent at the starting vertex, relative to the vertex.
    pub ta: Vector2,
    /// Tangent at the ending vertex, relative to the vertex.
    pub tb: Vector2,
}

impl VectorNetworkSegment {
    /// A straight segment between two vertices.
    pub const fn line(a: usize, b: usize) -> Self {
        Self {
            a,
            b,
            ta: Vector2::ZERO,
            tb: Vector2::ZERO,
        }
    }
}

/// A graph of vertices and Bezier-capable segments.
///
/// Vertices have no implicit ordering beyond index; segments define
/// connectivity and curvature.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VectorNetwork {
    pub vertices: Vec<VectorNetworkVertex>,
    pub segments: Vec<VectorNetworkSegment>,
}

impl VectorNetwork {
    /// A network of straight segments chaining the given points in order.
    pub fn polyline(points: &[Vector2]) -> VectorNetwork {
        let vertices = points.iter().map(|&p| VectorNetworkVertex { p }).collect();
        let segments = (1..points.len())
            .map(|i| VectorNetworkSegment::line(i - 1, i))
            .collect();
        VectorNetwork { vertices, segments }
    }

    /// Approximate axis-aligned bounding box over vertex anchor positions
    /// only.
    ///
    /// Named policy: Bezier curve extrema beyond the anchors are ignored,
    /// so a curve bulging past its anchors exceeds this box. Exact-extrema
    /// support can be added later under a different name without breaking
    /// callers that depend on this approximation.
    ///
    /// Fails with [`vectorkit_core::GeometryError::EmptyInput`] on a
    /// network with no vertices.
    pub fn bbox_approx(&self) -> Result<Rectangle> {
        let anchors: Vec<Vector2> = self.vertices.iter().map(|v| v.p).collect();
        Rectangle::from_points(&anchors)
    }

    /// A copy of the network with every vertex offset by `delta`.
    /// Tangents are relative to their vertices and are unaffected.
    pub fn translate(&self, delta: Vector2) -> VectorNetwork {
        VectorNetwork {
            vertices: self
                .vertices
                .iter()
                .map(|v| VectorNetworkVertex { p: v.p + delta })
                .collect(),
            segments: self.segments.clone(),
        }
    }
}
