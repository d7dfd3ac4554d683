//! # VectorKit Core
//!
//! Scalar, vector, affine-transform, and rectangle algebra for VectorKit.
//! Provides the fundamental value types used across the workspace:
//! 2D vectors, 2×3 affine transforms, and axis-aligned rectangles with
//! their set algebra (union, intersection, containment, alignment).
//!
//! Everything here is a pure, synchronous computation over immutable value
//! types. No operation performs I/O or holds shared state, so every
//! function may be called concurrently without locks.

pub mod error;
pub mod rect;
pub mod transform;
pub mod vector2;

pub use error::{GeometryError, Result};
pub use rect::{align, Alignment, AxisAlign, NinePoints, Rectangle, Sides};
pub use transform::AffineTransform;
pub use vector2::Vector2;
