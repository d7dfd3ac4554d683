//! # VectorKit
//!
//! A pure, deterministic 2D vector-geometry engine:
//! - A rectangle/affine-transform algebra for bounding-box computation,
//!   hit-testing coordinate mapping, alignment, and scaling
//! - A normalizer that turns a stream of absolute path-drawing commands
//!   into a graph-based shape representation (vector network)
//!
//! ## Architecture
//!
//! VectorKit is organized as a workspace with two crates:
//!
//! 1. **vectorkit-core** - Scalars, 2D vectors, 2×3 affine transforms,
//!    and the rectangle algebra (union, intersection, containment,
//!    alignment, relative-transform solver)
//! 2. **vectorkit-path** - The vector network model and the path-command
//!    normalizer built on top of the core algebra
//!
//! Every operation is a synchronous, side-effect-free computation over
//! immutable value types; the library performs no I/O and installs no
//! global state, so it can be called concurrently from any number of
//! threads and embedded behind a process or WASM boundary. All public
//! value types serialize to a stable JSON shape via `serde`.
//!
//! ## Example
//!
//! ```
//! use vectorkit::{normalize, PathCommand, Rectangle};
//!
//! let network = normalize(&[
//!     PathCommand::MoveTo { x: 0.0, y: 0.0 },
//!     PathCommand::LineTo { x: 10.0, y: 0.0 },
//!     PathCommand::LineTo { x: 10.0, y: 10.0 },
//!     PathCommand::ClosePath,
//! ])?;
//!
//! assert_eq!(network.bbox_approx()?, Rectangle::new(0.0, 0.0, 10.0, 10.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use vectorkit_core as core;
pub use vectorkit_path as path;

pub use vectorkit_core::{
    align, AffineTransform, Alignment, AxisAlign, GeometryError, NinePoints, Rectangle, Sides,
    Vector2,
};

pub use vectorkit_path::{
    normalize, PathCommand, PathError, UnsupportedPathCommand, VectorNetwork,
    VectorNetworkSegment, VectorNetworkVertex,
};
