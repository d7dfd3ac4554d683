//! # VectorKit Path
//!
//! Vector network model and path-command normalizer.
//!
//! A vector network is a graph of anchor vertices and Bezier-capable
//! segments, the canonical shape representation consumed by an editor or
//! renderer. The normalizer turns an ordered stream of absolute
//! path-drawing commands into such a network; resolving relative commands
//! to absolute ones is an upstream collaborator's responsibility.

pub mod error;
pub mod network;
pub mod normalize;

pub use error::{PathError, Result};
pub use network::{VectorNetwork, VectorNetworkSegment, VectorNetworkVertex};
pub use normalize::{normalize, PathCommand, UnsupportedPathCommand};
