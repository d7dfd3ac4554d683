//! Error handling for VectorKit geometry.
//!
//! The algebra is total over real numbers; the only failure mode is being
//! handed nothing to aggregate. NaN/Inf inputs are not rejected anywhere,
//! they propagate per IEEE-754.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Represents input errors in the rectangle algebra. These are programmer
/// or input errors, never transient faults, so there is no retry logic
/// anywhere in this layer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// An aggregate operation (bounding box, union) was given zero elements
    #[error("Cannot compute a bounding rectangle from an empty input")]
    EmptyInput,
}

/// Result type using GeometryError
pub type Result<T> = std::result::Result<T, GeometryError>;
