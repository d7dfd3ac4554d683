//! Error handling for path-command normalization.

use thiserror::Error;

use crate::normalize::UnsupportedPathCommand;

/// Path normalization error type
///
/// Fail-fast: the normalizer never returns a partially-built network; on
/// error the whole conversion aborts. These are input errors, not
/// transient faults; the caller decides whether to skip the offending
/// shape, log it, or surface it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The command stream contained a command kind the normalizer does
    /// not handle
    #[error("Unsupported path command: {0:?}")]
    UnsupportedCommand(UnsupportedPathCommand),
}

/// Result type using PathError
pub type Result<T> = std::result::Result<T, PathError>;
