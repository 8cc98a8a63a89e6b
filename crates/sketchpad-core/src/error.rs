//! Error types for canvas operations.

use thiserror::Error;

/// Canvas errors.
///
/// None of these are fatal: callers inside the crate log them and leave the
/// shape list untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("Shape index {index} out of range (list holds {len} shapes)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for canvas operations.
pub type CanvasResult<T> = Result<T, CanvasError>;
