//! Convenience result type alias for GraphView.

use crate::error::AppError;

/// A specialized `Result` type for GraphView operations.
pub type AppResult<T> = Result<T, AppError>;
