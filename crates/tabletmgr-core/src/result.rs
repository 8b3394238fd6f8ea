//! Convenience result type alias for tabletmgr.

use crate::error::AppError;

/// A specialized `Result` type for tabletmgr operations.
pub type AppResult<T> = Result<T, AppError>;
