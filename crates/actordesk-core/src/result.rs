//! Convenience result type alias for ActorDesk.

use crate::error::AppError;

/// A specialized `Result` type for ActorDesk operations.
pub type AppResult<T> = Result<T, AppError>;
