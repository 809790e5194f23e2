use thiserror::Error;

use crate::slots::InvalidRangeError;

#[derive(Error, Debug)]
pub enum PlacementError {
    #[error(transparent)]
    InvalidRange(#[from] InvalidRangeError),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(#[from] eyre::Report),
}

pub type PlacementResult<T> = Result<T, PlacementError>;
