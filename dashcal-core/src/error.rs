//! Error types for dashcal.

use thiserror::Error;

/// Errors that can occur in dashcal operations.
#[derive(Error, Debug)]
pub enum DashCalError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid event id: {0}")]
    InvalidEventId(String),

    #[error("Invalid department id: {0}")]
    InvalidDepartmentId(String),

    #[error("Preference store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for dashcal operations.
pub type DashCalResult<T> = Result<T, DashCalError>;
