use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum BackofficeError {
    /// Update/delete target absent; surfaced to the caller, not retried
    #[error("User {0} not found")]
    UserNotFound(String),

    /// Uniqueness violation on the email column
    #[error("Email {0} already registered")]
    EmailAlreadyRegistered(String),

    /// Malformed request shape at the boundary
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Catch-all for unexpected failures
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl From<sqlx::Error> for BackofficeError {
    fn from(err: sqlx::Error) -> Self {
        BackofficeError::DatabaseError(err.to_string())
    }
}
