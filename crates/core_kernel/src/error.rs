//! Service error taxonomy
//!
//! Business failures are values in the response envelope, never transport
//! faults. Each variant carries the human-readable description that ends up
//! in the envelope next to its numeric code.

use thiserror::Error;

use crate::ports::PortError;

/// Envelope code for a successful operation
pub const CODE_OK: u32 = 0;

/// The three business failure classes every operation can report
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// A required identifying field is missing or malformed (code 1)
    #[error("{0}")]
    InvalidArgument(String),

    /// No matching record exists (code 2)
    #[error("{0}")]
    NotFound(String),

    /// A data-access or partner-call failure, or an unexpected condition
    /// (code 5)
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ServiceError::InvalidArgument(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ServiceError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ServiceError::Internal(message.into())
    }

    /// The numeric envelope code for this failure class
    pub fn code(&self) -> u32 {
        match self {
            ServiceError::InvalidArgument(_) => 1,
            ServiceError::NotFound(_) => 2,
            ServiceError::Internal(_) => 5,
        }
    }

    /// Maps an adapter failure on a get-by-id path, where an absent row is
    /// a distinct outcome from any other failure.
    pub fn from_port(err: PortError, not_found_message: &str) -> Self {
        match err {
            PortError::NotFound { .. } => ServiceError::not_found(not_found_message),
            other => ServiceError::internal(other.to_string()),
        }
    }
}
