//! Port error type shared by all adapters
//!
//! Repositories and partner clients both report failures through
//! [`PortError`], so the orchestrator can distinguish "no such record" from
//! everything else without knowing which adapter it is talking to.

use std::fmt;
use thiserror::Error;

/// Unified error type for repository and partner-client operations
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("{entity} with id {id} not found")]
    NotFound { entity: String, id: String },

    /// The underlying system failed or was unreachable
    #[error("{message}")]
    Unavailable { message: String },
}

impl PortError {
    pub fn not_found(entity: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        PortError::Unavailable {
            message: message.into(),
        }
    }

    /// Whether this failure means the record simply does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}
