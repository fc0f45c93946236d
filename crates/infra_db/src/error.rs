//! Database error types and port-error mapping

use thiserror::Error;

use core_kernel::PortError;

/// Errors raised while setting up database infrastructure
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("failed to connect to database: {0}")]
    ConnectionFailed(String),
}

/// Maps a query error to the unified port error the domain sees.
///
/// `RowNotFound` is the one signal the orchestrator treats differently
/// (envelope code 2); everything else surfaces as `Unavailable`.
pub fn to_port_error(err: sqlx::Error, entity: &str, id: i64) -> PortError {
    match err {
        sqlx::Error::RowNotFound => PortError::not_found(entity, id),
        other => PortError::unavailable(format!("{entity} query failed: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err = to_port_error(sqlx::Error::RowNotFound, "loan", 3);
        assert!(err.is_not_found());
    }

    #[test]
    fn other_errors_map_to_unavailable() {
        let err = to_port_error(sqlx::Error::PoolTimedOut, "loan", 3);
        assert!(!err.is_not_found());
    }
}
