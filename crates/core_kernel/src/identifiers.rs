//! Boundary identifier codec
//!
//! Domain identifiers are 64-bit integers; at the transport boundary they
//! travel as decimal strings. Parsing happens before any I/O, and an empty
//! string is reported differently from a malformed one.

use crate::error::ServiceError;

/// Parses a decimal-string identifier from the wire.
///
/// # Errors
///
/// - empty input: `InvalidArgument("{field} is required")`
/// - non-numeric input: `InvalidArgument("invalid {field} \"{raw}\"")`
pub fn parse_id(field: &str, raw: &str) -> Result<i64, ServiceError> {
    if raw.is_empty() {
        return Err(ServiceError::invalid_argument(format!("{field} is required")));
    }

    raw.parse::<i64>()
        .map_err(|_| ServiceError::invalid_argument(format!("invalid {field} {raw:?}")))
}

/// Encodes a domain identifier for the wire. Lossless for all of `i64`.
pub fn encode_id(id: i64) -> String {
    id.to_string()
}
