//! Request/Response data transfer objects
//!
//! Boundary conventions: 64-bit identifiers travel as decimal strings,
//! timestamps as RFC 3339 UTC with second precision, field names in
//! camelCase. Every response embeds the status envelope.

pub mod applications;
pub mod calculate;
pub mod loans;
pub mod payments;
pub mod vehicles;

use chrono::{DateTime, SecondsFormat, Utc};

/// Serializes a boundary timestamp: fixed, sortable RFC 3339 in UTC
pub(crate) fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}
