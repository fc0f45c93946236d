//! Loan application records
//!
//! An application is the pre-underwriting record a user files for financing.
//! Storage assigns identifiers; callers never supply them. The record also
//! doubles as the partner submission body, so it serializes with the
//! camelCase field names the partner contract expects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What is being financed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApplicationKind {
    Auto,
    Personal,
}

impl ApplicationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationKind::Auto => "AUTO",
            ApplicationKind::Personal => "PERSONAL",
        }
    }
}

impl fmt::Display for ApplicationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AUTO" => Ok(ApplicationKind::Auto),
            "PERSONAL" => Ok(ApplicationKind::Personal),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Lifecycle state of an application
///
/// Transitions (`NEW` -> `REVIEW` -> `APPROVED`/`REJECTED`) are driven by an
/// external process; this service only ever writes `NEW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApplicationStatus {
    New,
    Review,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::New => "NEW",
            ApplicationStatus::Review => "REVIEW",
            ApplicationStatus::Approved => "APPROVED",
            ApplicationStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(ApplicationStatus::New),
            "REVIEW" => Ok(ApplicationStatus::Review),
            "APPROVED" => Ok(ApplicationStatus::Approved),
            "REJECTED" => Ok(ApplicationStatus::Rejected),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// A stored value did not match any known enum variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant {0:?}")]
pub struct UnknownVariant(pub String);

/// A stored loan application
///
/// Monetary fields are integer minor units; `margin_rate` is a percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub kind: ApplicationKind,
    pub vehicle_vin: Option<String>,
    pub vehicle_name: Option<String>,
    pub currency_code: String,
    pub price: i64,
    pub down_payment: i64,
    pub net_price: i64,
    pub margin_rate: f64,
    pub term_months: i32,
    pub monthly_payment: i64,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating an application; the id and timestamps come from
/// storage, and the orchestrator forces the status to `NEW` before insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub user_id: i64,
    pub kind: ApplicationKind,
    pub vehicle_vin: Option<String>,
    pub vehicle_name: Option<String>,
    pub currency_code: String,
    pub price: i64,
    pub down_payment: i64,
    pub net_price: i64,
    pub margin_rate: f64,
    pub term_months: i32,
    pub monthly_payment: i64,
    pub status: ApplicationStatus,
}
