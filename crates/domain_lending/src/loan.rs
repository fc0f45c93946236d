//! Loan records
//!
//! A loan is an approved, disbursed credit record derived from an
//! application. Loans are created by an out-of-scope process; this service
//! only reads and lists them, so the status stays as the stored string.

use chrono::{DateTime, Utc};

/// A disbursed loan, read-only in this service
#[derive(Debug, Clone, PartialEq)]
pub struct Loan {
    pub id: i64,
    pub application_id: i64,
    pub user_id: i64,
    pub currency_code: String,
    pub vehicle_vin: String,
    /// Principal amount in minor units
    pub amount: i64,
    pub term_months: i32,
    pub monthly_payment: i64,
    pub remaining_balance: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
