//! Payment records
//!
//! Payments against a loan, recorded by an out-of-scope process and only
//! listed here.

use chrono::{DateTime, Utc};

/// A recorded payment against a loan, read-only in this service
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i64,
    pub loan_id: i64,
    pub currency_code: String,
    pub payment_date: DateTime<Utc>,
    /// Amount in minor units
    pub amount: i64,
    pub method: String,
    pub status: String,
    pub transaction_id: String,
    pub created_at: DateTime<Utc>,
}
