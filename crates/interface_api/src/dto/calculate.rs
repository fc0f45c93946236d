//! Pricing calculation DTOs

use serde::{Deserialize, Serialize};

use core_kernel::pricing::Quote;
use core_kernel::ServiceError;

use crate::envelope::StatusEnvelope;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    pub price: i64,
    pub down_payment: i64,
    pub term_months: i32,
    pub margin_rate: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub net_price: i64,
    pub monthly_payment: i64,
    pub total_amount: i64,
    pub status: StatusEnvelope,
}

impl CalculateResponse {
    pub fn ok(quote: Quote) -> Self {
        Self {
            net_price: quote.net_price,
            monthly_payment: quote.monthly_payment,
            total_amount: quote.total_amount,
            status: StatusEnvelope::ok(),
        }
    }

    pub fn failed(err: &ServiceError) -> Self {
        Self {
            net_price: 0,
            monthly_payment: 0,
            total_amount: 0,
            status: err.into(),
        }
    }
}
