//! Payment DTOs

use serde::{Deserialize, Serialize};

use core_kernel::paging::{PageInfo, PageRequest};
use core_kernel::{encode_id, ServiceError};
use domain_lending::Payment;

use crate::dto::format_timestamp;
use crate::envelope::StatusEnvelope;

/// Wire representation of a payment
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub id: String,
    pub loan_id: String,
    pub currency_code: String,
    pub payment_date: String,
    pub amount: i64,
    pub method: String,
    pub status: String,
    pub transaction_id: String,
    pub created_at: String,
}

impl From<&Payment> for PaymentDto {
    fn from(payment: &Payment) -> Self {
        Self {
            id: encode_id(payment.id),
            loan_id: encode_id(payment.loan_id),
            currency_code: payment.currency_code.clone(),
            payment_date: format_timestamp(payment.payment_date),
            amount: payment.amount,
            method: payment.method.clone(),
            status: payment.status.clone(),
            transaction_id: payment.transaction_id.clone(),
            created_at: format_timestamp(payment.created_at),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPaymentsRequest {
    #[serde(default)]
    pub loan_id: String,
    #[serde(default)]
    pub page: Option<PageRequest>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPaymentsResponse {
    pub payments: Vec<PaymentDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageInfo>,
    pub status: StatusEnvelope,
}

impl ListPaymentsResponse {
    pub fn ok(items: &[Payment], page: PageInfo) -> Self {
        Self {
            payments: items.iter().map(PaymentDto::from).collect(),
            page: Some(page),
            status: StatusEnvelope::ok(),
        }
    }

    pub fn failed(err: &ServiceError) -> Self {
        Self {
            payments: Vec::new(),
            page: None,
            status: err.into(),
        }
    }
}

/// Accepted for wire compatibility; payment creation is not implemented.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    #[serde(default)]
    pub loan_id: String,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub method: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentResponse {
    pub status: StatusEnvelope,
}
