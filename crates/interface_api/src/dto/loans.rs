//! Loan DTOs

use serde::{Deserialize, Serialize};

use core_kernel::paging::{PageInfo, PageRequest};
use core_kernel::{encode_id, ServiceError};
use domain_lending::Loan;

use crate::dto::format_timestamp;
use crate::envelope::StatusEnvelope;

/// Wire representation of a loan
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDto {
    pub id: String,
    pub application_id: String,
    pub user_id: String,
    pub currency_code: String,
    pub vehicle_vin: String,
    pub amount: i64,
    pub term_months: i32,
    pub monthly_payment: i64,
    pub remaining_balance: i64,
    pub status: String,
    pub created_at: String,
}

impl From<&Loan> for LoanDto {
    fn from(loan: &Loan) -> Self {
        Self {
            id: encode_id(loan.id),
            application_id: encode_id(loan.application_id),
            user_id: encode_id(loan.user_id),
            currency_code: loan.currency_code.clone(),
            vehicle_vin: loan.vehicle_vin.clone(),
            amount: loan.amount,
            term_months: loan.term_months,
            monthly_payment: loan.monthly_payment,
            remaining_balance: loan.remaining_balance,
            status: loan.status.clone(),
            created_at: format_timestamp(loan.created_at),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLoanRequest {
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLoanResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan: Option<LoanDto>,
    pub status: StatusEnvelope,
}

impl GetLoanResponse {
    pub fn ok(loan: &Loan) -> Self {
        Self {
            loan: Some(loan.into()),
            status: StatusEnvelope::ok(),
        }
    }

    pub fn failed(err: &ServiceError) -> Self {
        Self {
            loan: None,
            status: err.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListLoansRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub page: Option<PageRequest>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListLoansResponse {
    pub loans: Vec<LoanDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageInfo>,
    pub status: StatusEnvelope,
}

impl ListLoansResponse {
    pub fn ok(items: &[Loan], page: PageInfo) -> Self {
        Self {
            loans: items.iter().map(LoanDto::from).collect(),
            page: Some(page),
            status: StatusEnvelope::ok(),
        }
    }

    pub fn failed(err: &ServiceError) -> Self {
        Self {
            loans: Vec::new(),
            page: None,
            status: err.into(),
        }
    }
}
