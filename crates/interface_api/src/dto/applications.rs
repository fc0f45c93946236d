//! Loan application DTOs

use serde::{Deserialize, Serialize};

use core_kernel::paging::{PageInfo, PageRequest};
use core_kernel::{encode_id, ServiceError};
use domain_lending::LoanApplication;

use crate::dto::format_timestamp;
use crate::envelope::StatusEnvelope;

/// Wire representation of a stored application
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub vehicle_vin: String,
    pub vehicle_name: String,
    pub currency_code: String,
    pub price: i64,
    pub down_payment: i64,
    pub net_price: i64,
    pub margin_rate: f64,
    pub term_months: i32,
    pub monthly_payment: i64,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&LoanApplication> for ApplicationDto {
    fn from(app: &LoanApplication) -> Self {
        Self {
            id: encode_id(app.id),
            user_id: encode_id(app.user_id),
            kind: app.kind.as_str().to_string(),
            vehicle_vin: app.vehicle_vin.clone().unwrap_or_default(),
            vehicle_name: app.vehicle_name.clone().unwrap_or_default(),
            currency_code: app.currency_code.clone(),
            price: app.price,
            down_payment: app.down_payment,
            net_price: app.net_price,
            margin_rate: app.margin_rate,
            term_months: app.term_months,
            monthly_payment: app.monthly_payment,
            status: app.status.as_str().to_string(),
            created_at: format_timestamp(app.created_at),
            updated_at: format_timestamp(app.updated_at),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub vehicle_vin: Option<String>,
    #[serde(default)]
    pub vehicle_name: Option<String>,
    pub currency_code: String,
    pub price: i64,
    pub down_payment: i64,
    pub net_price: i64,
    pub margin_rate: f64,
    pub term_months: i32,
    pub monthly_payment: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<ApplicationDto>,
    pub status: StatusEnvelope,
}

impl CreateApplicationResponse {
    pub fn ok(app: &LoanApplication) -> Self {
        Self {
            application: Some(app.into()),
            status: StatusEnvelope::ok(),
        }
    }

    pub fn failed(err: &ServiceError) -> Self {
        Self {
            application: None,
            status: err.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetApplicationRequest {
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetApplicationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<ApplicationDto>,
    pub status: StatusEnvelope,
}

impl GetApplicationResponse {
    pub fn ok(app: &LoanApplication) -> Self {
        Self {
            application: Some(app.into()),
            status: StatusEnvelope::ok(),
        }
    }

    pub fn failed(err: &ServiceError) -> Self {
        Self {
            application: None,
            status: err.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListApplicationsRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub page: Option<PageRequest>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListApplicationsResponse {
    pub applications: Vec<ApplicationDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageInfo>,
    pub status: StatusEnvelope,
}

impl ListApplicationsResponse {
    pub fn ok(items: &[LoanApplication], page: PageInfo) -> Self {
        Self {
            applications: items.iter().map(ApplicationDto::from).collect(),
            page: Some(page),
            status: StatusEnvelope::ok(),
        }
    }

    pub fn failed(err: &ServiceError) -> Self {
        Self {
            applications: Vec::new(),
            page: None,
            status: err.into(),
        }
    }
}
