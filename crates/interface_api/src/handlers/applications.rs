//! Loan application handlers

use std::str::FromStr;

use axum::{extract::State, Json};

use core_kernel::{parse_id, ServiceError};
use domain_lending::{ApplicationKind, ApplicationStatus, NewApplication};

use crate::dto::applications::{
    CreateApplicationRequest, CreateApplicationResponse, GetApplicationRequest,
    GetApplicationResponse, ListApplicationsRequest, ListApplicationsResponse,
};
use crate::AppState;

/// Creates an application and forwards it to the vehicle partner.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateApplicationRequest>,
) -> Json<CreateApplicationResponse> {
    let draft = match draft_from(request) {
        Ok(draft) => draft,
        Err(err) => return Json(CreateApplicationResponse::failed(&err)),
    };

    match state.service.create_application(draft).await {
        Ok(created) => Json(CreateApplicationResponse::ok(&created)),
        Err(err) => Json(CreateApplicationResponse::failed(&err)),
    }
}

pub async fn get(
    State(state): State<AppState>,
    Json(request): Json<GetApplicationRequest>,
) -> Json<GetApplicationResponse> {
    let id = match parse_id("id", &request.id) {
        Ok(id) => id,
        Err(err) => return Json(GetApplicationResponse::failed(&err)),
    };

    match state.service.get_application(id).await {
        Ok(application) => Json(GetApplicationResponse::ok(&application)),
        Err(err) => Json(GetApplicationResponse::failed(&err)),
    }
}

pub async fn list(
    State(state): State<AppState>,
    Json(request): Json<ListApplicationsRequest>,
) -> Json<ListApplicationsResponse> {
    let user_id = match parse_id("userId", &request.user_id) {
        Ok(id) => id,
        Err(err) => return Json(ListApplicationsResponse::failed(&err)),
    };

    match state
        .service
        .list_applications(user_id, request.page.as_ref())
        .await
    {
        Ok(result) => Json(ListApplicationsResponse::ok(&result.items, result.page)),
        Err(err) => Json(ListApplicationsResponse::failed(&err)),
    }
}

/// Validates the wire request into an insertable draft. The status the
/// caller cannot influence; the orchestrator forces it to `NEW` anyway.
fn draft_from(request: CreateApplicationRequest) -> Result<NewApplication, ServiceError> {
    let user_id = parse_id("userId", &request.user_id)?;
    let kind = ApplicationKind::from_str(&request.kind)
        .map_err(|_| ServiceError::invalid_argument(format!("invalid type {:?}", request.kind)))?;

    Ok(NewApplication {
        user_id,
        kind,
        vehicle_vin: request.vehicle_vin,
        vehicle_name: request.vehicle_name,
        currency_code: request.currency_code,
        price: request.price,
        down_payment: request.down_payment,
        net_price: request.net_price,
        margin_rate: request.margin_rate,
        term_months: request.term_months,
        monthly_payment: request.monthly_payment,
        status: ApplicationStatus::New,
    })
}
