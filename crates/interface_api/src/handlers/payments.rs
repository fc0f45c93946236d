//! Payment handlers

use axum::{extract::State, Json};

use core_kernel::parse_id;

use crate::dto::payments::{
    CreatePaymentRequest, CreatePaymentResponse, ListPaymentsRequest, ListPaymentsResponse,
};
use crate::envelope::StatusEnvelope;
use crate::AppState;

pub async fn list(
    State(state): State<AppState>,
    Json(request): Json<ListPaymentsRequest>,
) -> Json<ListPaymentsResponse> {
    let loan_id = match parse_id("loanId", &request.loan_id) {
        Ok(id) => id,
        Err(err) => return Json(ListPaymentsResponse::failed(&err)),
    };

    match state
        .service
        .list_payments(loan_id, request.page.as_ref())
        .await
    {
        Ok(result) => Json(ListPaymentsResponse::ok(&result.items, result.page)),
        Err(err) => Json(ListPaymentsResponse::failed(&err)),
    }
}

/// Accepts the request and answers success without persisting anything.
/// Payment ingestion happens upstream; the route exists so clients built
/// against the full surface keep working.
pub async fn create(Json(_request): Json<CreatePaymentRequest>) -> Json<CreatePaymentResponse> {
    Json(CreatePaymentResponse {
        status: StatusEnvelope::ok(),
    })
}
