//! Financing calculation handler

use axum::{extract::State, Json};

use crate::dto::calculate::{CalculateRequest, CalculateResponse};
use crate::AppState;

/// Computes a financing quote. Pure arithmetic, no storage involved.
pub async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<CalculateRequest>,
) -> Json<CalculateResponse> {
    match state.service.calculate(
        request.price,
        request.down_payment,
        request.term_months,
        request.margin_rate,
    ) {
        Ok(quote) => Json(CalculateResponse::ok(quote)),
        Err(err) => Json(CalculateResponse::failed(&err)),
    }
}
