//! Loan handlers

use axum::{extract::State, Json};

use core_kernel::parse_id;

use crate::dto::loans::{GetLoanRequest, GetLoanResponse, ListLoansRequest, ListLoansResponse};
use crate::AppState;

pub async fn get(
    State(state): State<AppState>,
    Json(request): Json<GetLoanRequest>,
) -> Json<GetLoanResponse> {
    let id = match parse_id("id", &request.id) {
        Ok(id) => id,
        Err(err) => return Json(GetLoanResponse::failed(&err)),
    };

    match state.service.get_loan(id).await {
        Ok(loan) => Json(GetLoanResponse::ok(&loan)),
        Err(err) => Json(GetLoanResponse::failed(&err)),
    }
}

pub async fn list(
    State(state): State<AppState>,
    Json(request): Json<ListLoansRequest>,
) -> Json<ListLoansResponse> {
    let user_id = match parse_id("userId", &request.user_id) {
        Ok(id) => id,
        Err(err) => return Json(ListLoansResponse::failed(&err)),
    };

    match state.service.list_loans(user_id, request.page.as_ref()).await {
        Ok(result) => Json(ListLoansResponse::ok(&result.items, result.page)),
        Err(err) => Json(ListLoansResponse::failed(&err)),
    }
}
