//! Vehicle listing handler

use axum::{extract::State, Json};

use crate::dto::vehicles::ListVehiclesResponse;
use crate::AppState;

/// Proxies the partner vehicle catalogue. The request body carries no
/// parameters; the whole catalogue comes back in one response.
pub async fn list(State(state): State<AppState>) -> Json<ListVehiclesResponse> {
    match state.service.list_vehicles().await {
        Ok(vehicles) => Json(ListVehiclesResponse::ok(&vehicles)),
        Err(err) => Json(ListVehiclesResponse::failed(&err)),
    }
}
