//! HTTP API layer
//!
//! RPC-style surface over the lending orchestrator: every operation is a
//! POST with a JSON body, and every response is HTTP 200 with the status
//! envelope embedded. Transport never signals business failures.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod envelope;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_lending::LendingService;

use crate::handlers::{applications, calculator, health, loans, payments, vehicles};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<LendingService>,
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/calculate", post(calculator::calculate))
        .route("/applications/create", post(applications::create))
        .route("/applications/get", post(applications::get))
        .route("/applications/list", post(applications::list))
        .route("/loans/get", post(loans::get))
        .route("/loans/list", post(loans::list))
        .route("/payments/list", post(payments::list))
        .route("/payments/create", post(payments::create))
        .route("/vehicles/list", post(vehicles::list));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
