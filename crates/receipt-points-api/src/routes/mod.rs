//! API route handlers

pub mod health;
pub mod receipt;

use axum::{routing::get, routing::post, Router};

use crate::state::AppState;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/receipts/process", post(receipt::process_receipt))
        .route("/receipts/:id/points", get(receipt::get_points))
        .with_state(state)
}
