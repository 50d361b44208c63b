mod apply;
mod contact;
mod downloads;
mod health;

use axum::Router;
use axum::routing::{get, post};
use serde::Serialize;

use crate::state::SharedState;

/// Uniform response body for the form endpoints.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/contact", post(contact::submit))
        .route("/api/apply", post(apply::submit))
        .route("/api/downloads/request", post(downloads::submit))
        .route("/api/health", get(health::check))
}
