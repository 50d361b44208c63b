use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed field in the request payload.
    Validation(String),
    /// Same composite key accepted within the cooldown window.
    Duplicate(String),
    /// SMTP hand-off failed. The underlying error text is echoed back to the
    /// client; callers rely on seeing it, so it is not masked here.
    Transport(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation: {msg}"),
            AppError::Duplicate(msg) => write!(f, "Duplicate: {msg}"),
            AppError::Transport(msg) => write!(f, "Transport: {msg}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Duplicate(msg) => (StatusCode::TOO_MANY_REQUESTS, msg),
            AppError::Transport(msg) => {
                tracing::error!("Mail transport error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = json!({ "success": false, "message": message });
        (status, Json(body)).into_response()
    }
}
