use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use super::ApiResponse;
use crate::email::OutgoingMail;
use crate::email::templates;
use crate::error::AppError;
use crate::parser;
use crate::state::SharedState;
use crate::validate;

pub async fn submit(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ApiResponse>, AppError> {
    let data = parser::parse_json(&body)?;

    if let Some(field) = validate::missing_field(&data, &["name", "email", "message"]) {
        return Err(AppError::Validation(format!(
            "{} is required.",
            validate::capitalize(field)
        )));
    }

    let name = data["name"].as_str().unwrap_or("Unknown");
    let reply_to = data["email"].as_str().map(|s| s.to_string());

    let mail = OutgoingMail {
        to: state.config.recipients.contact.clone(),
        reply_to,
        subject: format!("New Contact Form Submission from {name}"),
        html_body: templates::render_contact(&data),
        attachment: None,
    };

    state
        .mailer
        .send(mail)
        .await
        .map_err(|e| AppError::Transport(format!("Failed to send message: {e}")))?;

    tracing::info!("Contact form forwarded for {name}");

    Ok(Json(ApiResponse::ok(
        "Thank you for your message! We will get back to you soon.",
    )))
}
