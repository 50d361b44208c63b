use std::time::Instant;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use super::ApiResponse;
use crate::dedup::DedupCache;
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

    let email = data["email"].as_str().unwrap_or("").trim().to_string();
    if !email.is_empty() && !validate::is_valid_email(&email) {
        return Err(AppError::Validation(
            "Please enter a valid email address.".to_string(),
        ));
    }

    let required = ["firstName", "lastName", "email", "phone", "selectedPdfs", "category"];
    if let Some(field) = validate::missing_field(&data, &required) {
        return Err(AppError::Validation(format!(
            "Missing required field: {field}"
        )));
    }

    let selected_count = match data["selectedPdfs"].as_array() {
        Some(pdfs) if !pdfs.is_empty() => pdfs.len(),
        _ => {
            return Err(AppError::Validation(
                "selectedPdfs must be a non-empty list.".to_string(),
            ));
        }
    };

    let category = data["category"].as_str().unwrap_or("");
    let key = DedupCache::key(&email, category, selected_count);
    if let Err(retry_after) = state.dedup.check_and_record(key, Instant::now()) {
        tracing::info!("Duplicate download request from {email} (retry in {retry_after}s)");
        return Err(AppError::Duplicate(
            "Duplicate request detected. Please wait before submitting again.".to_string(),
        ));
    }

    let admin_mail = OutgoingMail {
        to: state.config.recipients.downloads.clone(),
        reply_to: Some(email.clone()),
        subject: format!(
            "New PDF Download Request - {} {}",
            data["firstName"].as_str().unwrap_or(""),
            data["lastName"].as_str().unwrap_or("")
        ),
        html_body: templates::render_download_admin(&data),
        attachment: None,
    };

    let user_mail = OutgoingMail {
        to: email.clone(),
        reply_to: None,
        subject: "Your Requested PDFs".to_string(),
        html_body: templates::render_download_user(&data),
        attachment: None,
    };

    state
        .mailer
        .send(admin_mail)
        .await
        .map_err(|e| AppError::Transport(format!("Failed to send email: {e}")))?;

    state
        .mailer
        .send(user_mail)
        .await
        .map_err(|e| AppError::Transport(format!("Failed to send email: {e}")))?;

    tracing::info!("Download request forwarded for {email} ({selected_count} documents)");

    Ok(Json(ApiResponse::ok("Your PDFs have been sent to your email!")))
}
