use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;

use super::ApiResponse;
use crate::email::templates;
use crate::email::{MailAttachment, OutgoingMail};
use crate::error::AppError;
use crate::parser;
use crate::state::SharedState;
use crate::validate;

const ALLOWED_RESUME_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ApiResponse>, AppError> {
    let (data, resume, resume_part_present) =
        parser::parse_multipart(&headers, body, "resume").await?;

    if !resume_part_present {
        return Err(AppError::Validation("No resume file provided".to_string()));
    }

    let required = ["firstName", "lastName", "email", "phone", "jobTitle"];
    if let Some(field) = validate::missing_field(&data, &required) {
        return Err(AppError::Validation(format!(
            "{} is required.",
            validate::capitalize(field)
        )));
    }

    if let Some(ref file) = resume {
        let allowed = file
            .extension()
            .is_some_and(|ext| ALLOWED_RESUME_EXTENSIONS.contains(&ext.as_str()));
        if !allowed {
            return Err(AppError::Validation(
                "Invalid file type. Allowed types: PDF, DOC, DOCX".to_string(),
            ));
        }
    }

    let job_title = data["jobTitle"].as_str().unwrap_or("No Position Specified");
    let reply_to = data["email"].as_str().map(|s| s.to_string());

    let mail = OutgoingMail {
        to: state.config.recipients.careers.clone(),
        reply_to,
        subject: format!("New Job Application: {job_title}"),
        html_body: templates::render_application(&data),
        attachment: resume.map(|file| MailAttachment {
            filename: file.filename,
            content_type: file.content_type,
            data: file.data,
        }),
    };

    state
        .mailer
        .send(mail)
        .await
        .map_err(|e| AppError::Transport(format!("Failed to submit application: {e}")))?;

    tracing::info!("Job application forwarded for position {job_title}");

    Ok(Json(ApiResponse::ok(
        "Thank you for your application! We will review your details and get back to you soon.",
    )))
}
