use chrono::Utc;
use serde_json::Value;

fn text(data: &Value, field: &str, fallback: &str) -> String {
    data.get(field)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

pub fn render_contact(data: &Value) -> String {
    let name = text(data, "name", "Not provided");
    let email = text(data, "email", "Not provided");
    let phone = text(data, "phone", "Not provided");
    let subject = text(data, "subject", "No subject");
    let message = text(data, "message", "No message provided");
    let year = Utc::now().format("%Y");

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2 style="color: #2c3e50; border-bottom: 2px solid #3498db; padding-bottom: 10px;">New Contact Form Submission</h2>
    <div style="background: white; padding: 20px; border-radius: 5px;">
        <p><strong>Name:</strong> {name}</p>
        <p><strong>Email:</strong> <a href="mailto:{email}">{email}</a></p>
        <p><strong>Phone:</strong> {phone}</p>
        <p><strong>Subject:</strong> {subject}</p>
        <div style="margin-top: 20px; padding: 15px; background: #f8f9fa; border-left: 4px solid #3498db;">
            <p style="margin: 0; font-style: italic;">{message}</p>
        </div>
    </div>
    <p style="margin-top: 20px; font-size: 12px; color: #7f8c8d; text-align: center;">This email was sent from the website contact form. &copy; {year}</p>
</body>
</html>"#
    )
}

pub fn render_application(data: &Value) -> String {
    let job_title = text(data, "jobTitle", "Not specified");
    let first_name = text(data, "firstName", "");
    let last_name = text(data, "lastName", "");
    let email = text(data, "email", "Not provided");
    let phone = text(data, "phone", "Not provided");
    let address = text(data, "address", "Not provided");
    let applied_on = Utc::now().format("%Y-%m-%d %H:%M:%S");

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>New Job Application Received</h2>
    <p><strong>Position:</strong> {job_title}</p>
    <p><strong>Name:</strong> {first_name} {last_name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Phone:</strong> {phone}</p>
    <p><strong>Address:</strong> {address}</p>
    <p><strong>Applied on:</strong> {applied_on} UTC</p>
</body>
</html>"#
    )
}

fn pdf_items(data: &Value) -> String {
    data.get("selectedPdfs")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str())
                .map(|pdf| format!(r#"<div style="margin: 5px 0; padding-left: 10px; border-left: 3px solid #007bff;">&bull; {pdf}</div>"#))
                .collect::<Vec<_>>()
                .join("\n                ")
        })
        .unwrap_or_default()
}

pub fn render_download_admin(data: &Value) -> String {
    let first_name = text(data, "firstName", "Not provided");
    let last_name = text(data, "lastName", "");
    let email = text(data, "email", "Not provided");
    let phone = text(data, "phone", "Not provided");
    let organization = text(data, "organization", "Not provided");
    let category = text(data, "category", "Not specified");
    let pdfs = pdf_items(data);
    let year = Utc::now().format("%Y");

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto;">
    <div style="background: #007bff; color: white; padding: 20px; text-align: center;">
        <h2>New PDF Download Request</h2>
    </div>
    <div style="padding: 20px; border: 1px solid #e0e0e0;">
        <p>You have received a new request for PDF downloads with the following details:</p>
        <div style="margin: 20px 0;">
            <p><strong>Name:</strong> {first_name} {last_name}</p>
            <p><strong>Email:</strong> <a href="mailto:{email}">{email}</a></p>
            <p><strong>Phone:</strong> <a href="tel:{phone}">{phone}</a></p>
            <p><strong>Organization:</strong> {organization}</p>
            <p><strong>Category:</strong> {category}</p>
        </div>
        <div style="background: #f8f9fa; padding: 10px; border-radius: 4px; margin: 10px 0;">
            <p><strong>Requested Documents:</strong></p>
                {pdfs}
        </div>
        <p style="margin-top: 20px;"><strong>Next Steps:</strong> Please review this request and follow up with the user if necessary.</p>
    </div>
    <div style="background: #f8f9fa; padding: 15px; text-align: center; font-size: 12px; color: #6c757d;">
        <p>This is an automated notification. Please do not reply to this email.</p>
        <p>&copy; {year}</p>
    </div>
</body>
</html>"#
    )
}

pub fn render_download_user(data: &Value) -> String {
    let first_name = text(data, "firstName", "Valued Customer");
    let email = text(data, "email", "Not provided");
    let phone = text(data, "phone", "Not provided");
    let pdfs = pdf_items(data);
    let year = Utc::now().format("%Y");

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto;">
    <div style="background: #007bff; color: white; padding: 20px; text-align: center;">
        <h2>Thank You for Your Request</h2>
    </div>
    <div style="padding: 20px; border: 1px solid #e0e0e0;">
        <p>Dear {first_name},</p>
        <p>Thank you for your interest in our products and services. We've received your request for the following documents:</p>
        <div style="background: #f8f9fa; padding: 10px; border-radius: 4px; margin: 15px 0;">
                {pdfs}
        </div>
        <p>Our team is currently processing your request and will get back to you within 24-48 hours.</p>
        <p>For your reference, here are the details you provided:</p>
        <p><strong>Email:</strong> {email}<br>
        <strong>Phone:</strong> {phone}</p>
    </div>
    <div style="background: #f8f9fa; padding: 15px; text-align: center; font-size: 12px; color: #6c757d;">
        <p>This is an automated message. Please do not reply to this email.</p>
        <p>&copy; {year}</p>
    </div>
</body>
</html>"#
    )
}
