use axum::http::HeaderMap;
use serde_json::{Map, Value};

use crate::error::AppError;

/// A file part captured from a multipart submission.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn extension(&self) -> Option<String> {
        self.filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
    }
}

pub fn parse_json(body: &[u8]) -> Result<Value, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::Validation(format!("Invalid JSON: {e}")))
}

/// Parse a multipart body into text fields plus an optional file part named
/// `file_field`. A `file_field` part without a filename is treated as a plain
/// text field but still marks the part as present.
pub async fn parse_multipart(
    headers: &HeaderMap,
    body: bytes::Bytes,
    file_field: &str,
) -> Result<(Value, Option<UploadedFile>, bool), AppError> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| AppError::Validation("Missing multipart boundary".to_string()))?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut fields = Map::new();
    let mut file = None;
    let mut file_field_present = false;

    while let Some(part) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Multipart error: {e}")))?
    {
        let name = part.name().unwrap_or("unknown").to_string();

        if name == file_field {
            file_field_present = true;
            if let Some(filename) = part.file_name().filter(|f| !f.is_empty()) {
                let filename = filename.to_string();
                let content_type = part
                    .content_type()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let data = part
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("File read error: {e}")))?;
                file = Some(UploadedFile {
                    filename,
                    content_type,
                    data: data.to_vec(),
                });
                continue;
            }
        }

        let value = part
            .text()
            .await
            .map_err(|e| AppError::Validation(format!("Field read error: {e}")))?;
        fields.insert(name, Value::String(value));
    }

    Ok((Value::Object(fields), file, file_field_present))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased() {
        let file = UploadedFile {
            filename: "resume.PDF".to_string(),
            content_type: "application/pdf".to_string(),
            data: vec![],
        };
        assert_eq!(file.extension().as_deref(), Some("pdf"));
    }

    #[test]
    fn extension_missing_dot() {
        let file = UploadedFile {
            filename: "resume".to_string(),
            content_type: "application/octet-stream".to_string(),
            data: vec![],
        };
        assert_eq!(file.extension(), None);
    }

    #[test]
    fn invalid_json_is_a_validation_error() {
        let err = parse_json(b"{not json").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
