//! PDF text extraction boundary.
//!
//! Upstream of the preview pipeline: takes an uploaded PDF and hands back a
//! plain-text string using `\n` as the line separator, which is the only
//! structural guarantee the classifier relies on.

use axum::extract::Multipart;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub resume_text: String,
}

/// Extracts text from PDF bytes and normalizes line endings to LF.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::UnprocessableEntity(format!("could not read PDF: {e}")))?;
    Ok(normalize_line_endings(&text))
}

/// CRLF and bare CR both become LF.
fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// POST /api/v1/extract
///
/// Accepts a multipart upload with a `file` field holding PDF bytes and
/// returns the extracted plain text.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("could not read upload: {e}")))?;

        if bytes.is_empty() {
            return Err(AppError::Validation("uploaded file is empty".to_string()));
        }

        info!("Extracting text from uploaded PDF ({} bytes)", bytes.len());
        let resume_text = extract_pdf_text(&bytes)?;

        return Ok(Json(ExtractResponse { resume_text }));
    }

    Err(AppError::Validation(
        "multipart payload must contain a 'file' field".to_string(),
    ))
}
