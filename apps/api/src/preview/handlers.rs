//! Axum route handlers for the Preview API.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::preview::classifier::{classify, LineRecord};
use crate::preview::format_check::{run_format_check, FormatCheck};
use crate::preview::render::{project, to_html, Fragment};

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub lines: Vec<LineRecord>,
    pub fragments: Vec<Fragment>,
    pub html: String,
    pub format_check: FormatCheck,
}

/// POST /api/v1/preview
///
/// Classifies the resume text and returns the line records, their projected
/// presentation fragments, a rendered HTML string, and the format check.
/// Empty input is valid and yields empty lines/fragments.
pub async fn handle_preview(
    Json(request): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    let lines = classify(&request.resume_text);
    let fragments = project(&lines);
    let html = to_html(&fragments);
    let format_check = run_format_check(&lines);

    Ok(Json(PreviewResponse {
        lines,
        fragments,
        html,
        format_check,
    }))
}
