//! Axum route handlers for the AI flows.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::flows::experience::{improve_experience, ExperienceImprovement};
use crate::flows::keywords::{optimize_keywords, KeywordOptimization};
use crate::flows::summary::{improve_summary, SummaryImprovement};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct ImproveRequest {
    pub resume_text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/optimize
///
/// Keyword optimization pipeline: resume + JD in, missing/suggested keywords
/// and a rewritten resume out.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<KeywordOptimization>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let result = optimize_keywords(&request.resume_text, &request.job_description, &state.llm)
        .await?;

    Ok(Json(result))
}

/// POST /api/v1/summary/improve
pub async fn handle_improve_summary(
    State(state): State<AppState>,
    Json(request): Json<ImproveRequest>,
) -> Result<Json<SummaryImprovement>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let result = improve_summary(&request.resume_text, &state.llm).await?;
    Ok(Json(result))
}

/// POST /api/v1/experience/improve
pub async fn handle_improve_experience(
    State(state): State<AppState>,
    Json(request): Json<ImproveRequest>,
) -> Result<Json<ExperienceImprovement>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let result = improve_experience(&request.resume_text, &state.llm).await?;
    Ok(Json(result))
}
