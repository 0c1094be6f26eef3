//! Experience improvement flow: rewrites the work experience bullets with
//! stronger verbs and quantified results.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::flows::prompts::{EXPERIENCE_PROMPT_TEMPLATE, EXPERIENCE_SYSTEM};
use crate::llm_client::LlmClient;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceImprovement {
    pub improved_experience: String,
}

/// Asks the LLM for a rewritten work experience section.
pub async fn improve_experience(
    resume_text: &str,
    llm: &LlmClient,
) -> Result<ExperienceImprovement, AppError> {
    let prompt = EXPERIENCE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);

    llm.complete_json::<ExperienceImprovement>(&prompt, EXPERIENCE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("experience improvement failed: {e}")))
}
