//! Summary improvement flow: rewrites (or creates) the resume summary.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::flows::prompts::{SUMMARY_PROMPT_TEMPLATE, SUMMARY_SYSTEM};
use crate::llm_client::LlmClient;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryImprovement {
    pub improved_summary: String,
}

/// Asks the LLM for an improved summary section.
pub async fn improve_summary(
    resume_text: &str,
    llm: &LlmClient,
) -> Result<SummaryImprovement, AppError> {
    let prompt = SUMMARY_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);

    llm.complete_json::<SummaryImprovement>(&prompt, SUMMARY_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("summary improvement failed: {e}")))
}
