//! Keyword optimization flow: finds JD keywords missing from a resume and
//! produces a rewritten resume that works some of them in.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::flows::prompts::{KEYWORD_OPTIMIZATION_PROMPT_TEMPLATE, KEYWORD_OPTIMIZATION_SYSTEM};
use crate::llm_client::prompts::FIDELITY_INSTRUCTION;
use crate::llm_client::LlmClient;

/// Full structured output of the keyword optimization flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordOptimization {
    /// Keywords present in the JD but absent from the resume.
    pub missing_keywords: Vec<String>,
    /// Keywords worth adding even if not literal JD terms.
    pub suggested_keywords: Vec<String>,
    /// Rewritten resume text, plain text, one line per resume line.
    pub optimized_resume: String,
}

/// Runs the keyword optimization flow against the LLM.
pub async fn optimize_keywords(
    resume_text: &str,
    job_description: &str,
    llm: &LlmClient,
) -> Result<KeywordOptimization, AppError> {
    let prompt = KEYWORD_OPTIMIZATION_PROMPT_TEMPLATE
        .replace("{fidelity_instruction}", FIDELITY_INSTRUCTION)
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description);

    llm.complete_json::<KeywordOptimization>(&prompt, KEYWORD_OPTIMIZATION_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("keyword optimization failed: {e}")))
}
