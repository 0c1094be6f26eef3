// All LLM prompt constants for the flows module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for keyword optimization. Enforces JSON-only output.
pub const KEYWORD_OPTIMIZATION_SYSTEM: &str =
    "You are an expert ATS (applicant tracking system) optimization tool \
    analyzing resumes against job descriptions. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Keyword optimization prompt template.
/// Replace: {resume_text}, {job_description}, {fidelity_instruction}
pub const KEYWORD_OPTIMIZATION_PROMPT_TEMPLATE: &str = r#"Analyze the provided resume text and job description.

1. Identify and list important keywords and skills from the job description that are missing from the resume.
2. Suggest a list of relevant keywords to add to the resume based on the job description.
3. Provide an optimized version of the resume that strategically incorporates some of the missing keywords. Maintain the original format and tone of the resume as much as possible. Keep it plain text with one line per resume line.

{fidelity_instruction}

Return a JSON object with this EXACT schema (no extra fields):
{
  "missing_keywords": ["Kubernetes", "CI/CD"],
  "suggested_keywords": ["container orchestration"],
  "optimized_resume": "full rewritten resume text"
}

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}"#;

/// System prompt for the summary improvement flow.
pub const SUMMARY_SYSTEM: &str =
    "You are an expert resume writer. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Summary improvement prompt template. Replace: {resume_text}
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Your task is to improve the summary section of the given resume.

Analyze the summary section (often the first paragraph) and rewrite it to be more impactful, concise, and tailored for grabbing a recruiter's attention. If no clear summary exists, create one based on the overall content of the resume.

Return a JSON object:
{
  "improved_summary": "the rewritten summary"
}

RESUME:
{resume_text}"#;

/// System prompt for the experience improvement flow.
pub const EXPERIENCE_SYSTEM: &str =
    "You are an expert career coach rewriting resume experience sections. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Experience improvement prompt template. Replace: {resume_text}
pub const EXPERIENCE_PROMPT_TEMPLATE: &str = r#"Your task is to improve the work experience section of the given resume.

Analyze the work experience section. Rewrite the bullet points to be more impactful. Use strong action verbs, quantify achievements where possible (even with estimates if necessary), and focus on results rather than just responsibilities.

Return a JSON object containing the entire rewritten work experience section:
{
  "improved_experience": "the rewritten experience section"
}

RESUME:
{resume_text}"#;
