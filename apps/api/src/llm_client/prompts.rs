// Cross-cutting prompt fragments. Each flow defines its own prompts.rs
// alongside it; only text shared by every flow lives here.

/// Instruction appended to rewriting prompts so the model never invents
/// employers, titles, dates, or credentials not present in the source resume.
pub const FIDELITY_INSTRUCTION: &str = "\
    CRITICAL: Rewrite only. Do NOT invent employers, job titles, dates, degrees, \
    or certifications that are not present in the provided resume text. \
    Improving phrasing is allowed; fabricating facts is not.";
