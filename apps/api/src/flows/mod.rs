// AI flows: keyword optimization, summary improvement, experience improvement.
// All LLM calls go through llm_client; each flow is a schema struct, a prompt
// template, and one complete_json call.

pub mod experience;
pub mod handlers;
pub mod keywords;
pub mod prompts;
pub mod summary;
