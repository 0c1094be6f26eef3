use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Runtime configuration. Only consumed at startup today; kept in state
    /// so handlers that grow config knobs do not need new plumbing.
    #[allow(dead_code)]
    pub config: Config,
}
