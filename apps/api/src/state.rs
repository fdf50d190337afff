use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::profiles::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Profile store. Also owns the process-wide active-profile cell —
    /// concurrent switches race (last writer wins), which is the documented
    /// behavior of the legacy API.
    pub store: Arc<ProfileStore>,
    pub llm: LlmClient,
    #[allow(dead_code)]
    pub config: Config,
}
