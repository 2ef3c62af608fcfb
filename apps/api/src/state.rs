use std::sync::Arc;

use crate::llm_client::Judge;

/// Shared application state injected into all route handlers via Axum
/// extractors. Deliberately tiny: the service is stateless, so there is no
/// pool, cache, or session store — only the judge.
#[derive(Clone)]
pub struct AppState {
    /// The language-model judge/generator. `Arc<dyn Judge>` so tests and
    /// alternative backends can swap it without touching handlers.
    pub judge: Arc<dyn Judge>,
}
