use crate::llm_client::CompletionGateway;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The gateway is decided once at startup and read-only afterwards; handlers
/// never mutate shared state.
#[derive(Clone)]
pub struct AppState {
    pub gateway: CompletionGateway,
}
