use std::sync::Arc;

use crate::auth::IdentityProvider;
use crate::llm_client::TextGenerator;
use crate::resumes::storage::ResumeStorage;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Every collaborator is constructed in `main` and passed in; nothing is global.
#[derive(Clone)]
pub struct AppState {
    /// Interview documents. Postgres in production, in-memory without `DATABASE_URL`.
    pub store: Arc<dyn DocumentStore>,
    pub llm: Arc<dyn TextGenerator>,
    pub identity: Arc<dyn IdentityProvider>,
    pub resumes: Arc<dyn ResumeStorage>,
}
