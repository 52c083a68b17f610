//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::ResolverService;

/// State shared across requests.
///
/// Cheap to clone; the resolver and its tables are reference-counted and
/// never mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<ResolverService>,
}

impl AppState {
    pub fn new(resolver: Arc<ResolverService>) -> Self {
        Self { resolver }
    }
}
