//! API route configuration.
//!
//! All endpoints are public and read-only.

use crate::api::handlers::{
    health_handler, lookup_handler, proxy_handler, resolve_handler, resolve_local_handler,
    self_test_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET /resolve?email=`        - Full resolution pipeline
/// - `GET /resolve/local?email=`  - Table tiers only, no upstream call
/// - `GET /proxy?email=`          - Upstream only, no fallback
/// - `GET /lookup?username=`      - Username region with a display label
/// - `GET /health`                - Liveness
/// - `GET /self-test`             - Sample addresses through the resolver
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/resolve", get(resolve_handler))
        .route("/resolve/local", get(resolve_local_handler))
        .route("/proxy", get(proxy_handler))
        .route("/lookup", get(lookup_handler))
        .route("/health", get(health_handler))
        .route("/self-test", get(self_test_handler))
}
