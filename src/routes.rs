//! Top-level router configuration.
//!
//! # Route Structure
//!
//! See [`crate::api::routes::public_routes`].
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Cache-Control** - `no-store, max-age=0` on every response
//! - **CORS** - Any origin
//! - **Path normalization** - Trailing slash handling, applied by
//!   [`normalized`] around the finished router

use crate::api;
use crate::api::middleware::{headers, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    api::routes::public_routes()
        .with_state(state)
        .layer(headers::cors_layer())
        .layer(headers::no_cache_layer())
        .layer(tracing::layer())
}

/// Wraps a router so that `/resolve/` matches `/resolve`.
///
/// Path normalization must run before routing, so it wraps the router
/// instead of being added with [`Router::layer`].
pub fn normalized(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
