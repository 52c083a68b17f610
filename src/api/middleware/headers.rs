//! Response headers applied to every route.

use axum::http::{HeaderValue, header::CACHE_CONTROL};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

/// Value of `Cache-Control` on every response.
pub const NO_STORE: &str = "no-store, max-age=0";

/// Overrides `Cache-Control` so that lookups are never cached by clients or
/// intermediaries; the upstream answer may change between calls.
pub fn no_cache_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(CACHE_CONTROL, HeaderValue::from_static(NO_STORE))
}

/// Allows any origin, so browser pages can call the resolver directly.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
