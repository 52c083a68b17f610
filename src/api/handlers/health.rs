//! Handler for health check endpoint.

use axum::Json;
use chrono::Utc;

use crate::api::dto::health::HealthResponse;

/// Reports that the process is up.
///
/// # Endpoint
///
/// `GET /health`
///
/// The upstream is deliberately not probed; a slow lookup service must not
/// make the resolver look unhealthy, since it falls back to its tables.
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
