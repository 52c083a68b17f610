//! Handlers for email resolution endpoints.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::resolve::{EmailQuery, ResolveDebugResponse};
use crate::domain::entities::{EmailAddress, Resolution};
use crate::error::AppError;
use crate::state::AppState;

/// Resolves an email address to a country code.
///
/// # Endpoint
///
/// `GET /resolve?email=<address>[&debug=true]`
///
/// # Resolution Flow
///
/// 1. Remote lookup with a hard deadline
/// 2. Exact domain match
/// 3. Compound suffix (`example.co.uk`)
/// 4. TLD match
/// 5. First-letter fallback
///
/// Upstream failures never surface here; they fall through to the tables.
///
/// # Response
///
/// `200 OK` with the code as plain text (`DE`), or with `debug=true`:
///
/// ```json
/// {
///   "email": "user@web.de",
///   "domain": "web.de",
///   "lookup_method": "domain-match",
///   "result": "DE"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `email` is missing, empty, or does not contain
/// exactly one `@`.
pub async fn resolve_handler(
    State(state): State<AppState>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    query.validate()?;

    let resolution = state.resolver.resolve(&query.email).await?;

    render(&query, resolution)
}

/// Resolves an email address using the lookup tables only.
///
/// # Endpoint
///
/// `GET /resolve/local?email=<address>[&debug=true]`
///
/// Same responses as [`resolve_handler`], without contacting the upstream.
pub async fn resolve_local_handler(
    State(state): State<AppState>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    query.validate()?;

    let resolution = state.resolver.resolve_local(&query.email)?;

    render(&query, resolution)
}

fn render(query: &EmailQuery, resolution: Resolution) -> Result<Response, AppError> {
    if !query.is_debug() {
        return Ok(resolution.code.to_string().into_response());
    }

    let email = EmailAddress::parse(&query.email)?;

    Ok(Json(ResolveDebugResponse {
        email: query.email.clone(),
        domain: email.domain().to_string(),
        lookup_method: resolution.method,
        result: resolution.code,
    })
    .into_response())
}
