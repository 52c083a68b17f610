//! Handler for the raw upstream proxy.

use axum::extract::{Query, State, rejection::QueryRejection};
use validator::Validate;

use crate::api::dto::resolve::EmailQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Forwards a query to the upstream lookup service, without fallback.
///
/// # Endpoint
///
/// `GET /proxy?email=<address>`
///
/// The value is passed through as-is and does not have to be a valid address.
///
/// # Response Codes
///
/// - **200 OK**: Code as plain text
/// - **400 Bad Request**: `email` missing or empty
/// - **500 Internal Server Error**: Upstream error status, network failure,
///   or no code found in the response
/// - **504 Gateway Timeout**: Upstream did not answer within the deadline
pub async fn proxy_handler(
    State(state): State<AppState>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<String, AppError> {
    let Query(query) = query?;
    query.validate()?;

    let code = state.resolver.resolve_remote(&query.email).await?;

    Ok(code.to_string())
}
