//! Handler for username lookup.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use validator::Validate;

use crate::api::dto::lookup::{LookupResponse, UsernameQuery};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::region_label::{RegionLabel, describe};

/// Resolves the region of a username.
///
/// # Endpoint
///
/// `GET /lookup?username=<name>`
///
/// A leading `@` is ignored. A bare name is tried against the upstream first,
/// then as `<name>@<USERNAME_DOMAIN>` through the full pipeline.
///
/// # Response
///
/// ```json
/// {
///   "username": "@someone",
///   "code": "SG",
///   "method": "remote",
///   "label": "Account not found",
///   "found": false
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `username` is missing or not usable.
pub async fn lookup_handler(
    State(state): State<AppState>,
    query: Result<Query<UsernameQuery>, QueryRejection>,
) -> Result<Json<LookupResponse>, AppError> {
    let Query(query) = query?;
    query.validate()?;

    let resolution = state.resolver.resolve_username(&query.username).await?;
    let label = describe(&resolution.code);

    Ok(Json(LookupResponse {
        username: query.username,
        code: resolution.code,
        method: resolution.method,
        found: label != RegionLabel::AccountNotFound,
        label: label.to_string(),
    }))
}
