//! DTOs for the username lookup endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{CountryCode, ResolutionMethod};

/// Query string carrying a username, with or without a leading `@`.
#[derive(Debug, Deserialize, Validate)]
pub struct UsernameQuery {
    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
}

/// Resolved username with a display label.
///
/// `label` is "Account not found" when the code is `SG`, otherwise
/// `XX (Country Name)`.
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub username: String,
    pub code: CountryCode,
    pub method: ResolutionMethod,
    pub label: String,
    pub found: bool,
}
