//! DTOs for the resolve and proxy endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{CountryCode, ResolutionMethod};

/// Query string carrying the address to resolve.
#[derive(Debug, Deserialize, Validate)]
pub struct EmailQuery {
    /// Address to resolve. Required and non-empty; its format is checked by the resolver.
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    /// `debug=true` switches the response from plain text to a JSON breakdown.
    pub debug: Option<String>,
}

impl EmailQuery {
    pub fn is_debug(&self) -> bool {
        self.debug.as_deref() == Some("true")
    }
}

/// Breakdown returned in debug mode.
#[derive(Debug, Serialize)]
pub struct ResolveDebugResponse {
    pub email: String,
    pub domain: String,
    pub lookup_method: ResolutionMethod,
    pub result: CountryCode,
}
