//! Error taxonomy of the resolver and its upstream dependency.

use std::time::Duration;

/// Failures of the remote lookup tier.
///
/// These are normally absorbed by the resolver, which falls through to the
/// table-based tiers. Only the proxy entry point surfaces them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    #[error("Remote lookup is disabled")]
    Disabled,

    #[error("Request timed out after {}s when connecting to the external API", .0.as_secs_f32())]
    Timeout(Duration),

    #[error("Error from external API: {0}")]
    Status(u16),

    #[error("Failed to fetch data from external API: {0}")]
    Transport(String),

    #[error("Could not extract country code from response")]
    Unextractable,
}

/// Errors returned by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The address does not contain exactly one `@`.
    #[error("Invalid email format")]
    InvalidFormat,

    /// The remote tier failed and no local fallback was attempted.
    #[error(transparent)]
    UpstreamUnavailable(#[from] UpstreamError),

    /// A source answered but yielded no usable code.
    #[error("Unable to determine region for '{0}'")]
    Unresolvable(String),
}
