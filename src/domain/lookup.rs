//! Port for the remote region lookup service.

use async_trait::async_trait;

use super::entities::CountryCode;
use super::errors::UpstreamError;

/// Remote source of authoritative country codes.
///
/// # Implementations
///
/// - [`crate::infrastructure::upstream::HttpRegionLookup`] - HTTP client against the upstream service
/// - [`crate::infrastructure::upstream::DisabledLookup`] - Always fails, remote tier switched off
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegionLookup: Send + Sync {
    /// Asks the upstream for the code of an address or bare username.
    ///
    /// `query` is passed through unvalidated; the caller decides what it accepts.
    ///
    /// # Errors
    ///
    /// Returns an [`UpstreamError`] on transport failure, non-2xx status,
    /// timeout, or when no code can be extracted from the response.
    async fn fetch_code(&self, query: &str) -> Result<CountryCode, UpstreamError>;
}
