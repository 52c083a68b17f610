//! No-op lookup used when the remote tier is switched off.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::CountryCode;
use crate::domain::errors::UpstreamError;
use crate::domain::lookup::RegionLookup;

/// A lookup that never contacts anything.
///
/// Every call fails with [`UpstreamError::Disabled`], so the resolver goes
/// straight to its table-based tiers.
///
/// # Use Cases
///
/// - `REMOTE_LOOKUP=false` deployments
/// - Offline mode of the command-line tool
/// - Tests that exercise the local tiers only
pub struct DisabledLookup;

impl DisabledLookup {
    pub fn new() -> Self {
        debug!("Using DisabledLookup (remote tier off)");
        Self
    }
}

impl Default for DisabledLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegionLookup for DisabledLookup {
    async fn fetch_code(&self, _query: &str) -> Result<CountryCode, UpstreamError> {
        Err(UpstreamError::Disabled)
    }
}
