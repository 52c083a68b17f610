//! Region resolution service orchestrating the remote and table-based tiers.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::entities::{CountryCode, EmailAddress, Resolution, ResolutionMethod};
use crate::domain::errors::{ResolveError, UpstreamError};
use crate::domain::heuristics::resolve_locally;
use crate::domain::lookup::RegionLookup;
use crate::domain::tables::RegionTables;

/// Default hard deadline for a single remote lookup.
pub const DEFAULT_REMOTE_DEADLINE: Duration = Duration::from_secs(15);

/// Domain appended to bare usernames when the remote tier cannot place them.
pub const DEFAULT_USERNAME_DOMAIN: &str = "tiktok.com";

/// Resolves email addresses and usernames to country codes.
///
/// The service is stateless apart from its immutable tables and the lookup
/// client, so a single instance is shared across all requests.
///
/// # Resolution Order
///
/// 1. Remote lookup, bounded by the configured deadline
/// 2. Exact domain match
/// 3. Compound second-level suffix (`example.co.uk`)
/// 4. TLD match
/// 5. Deterministic first-letter fallback
///
/// Remote failures are logged and absorbed. The only error a full resolution
/// can return is [`ResolveError::InvalidFormat`].
pub struct ResolverService {
    lookup: Arc<dyn RegionLookup>,
    tables: Arc<RegionTables>,
    deadline: Duration,
    username_domain: String,
}

impl ResolverService {
    /// Creates a resolver with the default deadline and username domain.
    pub fn new(lookup: Arc<dyn RegionLookup>, tables: Arc<RegionTables>) -> Self {
        Self {
            lookup,
            tables,
            deadline: DEFAULT_REMOTE_DEADLINE,
            username_domain: DEFAULT_USERNAME_DOMAIN.to_string(),
        }
    }

    /// Overrides the hard deadline applied to each remote lookup.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// Overrides the domain appended to bare usernames.
    pub fn with_username_domain(mut self, domain: impl Into<String>) -> Self {
        self.username_domain = domain.into();
        self
    }

    pub fn tables(&self) -> &RegionTables {
        &self.tables
    }

    /// Resolves an address through every tier, starting with the remote lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidFormat`] if the address does not contain
    /// exactly one `@`. The remote service is not contacted in that case.
    pub async fn resolve(&self, address: &str) -> Result<Resolution, ResolveError> {
        let email = EmailAddress::parse(address)?;

        match self.fetch_remote(email.as_str()).await {
            Ok(code) => {
                info!("Remote lookup resolved {} to {}", email.domain(), code);
                return Ok(Resolution::new(code, ResolutionMethod::Remote));
            }
            Err(e) => {
                warn!(
                    "Remote lookup failed for domain {}, using local tables: {}",
                    email.domain(),
                    e
                );
            }
        }

        Ok(resolve_locally(&self.tables, &email))
    }

    /// Resolves an address with the lookup tables only.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidFormat`] for malformed addresses.
    pub fn resolve_local(&self, address: &str) -> Result<Resolution, ResolveError> {
        let email = EmailAddress::parse(address)?;
        Ok(resolve_locally(&self.tables, &email))
    }

    /// Queries the remote service only, surfacing its failures.
    ///
    /// The query is forwarded as given; it does not need to be a valid address.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::Unresolvable`] if the upstream answered without a usable code
    /// - [`ResolveError::UpstreamUnavailable`] on timeout, transport error or non-2xx status
    pub async fn resolve_remote(&self, query: &str) -> Result<CountryCode, ResolveError> {
        self.fetch_remote(query).await.map_err(|e| match e {
            UpstreamError::Unextractable => ResolveError::Unresolvable(query.to_string()),
            other => ResolveError::UpstreamUnavailable(other),
        })
    }

    /// Resolves a username, with or without a leading `@`.
    ///
    /// A value that already looks like an address is resolved as one. A bare
    /// username is first sent to the remote service as-is; if that fails it is
    /// turned into `<username>@<username domain>` and resolved normally.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidFormat`] for an empty username or one
    /// that still contains more than one `@`.
    pub async fn resolve_username(&self, username: &str) -> Result<Resolution, ResolveError> {
        let trimmed = username.trim();
        let name = trimmed.strip_prefix('@').unwrap_or(trimmed);

        if name.is_empty() {
            return Err(ResolveError::InvalidFormat);
        }

        if name.contains('@') {
            return self.resolve(name).await;
        }

        match self.fetch_remote(name).await {
            Ok(code) => {
                info!("Remote lookup resolved username {} to {}", name, code);
                return Ok(Resolution::new(code, ResolutionMethod::Remote));
            }
            Err(e) => debug!("Bare username lookup failed for {}: {}", name, e),
        }

        let address = format!("{}@{}", name, self.username_domain);
        self.resolve(&address).await
    }

    /// Runs the lookup under the hard deadline.
    async fn fetch_remote(&self, query: &str) -> Result<CountryCode, UpstreamError> {
        match tokio::time::timeout(self.deadline, self.lookup.fetch_code(query)).await {
            Ok(result) => result,
            Err(_) => Err(UpstreamError::Timeout(self.deadline)),
        }
    }
}
