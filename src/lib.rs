//! # Region Resolver
//!
//! Resolves a two-letter country code for an email address or a username,
//! built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Addresses, codes, lookup tables and the
//!   local heuristics
//! - **Application Layer** ([`application`]) - The resolver pipeline
//! - **Infrastructure Layer** ([`infrastructure`]) - Upstream HTTP client and
//!   tables file loader
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Resolution Order
//!
//! 1. Remote lookup service, under a hard deadline
//! 2. Exact domain match
//! 3. Compound second-level suffix (`co.uk`, `com.br`, ...)
//! 4. Top-level domain match
//! 5. Deterministic fallback from the domain's first letter
//!
//! Every well-formed address gets a code; upstream failures only change which
//! tier answers.
//!
//! ## Quick Start
//!
//! ```bash
//! export UPSTREAM_BASE_URL="https://lookup.example/raw"  # Optional
//! cargo run
//! curl "http://localhost:3000/resolve?email=user@web.de"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ResolverService;
    pub use crate::domain::entities::{CountryCode, EmailAddress, Resolution, ResolutionMethod};
    pub use crate::domain::errors::{ResolveError, UpstreamError};
    pub use crate::domain::lookup::RegionLookup;
    pub use crate::domain::tables::RegionTables;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
