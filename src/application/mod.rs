//! Application layer services.
//!
//! Services combine the pure domain tiers with infrastructure ports and expose
//! a small API for HTTP handlers and the command-line tool.
//!
//! # Available Services
//!
//! - [`services::resolver_service::ResolverService`] - Email and username region resolution

pub mod services;
