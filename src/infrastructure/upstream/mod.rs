//! Remote lookup tier.
//!
//! Provides two [`crate::domain::lookup::RegionLookup`] implementations:
//! - [`HttpRegionLookup`] - reqwest client against the upstream service
//! - [`DisabledLookup`] - No-op implementation when the remote tier is off
//!
//! Response parsing lives in [`scrape`].

mod disabled;
mod http_lookup;
pub mod scrape;

pub use disabled::DisabledLookup;
pub use http_lookup::HttpRegionLookup;
