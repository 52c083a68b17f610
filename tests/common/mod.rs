#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use region_resolver::application::services::ResolverService;
use region_resolver::domain::tables::RegionTables;
use region_resolver::infrastructure::upstream::{DisabledLookup, HttpRegionLookup};
use region_resolver::state::AppState;

pub const TEST_TIMEOUT: Duration = Duration::from_secs(1);

/// Resolver that never contacts an upstream.
pub fn create_offline_resolver() -> ResolverService {
    ResolverService::new(
        Arc::new(DisabledLookup::new()),
        Arc::new(RegionTables::builtin()),
    )
}

/// Resolver pointed at a stub upstream, e.g. `server.url("/raw")`.
pub fn create_upstream_resolver(base_url: &str) -> ResolverService {
    let lookup = HttpRegionLookup::new(base_url, TEST_TIMEOUT, "region-resolver-tests").unwrap();

    ResolverService::new(Arc::new(lookup), Arc::new(RegionTables::builtin()))
        .with_deadline(TEST_TIMEOUT)
}

pub fn create_offline_state() -> AppState {
    AppState::new(Arc::new(create_offline_resolver()))
}

pub fn create_upstream_state(base_url: &str) -> AppState {
    AppState::new(Arc::new(create_upstream_resolver(base_url)))
}
