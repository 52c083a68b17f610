//! HTTP server initialization and runtime setup.
//!
//! Builds the region tables and the upstream client, wires the resolver into
//! shared state and runs the Axum server until Ctrl-C.

use crate::application::services::ResolverService;
use crate::config::Config;
use crate::domain::lookup::RegionLookup;
use crate::domain::tables::RegionTables;
use crate::infrastructure::tables_file::load_tables;
use crate::infrastructure::upstream::{DisabledLookup, HttpRegionLookup};
use crate::routes::{app_router, normalized};
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

/// Loads the region tables from `REGION_TABLES_FILE`, or the built-in set.
///
/// # Errors
///
/// Returns an error if a configured file cannot be read or parsed. A broken
/// file is never silently replaced by the built-in tables.
pub fn build_tables(config: &Config) -> Result<RegionTables> {
    let tables = match &config.tables_file {
        Some(path) => load_tables(Path::new(path))?,
        None => RegionTables::builtin(),
    };

    tracing::info!(
        "Region tables ready: {} domains, {} TLDs, {} codes",
        tables.domain_count(),
        tables.tld_count(),
        tables.all_codes().len()
    );

    Ok(tables)
}

/// Builds the resolver with its upstream client and tables.
///
/// # Errors
///
/// Returns an error if the tables fail to load or the HTTP client cannot be
/// built.
pub fn build_resolver(config: &Config) -> Result<ResolverService> {
    let tables = Arc::new(build_tables(config)?);

    let lookup: Arc<dyn RegionLookup> = if config.remote_lookup {
        let client = HttpRegionLookup::new(
            config.upstream_base_url.clone(),
            config.upstream_timeout(),
            &config.upstream_user_agent,
        )
        .context("Failed to build upstream HTTP client")?;
        tracing::info!("Remote lookup enabled");
        Arc::new(client)
    } else {
        tracing::info!("Remote lookup disabled, resolving from tables only");
        Arc::new(DisabledLookup::new())
    };

    Ok(ResolverService::new(lookup, tables)
        .with_deadline(config.upstream_timeout())
        .with_username_domain(config.username_domain.clone()))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Region tables or the upstream client fail to initialize
/// - The listen address is invalid or cannot be bound
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let resolver = build_resolver(&config)?;
    let state = AppState::new(Arc::new(resolver));

    let app = normalized(app_router(state));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
