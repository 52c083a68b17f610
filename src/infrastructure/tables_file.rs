//! Loads region tables from a JSON file.
//!
//! # File Format
//!
//! ```json
//! {
//!   "domains": [
//!     { "domain": "gmail.com", "country": "US" },
//!     { "domain": "web.de", "country": "DE" }
//!   ],
//!   "tlds": [
//!     { "tld": "uk", "country": "GB" }
//!   ]
//! }
//! ```
//!
//! Entries are arrays rather than objects so that their order survives
//! parsing; the fallback tier depends on it.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::domain::entities::CountryCode;
use crate::domain::tables::RegionTables;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TablesFile {
    #[serde(default)]
    domains: Vec<DomainEntry>,
    #[serde(default)]
    tlds: Vec<TldEntry>,
}

#[derive(Debug, Deserialize)]
struct DomainEntry {
    domain: String,
    country: CountryCode,
}

#[derive(Debug, Deserialize)]
struct TldEntry {
    tld: String,
    country: CountryCode,
}

/// Reads and parses a tables file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails [`parse_tables`].
pub fn load_tables(path: &Path) -> Result<RegionTables> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read region tables from {}", path.display()))?;

    parse_tables(&content)
        .with_context(|| format!("Invalid region tables file {}", path.display()))
}

/// Parses tables from JSON text.
///
/// # Errors
///
/// Returns an error if:
/// - the JSON is malformed or a country code is not two letters
/// - both tables are empty
/// - a domain key is empty, or a TLD key is empty or contains a dot
pub fn parse_tables(json: &str) -> Result<RegionTables> {
    let file: TablesFile = serde_json::from_str(json).context("Failed to parse JSON")?;

    if file.domains.is_empty() && file.tlds.is_empty() {
        anyhow::bail!("Region tables must contain at least one domain or TLD entry");
    }

    if let Some(entry) = file.domains.iter().find(|e| e.domain.trim().is_empty()) {
        anyhow::bail!("Empty domain key mapped to {}", entry.country);
    }

    if let Some(entry) = file
        .tlds
        .iter()
        .find(|e| e.tld.trim().is_empty() || e.tld.contains('.'))
    {
        anyhow::bail!(
            "TLD key must be a single label, got '{}' ({})",
            entry.tld,
            entry.country
        );
    }

    Ok(RegionTables::new(
        file.domains
            .into_iter()
            .map(|e| (e.domain.trim().to_string(), e.country)),
        file.tlds
            .into_iter()
            .map(|e| (e.tld.trim().to_string(), e.country)),
    ))
}
