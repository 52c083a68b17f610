//! Infrastructure layer: external integrations.
//!
//! - [`upstream`] - HTTP client for the remote lookup service
//! - [`tables_file`] - Loading region tables from a JSON file

pub mod tables_file;
pub mod upstream;
