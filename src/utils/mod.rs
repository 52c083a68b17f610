//! Helper functions shared by the HTTP layer and the command-line tool.
//!
//! - [`region_label`] - Display labels for resolved codes, including the `SG` convention
//! - [`uri`] - Percent-encoding for upstream request paths

pub mod region_label;
pub mod uri;
