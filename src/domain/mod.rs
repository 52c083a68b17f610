//! Domain layer containing the resolution model and pure heuristics.
//!
//! Nothing in this module performs I/O. The remote tier is only described
//! here, as the [`lookup::RegionLookup`] trait; the HTTP implementation lives
//! in [`crate::infrastructure::upstream`].
//!
//! # Architecture
//!
//! - [`entities`] - Email address, country code and resolution result
//! - [`tables`] - Immutable domain/TLD lookup tables
//! - [`heuristics`] - Table-driven tiers and the deterministic fallback
//! - [`lookup`] - Remote lookup port
//! - [`errors`] - Resolver and upstream error taxonomy

pub mod entities;
pub mod errors;
pub mod heuristics;
pub mod lookup;
pub mod tables;
