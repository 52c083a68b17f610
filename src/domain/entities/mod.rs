//! Core domain entities for region resolution.
//!
//! # Entity Types
//!
//! - [`EmailAddress`] - An address split into local part and lower-cased domain
//! - [`CountryCode`] - A two-letter uppercase region code
//! - [`Resolution`] - A code tagged with the [`ResolutionMethod`] that produced it

pub mod country_code;
pub mod email;
pub mod resolution;

pub use country_code::{CountryCode, InvalidCountryCode};
pub use email::EmailAddress;
pub use resolution::{Resolution, ResolutionMethod};
