//! Two-letter country/region code.

use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

/// Errors produced when parsing a [`CountryCode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid country code '{0}': expected two ASCII letters")]
pub struct InvalidCountryCode(pub String);

/// A two-letter uppercase code such as `US` or `GB`.
///
/// Codes are not checked against ISO 3166; any pair of ASCII letters is
/// accepted and normalized to uppercase. Serializes as a plain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// Default answer when every other strategy has nothing to offer.
    pub const US: CountryCode = CountryCode(*b"US");

    /// Parses a code, accepting either case.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCountryCode`] unless the input is exactly two ASCII letters.
    pub fn parse(value: &str) -> Result<Self, InvalidCountryCode> {
        match value.as_bytes() {
            [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                Ok(Self([a.to_ascii_uppercase(), b.to_ascii_uppercase()]))
            }
            _ => Err(InvalidCountryCode(value.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII letters by construction.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = InvalidCountryCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
