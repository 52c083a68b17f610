//! Outcome of a successful region resolution.

use serde::Serialize;
use std::fmt;

use super::CountryCode;

/// Which strategy produced a [`Resolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionMethod {
    /// Answer scraped from the upstream lookup service.
    Remote,
    /// Exact match in the domain table.
    DomainMatch,
    /// Match on the final label in the TLD table.
    TldMatch,
    /// Compound suffix such as `co.uk`, matched on its final label.
    SldMatch,
    /// Deterministic pick derived from the domain's first character.
    Fallback,
}

impl ResolutionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::DomainMatch => "domain-match",
            Self::TldMatch => "tld-match",
            Self::SldMatch => "sld-match",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for ResolutionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved country code tagged with the method that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub code: CountryCode,
    pub method: ResolutionMethod,
}

impl Resolution {
    pub fn new(code: CountryCode, method: ResolutionMethod) -> Self {
        Self { code, method }
    }
}
