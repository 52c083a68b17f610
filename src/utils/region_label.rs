//! Human-readable labels for resolved country codes.
//!
//! The upstream lookup service answers `SG` for accounts that do not exist, so
//! presentation code shows that code as "Account not found" rather than
//! Singapore. The resolver itself never rewrites `SG`.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

use crate::domain::entities::CountryCode;

/// Code the upstream uses to signal a missing account.
pub const NOT_FOUND_CODE: &str = "SG";

static COUNTRY_NAMES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("US", "United States"),
        ("GB", "United Kingdom"),
        ("CA", "Canada"),
        ("AU", "Australia"),
        ("DE", "Germany"),
        ("FR", "France"),
        ("IT", "Italy"),
        ("ES", "Spain"),
        ("JP", "Japan"),
        ("CN", "China"),
        ("RU", "Russia"),
        ("BR", "Brazil"),
        ("IN", "India"),
        ("MX", "Mexico"),
        ("KR", "South Korea"),
        ("CH", "Switzerland"),
        ("BE", "Belgium"),
        ("NZ", "New Zealand"),
        ("NL", "Netherlands"),
        ("SE", "Sweden"),
        ("NO", "Norway"),
        ("DK", "Denmark"),
        ("FI", "Finland"),
        ("PL", "Poland"),
        ("CZ", "Czech Republic"),
        ("AT", "Austria"),
        ("HU", "Hungary"),
        ("GR", "Greece"),
        ("PT", "Portugal"),
        ("IE", "Ireland"),
        ("IL", "Israel"),
        ("HK", "Hong Kong"),
        ("TR", "Turkey"),
        ("ZA", "South Africa"),
    ])
});

/// Presentation of a resolved code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegionLabel {
    /// The upstream reported that the account does not exist.
    AccountNotFound,
    /// A code with a known country name.
    Country {
        code: CountryCode,
        name: &'static str,
    },
    /// A code missing from the name table.
    Unknown { code: CountryCode },
}

impl fmt::Display for RegionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccountNotFound => f.write_str("Account not found"),
            Self::Country { code, name } => write!(f, "{} ({})", code, name),
            Self::Unknown { code } => write!(f, "{} (Unknown Country)", code),
        }
    }
}

/// Looks up the English name of a code, if known.
pub fn country_name(code: &CountryCode) -> Option<&'static str> {
    COUNTRY_NAMES.get(code.as_str()).copied()
}

/// Labels a resolved code for display.
pub fn describe(code: &CountryCode) -> RegionLabel {
    if code.as_str() == NOT_FOUND_CODE {
        return RegionLabel::AccountNotFound;
    }

    match country_name(code) {
        Some(name) => RegionLabel::Country { code: *code, name },
        None => RegionLabel::Unknown { code: *code },
    }
}
