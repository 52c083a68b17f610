//! Table-driven resolution tiers.
//!
//! Everything here is pure and synchronous. The tiers run in order and the
//! first hit wins:
//!
//! 1. exact domain match
//! 2. compound second-level suffix (`co.uk`, `com.au`, ...) matched on its final label
//! 3. final label in the TLD table
//! 4. deterministic fallback derived from the first character of the domain
//!
//! The last tier always produces a code, so [`resolve_locally`] is total.

use tracing::debug;

use super::entities::{CountryCode, EmailAddress, Resolution, ResolutionMethod};
use super::tables::RegionTables;

/// Second-level labels that mark a country-style compound suffix.
pub const COMPOUND_SLDS: [&str; 5] = ["co", "com", "ac", "gov", "edu"];

/// Resolves an address using only the lookup tables.
pub fn resolve_locally(tables: &RegionTables, email: &EmailAddress) -> Resolution {
    let domain = email.domain();

    if let Some(code) = tables.domain_country(domain) {
        debug!("Direct domain match for {}: {}", domain, code);
        return Resolution::new(code, ResolutionMethod::DomainMatch);
    }

    let labels = email.labels();
    let tld = labels.last().copied().unwrap_or_default();

    if let Some(code) = compound_suffix_country(tables, &labels) {
        debug!("Compound suffix match for {}: {}", domain, code);
        return Resolution::new(code, ResolutionMethod::SldMatch);
    }

    if let Some(code) = tables.tld_country(tld) {
        debug!("TLD match for .{}: {}", tld, code);
        return Resolution::new(code, ResolutionMethod::TldMatch);
    }

    let code = fallback_code(tables, domain);
    debug!("No table match for {}, first-letter fallback: {}", domain, code);
    Resolution::new(code, ResolutionMethod::Fallback)
}

/// Looks up the final label when the domain ends in a compound suffix.
///
/// Requires more than two labels so that e.g. `co.uk` on its own is left to
/// the plain TLD tier.
fn compound_suffix_country(tables: &RegionTables, labels: &[&str]) -> Option<CountryCode> {
    let [.., sld, tld] = labels else {
        return None;
    };

    if labels.len() > 2 && COMPOUND_SLDS.contains(sld) {
        tables.tld_country(tld)
    } else {
        None
    }
}

/// Picks a code from [`RegionTables::all_codes`] based on the domain's first
/// UTF-16 unit relative to `a`.
///
/// The remainder is truncated, so characters sorting before `a` (digits,
/// hyphens) give a negative index and land on [`CountryCode::US`], as do an
/// empty domain and empty tables.
pub fn fallback_code(tables: &RegionTables, domain: &str) -> CountryCode {
    let codes = tables.all_codes();

    let Some(first) = domain.encode_utf16().next() else {
        return CountryCode::US;
    };

    if codes.is_empty() {
        return CountryCode::US;
    }

    let offset = i64::from(first) - i64::from(b'a');
    let index = offset % codes.len() as i64;

    usize::try_from(index)
        .ok()
        .and_then(|i| codes.get(i))
        .copied()
        .unwrap_or(CountryCode::US)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(address: &str) -> Resolution {
        let tables = RegionTables::builtin();
        let email = EmailAddress::parse(address).unwrap();
        resolve_locally(&tables, &email)
    }

    fn code(s: &str) -> CountryCode {
        CountryCode::parse(s).unwrap()
    }

    #[test]
    fn test_domain_match() {
        let r = resolve("user@gmail.com");
        assert_eq!(r.code, code("US"));
        assert_eq!(r.method, ResolutionMethod::DomainMatch);

        let r = resolve("someone@YANDEX.RU");
        assert_eq!(r.code, code("RU"));
        assert_eq!(r.method, ResolutionMethod::DomainMatch);
    }

    #[test]
    fn test_domain_match_wins_over_suffix() {
        // yahoo.co.jp is in the domain table; its suffix would also match.
        let r = resolve("user@yahoo.co.jp");
        assert_eq!(r.code, code("JP"));
        assert_eq!(r.method, ResolutionMethod::DomainMatch);
    }

    #[test]
    fn test_compound_suffix_match() {
        let r = resolve("user@example.co.uk");
        assert_eq!(r.code, code("GB"));
        assert_eq!(r.method, ResolutionMethod::SldMatch);

        let r = resolve("staff@uni.ac.nz");
        assert_eq!(r.code, code("NZ"));
        assert_eq!(r.method, ResolutionMethod::SldMatch);

        let r = resolve("x@agency.gov.za");
        assert_eq!(r.code, code("ZA"));
        assert_eq!(r.method, ResolutionMethod::SldMatch);
    }

    #[test]
    fn test_tld_match() {
        let r = resolve("user@example.de");
        assert_eq!(r.code, code("DE"));
        assert_eq!(r.method, ResolutionMethod::TldMatch);

        // Non-compound second-level label.
        let r = resolve("user@mail.shop.se");
        assert_eq!(r.code, code("SE"));
        assert_eq!(r.method, ResolutionMethod::TldMatch);

        // Only two labels, so `co` is not treated as a compound marker.
        let r = resolve("user@co.uk");
        assert_eq!(r.method, ResolutionMethod::TldMatch);
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let first = resolve("user@unknownzone.xx");
        let second = resolve("other@unknownzone.xx");

        assert_eq!(first.method, ResolutionMethod::Fallback);
        assert_eq!(first, second);
        // 'u' - 'a' = 20, index 20 of the builtin code list.
        assert_eq!(first.code, code("NO"));
    }

    #[test]
    fn test_fallback_wraps_around() {
        let tables = RegionTables::new(
            vec![("a.com".to_string(), code("AA"))],
            vec![("bb".to_string(), code("BB")), ("cc".to_string(), code("CC"))],
        );

        assert_eq!(fallback_code(&tables, "alpha.zz"), code("AA"));
        assert_eq!(fallback_code(&tables, "beta.zz"), code("BB"));
        assert_eq!(fallback_code(&tables, "charlie.zz"), code("CC"));
        assert_eq!(fallback_code(&tables, "delta.zz"), code("AA"));
    }

    #[test]
    fn test_fallback_defaults_to_us() {
        let tables = RegionTables::builtin();

        assert_eq!(fallback_code(&tables, ""), CountryCode::US);
        assert_eq!(fallback_code(&tables, "9zone.xx"), CountryCode::US);
        assert_eq!(fallback_code(&tables, "-dash.xx"), CountryCode::US);

        let empty = RegionTables::new(Vec::new(), Vec::new());
        assert_eq!(fallback_code(&empty, "zone.xx"), CountryCode::US);
    }

    #[test]
    fn test_empty_domain_still_resolves() {
        let r = resolve("user@");
        assert_eq!(r.code, CountryCode::US);
        assert_eq!(r.method, ResolutionMethod::Fallback);
    }

    #[test]
    fn test_every_single_at_address_resolves() {
        let tables = RegionTables::builtin();
        let samples = [
            "a@b", "@", "x@.", "x@..", "x@.uk", "x@ünïcode.example", "x@1.2.3.4", "x@zz.co",
        ];

        for address in samples {
            let email = EmailAddress::parse(address).unwrap();
            let r = resolve_locally(&tables, &email);
            assert_eq!(r.code.as_str().len(), 2, "{address}");
        }
    }
}
