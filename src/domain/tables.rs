//! Static lookup tables mapping email domains and TLDs to country codes.
//!
//! The tables are built once at startup and shared read-only for the lifetime
//! of the process. [`RegionTables::builtin`] provides the compiled-in data;
//! an override file can be loaded with
//! [`crate::infrastructure::tables_file::load_tables`].

use std::collections::{HashMap, HashSet};

use super::entities::CountryCode;

/// Well-known mailbox providers, grouped by country.
const BUILTIN_DOMAINS: &[(&str, &str)] = &[
    // United States
    ("gmail.com", "US"),
    ("yahoo.com", "US"),
    ("hotmail.com", "US"),
    ("outlook.com", "US"),
    ("aol.com", "US"),
    ("icloud.com", "US"),
    ("msn.com", "US"),
    ("live.com", "US"),
    // United Kingdom
    ("hotmail.co.uk", "GB"),
    ("gmail.co.uk", "GB"),
    ("yahoo.co.uk", "GB"),
    ("outlook.co.uk", "GB"),
    ("btinternet.com", "GB"),
    ("sky.com", "GB"),
    ("virginmedia.com", "GB"),
    // Canada
    ("yahoo.ca", "CA"),
    ("gmail.ca", "CA"),
    ("hotmail.ca", "CA"),
    ("outlook.ca", "CA"),
    ("sympatico.ca", "CA"),
    ("rogers.com", "CA"),
    ("shaw.ca", "CA"),
    ("bell.net", "CA"),
    // Australia
    ("gmail.com.au", "AU"),
    ("yahoo.com.au", "AU"),
    ("hotmail.com.au", "AU"),
    ("outlook.com.au", "AU"),
    ("bigpond.com", "AU"),
    ("optusnet.com.au", "AU"),
    ("iinet.net.au", "AU"),
    ("tpg.com.au", "AU"),
    // Germany
    ("gmail.de", "DE"),
    ("yahoo.de", "DE"),
    ("hotmail.de", "DE"),
    ("outlook.de", "DE"),
    ("gmx.de", "DE"),
    ("web.de", "DE"),
    ("t-online.de", "DE"),
    // France
    ("gmail.fr", "FR"),
    ("yahoo.fr", "FR"),
    ("hotmail.fr", "FR"),
    ("outlook.fr", "FR"),
    ("orange.fr", "FR"),
    ("free.fr", "FR"),
    ("laposte.net", "FR"),
    // Italy
    ("gmail.it", "IT"),
    ("yahoo.it", "IT"),
    ("hotmail.it", "IT"),
    ("outlook.it", "IT"),
    ("libero.it", "IT"),
    ("tiscali.it", "IT"),
    ("virgilio.it", "IT"),
    // Spain
    ("gmail.es", "ES"),
    ("yahoo.es", "ES"),
    ("hotmail.es", "ES"),
    ("outlook.es", "ES"),
    // Japan
    ("gmail.jp", "JP"),
    ("yahoo.co.jp", "JP"),
    ("hotmail.jp", "JP"),
    ("outlook.jp", "JP"),
    ("ezweb.ne.jp", "JP"),
    ("docomo.ne.jp", "JP"),
    // China
    ("qq.com", "CN"),
    ("163.com", "CN"),
    ("126.com", "CN"),
    ("sina.com", "CN"),
    ("gmail.cn", "CN"),
    ("yahoo.cn", "CN"),
    // Russia
    ("mail.ru", "RU"),
    ("yandex.ru", "RU"),
    ("gmail.ru", "RU"),
    ("yahoo.ru", "RU"),
    // Brazil
    ("gmail.com.br", "BR"),
    ("yahoo.com.br", "BR"),
    ("hotmail.com.br", "BR"),
    ("outlook.com.br", "BR"),
    ("uol.com.br", "BR"),
    ("bol.com.br", "BR"),
    ("globo.com", "BR"),
    ("terra.com.br", "BR"),
    // India
    ("gmail.co.in", "IN"),
    ("yahoo.co.in", "IN"),
    ("hotmail.co.in", "IN"),
    ("outlook.co.in", "IN"),
    ("rediffmail.com", "IN"),
    // Mexico
    ("gmail.com.mx", "MX"),
    ("yahoo.com.mx", "MX"),
    ("hotmail.com.mx", "MX"),
    ("outlook.com.mx", "MX"),
    // South Korea
    ("naver.com", "KR"),
    ("daum.net", "KR"),
    ("gmail.co.kr", "KR"),
    ("yahoo.co.kr", "KR"),
    // Switzerland
    ("gmail.ch", "CH"),
    ("yahoo.ch", "CH"),
    ("hotmail.ch", "CH"),
    ("outlook.ch", "CH"),
    ("protonmail.com", "CH"),
    ("protonmail.ch", "CH"),
    // Belgium
    ("gmail.be", "BE"),
    ("yahoo.be", "BE"),
    ("hotmail.be", "BE"),
    ("outlook.be", "BE"),
    ("telenet.be", "BE"),
    ("skynet.be", "BE"),
];

/// Country-code top-level domains.
const BUILTIN_TLDS: &[(&str, &str)] = &[
    ("uk", "GB"),
    ("de", "DE"),
    ("fr", "FR"),
    ("it", "IT"),
    ("es", "ES"),
    ("jp", "JP"),
    ("cn", "CN"),
    ("ru", "RU"),
    ("br", "BR"),
    ("in", "IN"),
    ("mx", "MX"),
    ("kr", "KR"),
    ("ch", "CH"),
    ("be", "BE"),
    ("ca", "CA"),
    ("au", "AU"),
    ("nz", "NZ"),
    ("nl", "NL"),
    ("se", "SE"),
    ("no", "NO"),
    ("dk", "DK"),
    ("fi", "FI"),
    ("pl", "PL"),
    ("cz", "CZ"),
    ("at", "AT"),
    ("hu", "HU"),
    ("gr", "GR"),
    ("pt", "PT"),
    ("ie", "IE"),
    ("il", "IL"),
    ("sg", "SG"),
    ("hk", "HK"),
    ("tr", "TR"),
    ("za", "ZA"),
];

/// Immutable domain and TLD lookup tables.
///
/// Alongside the two maps the tables keep `all_codes`: every distinct code
/// from the domain table followed by any new codes from the TLD table, in
/// insertion order. The fallback tier indexes into this list, so its order
/// must stay stable for a given input.
#[derive(Debug, Clone)]
pub struct RegionTables {
    domains: HashMap<String, CountryCode>,
    tlds: HashMap<String, CountryCode>,
    all_codes: Vec<CountryCode>,
}

impl RegionTables {
    /// Builds tables from ordered entries. Keys are lower-cased; a repeated key
    /// keeps its last code.
    pub fn new<D, T>(domains: D, tlds: T) -> Self
    where
        D: IntoIterator<Item = (String, CountryCode)>,
        T: IntoIterator<Item = (String, CountryCode)>,
    {
        let domain_entries: Vec<_> = domains.into_iter().collect();
        let tld_entries: Vec<_> = tlds.into_iter().collect();

        let mut seen = HashSet::new();
        let all_codes = domain_entries
            .iter()
            .chain(tld_entries.iter())
            .map(|(_, code)| *code)
            .filter(|code| seen.insert(*code))
            .collect();

        Self {
            domains: domain_entries
                .into_iter()
                .map(|(key, code)| (key.to_lowercase(), code))
                .collect(),
            tlds: tld_entries
                .into_iter()
                .map(|(key, code)| (key.to_lowercase(), code))
                .collect(),
            all_codes,
        }
    }

    /// Tables compiled into the binary.
    pub fn builtin() -> Self {
        Self::new(parse_entries(BUILTIN_DOMAINS), parse_entries(BUILTIN_TLDS))
    }

    /// Exact match on a full domain such as `gmail.com`.
    pub fn domain_country(&self, domain: &str) -> Option<CountryCode> {
        self.domains.get(domain).copied()
    }

    /// Match on a single label such as `uk`.
    pub fn tld_country(&self, tld: &str) -> Option<CountryCode> {
        self.tlds.get(tld).copied()
    }

    /// Distinct codes across both tables, domain table first.
    pub fn all_codes(&self) -> &[CountryCode] {
        &self.all_codes
    }

    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }

    pub fn tld_count(&self) -> usize {
        self.tlds.len()
    }

    /// Domain entries sorted by domain name.
    pub fn domain_entries(&self) -> Vec<(&str, CountryCode)> {
        sorted(&self.domains)
    }

    /// TLD entries sorted by TLD.
    pub fn tld_entries(&self) -> Vec<(&str, CountryCode)> {
        sorted(&self.tlds)
    }
}

impl Default for RegionTables {
    fn default() -> Self {
        Self::builtin()
    }
}

fn parse_entries(entries: &[(&str, &str)]) -> Vec<(String, CountryCode)> {
    entries
        .iter()
        .filter_map(|(key, code)| {
            CountryCode::parse(code)
                .ok()
                .map(|code| (key.to_string(), code))
        })
        .collect()
}

fn sorted(map: &HashMap<String, CountryCode>) -> Vec<(&str, CountryCode)> {
    let mut entries: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CountryCode {
        CountryCode::parse(s).unwrap()
    }

    #[test]
    fn test_builtin_entries_all_parse() {
        let tables = RegionTables::builtin();

        assert_eq!(tables.domain_count(), BUILTIN_DOMAINS.len());
        assert_eq!(tables.tld_count(), BUILTIN_TLDS.len());
    }

    #[test]
    fn test_builtin_lookups() {
        let tables = RegionTables::builtin();

        assert_eq!(tables.domain_country("gmail.com"), Some(code("US")));
        assert_eq!(tables.domain_country("protonmail.com"), Some(code("CH")));
        assert_eq!(tables.domain_country("example.com"), None);

        assert_eq!(tables.tld_country("uk"), Some(code("GB")));
        assert_eq!(tables.tld_country("za"), Some(code("ZA")));
        assert_eq!(tables.tld_country("co"), None);
    }

    #[test]
    fn test_all_codes_order_and_dedup() {
        let tables = RegionTables::builtin();
        let codes: Vec<&str> = tables.all_codes().iter().map(|c| c.as_str()).collect();

        // Domain table countries first, in declaration order.
        assert_eq!(
            &codes[..17],
            &[
                "US", "GB", "CA", "AU", "DE", "FR", "IT", "ES", "JP", "CN", "RU", "BR", "IN",
                "MX", "KR", "CH", "BE"
            ]
        );
        // Then TLD-only countries.
        assert_eq!(codes[17], "NZ");
        // `SG` only appears in the TLD table.
        assert_eq!(codes[31], "SG");
        assert_eq!(codes.last(), Some(&"ZA"));
        assert_eq!(codes.len(), 35);

        let unique: HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
    }

    #[test]
    fn test_new_lowercases_keys() {
        let tables = RegionTables::new(
            vec![("Example.ORG".to_string(), code("NL"))],
            vec![("XY".to_string(), code("PL"))],
        );

        assert_eq!(tables.domain_country("example.org"), Some(code("NL")));
        assert_eq!(tables.tld_country("xy"), Some(code("PL")));
        assert_eq!(tables.all_codes(), &[code("NL"), code("PL")]);
    }

    #[test]
    fn test_empty_tables() {
        let tables = RegionTables::new(Vec::new(), Vec::new());

        assert!(tables.all_codes().is_empty());
        assert_eq!(tables.domain_count(), 0);
    }

    #[test]
    fn test_sorted_entries() {
        let tables = RegionTables::builtin();
        let tlds = tables.tld_entries();

        assert_eq!(tlds.first().map(|(k, _)| *k), Some("at"));
        assert_eq!(tlds.last().map(|(k, _)| *k), Some("za"));
    }
}
