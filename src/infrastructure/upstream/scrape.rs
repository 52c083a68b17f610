//! Best-effort text scraping of country codes from upstream responses.
//!
//! The upstream service is not consistent about its response format: it may
//! answer with JSON, plain text, an HTML page, or a bare code. These helpers
//! accept any `country_code: "XX"`-looking fragment, in any quoting style,
//! with a case-insensitive key.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::domain::entities::CountryCode;

/// `country_code` key, optional quote, colon, optional quote, two letters.
static COUNTRY_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i:country_code)["']?\s*:\s*["']?([A-Za-z]{2})["']?"#).unwrap()
});

/// Finds the first `country_code` fragment in arbitrary text.
pub fn scrape_country_code(text: &str) -> Option<CountryCode> {
    COUNTRY_CODE_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| CountryCode::parse(m.as_str()).ok())
}

/// Extracts a code from a parsed JSON body.
///
/// Prefers the `data.country_code` field; otherwise scrapes the serialized
/// document so that codes nested elsewhere are still found.
pub fn extract_from_json(value: &Value) -> Option<CountryCode> {
    let direct = value
        .pointer("/data/country_code")
        .and_then(Value::as_str)
        .and_then(|s| CountryCode::parse(s.trim()).ok());

    direct.or_else(|| scrape_country_code(&value.to_string()))
}

/// Extracts a code from a non-JSON body.
///
/// 1. Scrape the raw text.
/// 2. If the body is an HTML document, scrape it again with quote entities
///    decoded, and stop there.
/// 3. Accept a body that is exactly two uppercase letters.
pub fn extract_from_text(body: &str) -> Option<CountryCode> {
    if let Some(code) = scrape_country_code(body) {
        return Some(code);
    }

    let trimmed = body.trim();

    if is_html_document(trimmed) {
        return scrape_country_code(&decode_quote_entities(trimmed));
    }

    bare_code(trimmed)
}

fn is_html_document(trimmed: &str) -> bool {
    trimmed.starts_with("<!DOCTYPE html>") || trimmed.starts_with("<html")
}

fn bare_code(trimmed: &str) -> Option<CountryCode> {
    if trimmed.len() == 2 && trimmed.bytes().all(|b| b.is_ascii_uppercase()) {
        CountryCode::parse(trimmed).ok()
    } else {
        None
    }
}

fn decode_quote_entities(html: &str) -> String {
    html.replace("&quot;", "\"")
        .replace("&#34;", "\"")
        .replace("&#x22;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn code(s: &str) -> CountryCode {
        CountryCode::parse(s).unwrap()
    }

    #[test]
    fn test_scrape_quoting_styles() {
        assert_eq!(scrape_country_code(r#"{"country_code":"DE"}"#), Some(code("DE")));
        assert_eq!(scrape_country_code("country_code: 'fr'"), Some(code("FR")));
        assert_eq!(scrape_country_code("country_code:jp"), Some(code("JP")));
        assert_eq!(scrape_country_code("COUNTRY_CODE = US"), None);
    }

    #[test]
    fn test_scrape_key_case_insensitive() {
        assert_eq!(scrape_country_code(r#"Country_Code : "gb""#), Some(code("GB")));
    }

    #[test]
    fn test_scrape_takes_first_two_letters() {
        assert_eq!(scrape_country_code(r#""country_code": "USA""#), Some(code("US")));
    }

    #[test]
    fn test_scrape_no_match() {
        assert_eq!(scrape_country_code("nothing here"), None);
        assert_eq!(scrape_country_code(r#""country_code": 12"#), None);
        assert_eq!(scrape_country_code(r#""country": "DE""#), None);
    }

    #[test]
    fn test_json_prefers_data_field() {
        let body = json!({"country_code": "FR", "data": {"country_code": "DE"}});
        assert_eq!(extract_from_json(&body), Some(code("DE")));
    }

    #[test]
    fn test_json_lowercase_data_field() {
        let body = json!({"data": {"country_code": "br"}});
        assert_eq!(extract_from_json(&body), Some(code("BR")));
    }

    #[test]
    fn test_json_falls_back_to_scrape() {
        let body = json!({"result": {"user": {"country_code": "kr"}}});
        assert_eq!(extract_from_json(&body), Some(code("KR")));

        // Scraping stops at the first fragment, even a bogus one.
        let body = json!({"data": {"country_code": "unknown"}, "meta": {"country_code": "IT"}});
        assert_eq!(extract_from_json(&body), Some(code("UN")));
    }

    #[test]
    fn test_json_without_code() {
        assert_eq!(extract_from_json(&json!({"data": {}})), None);
        assert_eq!(extract_from_json(&json!([1, 2, 3])), None);
    }

    #[test]
    fn test_text_scrape() {
        assert_eq!(
            extract_from_text("user found, country_code: 'MX', ok"),
            Some(code("MX"))
        );
    }

    #[test]
    fn test_text_bare_code() {
        assert_eq!(extract_from_text("SG"), Some(code("SG")));
        assert_eq!(extract_from_text("  DE\n"), Some(code("DE")));
        assert_eq!(extract_from_text("de"), None);
        assert_eq!(extract_from_text("DEU"), None);
        assert_eq!(extract_from_text(""), None);
    }

    #[test]
    fn test_html_with_entities() {
        let html = "<!DOCTYPE html><html><body><pre>{&quot;country_code&quot;: &quot;CA&quot;}</pre></body></html>";
        assert_eq!(extract_from_text(html), Some(code("CA")));
    }

    #[test]
    fn test_html_plain_match() {
        let html = "<html><script>var d = {country_code: 'AU'};</script></html>";
        assert_eq!(extract_from_text(html), Some(code("AU")));
    }

    #[test]
    fn test_html_without_code() {
        assert_eq!(extract_from_text("<html><body>Not found</body></html>"), None);
    }
}
