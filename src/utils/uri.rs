//! Percent-encoding for values placed in a URL path segment.

use url::form_urlencoded;

/// Encodes a value so it can be used as a single path segment.
///
/// Everything except ASCII alphanumerics and `*-._` is escaped, including
/// `@`, `/` and `+`. Spaces become `%20` rather than `+`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(encode_path_segment("a b@c.com"), "a%20b%40c.com");
/// ```
pub fn encode_path_segment(value: &str) -> String {
    // byte_serialize emits '+' only for spaces; a literal '+' is already %2B.
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
