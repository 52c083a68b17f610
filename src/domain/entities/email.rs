//! Email address entity split into local part and domain.

use crate::domain::errors::ResolveError;

/// An email-like address with exactly one `@`.
///
/// The domain part is lower-cased on construction; the local part is kept
/// verbatim. No RFC 5322 validation is performed: anything with a single `@`
/// is accepted, including an empty local part or an empty domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress {
    raw: String,
    local_part: String,
    domain: String,
}

impl EmailAddress {
    /// Parses an address by splitting on `@`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidFormat`] when the input does not contain
    /// exactly one `@`.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let email = EmailAddress::parse("User@Gmail.COM")?;
    /// assert_eq!(email.local_part(), "User");
    /// assert_eq!(email.domain(), "gmail.com");
    /// ```
    pub fn parse(address: &str) -> Result<Self, ResolveError> {
        let mut parts = address.split('@');

        let (Some(local_part), Some(domain), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ResolveError::InvalidFormat);
        };

        Ok(Self {
            raw: address.to_string(),
            local_part: local_part.to_string(),
            domain: domain.to_lowercase(),
        })
    }

    /// The address exactly as it was supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    /// Lower-cased domain part.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Dot-separated labels of the domain, in order.
    pub fn labels(&self) -> Vec<&str> {
        self.domain.split('.').collect()
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
