use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Number of digest characters kept for a short code.
pub const CODE_LENGTH: usize = 6;

/// A validated short code identifier for a shortened link.
///
/// Codes are exactly [`CODE_LENGTH`] lowercase hex characters: the
/// truncated MD5 digest of the normalized target URL.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortCode(String);

impl ShortCode {
    /// Derives the short code for a normalized URL string.
    ///
    /// The derivation is deterministic: the same URL always yields the
    /// same code. Distinct URLs may collide under truncation, so callers
    /// that write records must check what the code currently maps to
    /// before reusing it.
    pub fn for_url(normalized_url: &str) -> Self {
        let digest = md5::compute(normalized_url.as_bytes());
        let hex = format!("{:x}", digest);
        Self(hex[..CODE_LENGTH].to_string())
    }

    /// Creates a `ShortCode` after validating the input.
    ///
    /// Valid codes are exactly [`CODE_LENGTH`] lowercase hex characters.
    pub fn new(code: impl Into<String>) -> std::result::Result<Self, CoreError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources.
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> std::result::Result<(), CoreError> {
        if code.len() != CODE_LENGTH {
            return Err(CoreError::InvalidShortCode(format!(
                "length must be {}, got {}",
                CODE_LENGTH,
                code.len()
            )));
        }

        if !code
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        {
            return Err(CoreError::InvalidShortCode(format!(
                "must contain only lowercase hex characters: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let a = ShortCode::for_url("https://example.com/page");
        let b = ShortCode::for_url("https://example.com/page");
        assert_eq!(a, b);
    }

    #[test]
    fn derivation_matches_truncated_digest() {
        // md5("https://example.com/") = 182ccedb33a9e03fbf1079b209da1a31
        let code = ShortCode::for_url("https://example.com/");
        assert_eq!(code.as_str(), "182cce");
    }

    #[test]
    fn derived_codes_are_valid() {
        let code = ShortCode::for_url("https://example.com/some/long/path?q=1");
        assert!(ShortCode::new(code.as_str().to_string()).is_ok());
    }

    #[test]
    fn distinct_urls_usually_differ() {
        let a = ShortCode::for_url("https://example.com/a");
        let b = ShortCode::for_url("https://example.com/b");
        assert_ne!(a, b);
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(ShortCode::new("abc12").is_err());
        assert!(ShortCode::new("abc1234").is_err());
        assert!(ShortCode::new("").is_err());
    }

    #[test]
    fn non_hex_rejected() {
        assert!(ShortCode::new("abcxyz").is_err());
        assert!(ShortCode::new("ABC123").is_err());
        assert!(ShortCode::new("ab-12_").is_err());
    }

    #[test]
    fn valid_code_accepted() {
        let code = ShortCode::new("1a2b3c").unwrap();
        assert_eq!(code.to_string(), "1a2b3c");
    }

    #[test]
    fn to_url_joins_base() {
        let code = ShortCode::new_unchecked("abc123");
        assert_eq!(code.to_url("https://short.ly"), "https://short.ly/abc123");
        assert_eq!(code.to_url("https://short.ly/"), "https://short.ly/abc123");
    }
}
