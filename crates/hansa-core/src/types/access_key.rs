//! Service access key type.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A fixed per-deployment shared secret for service-level authorization.
///
/// Access keys are 64 lower-case hexadecimal characters and are attached to
/// every request as the `X-Access-Key` header by clients configured for
/// key-based authorization.
///
/// # Security
///
/// The key is never exposed in Debug or Display output to prevent
/// accidental logging.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessKey(String);

impl AccessKey {
    /// Create a new access key from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error unless the value is exactly 64 lower-case
    /// hexadecimal characters.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        if s.len() != 64 {
            return Err(InvalidInputError::AccessKey {
                reason: format!("expected 64 characters, got {}", s.len()),
            }
            .into());
        }
        if !s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)) {
            return Err(InvalidInputError::AccessKey {
                reason: "expected lower-case hexadecimal characters".to_string(),
            }
            .into());
        }
        Ok(Self(s))
    }

    /// Returns the key value.
    ///
    /// # Security
    ///
    /// Use this only when constructing request headers.
    /// Never log or display this value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Intentionally hide the key in Debug output
impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessKey").field(&"[REDACTED]").finish()
    }
}

impl FromStr for AccessKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

    #[test]
    fn valid_key() {
        let key = AccessKey::new(KEY).unwrap();
        assert_eq!(key.as_str(), KEY);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(AccessKey::new("abc123").is_err());
    }

    #[test]
    fn rejects_non_hex() {
        let value = "Z".repeat(64);
        assert!(AccessKey::new(value).is_err());
    }

    #[test]
    fn debug_hides_key() {
        let key = AccessKey::new(KEY).unwrap();
        let debug = format!("{:?}", key);
        assert!(!debug.contains(KEY));
        assert!(debug.contains("[REDACTED]"));
    }
}
