//! Service origin URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated web-service origin URL.
///
/// This type ensures the origin is absolute, uses HTTPS (or HTTP for
/// localhost), and is properly normalized for resource path construction.
/// All service resources live under the fixed `/services` prefix.
///
/// # Example
///
/// ```
/// use hansa_core::ServiceUrl;
///
/// let origin = ServiceUrl::new("https://broker.example.com:8040").unwrap();
/// assert_eq!(origin.resource_url(&["auctions", "42", "bids"]),
///            "https://broker.example.com:8040/services/auctions/42/bids");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServiceUrl(Url);

impl ServiceUrl {
    /// Create a new service URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ServiceUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        // Normalize: remove trailing slash
        let normalized = if url.path() == "/" {
            let mut u = url.clone();
            u.set_path("");
            u
        } else {
            url
        };

        Ok(Self(normalized))
    }

    /// Returns the URL of the resource addressed by the given path segments,
    /// nested under the `/services` prefix.
    pub fn resource_url(&self, segments: &[&str]) -> String {
        // The URL crate always adds a trailing slash to root paths,
        // so trim it before appending the resource path
        let base = self.0.as_str().trim_end_matches('/');
        let mut url = format!("{}/services", base);
        for segment in segments {
            url.push('/');
            url.push_str(segment);
        }
        url
    }

    /// Returns the origin as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        // Must be absolute
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ServiceUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        // Must be HTTPS (or HTTP for localhost)
        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::ServiceUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        // Must have a host
        if url.host_str().is_none() {
            return Err(InvalidInputError::ServiceUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ServiceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ServiceUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ServiceUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ServiceUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ServiceUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ServiceUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let origin = ServiceUrl::new("https://broker.example.com:8040").unwrap();
        assert_eq!(origin.host(), Some("broker.example.com"));
    }

    #[test]
    fn valid_localhost_http() {
        let origin = ServiceUrl::new("http://localhost:8040").unwrap();
        assert_eq!(origin.host(), Some("localhost"));
    }

    #[test]
    fn resource_url_construction() {
        let origin = ServiceUrl::new("https://broker.example.com:8040").unwrap();
        assert_eq!(
            origin.resource_url(&["auctions"]),
            "https://broker.example.com:8040/services/auctions"
        );
        assert_eq!(
            origin.resource_url(&["people", "7", "orders"]),
            "https://broker.example.com:8040/services/people/7/orders"
        );
    }

    #[test]
    fn normalizes_trailing_slash() {
        let origin = ServiceUrl::new("https://broker.example.com/").unwrap();
        assert_eq!(
            origin.resource_url(&["offers"]),
            "https://broker.example.com/services/offers"
        );
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ServiceUrl::new("http://broker.example.com").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ServiceUrl::new("/services/auctions").is_err());
    }
}
