//! Shared HTTP request construction and response decoding.

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use hansa_core::error::{DecodeError, Error, ProtocolError};
use hansa_core::{AccessKey, ServiceUrl, Upload};

/// Header carrying the fixed shared secret for key-authorized deployments.
const ACCESS_KEY_HEADER: &str = "X-Access-Key";

/// Header surfacing an upload's original filename.
const CONTENT_DESCRIPTION_HEADER: &str = "X-Content-Description";

/// The credential-attachment strategy, selected at construction time.
///
/// The services come in two deployment variants: one relies on session
/// cookies established by the requester lookup, the other expects a fixed
/// per-deployment access key on every request. Never both.
#[derive(Debug, Clone)]
pub enum Authorization {
    /// Rely on session cookies; the HTTP client keeps a cookie store.
    SessionCookie,
    /// Attach the given access key as `X-Access-Key` to every request.
    AccessKey(AccessKey),
}

/// HTTP client for web-service requests.
///
/// Stateless apart from the fixed origin and authorization strategy; each
/// call is an independent request/response exchange. No timeouts are
/// configured and no request is retried.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    origin: ServiceUrl,
    access_key: Option<AccessKey>,
}

impl RestClient {
    /// Create a new client for the given service origin.
    pub fn new(origin: ServiceUrl, authorization: Authorization) -> Self {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("hansa/", env!("CARGO_PKG_VERSION")));

        let access_key = match authorization {
            Authorization::SessionCookie => {
                builder = builder.cookie_store(true);
                None
            }
            Authorization::AccessKey(key) => Some(key),
        };

        let client = builder.build().expect("failed to build HTTP client");

        Self {
            client,
            origin,
            access_key,
        }
    }

    /// Returns the service origin this client is configured for.
    pub fn origin(&self) -> &ServiceUrl {
        &self.origin
    }

    /// Start a request against the resource addressed by the given path
    /// segments, with the authorization strategy applied.
    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> reqwest::RequestBuilder {
        let url = self.origin.resource_url(segments);
        debug!(%method, %url, "service request");

        let mut builder = self.client.request(method, &url);
        if let Some(ref key) = self.access_key {
            builder = builder.header(ACCESS_KEY_HEADER, key.as_str());
        }
        builder
    }

    /// GET a JSON resource, with the given query parameters.
    ///
    /// Unset optional parameters are omitted entirely; if no parameter is
    /// set, the URL carries no query string at all.
    pub(crate) async fn get_json<Q, R>(&self, segments: &[&str], query: &Q) -> Result<R, Error>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        trace!(?query, "query parameters");
        let response = self
            .request(Method::GET, segments)
            .query(query)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        Self::handle_json(response).await
    }

    /// GET a JSON resource without query parameters.
    pub(crate) async fn get_json_plain<R>(&self, segments: &[&str]) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let response = self
            .request(Method::GET, segments)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        Self::handle_json(response).await
    }

    /// GET a binary resource with the given `Accept` media type.
    pub(crate) async fn get_bytes(&self, segments: &[&str], accept: &str) -> Result<Vec<u8>, Error> {
        let response = self
            .request(Method::GET, segments)
            .header(ACCEPT, accept)
            .send()
            .await?;

        let response = Self::error_for_status(response)?;
        Ok(response.bytes().await?.to_vec())
    }

    /// POST or PUT a JSON entity, returning the plain-text identity the
    /// service echoes back. Extra per-call headers (e.g. `X-Set-Password`)
    /// are passed through.
    pub(crate) async fn send_json_returning_identity<B>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
        headers: HeaderMap,
    ) -> Result<i64, Error>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .request(method, segments)
            .headers(headers)
            .header(ACCEPT, "text/plain")
            .json(body)
            .send()
            .await?;

        Self::handle_identity(response).await
    }

    /// POST a binary upload, returning the resulting document identity.
    ///
    /// The body is the raw content; `Content-Type` carries the payload's own
    /// media type and `X-Content-Description` the original filename.
    pub(crate) async fn post_upload_returning_identity(
        &self,
        segments: &[&str],
        upload: &Upload,
    ) -> Result<i64, Error> {
        let response = self
            .upload_request(Method::POST, segments, upload)?
            .send()
            .await?;

        Self::handle_identity(response).await
    }

    /// PUT a binary upload, returning the plain-text response (e.g. the
    /// resulting recording URI).
    pub(crate) async fn put_upload_returning_text(
        &self,
        segments: &[&str],
        upload: &Upload,
    ) -> Result<String, Error> {
        let response = self
            .upload_request(Method::PUT, segments, upload)?
            .send()
            .await?;

        Self::handle_text(response).await
    }

    /// PATCH a plain-text scalar body, returning the plain-text identity the
    /// service echoes back.
    pub(crate) async fn patch_text_returning_identity(
        &self,
        segments: &[&str],
        body: String,
    ) -> Result<i64, Error> {
        let response = self
            .request(Method::PATCH, segments)
            .header(ACCEPT, "text/plain")
            .header(CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await?;

        Self::handle_identity(response).await
    }

    /// PATCH with no body, returning the plain-text identity the service
    /// echoes back. Used for implicit order creation.
    pub(crate) async fn patch_returning_identity(&self, segments: &[&str]) -> Result<i64, Error> {
        let response = self
            .request(Method::PATCH, segments)
            .header(ACCEPT, "text/plain")
            .send()
            .await?;

        Self::handle_identity(response).await
    }

    /// DELETE a resource, returning the deleted entity's identity.
    pub(crate) async fn delete_returning_identity(&self, segments: &[&str]) -> Result<i64, Error> {
        let response = self
            .request(Method::DELETE, segments)
            .header(ACCEPT, "text/plain")
            .send()
            .await?;

        Self::handle_identity(response).await
    }

    /// DELETE a resource, returning the plain-text response.
    pub(crate) async fn delete_returning_text(&self, segments: &[&str]) -> Result<String, Error> {
        let response = self
            .request(Method::DELETE, segments)
            .header(ACCEPT, "text/plain")
            .send()
            .await?;

        Self::handle_text(response).await
    }

    fn upload_request(
        &self,
        method: Method,
        segments: &[&str],
        upload: &Upload,
    ) -> Result<reqwest::RequestBuilder, Error> {
        let description = HeaderValue::from_str(upload.name()).map_err(|_| {
            hansa_core::error::InvalidInputError::Other {
                message: format!("upload name '{}' is not a valid header value", upload.name()),
            }
        })?;

        Ok(self
            .request(method, segments)
            .header(ACCEPT, "text/plain")
            .header(CONTENT_TYPE, upload.media_type())
            .header(CONTENT_DESCRIPTION_HEADER, description)
            .body(upload.content().to_vec()))
    }

    /// Handle a JSON response, parsing the body or failing with the status.
    pub(crate) async fn handle_json<R: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let response = Self::error_for_status(response)?;
        Ok(response.json::<R>().await?)
    }

    /// Handle a plain-text identity response.
    pub(crate) async fn handle_identity(response: reqwest::Response) -> Result<i64, Error> {
        let text = Self::handle_text(response).await?;
        text.trim()
            .parse::<i64>()
            .map_err(|_| Error::Decode(DecodeError::Identity { value: text }))
    }

    /// Handle a plain-text response.
    pub(crate) async fn handle_text(response: reqwest::Response) -> Result<String, Error> {
        let response = Self::error_for_status(response)?;
        Ok(response.text().await?)
    }

    /// Fail with a protocol error carrying the status line on non-success.
    pub(crate) fn error_for_status(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, Error> {
        let status = response.status();
        trace!(status = %status, "service response");

        if status.is_success() {
            Ok(response)
        } else {
            Err(Error::Protocol(ProtocolError::new(
                status.as_u16(),
                status.canonical_reason().map(str::to_string),
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

    #[test]
    fn client_creation() {
        let origin = ServiceUrl::new("https://broker.example.com:8040").unwrap();
        let client = RestClient::new(origin.clone(), Authorization::SessionCookie);
        assert_eq!(client.origin().as_str(), origin.as_str());
    }

    #[test]
    fn key_authorized_client_creation() {
        let origin = ServiceUrl::new("https://tube.example.com:8050").unwrap();
        let key = AccessKey::new(KEY).unwrap();
        let client = RestClient::new(origin, Authorization::AccessKey(key));
        assert!(client.access_key.is_some());
    }
}
