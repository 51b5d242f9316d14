//! HTTP transport for the passenger service
//!
//! Every request goes to a path under the configured base URL with a JSON
//! body and a static auth header; every response is a JSON object whose
//! `data` field carries the payload. The transport unwraps the envelope and
//! returns only that field.

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Static credential stand-in expected by the service
pub const AUTH_HEADER: &str = "X-Auth-Token";

/// HTTP method for a transport request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    /// Network failure, non-2xx status, or undecodable JSON
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Response decoded as JSON but carried no `data` field
    #[error("response envelope missing `data` field")]
    MissingData,
}

/// Seam between the entity client and the wire.
///
/// The production implementation is [`HttpTransport`]; tests substitute a
/// recording spy (see `crate::testing`).
pub trait Transport: Send + Sync {
    /// Issue a request and return the unwrapped `data` payload.
    fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> impl Future<Output = Result<Value, TransportError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> impl Future<Output = Result<Value, TransportError>> + Send {
        (**self).execute(method, path, body)
    }
}

/// reqwest-backed transport: shared client, base URL, fixed auth header
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    auth_token: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token: auth_token.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl Transport for HttpTransport {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        let url = self.url(path);
        debug!(method = method.as_str(), %url, "api request");

        let mut request = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Patch => self.client.patch(&url),
            Method::Delete => self.client.delete(&url),
        }
        .header(AUTH_HEADER, &self.auth_token);

        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?.error_for_status()?;
        let envelope: Value = response.json().await?;
        unwrap_envelope(envelope)
    }
}

/// Pull the `data` field out of a response envelope.
pub fn unwrap_envelope(mut envelope: Value) -> Result<Value, TransportError> {
    match envelope.get_mut("data") {
        Some(data) => Ok(data.take()),
        None => Err(TransportError::MissingData),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unwrap_envelope_returns_data_field() {
        let envelope = json!({ "data": [{ "id": "1" }] });
        let data = unwrap_envelope(envelope).unwrap();
        assert_eq!(data, json!([{ "id": "1" }]));
    }

    #[test]
    fn unwrap_envelope_rejects_missing_data() {
        let envelope = json!({ "error": "boom" });
        assert!(matches!(
            unwrap_envelope(envelope),
            Err(TransportError::MissingData)
        ));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let transport = HttpTransport::new("http://localhost:8080/api/", "123");
        assert_eq!(
            transport.url("passengers"),
            "http://localhost:8080/api/passengers"
        );
    }
}
