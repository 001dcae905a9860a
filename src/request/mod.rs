//! Core request pipeline: sign, dispatch, decode.
//!
//! Every admin operation reduces to building a [`RequestSpec`] and
//! handing it to [`Pipeline::execute`]. The pipeline signs the request
//! exactly once at dispatch time, sends it over the transport, and
//! decodes the response; classification of error codes happens inside
//! decoding. Nothing here retries.

use crate::config::AdminConfig;
use crate::error::{RgwError, TransportError};
use crate::response::{decode, Payload};
use crate::signing::Signer;
use crate::transport::{HttpRequest, HttpTransport};
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

/// A single admin request, built per call and never retained.
///
/// The spec never carries authentication state; `Date` and
/// `Authorization` headers are attached by the pipeline at dispatch.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    /// HTTP method.
    pub method: String,
    /// Path and query, e.g. `/admin/user?format=json&uid=liza`.
    pub path_and_query: String,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
    /// Optional request body.
    pub body: Option<Bytes>,
}

impl RequestSpec {
    /// Create a spec for a method and path+query.
    pub fn new(method: impl Into<String>, path_and_query: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path_and_query: path_and_query.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the request body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// The shared sign-dispatch-decode pipeline behind every service.
pub struct Pipeline {
    config: Arc<AdminConfig>,
    transport: Arc<dyn HttpTransport>,
    signer: Signer,
}

impl Pipeline {
    /// Create a pipeline over a transport. The signer is derived from the
    /// configured credentials once, here.
    pub fn new(config: Arc<AdminConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        let signer = Signer::new(config.credentials().clone());
        Self {
            config,
            transport,
            signer,
        }
    }

    /// The client configuration.
    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    /// Close the underlying transport.
    pub fn close(&self) {
        self.transport.close();
    }

    /// True once the underlying transport has been closed.
    pub fn is_closed(&self) -> bool {
        self.transport.is_closed()
    }

    /// Execute a request: sign it, dispatch it, decode the response.
    pub async fn execute(&self, spec: RequestSpec) -> Result<Payload, RgwError> {
        let url_string = format!("{}{}", self.config.base_url(), spec.path_and_query);
        let url = Url::parse(&url_string).map_err(|e| TransportError::InvalidRequest {
            message: format!("malformed request url '{}': {}", url_string, e),
        })?;

        let mut headers = spec.headers;
        if let Some(body) = &spec.body {
            headers.insert("Content-Length".to_string(), body.len().to_string());
        }
        self.signer.sign(&spec.method, &url, &mut headers)?;

        tracing::debug!(method = %spec.method, url = %url, "dispatching admin request");

        let mut request = HttpRequest::new(spec.method, url.as_str()).with_headers(headers);
        if let Some(body) = spec.body {
            request = request.with_body(body);
        }

        let response = self.transport.send(request).await?;
        tracing::debug!(status = response.status, "decoding admin response");
        decode(response)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockResponse, MockTransport};
    use serde_json::json;

    fn test_pipeline(transport: Arc<MockTransport>) -> Pipeline {
        let config = Arc::new(
            AdminConfig::builder()
                .access_key("access")
                .secret_key("secret")
                .server("ceph.example")
                .build()
                .unwrap(),
        );
        Pipeline::new(config, transport)
    }

    #[tokio::test]
    async fn execute_signs_and_dispatches() {
        let transport = Arc::new(MockTransport::with_responses(vec![
            MockResponse::ok_with_body(json!({"ok": true}).to_string()),
        ]));
        let pipeline = test_pipeline(transport.clone());

        let payload = pipeline
            .execute(RequestSpec::new("GET", "/admin/user?format=json&uid=liza"))
            .await
            .unwrap();
        assert_eq!(payload.into_json(), Some(json!({"ok": true})));

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.url, "https://ceph.example/admin/user?format=json&uid=liza");
        assert!(sent.headers.contains_key("Authorization"));
        assert!(sent.headers.contains_key("Date"));
    }

    #[tokio::test]
    async fn execute_sets_content_length_for_bodies() {
        let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok()]));
        let pipeline = test_pipeline(transport.clone());

        pipeline
            .execute(
                RequestSpec::new("PUT", "/admin/metadata/user?key=liza")
                    .with_header("Content-Type", "application/json")
                    .with_body(&b"{\"data\":{}}"[..]),
            )
            .await
            .unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.headers.get("Content-Length").map(String::as_str), Some("11"));
    }

    #[tokio::test]
    async fn empty_credentials_fail_before_dispatch() {
        let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok()]));
        let config = Arc::new(
            AdminConfig::builder()
                .server("ceph.example")
                .build()
                .unwrap(),
        );
        let pipeline = Pipeline::new(config, transport.clone());

        let result = pipeline
            .execute(RequestSpec::new("GET", "/admin/user?format=json"))
            .await;
        assert!(matches!(result, Err(RgwError::Signing(_))));
        assert_eq!(transport.request_count(), 0);
    }
}
