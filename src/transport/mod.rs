//! HTTP transport layer for admin requests.
//!
//! [`HttpTransport`] is the seam between the request pipeline and the
//! network. The default [`ReqwestTransport`] either reuses one pooled
//! `reqwest::Client` for the lifetime of the admin client, or builds a
//! client per request and tears it down when the call returns. Failures
//! never trigger retries here.

use crate::config::AdminConfig;
use crate::error::{ConfigError, RgwError, TransportError};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// HTTP request to be sent.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: String,
    /// Request URL.
    pub url: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Request body.
    pub body: Option<Bytes>,
}

impl HttpRequest {
    /// Create a new HTTP request.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Set the request body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add multiple headers.
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }
}

/// HTTP response received.
#[derive(Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get a header value by name (case-insensitive).
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// HTTP transport trait for making requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send an HTTP request and return the response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RgwError>;

    /// Close the transport. Subsequent `send` calls must fail with
    /// [`TransportError::SessionClosed`] rather than reconnecting.
    fn close(&self);

    /// True once the transport has been closed.
    fn is_closed(&self) -> bool;
}

/// TLS and deadline settings carried from [`AdminConfig`].
#[derive(Debug, Clone)]
struct TransportSettings {
    timeout: Option<Duration>,
    verify_tls: bool,
    ca_certificate: Option<reqwest::Certificate>,
}

impl TransportSettings {
    fn from_config(config: &AdminConfig) -> Result<Self, RgwError> {
        let ca_certificate = match &config.ca_bundle {
            Some(path) => Some(load_ca_certificate(path)?),
            None => None,
        };
        Ok(Self {
            timeout: config.timeout,
            verify_tls: config.verify_tls,
            ca_certificate,
        })
    }

    fn build_client(&self) -> Result<reqwest::Client, RgwError> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        // A CA bundle overrides the verify flag: verification stays on
        // against the supplied roots.
        match &self.ca_certificate {
            Some(certificate) => {
                builder = builder.add_root_certificate(certificate.clone());
            }
            None => {
                builder = builder.danger_accept_invalid_certs(!self.verify_tls);
            }
        }

        builder.build().map_err(|e| {
            TransportError::Tls {
                message: e.to_string(),
            }
            .into()
        })
    }
}

fn load_ca_certificate(path: &Path) -> Result<reqwest::Certificate, RgwError> {
    let pem = std::fs::read(path).map_err(|e| ConfigError::CaBundle {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    reqwest::Certificate::from_pem(&pem).map_err(|e| {
        ConfigError::CaBundle {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Default transport backed by reqwest.
pub struct ReqwestTransport {
    /// Present when the client was configured with connection pooling.
    pooled: Option<reqwest::Client>,
    settings: TransportSettings,
    closed: AtomicBool,
}

impl ReqwestTransport {
    /// Build a transport from the client configuration.
    ///
    /// With `pool_connections` the underlying client (and its connection
    /// pool) is created eagerly and shared by every request; otherwise a
    /// client is created per request and dropped when the call returns.
    pub fn from_config(config: &AdminConfig) -> Result<Self, RgwError> {
        let settings = TransportSettings::from_config(config)?;
        let pooled = if config.pool_connections {
            Some(settings.build_client()?)
        } else {
            None
        };
        Ok(Self {
            pooled,
            settings,
            closed: AtomicBool::new(false),
        })
    }

    async fn dispatch(
        &self,
        client: &reqwest::Client,
        request: HttpRequest,
    ) -> Result<HttpResponse, RgwError> {
        let method = request.method.parse::<reqwest::Method>().map_err(|e| {
            TransportError::InvalidRequest {
                message: format!("invalid HTTP method: {}", e),
            }
        })?;

        let mut builder = client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| self.map_send_error(e))?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_send_error(e))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    fn map_send_error(&self, error: reqwest::Error) -> RgwError {
        if error.is_timeout() {
            RgwError::Timeout {
                limit: self.settings.timeout,
            }
        } else {
            RgwError::Transport(TransportError::Connection {
                message: error.to_string(),
            })
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RgwError> {
        if self.is_closed() {
            return Err(TransportError::SessionClosed.into());
        }

        match &self.pooled {
            Some(client) => self.dispatch(client, request).await,
            None => {
                // Scoped acquisition: the client lives for this request
                // only and is dropped on every exit path.
                let client = self.settings.build_client()?;
                self.dispatch(&client, request).await
            }
        }
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("pooled", &self.pooled.is_some())
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdminConfig;

    fn test_config(pool: bool) -> AdminConfig {
        AdminConfig::builder()
            .access_key("access")
            .secret_key("secret")
            .server("ceph.example")
            .pool_connections(pool)
            .build()
            .unwrap()
    }

    #[test]
    fn http_request_builder() {
        let request = HttpRequest::new("GET", "https://ceph.example/admin/user")
            .with_header("Content-Type", "application/json")
            .with_body(&b"payload"[..]);

        assert_eq!(request.method, "GET");
        assert_eq!(request.url, "https://ceph.example/admin/user");
        assert_eq!(
            request.headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert!(request.body.is_some());
    }

    #[test]
    fn response_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        let response = HttpResponse {
            status: 200,
            headers,
            body: Bytes::new(),
        };

        assert!(response.is_success());
        assert_eq!(response.get_header("content-type"), Some("application/json"));
    }

    #[test]
    fn pooling_flag_controls_client_reuse() {
        let pooled = ReqwestTransport::from_config(&test_config(true)).unwrap();
        assert!(pooled.pooled.is_some());

        let per_request = ReqwestTransport::from_config(&test_config(false)).unwrap();
        assert!(per_request.pooled.is_none());
    }

    #[tokio::test]
    async fn closed_transport_rejects_requests() {
        let transport = ReqwestTransport::from_config(&test_config(true)).unwrap();
        transport.close();
        assert!(transport.is_closed());

        let result = transport
            .send(HttpRequest::new("GET", "https://ceph.example/admin/user"))
            .await;
        assert!(matches!(
            result,
            Err(RgwError::Transport(TransportError::SessionClosed))
        ));
    }

    #[test]
    fn missing_ca_bundle_fails_construction() {
        let config = AdminConfig::builder()
            .access_key("access")
            .secret_key("secret")
            .server("ceph.example")
            .ca_bundle("/nonexistent/bundle.pem")
            .build()
            .unwrap();

        let result = ReqwestTransport::from_config(&config);
        assert!(matches!(
            result,
            Err(RgwError::Configuration(ConfigError::CaBundle { .. }))
        ));
    }
}
