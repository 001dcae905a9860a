//! Configuration types for the admin client.
//!
//! [`AdminConfig`] collects everything the client needs at construction:
//! credentials, the gateway address, the admin path prefix, the response
//! encoding, TLS settings, timeout, and pooling. It is immutable once the
//! client is built; the core never reads the environment implicitly.

use crate::credentials::Credentials;
use crate::error::{ConfigError, RgwError};
use std::path::PathBuf;
use std::time::Duration;

/// Default admin path prefix on the gateway.
pub const DEFAULT_ADMIN_PATH: &str = "admin";

/// Default response encoding requested from the gateway.
pub const DEFAULT_RESPONSE_FORMAT: &str = "json";

/// Configuration for the admin client.
#[derive(Clone)]
pub struct AdminConfig {
    /// Gateway address as `host` or `host:port`.
    pub server: String,

    /// Path prefix the admin API is rooted at.
    pub admin_path: String,

    /// Response encoding requested via the `format` query parameter.
    pub response_format: String,

    /// Use `https` instead of `http`.
    pub secure: bool,

    /// Verify TLS certificates. Ignored when `ca_bundle` is set.
    pub verify_tls: bool,

    /// Path to a PEM bundle of trusted CA certificates. When set it
    /// overrides `verify_tls`.
    pub ca_bundle: Option<PathBuf>,

    /// Deadline for the whole request/response cycle. `None` means no
    /// client-side deadline.
    pub timeout: Option<Duration>,

    /// Reuse one pooled connection set across all requests issued by the
    /// client instead of opening a connection per request.
    pub pool_connections: bool,

    credentials: Credentials,
}

impl AdminConfig {
    /// Create a configuration builder.
    pub fn builder() -> AdminConfigBuilder {
        AdminConfigBuilder::default()
    }

    /// The configured credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The URL scheme implied by the `secure` flag.
    pub fn scheme(&self) -> &'static str {
        if self.secure {
            "https"
        } else {
            "http"
        }
    }

    /// The base URL all request paths are appended to, e.g.
    /// `https://ceph.example`.
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme(), self.server)
    }
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("server", &self.server)
            .field("admin_path", &self.admin_path)
            .field("response_format", &self.response_format)
            .field("secure", &self.secure)
            .field("verify_tls", &self.verify_tls)
            .field("ca_bundle", &self.ca_bundle)
            .field("timeout", &self.timeout)
            .field("pool_connections", &self.pool_connections)
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Builder for [`AdminConfig`].
#[derive(Default)]
pub struct AdminConfigBuilder {
    access_key: Option<String>,
    secret_key: Option<String>,
    server: Option<String>,
    admin_path: Option<String>,
    response_format: Option<String>,
    secure: Option<bool>,
    verify_tls: Option<bool>,
    ca_bundle: Option<PathBuf>,
    timeout: Option<Duration>,
    pool_connections: Option<bool>,
}

impl AdminConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the access key.
    pub fn access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Set the secret key.
    pub fn secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Set the gateway address (`host` or `host:port`).
    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    /// Set the admin path prefix (default `admin`).
    pub fn admin_path(mut self, admin_path: impl Into<String>) -> Self {
        self.admin_path = Some(admin_path.into());
        self
    }

    /// Set the response encoding (default `json`).
    pub fn response_format(mut self, response_format: impl Into<String>) -> Self {
        self.response_format = Some(response_format.into());
        self
    }

    /// Use `https` (default) or `http`.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = Some(secure);
        self
    }

    /// Enable or disable TLS certificate verification.
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = Some(verify);
        self
    }

    /// Trust the CA certificates in the given PEM bundle.
    pub fn ca_bundle(mut self, path: impl Into<PathBuf>) -> Self {
        self.ca_bundle = Some(path.into());
        self
    }

    /// Bound the whole request/response cycle by the given deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Share one pooled connection set across requests.
    pub fn pool_connections(mut self, pool: bool) -> Self {
        self.pool_connections = Some(pool);
        self
    }

    /// Load settings from environment variables.
    ///
    /// Reads `RGW_ACCESS_KEY_ID`, `RGW_SECRET_ACCESS_KEY`, `RGW_SERVER`,
    /// `RGW_ADMIN_PATH`, `RGW_CA_BUNDLE`, `RGW_SECURE`, and
    /// `RGW_VERIFY_TLS`. Construction-time convenience only; the built
    /// client never consults the environment.
    pub fn from_env(mut self) -> Self {
        if let Ok(access_key) = std::env::var("RGW_ACCESS_KEY_ID") {
            self.access_key = Some(access_key);
        }
        if let Ok(secret_key) = std::env::var("RGW_SECRET_ACCESS_KEY") {
            self.secret_key = Some(secret_key);
        }
        if let Ok(server) = std::env::var("RGW_SERVER") {
            self.server = Some(server);
        }
        if let Ok(admin_path) = std::env::var("RGW_ADMIN_PATH") {
            self.admin_path = Some(admin_path);
        }
        if let Ok(ca_bundle) = std::env::var("RGW_CA_BUNDLE") {
            self.ca_bundle = Some(PathBuf::from(ca_bundle));
        }
        if let Ok(secure) = std::env::var("RGW_SECURE") {
            self.secure = Some(secure.to_lowercase() == "true");
        }
        if let Ok(verify) = std::env::var("RGW_VERIFY_TLS") {
            self.verify_tls = Some(verify.to_lowercase() == "true");
        }
        self
    }

    /// Build the configuration.
    ///
    /// The server address is required. Keys may be left empty here;
    /// signing rejects them at dispatch time.
    pub fn build(self) -> Result<AdminConfig, RgwError> {
        let server = self.server.ok_or(ConfigError::MissingServer)?;

        Ok(AdminConfig {
            server,
            admin_path: self
                .admin_path
                .unwrap_or_else(|| DEFAULT_ADMIN_PATH.to_string()),
            response_format: self
                .response_format
                .unwrap_or_else(|| DEFAULT_RESPONSE_FORMAT.to_string()),
            secure: self.secure.unwrap_or(true),
            verify_tls: self.verify_tls.unwrap_or(true),
            ca_bundle: self.ca_bundle,
            timeout: self.timeout,
            pool_connections: self.pool_connections.unwrap_or(false),
            credentials: Credentials::new(
                self.access_key.unwrap_or_default(),
                self.secret_key.unwrap_or_default(),
            ),
        })
    }
}
