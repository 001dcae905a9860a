//! Admin client implementation.
//!
//! [`RgwAdminClient`] ties the configuration, transport, and signer into
//! one pipeline and exposes the resource services. There is no
//! process-wide client registry: callers construct and hold instances,
//! passing them to whatever needs gateway access.

use crate::config::AdminConfig;
use crate::error::RgwError;
use crate::request::{Pipeline, RequestSpec};
use crate::response::Payload;
use crate::services::{BucketsService, MetadataService, UsageService, UsersService};
use crate::transport::{HttpTransport, ReqwestTransport};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Client for the gateway's Admin Ops API.
pub struct RgwAdminClient {
    config: Arc<AdminConfig>,
    pipeline: Arc<Pipeline>,

    // Lazy-initialized services
    users: OnceCell<UsersService>,
    buckets: OnceCell<BucketsService>,
    metadata: OnceCell<MetadataService>,
    usage: OnceCell<UsageService>,
}

impl RgwAdminClient {
    /// Create a client with the default reqwest transport.
    pub fn new(config: AdminConfig) -> Result<Self, RgwError> {
        let transport = Arc::new(ReqwestTransport::from_config(&config)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client over a custom transport.
    pub fn with_transport(config: AdminConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let config = Arc::new(config);
        let pipeline = Arc::new(Pipeline::new(config.clone(), transport));
        Self {
            config,
            pipeline,
            users: OnceCell::new(),
            buckets: OnceCell::new(),
            metadata: OnceCell::new(),
            usage: OnceCell::new(),
        }
    }

    /// Create a client builder.
    pub fn builder() -> RgwAdminClientBuilder {
        RgwAdminClientBuilder::new()
    }

    /// The client configuration.
    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    /// The user administration service.
    pub fn users(&self) -> &UsersService {
        self.users
            .get_or_init(|| UsersService::new(self.pipeline.clone()))
    }

    /// The bucket administration service.
    pub fn buckets(&self) -> &BucketsService {
        self.buckets
            .get_or_init(|| BucketsService::new(self.pipeline.clone()))
    }

    /// The metadata administration service.
    pub fn metadata(&self) -> &MetadataService {
        self.metadata
            .get_or_init(|| MetadataService::new(self.pipeline.clone()))
    }

    /// The usage log service.
    pub fn usage(&self) -> &UsageService {
        self.usage
            .get_or_init(|| UsageService::new(self.pipeline.clone()))
    }

    /// Execute a raw request through the sign-dispatch-decode pipeline.
    ///
    /// Escape hatch for admin endpoints without a service method.
    pub async fn execute(&self, spec: RequestSpec) -> Result<Payload, RgwError> {
        self.pipeline.execute(spec).await
    }

    /// Close the client's session.
    ///
    /// Closing is final: any later dispatch fails with a closed-session
    /// transport error instead of opening an ad-hoc connection.
    pub fn close(&self) {
        self.pipeline.close();
    }

    /// True once the client's session has been closed.
    pub fn is_closed(&self) -> bool {
        self.pipeline.is_closed()
    }
}

impl std::fmt::Debug for RgwAdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RgwAdminClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for RgwAdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RgwAdminClient ({})", self.config.base_url())
    }
}

/// Builder for [`RgwAdminClient`].
pub struct RgwAdminClientBuilder {
    config: Option<AdminConfig>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl RgwAdminClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: None,
            transport: None,
        }
    }

    /// Use the provided configuration.
    pub fn config(mut self, config: AdminConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a custom transport instead of the default reqwest one.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<RgwAdminClient, RgwError> {
        let config = match self.config {
            Some(config) => config,
            None => AdminConfig::builder().build()?,
        };

        match self.transport {
            Some(transport) => Ok(RgwAdminClient::with_transport(config, transport)),
            None => RgwAdminClient::new(config),
        }
    }
}

impl Default for RgwAdminClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
