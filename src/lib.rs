//! Admin Ops API client for radosgw-style object storage gateways.
//!
//! Type-safe, async interface for gateway administration: users, buckets,
//! quotas, keys, subusers, capabilities, metadata, and usage logs.
//!
//! # Features
//!
//! - **Signed requests**: the S3 header scheme the gateway expects,
//!   applied once per dispatch
//! - **Typed errors**: every gateway error code classifies to its own
//!   variant, with the raw descriptor retained
//! - **Defect-tolerant decoding**: recovers error payloads that the
//!   gateway smuggles into response headers instead of the body
//! - **Pooled or per-request connections**: one client, explicit close
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rgw_admin::{AdminConfig, CreateUserRequest, RgwAdminClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), rgw_admin::RgwError> {
//!     let config = AdminConfig::builder()
//!         .access_key("DC7RMLRBJD7YKZKBKDVK")
//!         .secret_key("aFFxs0QeAmBRNUtkfOsJnNR3vRnJdkF1rQaBqFRp")
//!         .server("ceph.example:7480")
//!         .build()?;
//!     let client = RgwAdminClient::new(config)?;
//!
//!     let user = client
//!         .users()
//!         .create(CreateUserRequest::new("liza", "Liza"))
//!         .await?;
//!     println!("created {} with {} key(s)", user.user_id, user.keys.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod mocks;
pub mod query;
pub mod request;
pub mod response;
pub mod services;
pub mod signing;
pub mod transport;
pub mod types;

// Re-export main types at crate root
pub use client::{RgwAdminClient, RgwAdminClientBuilder};
pub use config::{AdminConfig, AdminConfigBuilder};
pub use credentials::{generate_secret_key, Credentials, DEFAULT_SECRET_KEY_LEN};
pub use error::{
    classify_error_code, ConfigError, ErrorDescriptor, RgwError, SigningError, TransportError,
};
pub use request::{Pipeline, RequestSpec};
pub use response::Payload;
pub use services::{BucketsService, MetadataService, UsageService, UsersService};
pub use signing::Signer;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use types::{
    // Request types
    CreateKeyRequest,
    CreateSubuserRequest,
    CreateUserRequest,
    GetBucketRequest,
    GetUsageRequest,
    GetUserRequest,
    MetadataQuery,
    ModifySubuserRequest,
    ModifyUserRequest,
    RemoveKeyRequest,
    TrimUsageRequest,
    // Response types
    CapabilityInfo,
    KeyInfo,
    QuotaInfo,
    SubuserInfo,
    SwiftKeyInfo,
    UserInfo,
    // Common types
    KeyType,
    MetadataType,
    QuotaSettings,
    QuotaType,
};

/// Result type alias for admin operations.
pub type Result<T> = std::result::Result<T, RgwError>;
