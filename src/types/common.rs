//! Enumerations and shared parameter types.

use crate::error::RgwError;
use std::fmt;
use std::str::FromStr;

/// Resource category for metadata operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataType {
    /// User metadata.
    User,
    /// Bucket metadata.
    Bucket,
    /// Bucket instance metadata.
    BucketInstance,
}

impl MetadataType {
    /// The wire form used in request paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataType::User => "user",
            MetadataType::Bucket => "bucket",
            MetadataType::BucketInstance => "bucket.instance",
        }
    }
}

impl FromStr for MetadataType {
    type Err = RgwError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(MetadataType::User),
            "bucket" => Ok(MetadataType::Bucket),
            "bucket.instance" => Ok(MetadataType::BucketInstance),
            other => Err(RgwError::invalid_argument(format!(
                "unknown metadata type '{}': expected user, bucket, or bucket.instance",
                other
            ))),
        }
    }
}

impl fmt::Display for MetadataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key flavor understood by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    /// S3-style access/secret key pair.
    S3,
    /// Swift-style key.
    Swift,
}

impl KeyType {
    /// The wire form used in query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyType::S3 => "s3",
            KeyType::Swift => "swift",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scope of a user-level quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaType {
    /// Quota applied to the user as a whole.
    User,
    /// Quota applied to every bucket owned by the user.
    Bucket,
}

impl QuotaType {
    /// The wire form used in query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuotaType::User => "user",
            QuotaType::Bucket => "bucket",
        }
    }
}

impl FromStr for QuotaType {
    type Err = RgwError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(QuotaType::User),
            "bucket" => Ok(QuotaType::Bucket),
            other => Err(RgwError::invalid_argument(format!(
                "unknown quota type '{}': expected user or bucket",
                other
            ))),
        }
    }
}

impl fmt::Display for QuotaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quota limits applied to a user or bucket.
///
/// Unset fields are omitted from the request, leaving the gateway's
/// current value untouched. A limit of `-1` disables that limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuotaSettings {
    /// Maximum total size in kilobytes.
    pub max_size_kb: Option<i64>,
    /// Maximum object count.
    pub max_objects: Option<i64>,
    /// Whether the quota is enforced.
    pub enabled: Option<bool>,
}

impl QuotaSettings {
    /// Create settings with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum total size in kilobytes.
    pub fn with_max_size_kb(mut self, max_size_kb: i64) -> Self {
        self.max_size_kb = Some(max_size_kb);
        self
    }

    /// Set the maximum object count.
    pub fn with_max_objects(mut self, max_objects: i64) -> Self {
        self.max_objects = Some(max_objects);
        self
    }

    /// Enable or disable enforcement.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }
}
