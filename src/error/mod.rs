//! Error types for the admin client.
//!
//! The taxonomy is flat: one variant per error code the gateway reports,
//! each carrying the decoded [`ErrorDescriptor`] for diagnostics, plus
//! transport-level and signing-level variants. Callers pattern-match on
//! the variant they care about.

mod mapping;

pub use mapping::classify_error_code;

use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Decoded representation of a server-reported failure, before classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorDescriptor {
    /// The `Code` field reported by the gateway.
    pub code: String,
    /// The raw decoded payload, when one was recovered.
    pub raw: Option<Value>,
}

impl ErrorDescriptor {
    /// Create a descriptor from a bare code with no payload.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            raw: None,
        }
    }

    /// Create a descriptor carrying the raw payload it was decoded from.
    pub fn with_raw(code: impl Into<String>, raw: Value) -> Self {
        Self {
            code: code.into(),
            raw: Some(raw),
        }
    }

    /// Extract a descriptor from a decoded error payload.
    ///
    /// The gateway reports the code in a `Code` field; when the field is
    /// missing the code defaults to `InternalError`.
    pub(crate) fn from_payload(payload: Value) -> Self {
        let code = match payload.get("Code") {
            Some(Value::String(code)) => code.clone(),
            Some(other) => other.to_string(),
            None => "InternalError".to_string(),
        };
        Self {
            code,
            raw: Some(payload),
        }
    }
}

/// Top-level error type for admin operations.
#[derive(Debug, Error)]
pub enum RgwError {
    /// Client construction errors.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Request signing errors.
    #[error("signing error: {0}")]
    Signing(#[from] SigningError),

    /// Network and TLS failures below the HTTP layer.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The configured deadline elapsed before the response was read.
    #[error("request timed out")]
    Timeout {
        /// The configured per-request deadline, when one was set.
        limit: Option<Duration>,
    },

    /// Non-success response with no recoverable error descriptor, not even
    /// via the header fallback. The gateway could not be reached or
    /// produced no usable error description.
    #[error("server is unreachable or returned no decodable error")]
    ServerDown,

    /// A success payload did not match the expected shape.
    #[error("could not decode response payload: {message}")]
    Decode {
        /// Details about the mismatch.
        message: String,
    },

    /// The request was rejected by the gateway's access checks.
    #[error("access denied")]
    AccessDenied(ErrorDescriptor),

    /// A user with the requested uid already exists.
    #[error("user already exists")]
    UserExists(ErrorDescriptor),

    /// The supplied access key is invalid.
    #[error("invalid access key")]
    InvalidAccessKey(ErrorDescriptor),

    /// The supplied secret key is invalid.
    #[error("invalid secret key")]
    InvalidSecretKey(ErrorDescriptor),

    /// The supplied key type is not recognized by the gateway.
    #[error("invalid key type")]
    InvalidKeyType(ErrorDescriptor),

    /// A key with the requested access key already exists.
    #[error("key already exists")]
    KeyExists(ErrorDescriptor),

    /// A user with the requested email already exists.
    #[error("email already in use")]
    EmailExists(ErrorDescriptor),

    /// A subuser with the requested id already exists.
    #[error("subuser already exists")]
    SubuserExists(ErrorDescriptor),

    /// The supplied subuser access level is invalid.
    #[error("invalid access specification")]
    InvalidAccess(ErrorDescriptor),

    /// The gateway rejected an argument, or a parameter failed local
    /// validation before any request was dispatched.
    #[error("invalid argument")]
    InvalidArgument(ErrorDescriptor),

    /// The bucket index repair could not be completed.
    #[error("bucket index repair failed")]
    IndexRepairFailed(ErrorDescriptor),

    /// The bucket still contains objects.
    #[error("bucket is not empty")]
    BucketNotEmpty(ErrorDescriptor),

    /// The object could not be removed.
    #[error("object removal failed")]
    ObjectRemovalFailed(ErrorDescriptor),

    /// The bucket could not be unlinked from the user.
    #[error("bucket unlink failed")]
    BucketUnlinkFailed(ErrorDescriptor),

    /// The bucket could not be linked to the user.
    #[error("bucket link failed")]
    BucketLinkFailed(ErrorDescriptor),

    /// The named object does not exist.
    #[error("no such object")]
    NoSuchObject(ErrorDescriptor),

    /// The capability string is malformed.
    #[error("invalid capability")]
    InvalidCap(ErrorDescriptor),

    /// The user does not hold the named capability.
    #[error("no such capability")]
    NoSuchCap(ErrorDescriptor),

    /// The named user does not exist.
    #[error("no such user")]
    NoSuchUser(ErrorDescriptor),

    /// The named bucket does not exist.
    #[error("no such bucket")]
    NoSuchBucket(ErrorDescriptor),

    /// The named key does not exist.
    #[error("no such key")]
    NoSuchKey(ErrorDescriptor),

    /// The request body was shorter than the declared length.
    #[error("incomplete request body")]
    IncompleteBody(ErrorDescriptor),

    /// A bucket with the requested name already exists.
    #[error("bucket already exists")]
    BucketAlreadyExists(ErrorDescriptor),

    /// The gateway reported an internal error.
    #[error("internal gateway error")]
    InternalError(ErrorDescriptor),

    /// The gateway reported a code outside the known set.
    #[error("gateway reported unrecognized error code '{code}'")]
    Other {
        /// The unrecognized code, preserved verbatim.
        code: String,
        /// The descriptor the code was classified from.
        descriptor: ErrorDescriptor,
    },
}

impl RgwError {
    /// The server-reported error code, for variants that carry one.
    pub fn code(&self) -> Option<&str> {
        Some(self.descriptor()?.code.as_str())
    }

    /// The decoded descriptor, for variants classified from a server
    /// response or a local validation failure.
    pub fn descriptor(&self) -> Option<&ErrorDescriptor> {
        match self {
            RgwError::AccessDenied(d)
            | RgwError::UserExists(d)
            | RgwError::InvalidAccessKey(d)
            | RgwError::InvalidSecretKey(d)
            | RgwError::InvalidKeyType(d)
            | RgwError::KeyExists(d)
            | RgwError::EmailExists(d)
            | RgwError::SubuserExists(d)
            | RgwError::InvalidAccess(d)
            | RgwError::InvalidArgument(d)
            | RgwError::IndexRepairFailed(d)
            | RgwError::BucketNotEmpty(d)
            | RgwError::ObjectRemovalFailed(d)
            | RgwError::BucketUnlinkFailed(d)
            | RgwError::BucketLinkFailed(d)
            | RgwError::NoSuchObject(d)
            | RgwError::InvalidCap(d)
            | RgwError::NoSuchCap(d)
            | RgwError::NoSuchUser(d)
            | RgwError::NoSuchBucket(d)
            | RgwError::NoSuchKey(d)
            | RgwError::IncompleteBody(d)
            | RgwError::BucketAlreadyExists(d)
            | RgwError::InternalError(d)
            | RgwError::Other { descriptor: d, .. } => Some(d),
            _ => None,
        }
    }

    /// True when the error reports a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RgwError::NoSuchUser(_)
                | RgwError::NoSuchBucket(_)
                | RgwError::NoSuchKey(_)
                | RgwError::NoSuchObject(_)
                | RgwError::NoSuchCap(_)
        )
    }

    /// Build the error used for parameters that fail local validation
    /// before any request is dispatched.
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        RgwError::InvalidArgument(ErrorDescriptor::with_raw(
            "InvalidArgument",
            Value::String(message.into()),
        ))
    }
}

/// Client construction errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No server address was supplied to the builder.
    #[error("missing server: a gateway address must be configured")]
    MissingServer,

    /// The CA bundle file could not be read or parsed.
    #[error("unusable CA bundle '{path}': {message}")]
    CaBundle {
        /// The configured bundle path.
        path: PathBuf,
        /// Details about the failure.
        message: String,
    },
}

/// Request signing errors.
#[derive(Debug, Error)]
pub enum SigningError {
    /// The access key or secret key is empty.
    #[error("access key and secret key must be non-empty")]
    EmptyCredentials,
}

/// Network and TLS failures.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection could not be established (refused, reset, DNS failure).
    #[error("connection failed: {message}")]
    Connection {
        /// Details from the underlying client.
        message: String,
    },

    /// TLS handshake or certificate failure.
    #[error("tls error: {message}")]
    Tls {
        /// Details from the underlying client.
        message: String,
    },

    /// The client session was closed; no further requests are accepted.
    #[error("client session is closed")]
    SessionClosed,

    /// The request could not be constructed for dispatch.
    #[error("invalid request: {message}")]
    InvalidRequest {
        /// Details about the malformed request.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn descriptor_from_payload_reads_code() {
        let d = ErrorDescriptor::from_payload(json!({"Code": "NoSuchUser"}));
        assert_eq!(d.code, "NoSuchUser");
        assert_eq!(d.raw, Some(json!({"Code": "NoSuchUser"})));
    }

    #[test]
    fn descriptor_from_payload_defaults_to_internal_error() {
        let d = ErrorDescriptor::from_payload(json!({"Message": "boom"}));
        assert_eq!(d.code, "InternalError");
    }

    #[test]
    fn descriptor_from_payload_stringifies_non_string_code() {
        let d = ErrorDescriptor::from_payload(json!({"Code": 404}));
        assert_eq!(d.code, "404");
    }

    #[test]
    fn error_code_accessor() {
        let err = RgwError::NoSuchBucket(ErrorDescriptor::new("NoSuchBucket"));
        assert_eq!(err.code(), Some("NoSuchBucket"));
        assert!(err.is_not_found());

        let err = RgwError::ServerDown;
        assert_eq!(err.code(), None);
        assert!(!err.is_not_found());
    }

    #[test]
    fn invalid_argument_carries_message() {
        let err = RgwError::invalid_argument("bad metadata type");
        match err {
            RgwError::InvalidArgument(d) => {
                assert_eq!(d.code, "InvalidArgument");
                assert_eq!(d.raw, Some(Value::String("bad metadata type".into())));
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }
}
