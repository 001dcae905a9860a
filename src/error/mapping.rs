//! Error code mapping from gateway responses to typed errors.

use super::{ErrorDescriptor, RgwError};

/// Map a gateway error code to a typed error.
///
/// Lookup is exact-match dispatch over the fixed code set; codes are
/// assumed canonical-cased by the gateway, so no case folding is applied.
/// Unrecognized codes map to [`RgwError::Other`] with the code and
/// descriptor preserved verbatim.
pub fn classify_error_code(code: &str, descriptor: ErrorDescriptor) -> RgwError {
    match code {
        "AccessDenied" => RgwError::AccessDenied(descriptor),
        "UserExists" => RgwError::UserExists(descriptor),
        "InvalidAccessKey" => RgwError::InvalidAccessKey(descriptor),
        "InvalidSecretKey" => RgwError::InvalidSecretKey(descriptor),
        "InvalidKeyType" => RgwError::InvalidKeyType(descriptor),
        "KeyExists" => RgwError::KeyExists(descriptor),
        "EmailExists" => RgwError::EmailExists(descriptor),
        "SubuserExists" => RgwError::SubuserExists(descriptor),
        "InvalidAccess" => RgwError::InvalidAccess(descriptor),
        "InvalidArgument" => RgwError::InvalidArgument(descriptor),
        "IndexRepairFailed" => RgwError::IndexRepairFailed(descriptor),
        "BucketNotEmpty" => RgwError::BucketNotEmpty(descriptor),
        "ObjectRemovalFailed" => RgwError::ObjectRemovalFailed(descriptor),
        "BucketUnlinkFailed" => RgwError::BucketUnlinkFailed(descriptor),
        "BucketLinkFailed" => RgwError::BucketLinkFailed(descriptor),
        "NoSuchObject" => RgwError::NoSuchObject(descriptor),
        "InvalidCap" => RgwError::InvalidCap(descriptor),
        "NoSuchCap" => RgwError::NoSuchCap(descriptor),
        "NoSuchUser" => RgwError::NoSuchUser(descriptor),
        "NoSuchBucket" => RgwError::NoSuchBucket(descriptor),
        "NoSuchKey" => RgwError::NoSuchKey(descriptor),
        "IncompleteBody" => RgwError::IncompleteBody(descriptor),
        "BucketAlreadyExists" => RgwError::BucketAlreadyExists(descriptor),
        "InternalError" => RgwError::InternalError(descriptor),
        _ => RgwError::Other {
            code: code.to_string(),
            descriptor,
        },
    }
}
