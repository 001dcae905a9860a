//! Request signing for the Admin Ops API.
//!
//! The gateway authenticates requests with the classic S3 header scheme:
//! a string to sign assembled from the method, content headers, date, and
//! canonicalized resource, keyed through HMAC-SHA1 and carried as
//! `Authorization: AWS <access_key>:<signature>`.

mod signer;

pub use signer::Signer;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Authorization scheme identifier expected by the gateway.
pub const AUTH_SCHEME: &str = "AWS";

/// Subresource qualifiers that participate in the canonical resource.
///
/// Kept sorted; admin qualifiers such as `quota` or `index` are
/// deliberately absent, matching what the gateway signs against.
pub(crate) const SIGNED_SUBRESOURCES: &[&str] = &[
    "acl",
    "cors",
    "delete",
    "lifecycle",
    "location",
    "logging",
    "notification",
    "partNumber",
    "policy",
    "requestPayment",
    "restore",
    "tagging",
    "torrent",
    "uploadId",
    "uploads",
    "versionId",
    "versioning",
    "versions",
    "website",
];

/// Calculate HMAC-SHA1 over `data` with `key`.
pub fn hmac_sha1(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Calculate HMAC-SHA1 and return the Base64-encoded digest.
pub fn base64_hmac_sha1(key: &[u8], data: &[u8]) -> String {
    BASE64.encode(hmac_sha1(key, data))
}

/// Format a timestamp as an HTTP `Date` header value.
///
/// Returns the RFC 1123 form, e.g. `Thu, 06 Aug 2026 10:30:00 GMT`.
pub fn format_http_date(time: &DateTime<Utc>) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
