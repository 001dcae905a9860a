//! Header-based signer for admin requests.

use super::{base64_hmac_sha1, format_http_date, AUTH_SCHEME, SIGNED_SUBRESOURCES};
use crate::credentials::Credentials;
use crate::error::{RgwError, SigningError};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use url::Url;

/// Signs admin requests with the gateway's header scheme.
///
/// The signer is derived once from the client credentials and is a pure
/// function of (credentials, method, url, headers, time): signing the same
/// request at the same instant always yields the same `Authorization`
/// value. Signing injects a `Date` header when one is absent and never
/// retries or re-signs a request.
#[derive(Clone)]
pub struct Signer {
    credentials: Credentials,
}

impl Signer {
    /// Create a signer from long-term credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Sign a request, adding `Date` (if absent) and `Authorization`
    /// headers to the map.
    ///
    /// Fails with [`SigningError::EmptyCredentials`] when the access key
    /// or secret key is empty.
    pub fn sign(
        &self,
        method: &str,
        url: &Url,
        headers: &mut HashMap<String, String>,
    ) -> Result<(), RgwError> {
        self.sign_at(method, url, headers, Utc::now())
    }

    fn sign_at(
        &self,
        method: &str,
        url: &Url,
        headers: &mut HashMap<String, String>,
        time: DateTime<Utc>,
    ) -> Result<(), RgwError> {
        if !self.credentials.is_complete() {
            return Err(SigningError::EmptyCredentials.into());
        }

        let date = match header_value(headers, "date") {
            Some(existing) => existing.to_string(),
            None => {
                let value = format_http_date(&time);
                headers.insert("Date".to_string(), value.clone());
                value
            }
        };

        let string_to_sign = string_to_sign(method, url, headers, &date);
        let signature = base64_hmac_sha1(
            self.credentials.secret_key().as_bytes(),
            string_to_sign.as_bytes(),
        );

        headers.insert(
            "Authorization".to_string(),
            format!(
                "{} {}:{}",
                AUTH_SCHEME,
                self.credentials.access_key(),
                signature
            ),
        );
        Ok(())
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("access_key", &self.credentials.access_key())
            .finish_non_exhaustive()
    }
}

/// Case-insensitive header lookup.
fn header_value<'a>(headers: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Assemble the string to sign.
///
/// Layout: `METHOD \n Content-MD5 \n Content-Type \n Date \n` followed by
/// canonicalized `x-amz-*` header lines and the canonical resource.
fn string_to_sign(
    method: &str,
    url: &Url,
    headers: &HashMap<String, String>,
    date: &str,
) -> String {
    let mut out = String::new();
    out.push_str(method);
    out.push('\n');
    out.push_str(header_value(headers, "content-md5").unwrap_or(""));
    out.push('\n');
    out.push_str(header_value(headers, "content-type").unwrap_or(""));
    out.push('\n');
    out.push_str(date);
    out.push('\n');
    out.push_str(&canonical_amz_headers(headers));
    out.push_str(&canonical_resource(url));
    out
}

/// Canonicalize `x-amz-*` headers: lowercased names, sorted, one
/// `name:value` line each.
fn canonical_amz_headers(headers: &HashMap<String, String>) -> String {
    let mut amz: Vec<(String, &str)> = headers
        .iter()
        .filter(|(key, _)| key.to_ascii_lowercase().starts_with("x-amz-"))
        .map(|(key, value)| (key.to_ascii_lowercase(), value.trim()))
        .collect();
    amz.sort_by(|a, b| a.0.cmp(&b.0));

    let mut out = String::new();
    for (name, value) in amz {
        out.push_str(&name);
        out.push(':');
        out.push_str(value);
        out.push('\n');
    }
    out
}

/// Canonicalize the resource: the URL path plus any recognized
/// subresource qualifiers, sorted. Query fields such as `format` or the
/// admin qualifiers never participate.
fn canonical_resource(url: &Url) -> String {
    let mut resource = url.path().to_string();

    let mut subresources: Vec<String> = url
        .query_pairs()
        .filter(|(key, _)| SIGNED_SUBRESOURCES.contains(&key.as_ref()))
        .map(|(key, value)| {
            if value.is_empty() {
                key.to_string()
            } else {
                format!("{}={}", key, value)
            }
        })
        .collect();
    subresources.sort_unstable();

    if !subresources.is_empty() {
        resource.push('?');
        resource.push_str(&subresources.join("&"));
    }
    resource
}
