//! Mock implementations and fixtures for testing.

mod transport;

pub use transport::{MockResponse, MockTransport};

/// Canned gateway payloads for tests.
pub struct TestFixtures;

impl TestFixtures {
    /// A user info payload as the gateway reports it.
    pub fn user_info_json(uid: &str) -> String {
        format!(
            r#"{{
  "user_id": "{uid}",
  "display_name": "{uid} display",
  "email": "",
  "suspended": 0,
  "max_buckets": 1000,
  "subusers": [],
  "keys": [
    {{"user": "{uid}", "access_key": "DC7RMLRBJD7YKZKBKDVK", "secret_key": "aFFxs0QeAmBRNUtkfOsJnNR3vRnJdkF1rQaBqFRp"}}
  ],
  "swift_keys": [],
  "caps": []
}}"#
        )
    }

    /// A quota payload with nothing enforced.
    pub fn quota_json() -> &'static str {
        r#"{"enabled": false, "max_size_kb": -1, "max_objects": -1}"#
    }

    /// An error body in the gateway's JSON shape.
    pub fn error_body(code: &str) -> String {
        format!(r#"{{"Code": "{code}"}}"#)
    }

    /// The header key/value pair a defective endpoint smuggles its error
    /// JSON into: rejoined as `key:value` it reads `{"Code":"<code>"}`.
    pub fn smuggled_error_header(code: &str) -> (String, String) {
        (r#"{"Code""#.to_string(), format!(r#""{code}"}}"#))
    }
}
