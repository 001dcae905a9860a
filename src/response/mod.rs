//! Response decoding for admin requests.
//!
//! The gateway answers with JSON bodies, but a known defect makes some
//! endpoints smuggle the error JSON into a response header instead of the
//! body. Decoding therefore layers two recovery steps: parse the body,
//! and on failure scan the headers for a key containing `{` and rebuild
//! the fragment from it. The fragment is truncated at the first `}`; the
//! error JSON observed from the gateway never nests braces before that
//! point, and this is deliberately not a general JSON-in-header parser.

use crate::error::{classify_error_code, ErrorDescriptor, RgwError};
use crate::transport::HttpResponse;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decoded success payload of an admin request.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A structured JSON payload.
    Json(Value),
    /// A success with no payload (204, or a 200 with no decodable body).
    Empty,
}

impl Payload {
    /// The JSON value, if one was decoded.
    pub fn into_json(self) -> Option<Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Empty => None,
        }
    }

    /// True when no payload was decoded.
    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }

    /// Deserialize the payload into a typed value.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, RgwError> {
        match self {
            Payload::Json(value) => serde_json::from_value(value).map_err(|e| RgwError::Decode {
                message: e.to_string(),
            }),
            Payload::Empty => Err(RgwError::Decode {
                message: "response carried no payload".to_string(),
            }),
        }
    }
}

/// Decode a raw response into a payload or a typed error.
///
/// - 200 returns the decoded payload; some endpoints legitimately return
///   none, which decodes to [`Payload::Empty`].
/// - 204 returns [`Payload::Empty`] regardless of body content.
/// - Any other status classifies the recovered descriptor's `Code`
///   (defaulting to `InternalError` when the field is absent); when
///   nothing was recovered, not even via the header fallback, the call
///   fails with [`RgwError::ServerDown`].
pub fn decode(response: HttpResponse) -> Result<Payload, RgwError> {
    let payload = parse_body(&response).or_else(|| recover_from_headers(&response));

    match response.status {
        200 => Ok(payload.map(Payload::Json).unwrap_or(Payload::Empty)),
        204 => Ok(Payload::Empty),
        status => match payload {
            Some(value) => {
                tracing::debug!(status, "gateway reported an error payload");
                let descriptor = ErrorDescriptor::from_payload(value);
                let code = descriptor.code.clone();
                Err(classify_error_code(&code, descriptor))
            }
            None => Err(RgwError::ServerDown),
        },
    }
}

/// Parse the body as JSON. A body that is empty, unparseable, or JSON
/// `null` yields no payload.
fn parse_body(response: &HttpResponse) -> Option<Value> {
    serde_json::from_slice::<Value>(&response.body)
        .ok()
        .filter(|value| !value.is_null())
}

/// Recover an error payload smuggled into a response header.
///
/// The defective endpoints emit the error JSON as a header, so its key
/// contains `{`. Rejoining key and value with `:` and truncating after
/// the first `}` restores the original fragment.
fn recover_from_headers(response: &HttpResponse) -> Option<Value> {
    let (key, value) = response
        .headers
        .iter()
        .find(|(key, _)| key.contains('{'))?;

    let joined = format!("{}:{}", key, value);
    let fragment = match joined.find('}') {
        Some(position) => &joined[..=position],
        None => return None,
    };
    serde_json::from_str(fragment).ok()
}
