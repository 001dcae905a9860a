//! Typed views over stable gateway payloads.
//!
//! Only payload shapes that are stable across gateway versions get a
//! struct here; shape-variable responses (bucket stats, metadata, usage)
//! stay `serde_json::Value` at the service layer. Deserialization is
//! lenient: unknown fields are ignored and most fields are optional.

use serde::Deserialize;

/// An S3-style access/secret key pair attached to a user or subuser.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct KeyInfo {
    /// The owning user (or `uid:subuser`).
    pub user: String,
    /// The access key.
    pub access_key: String,
    /// The secret key.
    pub secret_key: String,
}

/// A Swift-style key attached to a subuser.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SwiftKeyInfo {
    /// The owning `uid:subuser`.
    pub user: String,
    /// The secret key.
    pub secret_key: String,
}

/// A subuser entry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SubuserInfo {
    /// The subuser id, as `uid:subuser`.
    pub id: String,
    /// The granted permission mask, e.g. `full-control`.
    pub permissions: String,
}

/// An admin capability held by a user.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CapabilityInfo {
    /// The capability name, e.g. `usage` or `buckets`.
    #[serde(rename = "type")]
    pub cap_type: String,
    /// The granted permission, e.g. `read` or `*`.
    pub perm: String,
}

/// Quota limits as reported by the gateway.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct QuotaInfo {
    /// Whether the quota is enforced.
    pub enabled: bool,
    /// Maximum total size in kilobytes; `-1` when unlimited.
    #[serde(default)]
    pub max_size_kb: Option<i64>,
    /// Maximum object count; `-1` when unlimited.
    #[serde(default)]
    pub max_objects: Option<i64>,
}

/// A user as reported by the gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    /// The uid.
    pub user_id: String,
    /// Display name.
    #[serde(default)]
    pub display_name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Non-zero when the user is suspended.
    #[serde(default)]
    pub suspended: i32,
    /// Bucket count limit.
    #[serde(default)]
    pub max_buckets: Option<i64>,
    /// Subusers attached to the user.
    #[serde(default)]
    pub subusers: Vec<SubuserInfo>,
    /// S3 keys attached to the user and its subusers.
    #[serde(default)]
    pub keys: Vec<KeyInfo>,
    /// Swift keys attached to subusers.
    #[serde(default)]
    pub swift_keys: Vec<SwiftKeyInfo>,
    /// Admin capabilities held by the user.
    #[serde(default)]
    pub caps: Vec<CapabilityInfo>,
}

impl UserInfo {
    /// True when the user is suspended.
    pub fn is_suspended(&self) -> bool {
        self.suspended != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_info_deserializes_a_gateway_payload() {
        let payload = json!({
            "user_id": "liza",
            "display_name": "Liza",
            "email": "",
            "suspended": 0,
            "max_buckets": 1000,
            "subusers": [{"id": "liza:swift", "permissions": "full-control"}],
            "keys": [{"user": "liza", "access_key": "AK", "secret_key": "SK"}],
            "swift_keys": [],
            "caps": [{"type": "usage", "perm": "read"}],
            "tenant": ""
        });

        let user: UserInfo = serde_json::from_value(payload).unwrap();
        assert_eq!(user.user_id, "liza");
        assert!(!user.is_suspended());
        assert_eq!(user.keys[0].access_key, "AK");
        assert_eq!(user.subusers[0].permissions, "full-control");
        assert_eq!(user.caps[0].cap_type, "usage");
    }

    #[test]
    fn user_info_tolerates_missing_optionals() {
        let user: UserInfo = serde_json::from_value(json!({"user_id": "bare"})).unwrap();
        assert_eq!(user.user_id, "bare");
        assert!(user.keys.is_empty());
        assert!(user.max_buckets.is_none());
    }

    #[test]
    fn quota_info_reads_unlimited_markers() {
        let quota: QuotaInfo = serde_json::from_value(json!({
            "enabled": false,
            "max_size_kb": -1,
            "max_objects": -1
        }))
        .unwrap();
        assert!(!quota.enabled);
        assert_eq!(quota.max_size_kb, Some(-1));
    }
}
