//! User administration: users, subusers, keys, capabilities, quotas.

use super::admin_path;
use crate::error::RgwError;
use crate::query::QueryPairs;
use crate::request::{Pipeline, RequestSpec};
use crate::types::{
    CapabilityInfo, CreateKeyRequest, CreateSubuserRequest, CreateUserRequest, GetUserRequest,
    KeyInfo, ModifySubuserRequest, ModifyUserRequest, QuotaInfo, QuotaSettings, QuotaType,
    RemoveKeyRequest, SubuserInfo, UserInfo,
};
use std::sync::Arc;

/// Service for user administration.
pub struct UsersService {
    pipeline: Arc<Pipeline>,
}

impl UsersService {
    /// Create a users service over a pipeline.
    pub fn new(pipeline: Arc<Pipeline>) -> Self {
        Self { pipeline }
    }

    fn format(&self) -> &str {
        &self.pipeline.config().response_format
    }

    /// Fetch a user by uid or access key.
    pub async fn get(&self, request: GetUserRequest) -> Result<UserInfo, RgwError> {
        if request.uid.is_some() && request.access_key.is_some() {
            return Err(RgwError::invalid_argument(
                "only one of uid and access-key is allowed",
            ));
        }

        let query = QueryPairs::new()
            .pair("format", self.format())
            .pair_opt("uid", request.uid.as_deref())
            .pair_opt("access-key", request.access_key.as_deref())
            .pair_bool("stats", request.stats)
            .pair_bool("sync", request.sync);
        let path = admin_path(self.pipeline.config(), "user", &query);
        self.pipeline
            .execute(RequestSpec::new("GET", path))
            .await?
            .deserialize()
    }

    /// List every uid known to the gateway.
    pub async fn list(&self) -> Result<Vec<String>, RgwError> {
        let query = QueryPairs::new().pair("format", self.format());
        let path = admin_path(self.pipeline.config(), "metadata/user", &query);
        self.pipeline
            .execute(RequestSpec::new("GET", path))
            .await?
            .deserialize()
    }

    /// Create a user.
    pub async fn create(&self, request: CreateUserRequest) -> Result<UserInfo, RgwError> {
        let query = QueryPairs::new()
            .pair("format", self.format())
            .pair("uid", &request.uid)
            .pair("display-name", &request.display_name)
            .pair_opt("email", request.email.as_deref())
            .pair_opt("key-type", request.key_type.map(|k| k.as_str()))
            .pair_opt("access-key", request.access_key.as_deref())
            .pair_opt("secret-key", request.secret_key.as_deref())
            .pair_opt("user-caps", request.user_caps.as_deref())
            .pair_bool("generate-key", request.generate_key)
            .pair_opt_int("max-buckets", request.max_buckets)
            .pair_bool("suspended", request.suspended);
        let path = admin_path(self.pipeline.config(), "user", &query);
        self.pipeline
            .execute(RequestSpec::new("PUT", path))
            .await?
            .deserialize()
    }

    /// Modify a user. Only the fields set on the request change.
    pub async fn modify(&self, request: ModifyUserRequest) -> Result<UserInfo, RgwError> {
        let query = QueryPairs::new()
            .pair("format", self.format())
            .pair("uid", &request.uid)
            .pair_opt("display-name", request.display_name.as_deref())
            .pair_opt("email", request.email.as_deref())
            .pair_opt("key-type", request.key_type.map(|k| k.as_str()))
            .pair_opt("access-key", request.access_key.as_deref())
            .pair_opt("secret-key", request.secret_key.as_deref())
            .pair_opt("user-caps", request.user_caps.as_deref())
            .pair_bool("generate-key", request.generate_key)
            .pair_opt_int("max-buckets", request.max_buckets)
            .pair_opt_bool("suspended", request.suspended);
        let path = admin_path(self.pipeline.config(), "user", &query);
        self.pipeline
            .execute(RequestSpec::new("POST", path))
            .await?
            .deserialize()
    }

    /// Remove a user, optionally purging their data.
    pub async fn remove(&self, uid: &str, purge_data: bool) -> Result<(), RgwError> {
        let query = QueryPairs::new()
            .pair("format", self.format())
            .pair("uid", uid)
            .pair_bool("purge-data", purge_data);
        let path = admin_path(self.pipeline.config(), "user", &query);
        self.pipeline
            .execute(RequestSpec::new("DELETE", path))
            .await
            .map(|_| ())
    }

    /// Create a subuser under a user.
    pub async fn create_subuser(
        &self,
        request: CreateSubuserRequest,
    ) -> Result<Vec<SubuserInfo>, RgwError> {
        let mut query = QueryPairs::new()
            .flag("subuser")
            .pair("format", self.format())
            .pair("uid", &request.uid)
            .pair_opt("subuser", request.subuser.as_deref());
        // An explicit key pair is only forwarded when complete.
        if let (Some(access_key), Some(secret_key)) = (&request.access_key, &request.secret_key) {
            query = query
                .pair("access-key", access_key)
                .pair("secret-key", secret_key);
        }
        let query = query
            .pair_opt("key-type", request.key_type.map(|k| k.as_str()))
            .pair_opt("access", request.access.as_deref())
            .pair_bool("generate-secret", request.generate_secret);
        let path = admin_path(self.pipeline.config(), "user", &query);
        self.pipeline
            .execute(RequestSpec::new("PUT", path))
            .await?
            .deserialize()
    }

    /// Modify a subuser.
    pub async fn modify_subuser(
        &self,
        request: ModifySubuserRequest,
    ) -> Result<Vec<SubuserInfo>, RgwError> {
        let query = QueryPairs::new()
            .flag("subuser")
            .pair("format", self.format())
            .pair("uid", &request.uid)
            .pair("subuser", &request.subuser)
            .pair_opt("secret", request.secret.as_deref())
            .pair_opt("key-type", request.key_type.map(|k| k.as_str()))
            .pair_opt("access", request.access.as_deref())
            .pair_bool("generate-secret", request.generate_secret);
        let path = admin_path(self.pipeline.config(), "user", &query);
        self.pipeline
            .execute(RequestSpec::new("POST", path))
            .await?
            .deserialize()
    }

    /// Remove a subuser, purging its keys by default.
    pub async fn remove_subuser(
        &self,
        uid: &str,
        subuser: &str,
        purge_keys: bool,
    ) -> Result<(), RgwError> {
        let query = QueryPairs::new()
            .flag("subuser")
            .pair("format", self.format())
            .pair("uid", uid)
            .pair("subuser", subuser)
            .pair_bool("purge-keys", purge_keys);
        let path = admin_path(self.pipeline.config(), "user", &query);
        self.pipeline
            .execute(RequestSpec::new("DELETE", path))
            .await
            .map(|_| ())
    }

    /// Create a key for a user or subuser. Returns the keys now attached.
    pub async fn create_key(&self, request: CreateKeyRequest) -> Result<Vec<KeyInfo>, RgwError> {
        let query = QueryPairs::new()
            .flag("key")
            .pair("format", self.format())
            .pair("uid", &request.uid)
            .pair_opt("subuser", request.subuser.as_deref())
            .pair_opt("key-type", request.key_type.map(|k| k.as_str()))
            .pair_opt("access-key", request.access_key.as_deref())
            .pair_opt("secret-key", request.secret_key.as_deref())
            .pair_bool("generate-key", request.generate_key);
        let path = admin_path(self.pipeline.config(), "user", &query);
        self.pipeline
            .execute(RequestSpec::new("PUT", path))
            .await?
            .deserialize()
    }

    /// Remove a key by access key.
    pub async fn remove_key(&self, request: RemoveKeyRequest) -> Result<(), RgwError> {
        let query = QueryPairs::new()
            .flag("key")
            .pair("format", self.format())
            .pair("access-key", &request.access_key)
            .pair_opt("key-type", request.key_type.map(|k| k.as_str()))
            .pair_opt("uid", request.uid.as_deref())
            .pair_opt("subuser", request.subuser.as_deref());
        let path = admin_path(self.pipeline.config(), "user", &query);
        self.pipeline
            .execute(RequestSpec::new("DELETE", path))
            .await
            .map(|_| ())
    }

    /// Grant admin capabilities, e.g. `usage=read, write`.
    pub async fn add_capability(
        &self,
        uid: &str,
        user_caps: &str,
    ) -> Result<Vec<CapabilityInfo>, RgwError> {
        let query = QueryPairs::new()
            .flag("caps")
            .pair("format", self.format())
            .pair("uid", uid)
            .pair("user-caps", user_caps);
        let path = admin_path(self.pipeline.config(), "user", &query);
        self.pipeline
            .execute(RequestSpec::new("PUT", path))
            .await?
            .deserialize()
    }

    /// Revoke admin capabilities.
    pub async fn remove_capability(
        &self,
        uid: &str,
        user_caps: &str,
    ) -> Result<Vec<CapabilityInfo>, RgwError> {
        let query = QueryPairs::new()
            .flag("caps")
            .pair("format", self.format())
            .pair("uid", uid)
            .pair("user-caps", user_caps);
        let path = admin_path(self.pipeline.config(), "user", &query);
        self.pipeline
            .execute(RequestSpec::new("DELETE", path))
            .await?
            .deserialize()
    }

    /// Fetch a user-scoped quota. The quota type must be `user` or
    /// `bucket`; anything else fails before a request is dispatched.
    pub async fn quota(&self, uid: &str, quota_type: &str) -> Result<QuotaInfo, RgwError> {
        let quota_type: QuotaType = quota_type.parse()?;
        let query = QueryPairs::new()
            .flag("quota")
            .pair("format", self.format())
            .pair("uid", uid)
            .pair("quota-type", quota_type.as_str());
        let path = admin_path(self.pipeline.config(), "user", &query);
        self.pipeline
            .execute(RequestSpec::new("GET", path))
            .await?
            .deserialize()
    }

    /// Fetch the quota applied to the user as a whole.
    pub async fn user_quota(&self, uid: &str) -> Result<QuotaInfo, RgwError> {
        self.quota(uid, QuotaType::User.as_str()).await
    }

    /// Fetch the quota applied to every bucket owned by the user.
    pub async fn user_bucket_quota(&self, uid: &str) -> Result<QuotaInfo, RgwError> {
        self.quota(uid, QuotaType::Bucket.as_str()).await
    }

    /// Set a user-scoped quota.
    ///
    /// With quota type `user` the limits apply to the user; with `bucket`
    /// they apply to buckets owned by the user. Quotas on an individual
    /// bucket are set through the buckets service.
    pub async fn set_quota(
        &self,
        uid: &str,
        quota_type: &str,
        settings: QuotaSettings,
    ) -> Result<(), RgwError> {
        let quota_type: QuotaType = quota_type.parse()?;
        let query = QueryPairs::new()
            .flag("quota")
            .pair("format", self.format())
            .pair("uid", uid)
            .pair("quota-type", quota_type.as_str())
            .pair_opt_int("max-size-kb", settings.max_size_kb)
            .pair_opt_int("max-objects", settings.max_objects)
            .pair_opt_bool("enabled", settings.enabled);
        let path = admin_path(self.pipeline.config(), "user", &query);
        self.pipeline
            .execute(RequestSpec::new("PUT", path))
            .await
            .map(|_| ())
    }
}

impl std::fmt::Debug for UsersService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsersService").finish_non_exhaustive()
    }
}
