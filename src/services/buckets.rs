//! Bucket administration: listing, stats, index checks, links, objects,
//! policies, and per-bucket quotas.

use super::admin_path;
use crate::error::RgwError;
use crate::query::QueryPairs;
use crate::request::{Pipeline, RequestSpec};
use crate::types::{GetBucketRequest, QuotaSettings};
use serde_json::Value;
use std::sync::Arc;

/// Service for bucket administration.
pub struct BucketsService {
    pipeline: Arc<Pipeline>,
}

impl BucketsService {
    /// Create a buckets service over a pipeline.
    pub fn new(pipeline: Arc<Pipeline>) -> Self {
        Self { pipeline }
    }

    fn format(&self) -> &str {
        &self.pipeline.config().response_format
    }

    /// List every bucket known to the gateway.
    pub async fn list(&self) -> Result<Vec<String>, RgwError> {
        let query = QueryPairs::new().pair("format", self.format());
        let path = admin_path(self.pipeline.config(), "metadata/bucket", &query);
        self.pipeline
            .execute(RequestSpec::new("GET", path))
            .await?
            .deserialize()
    }

    /// List every bucket instance, as `name:instance-id` entries.
    pub async fn instances(&self) -> Result<Vec<String>, RgwError> {
        let query = QueryPairs::new().pair("format", self.format());
        let path = admin_path(self.pipeline.config(), "metadata/bucket.instance", &query);
        self.pipeline
            .execute(RequestSpec::new("GET", path))
            .await?
            .deserialize()
    }

    /// Fetch bucket information.
    ///
    /// The payload shape depends on the request: a bucket name list when
    /// no bucket is named, a single description (with stats when asked)
    /// otherwise, so the raw JSON is returned.
    pub async fn get(&self, request: GetBucketRequest) -> Result<Value, RgwError> {
        let query = QueryPairs::new()
            .pair("format", self.format())
            .pair_opt("bucket", request.bucket.as_deref())
            .pair_opt("uid", request.uid.as_deref())
            .pair_bool("stats", request.stats);
        let path = admin_path(self.pipeline.config(), "bucket", &query);
        self.pipeline
            .execute(RequestSpec::new("GET", path))
            .await?
            .deserialize()
    }

    /// Check a bucket's index, optionally checking objects and repairing.
    pub async fn check_index(
        &self,
        bucket: &str,
        check_objects: bool,
        fix: bool,
    ) -> Result<Value, RgwError> {
        let query = QueryPairs::new()
            .flag("index")
            .pair("format", self.format())
            .pair("bucket", bucket)
            .pair_bool("check-objects", check_objects)
            .pair_bool("fix", fix);
        let path = admin_path(self.pipeline.config(), "bucket", &query);
        self.pipeline
            .execute(RequestSpec::new("GET", path))
            .await?
            .deserialize()
    }

    /// Remove a bucket, optionally purging the objects it contains.
    pub async fn remove(&self, bucket: &str, purge_objects: bool) -> Result<(), RgwError> {
        let query = QueryPairs::new()
            .pair("format", self.format())
            .pair("bucket", bucket)
            .pair_bool("purge-objects", purge_objects);
        let path = admin_path(self.pipeline.config(), "bucket", &query);
        self.pipeline
            .execute(RequestSpec::new("DELETE", path))
            .await
            .map(|_| ())
    }

    /// Link a bucket to a user.
    ///
    /// The bucket id is required: the gateway rejects the call with
    /// `InvalidArgument` when it is omitted, whatever its documentation
    /// says.
    pub async fn link(&self, bucket: &str, bucket_id: &str, uid: &str) -> Result<(), RgwError> {
        let query = QueryPairs::new()
            .pair("format", self.format())
            .pair("bucket", bucket)
            .pair("bucket-id", bucket_id)
            .pair("uid", uid);
        let path = admin_path(self.pipeline.config(), "bucket", &query);
        self.pipeline
            .execute(RequestSpec::new("PUT", path))
            .await
            .map(|_| ())
    }

    /// Unlink a bucket from a user.
    pub async fn unlink(&self, bucket: &str, uid: &str) -> Result<(), RgwError> {
        let query = QueryPairs::new()
            .pair("format", self.format())
            .pair("bucket", bucket)
            .pair("uid", uid);
        let path = admin_path(self.pipeline.config(), "bucket", &query);
        self.pipeline
            .execute(RequestSpec::new("POST", path))
            .await
            .map(|_| ())
    }

    /// Remove a single object from a bucket.
    pub async fn remove_object(&self, bucket: &str, object_name: &str) -> Result<(), RgwError> {
        let query = QueryPairs::new()
            .flag("object")
            .pair("format", self.format())
            .pair("bucket", bucket)
            .pair("object", object_name);
        let path = admin_path(self.pipeline.config(), "bucket", &query);
        self.pipeline
            .execute(RequestSpec::new("DELETE", path))
            .await
            .map(|_| ())
    }

    /// Fetch the policy of a bucket, or of one object inside it.
    pub async fn policy(&self, bucket: &str, object_name: Option<&str>) -> Result<Value, RgwError> {
        let query = QueryPairs::new()
            .flag("policy")
            .pair("format", self.format())
            .pair("bucket", bucket)
            .pair_opt("object", object_name);
        let path = admin_path(self.pipeline.config(), "bucket", &query);
        self.pipeline
            .execute(RequestSpec::new("GET", path))
            .await?
            .deserialize()
    }

    /// Set the quota on an individual bucket.
    pub async fn set_quota(
        &self,
        uid: &str,
        bucket: &str,
        settings: QuotaSettings,
    ) -> Result<(), RgwError> {
        let query = QueryPairs::new()
            .flag("quota")
            .pair("format", self.format())
            .pair("uid", uid)
            .pair("bucket", bucket)
            .pair_opt_int("max-size-kb", settings.max_size_kb)
            .pair_opt_int("max-objects", settings.max_objects)
            .pair_opt_bool("enabled", settings.enabled);
        let path = admin_path(self.pipeline.config(), "bucket", &query);
        self.pipeline
            .execute(RequestSpec::new("PUT", path))
            .await
            .map(|_| ())
    }
}

impl std::fmt::Debug for BucketsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BucketsService").finish_non_exhaustive()
    }
}
