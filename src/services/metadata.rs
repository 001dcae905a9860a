//! Metadata administration: CRUD and server-side locks.
//!
//! The metadata type argument is validated against the fixed set
//! (`user`, `bucket`, `bucket.instance`) before any request is
//! dispatched. The lock and unlock operations drive distributed locks on
//! the gateway; the client keeps no local lock state and only forwards
//! the lock id and length.

use super::admin_path;
use crate::error::RgwError;
use crate::query::QueryPairs;
use crate::request::{Pipeline, RequestSpec};
use crate::types::{MetadataQuery, MetadataType};
use serde_json::Value;
use std::sync::Arc;

/// Service for metadata administration.
pub struct MetadataService {
    pipeline: Arc<Pipeline>,
}

impl MetadataService {
    /// Create a metadata service over a pipeline.
    pub fn new(pipeline: Arc<Pipeline>) -> Self {
        Self { pipeline }
    }

    fn path(&self, metadata_type: &str, query: &QueryPairs) -> Result<String, RgwError> {
        let metadata_type: MetadataType = metadata_type.parse()?;
        Ok(admin_path(
            self.pipeline.config(),
            &format!("metadata/{}", metadata_type.as_str()),
            query,
        ))
    }

    /// Fetch metadata: the full key listing by default, one entry when
    /// the query names a key.
    pub async fn get(&self, metadata_type: &str, query: MetadataQuery) -> Result<Value, RgwError> {
        let pairs = QueryPairs::new()
            .pair("format", &self.pipeline.config().response_format)
            .pair_opt("key", query.key.as_deref())
            .pair_opt("marker", query.marker.as_deref())
            .pair_opt_int("max-entries", query.max_entries);
        let path = self.path(metadata_type, &pairs)?;
        self.pipeline
            .execute(RequestSpec::new("GET", path))
            .await?
            .deserialize()
    }

    /// Write a metadata entry from its JSON representation.
    pub async fn put(
        &self,
        metadata_type: &str,
        key: &str,
        json_string: &str,
    ) -> Result<(), RgwError> {
        let pairs = QueryPairs::new().pair("key", key);
        let path = self.path(metadata_type, &pairs)?;
        let spec = RequestSpec::new("PUT", path)
            .with_header("Content-Type", "application/json")
            .with_body(json_string.as_bytes().to_vec());
        self.pipeline.execute(spec).await.map(|_| ())
    }

    /// Delete a metadata entry.
    pub async fn delete(&self, metadata_type: &str, key: &str) -> Result<(), RgwError> {
        let pairs = QueryPairs::new().pair("key", key);
        let path = self.path(metadata_type, &pairs)?;
        self.pipeline
            .execute(RequestSpec::new("DELETE", path))
            .await
            .map(|_| ())
    }

    /// Take a server-side lock on a metadata entry for `length_secs`
    /// seconds.
    pub async fn lock(
        &self,
        metadata_type: &str,
        key: &str,
        lock_id: &str,
        length_secs: u64,
    ) -> Result<(), RgwError> {
        let pairs = QueryPairs::new()
            .pair("lock", "lock")
            .pair("key", key)
            .pair("lock_id", lock_id)
            .pair_int("length", length_secs as i64);
        let path = self.path(metadata_type, &pairs)?;
        self.pipeline
            .execute(RequestSpec::new("POST", path))
            .await
            .map(|_| ())
    }

    /// Release a server-side lock taken with the same lock id.
    pub async fn unlock(
        &self,
        metadata_type: &str,
        key: &str,
        lock_id: &str,
    ) -> Result<(), RgwError> {
        let pairs = QueryPairs::new()
            .pair("unlock", "unlock")
            .pair("key", key)
            .pair("lock_id", lock_id);
        let path = self.path(metadata_type, &pairs)?;
        self.pipeline
            .execute(RequestSpec::new("POST", path))
            .await
            .map(|_| ())
    }
}

impl std::fmt::Debug for MetadataService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataService").finish_non_exhaustive()
    }
}
