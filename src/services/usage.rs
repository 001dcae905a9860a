//! Usage log administration.

use super::admin_path;
use crate::error::RgwError;
use crate::query::QueryPairs;
use crate::request::{Pipeline, RequestSpec};
use crate::types::{GetUsageRequest, TrimUsageRequest};
use serde_json::Value;
use std::sync::Arc;

/// Service for the gateway's usage log.
pub struct UsageService {
    pipeline: Arc<Pipeline>,
}

impl UsageService {
    /// Create a usage service over a pipeline.
    pub fn new(pipeline: Arc<Pipeline>) -> Self {
        Self { pipeline }
    }

    fn format(&self) -> &str {
        &self.pipeline.config().response_format
    }

    /// Fetch usage records, optionally bounded by uid and time window.
    pub async fn get(&self, request: GetUsageRequest) -> Result<Value, RgwError> {
        let query = QueryPairs::new()
            .pair("format", self.format())
            .pair_opt("uid", request.uid.as_deref())
            .pair_opt("start", request.start.as_deref())
            .pair_opt("end", request.end.as_deref())
            .pair_bool("show-entries", request.show_entries)
            .pair_bool("show-summary", request.show_summary);
        let path = admin_path(self.pipeline.config(), "usage", &query);
        self.pipeline
            .execute(RequestSpec::new("GET", path))
            .await?
            .deserialize()
    }

    /// Trim usage records, optionally bounded by uid and time window.
    pub async fn trim(&self, request: TrimUsageRequest) -> Result<(), RgwError> {
        let query = QueryPairs::new()
            .pair("format", self.format())
            .pair_opt("uid", request.uid.as_deref())
            .pair_opt("start", request.start.as_deref())
            .pair_opt("end", request.end.as_deref())
            .pair_bool("remove-all", request.remove_all);
        let path = admin_path(self.pipeline.config(), "usage", &query);
        self.pipeline
            .execute(RequestSpec::new("DELETE", path))
            .await
            .map(|_| ())
    }
}

impl std::fmt::Debug for UsageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsageService").finish_non_exhaustive()
    }
}
