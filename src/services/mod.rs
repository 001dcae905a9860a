//! Resource services over the core request pipeline.
//!
//! Each service is a thin layer that assembles an endpoint path and query
//! string for one resource family and hands the resulting spec to the
//! pipeline. All validation that can fail locally happens before any
//! request is dispatched.

mod buckets;
mod metadata;
mod usage;
mod users;

pub use buckets::BucketsService;
pub use metadata::MetadataService;
pub use usage::UsageService;
pub use users::UsersService;

use crate::config::AdminConfig;
use crate::query::QueryPairs;

/// Build an admin path: `/<admin>/<resource>?<query>`.
pub(crate) fn admin_path(config: &AdminConfig, resource: &str, query: &QueryPairs) -> String {
    format!("/{}/{}?{}", config.admin_path, resource, query.encode())
}
