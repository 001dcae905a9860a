//! Typed parameters for multi-option admin operations.
//!
//! Each struct maps one-to-one onto the query parameters of an admin
//! action. Unset options are omitted from the request.

use super::KeyType;

/// Parameters for fetching a user.
#[derive(Debug, Clone, Default)]
pub struct GetUserRequest {
    /// Look up by uid. Mutually exclusive with `access_key`.
    pub uid: Option<String>,
    /// Look up by access key. Mutually exclusive with `uid`.
    pub access_key: Option<String>,
    /// Include usage statistics.
    pub stats: bool,
    /// Force a stats sync before reporting.
    pub sync: bool,
}

impl GetUserRequest {
    /// Look a user up by uid.
    pub fn by_uid(uid: impl Into<String>) -> Self {
        Self {
            uid: Some(uid.into()),
            ..Self::default()
        }
    }

    /// Look a user up by one of their access keys.
    pub fn by_access_key(access_key: impl Into<String>) -> Self {
        Self {
            access_key: Some(access_key.into()),
            ..Self::default()
        }
    }

    /// Include usage statistics in the response.
    pub fn with_stats(mut self, stats: bool) -> Self {
        self.stats = stats;
        self
    }

    /// Force a stats sync before reporting.
    pub fn with_sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    /// The new user's uid.
    pub uid: String,
    /// Display name shown by the gateway.
    pub display_name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Key flavor to create.
    pub key_type: Option<KeyType>,
    /// Explicit access key instead of a generated one.
    pub access_key: Option<String>,
    /// Explicit secret key instead of a generated one.
    pub secret_key: Option<String>,
    /// Capability string, e.g. `usage=read, write`.
    pub user_caps: Option<String>,
    /// Ask the gateway to generate a key pair.
    pub generate_key: bool,
    /// Bucket count limit.
    pub max_buckets: Option<i64>,
    /// Create the user suspended.
    pub suspended: bool,
}

impl CreateUserRequest {
    /// Create a request with the gateway defaults: an S3 key pair is
    /// generated, the user starts active.
    pub fn new(uid: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            display_name: display_name.into(),
            email: None,
            key_type: Some(KeyType::S3),
            access_key: None,
            secret_key: None,
            user_caps: None,
            generate_key: true,
            max_buckets: None,
            suspended: false,
        }
    }

    /// Set the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the key flavor.
    pub fn with_key_type(mut self, key_type: KeyType) -> Self {
        self.key_type = Some(key_type);
        self
    }

    /// Supply an explicit key pair instead of generating one.
    pub fn with_keys(mut self, access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self.secret_key = Some(secret_key.into());
        self.generate_key = false;
        self
    }

    /// Set the initial capability string.
    pub fn with_user_caps(mut self, user_caps: impl Into<String>) -> Self {
        self.user_caps = Some(user_caps.into());
        self
    }

    /// Control gateway-side key generation.
    pub fn with_generate_key(mut self, generate_key: bool) -> Self {
        self.generate_key = generate_key;
        self
    }

    /// Limit the number of buckets the user may own.
    pub fn with_max_buckets(mut self, max_buckets: i64) -> Self {
        self.max_buckets = Some(max_buckets);
        self
    }

    /// Create the user suspended.
    pub fn with_suspended(mut self, suspended: bool) -> Self {
        self.suspended = suspended;
        self
    }
}

/// Parameters for modifying a user.
#[derive(Debug, Clone)]
pub struct ModifyUserRequest {
    /// The uid to modify.
    pub uid: String,
    /// New display name.
    pub display_name: Option<String>,
    /// New contact email.
    pub email: Option<String>,
    /// Key flavor for key changes.
    pub key_type: Option<KeyType>,
    /// New explicit access key.
    pub access_key: Option<String>,
    /// New explicit secret key.
    pub secret_key: Option<String>,
    /// Replacement capability string.
    pub user_caps: Option<String>,
    /// Ask the gateway to generate a new key pair.
    pub generate_key: bool,
    /// New bucket count limit.
    pub max_buckets: Option<i64>,
    /// Suspend or reinstate the user.
    pub suspended: Option<bool>,
}

impl ModifyUserRequest {
    /// Create a request that changes nothing but the fields set on it.
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            display_name: None,
            email: None,
            key_type: Some(KeyType::S3),
            access_key: None,
            secret_key: None,
            user_caps: None,
            generate_key: false,
            max_buckets: None,
            suspended: None,
        }
    }

    /// Set a new display name.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Set a new contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the key flavor.
    pub fn with_key_type(mut self, key_type: KeyType) -> Self {
        self.key_type = Some(key_type);
        self
    }

    /// Replace the capability string.
    pub fn with_user_caps(mut self, user_caps: impl Into<String>) -> Self {
        self.user_caps = Some(user_caps.into());
        self
    }

    /// Ask the gateway to generate a new key pair.
    pub fn with_generate_key(mut self, generate_key: bool) -> Self {
        self.generate_key = generate_key;
        self
    }

    /// Set a new bucket count limit.
    pub fn with_max_buckets(mut self, max_buckets: i64) -> Self {
        self.max_buckets = Some(max_buckets);
        self
    }

    /// Suspend or reinstate the user.
    pub fn with_suspended(mut self, suspended: bool) -> Self {
        self.suspended = Some(suspended);
        self
    }
}

/// Parameters for creating a subuser.
#[derive(Debug, Clone)]
pub struct CreateSubuserRequest {
    /// The owning user's uid.
    pub uid: String,
    /// Subuser id to create.
    pub subuser: Option<String>,
    /// Explicit access key. Only sent together with `secret_key`.
    pub access_key: Option<String>,
    /// Explicit secret key. Only sent together with `access_key`.
    pub secret_key: Option<String>,
    /// Key flavor for the subuser's key.
    pub key_type: Option<KeyType>,
    /// Access level: `read`, `write`, `readwrite`, or `full`.
    pub access: Option<String>,
    /// Ask the gateway to generate a secret.
    pub generate_secret: bool,
}

impl CreateSubuserRequest {
    /// Create a request for the owning uid.
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            subuser: None,
            access_key: None,
            secret_key: None,
            key_type: None,
            access: None,
            generate_secret: false,
        }
    }

    /// Set the subuser id.
    pub fn with_subuser(mut self, subuser: impl Into<String>) -> Self {
        self.subuser = Some(subuser.into());
        self
    }

    /// Supply an explicit key pair.
    pub fn with_keys(mut self, access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Set the key flavor.
    pub fn with_key_type(mut self, key_type: KeyType) -> Self {
        self.key_type = Some(key_type);
        self
    }

    /// Set the access level.
    pub fn with_access(mut self, access: impl Into<String>) -> Self {
        self.access = Some(access.into());
        self
    }

    /// Ask the gateway to generate a secret.
    pub fn with_generate_secret(mut self, generate_secret: bool) -> Self {
        self.generate_secret = generate_secret;
        self
    }
}

/// Parameters for modifying a subuser.
#[derive(Debug, Clone)]
pub struct ModifySubuserRequest {
    /// The owning user's uid.
    pub uid: String,
    /// The subuser id to modify.
    pub subuser: String,
    /// New secret.
    pub secret: Option<String>,
    /// Key flavor. Defaults to swift, as subuser keys usually are.
    pub key_type: Option<KeyType>,
    /// New access level.
    pub access: Option<String>,
    /// Ask the gateway to generate a new secret.
    pub generate_secret: bool,
}

impl ModifySubuserRequest {
    /// Create a request for the given uid and subuser.
    pub fn new(uid: impl Into<String>, subuser: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            subuser: subuser.into(),
            secret: None,
            key_type: Some(KeyType::Swift),
            access: None,
            generate_secret: false,
        }
    }

    /// Set a new secret.
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Set the key flavor.
    pub fn with_key_type(mut self, key_type: KeyType) -> Self {
        self.key_type = Some(key_type);
        self
    }

    /// Set a new access level.
    pub fn with_access(mut self, access: impl Into<String>) -> Self {
        self.access = Some(access.into());
        self
    }

    /// Ask the gateway to generate a new secret.
    pub fn with_generate_secret(mut self, generate_secret: bool) -> Self {
        self.generate_secret = generate_secret;
        self
    }
}

/// Parameters for creating a key.
#[derive(Debug, Clone)]
pub struct CreateKeyRequest {
    /// The owning user's uid.
    pub uid: String,
    /// Attach the key to this subuser instead of the user.
    pub subuser: Option<String>,
    /// Key flavor.
    pub key_type: Option<KeyType>,
    /// Explicit access key.
    pub access_key: Option<String>,
    /// Explicit secret key.
    pub secret_key: Option<String>,
    /// Ask the gateway to generate the pair.
    pub generate_key: bool,
}

impl CreateKeyRequest {
    /// Create a request that generates an S3 key pair for the uid.
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            subuser: None,
            key_type: Some(KeyType::S3),
            access_key: None,
            secret_key: None,
            generate_key: true,
        }
    }

    /// Attach the key to a subuser.
    pub fn with_subuser(mut self, subuser: impl Into<String>) -> Self {
        self.subuser = Some(subuser.into());
        self
    }

    /// Set the key flavor.
    pub fn with_key_type(mut self, key_type: KeyType) -> Self {
        self.key_type = Some(key_type);
        self
    }

    /// Supply an explicit key pair instead of generating one.
    pub fn with_keys(mut self, access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self.secret_key = Some(secret_key.into());
        self.generate_key = false;
        self
    }
}

/// Parameters for removing a key.
#[derive(Debug, Clone)]
pub struct RemoveKeyRequest {
    /// The access key to remove.
    pub access_key: String,
    /// Key flavor, when the gateway needs the hint.
    pub key_type: Option<KeyType>,
    /// Owning uid, when known.
    pub uid: Option<String>,
    /// Owning subuser, when known.
    pub subuser: Option<String>,
}

impl RemoveKeyRequest {
    /// Create a request for the given access key.
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            key_type: None,
            uid: None,
            subuser: None,
        }
    }

    /// Set the key flavor hint.
    pub fn with_key_type(mut self, key_type: KeyType) -> Self {
        self.key_type = Some(key_type);
        self
    }

    /// Scope the removal to a uid.
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Scope the removal to a subuser.
    pub fn with_subuser(mut self, subuser: impl Into<String>) -> Self {
        self.subuser = Some(subuser.into());
        self
    }
}

/// Parameters for fetching a bucket, bucket list, or bucket stats.
#[derive(Debug, Clone, Default)]
pub struct GetBucketRequest {
    /// Restrict to one bucket.
    pub bucket: Option<String>,
    /// Restrict to buckets owned by this uid.
    pub uid: Option<String>,
    /// Include bucket statistics.
    pub stats: bool,
}

impl GetBucketRequest {
    /// Create an unrestricted request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one bucket.
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Restrict to buckets owned by a uid.
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Include bucket statistics.
    pub fn with_stats(mut self, stats: bool) -> Self {
        self.stats = stats;
        self
    }
}

/// Options for metadata listing and lookup.
#[derive(Debug, Clone, Default)]
pub struct MetadataQuery {
    /// Fetch one entry by key instead of listing.
    pub key: Option<String>,
    /// Resume listing after this marker.
    pub marker: Option<String>,
    /// Cap the number of returned entries.
    pub max_entries: Option<i64>,
}

impl MetadataQuery {
    /// Create an unrestricted query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch one entry by key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Resume listing after a marker.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Cap the number of returned entries.
    pub fn with_max_entries(mut self, max_entries: i64) -> Self {
        self.max_entries = Some(max_entries);
        self
    }
}

/// Parameters for fetching usage records.
#[derive(Debug, Clone, Default)]
pub struct GetUsageRequest {
    /// Restrict to one uid.
    pub uid: Option<String>,
    /// Inclusive start time, e.g. `2026-08-01 00:00:00`.
    pub start: Option<String>,
    /// Exclusive end time.
    pub end: Option<String>,
    /// Include per-request entries.
    pub show_entries: bool,
    /// Include the aggregated summary.
    pub show_summary: bool,
}

impl GetUsageRequest {
    /// Create an unrestricted request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one uid.
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Set the inclusive start time.
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Set the exclusive end time.
    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }

    /// Include per-request entries.
    pub fn with_entries(mut self, show_entries: bool) -> Self {
        self.show_entries = show_entries;
        self
    }

    /// Include the aggregated summary.
    pub fn with_summary(mut self, show_summary: bool) -> Self {
        self.show_summary = show_summary;
        self
    }
}

/// Parameters for trimming usage records.
#[derive(Debug, Clone, Default)]
pub struct TrimUsageRequest {
    /// Restrict to one uid.
    pub uid: Option<String>,
    /// Inclusive start time.
    pub start: Option<String>,
    /// Exclusive end time.
    pub end: Option<String>,
    /// Remove all usage data.
    pub remove_all: bool,
}

impl TrimUsageRequest {
    /// Create an unrestricted request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one uid.
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Set the inclusive start time.
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Set the exclusive end time.
    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }

    /// Remove all usage data.
    pub fn with_remove_all(mut self, remove_all: bool) -> Self {
        self.remove_all = remove_all;
        self
    }
}
