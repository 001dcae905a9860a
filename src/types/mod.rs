//! Request and response types for the admin API.

mod common;
mod requests;
mod responses;

pub use common::{KeyType, MetadataType, QuotaSettings, QuotaType};
pub use requests::{
    CreateKeyRequest, CreateSubuserRequest, CreateUserRequest, GetBucketRequest, GetUsageRequest,
    GetUserRequest, MetadataQuery, ModifySubuserRequest, ModifyUserRequest, RemoveKeyRequest,
    TrimUsageRequest,
};
pub use responses::{CapabilityInfo, KeyInfo, QuotaInfo, SubuserInfo, SwiftKeyInfo, UserInfo};
