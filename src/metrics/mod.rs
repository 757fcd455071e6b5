pub mod cache_data;
pub mod connections;
pub mod discovery;
pub mod server_data;
pub mod shared;
pub mod upstream_data;

// Re-export the main types for easy access
use chrono::{
    DateTime,
    Utc,
};
pub use cache_data::*;
pub use connections::*;
pub use discovery::*;
use serde::{
    Deserialize,
    Serialize,
};
pub use server_data::*;
pub use shared::*;
use std::{
    collections::BTreeMap,
    time::Duration,
};
pub use upstream_data::*;

/// Decoded `/status/format/json` document of the nginx VTS module.
///
/// Zone maps are ordered by name so that formatting the same snapshot twice
/// produces the same bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusSnapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub nginx_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub load_msec: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub now_msec: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub connections: Connections,
    #[serde(deserialize_with = "null_as_default")]
    pub server_zones: BTreeMap<String, ServerStats>,
    #[serde(deserialize_with = "null_as_default")]
    pub upstream_zones: BTreeMap<String, Vec<UpstreamMemberStats>>,
    #[serde(deserialize_with = "null_as_default")]
    pub cache_zones: BTreeMap<String, CacheStats>,
}

impl StatusSnapshot {
    /// When nginx (re)loaded its configuration.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.load_msec)
    }

    /// When the status page was rendered.
    pub fn sampled_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.now_msec)
    }

    pub fn uptime(&self) -> Duration {
        Duration::from_millis(self.now_msec.saturating_sub(self.load_msec).max(0) as u64)
    }
}
