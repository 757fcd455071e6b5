use crate::metrics::{
    null_as_default,
    CacheOutcomes,
    StatusClasses,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Zone key VTS uses for the aggregate of all server zones.
pub const WILDCARD_ZONE: &str = "*";

/// Name the wildcard zone is reported under.
pub const WILDCARD_ZONE_ALIAS: &str = "all";

/// Traffic of one `server_zones` entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerStats {
    #[serde(deserialize_with = "null_as_default")]
    pub request_counter: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub in_bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub out_bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub responses: ServerResponses,
    #[serde(deserialize_with = "null_as_default")]
    pub over_counts: ServerOverCounts,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerResponses {
    #[serde(flatten)]
    pub status: StatusClasses,
    #[serde(flatten)]
    pub cache: CacheOutcomes,
}

/// How often each server zone counter wrapped around `max_integer_size`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerOverCounts {
    #[serde(deserialize_with = "null_as_default")]
    pub max_integer_size: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub request_counter: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub in_bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub out_bytes: u64,
    #[serde(flatten)]
    pub status: StatusClasses,
    #[serde(flatten)]
    pub cache: CacheOutcomes,
}

/// Name a server zone is reported under.
pub fn display_zone_name(zone: &str) -> &str {
    if zone == WILDCARD_ZONE {
        WILDCARD_ZONE_ALIAS
    } else {
        zone
    }
}
