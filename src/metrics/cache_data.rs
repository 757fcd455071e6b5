use crate::metrics::{
    null_as_default,
    CacheOutcomes,
};
use serde::{
    Deserialize,
    Serialize,
};

/// One `proxy_cache` zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CacheStats {
    #[serde(deserialize_with = "null_as_default")]
    pub max_size: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub used_size: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub in_bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub out_bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub responses: CacheOutcomes,
    #[serde(deserialize_with = "null_as_default")]
    pub over_counts: CacheOverCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CacheOverCounts {
    #[serde(deserialize_with = "null_as_default")]
    pub max_integer_size: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub in_bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub out_bytes: u64,
    #[serde(flatten)]
    pub cache: CacheOutcomes,
}
