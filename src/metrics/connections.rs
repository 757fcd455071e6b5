use crate::metrics::null_as_default;
use serde::{
    Deserialize,
    Serialize,
};

/// Connection counters of the nginx worker processes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Connections {
    #[serde(deserialize_with = "null_as_default")]
    pub active: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub reading: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub writing: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub waiting: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub accepted: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub handled: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub requests: u64,
}

impl Connections {
    /// Counters in emission order. `waiting` precedes `writing` here, which
    /// existing monitoring templates rely on.
    pub fn ordered(&self) -> [(&'static str, u64); 7] {
        [
            ("active", self.active),
            ("reading", self.reading),
            ("waiting", self.waiting),
            ("writing", self.writing),
            ("accepted", self.accepted),
            ("handled", self.handled),
            ("requests", self.requests),
        ]
    }
}
