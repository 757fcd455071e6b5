use serde::{
    Deserialize,
    Deserializer,
    Serialize,
};

/// Reads `null` as the field's default, the way VTS consumers have always
/// treated it.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response counts per HTTP status class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusClasses {
    #[serde(rename = "1xx", deserialize_with = "null_as_default")]
    pub one_xx: u64,
    #[serde(rename = "2xx", deserialize_with = "null_as_default")]
    pub two_xx: u64,
    #[serde(rename = "3xx", deserialize_with = "null_as_default")]
    pub three_xx: u64,
    #[serde(rename = "4xx", deserialize_with = "null_as_default")]
    pub four_xx: u64,
    #[serde(rename = "5xx", deserialize_with = "null_as_default")]
    pub five_xx: u64,
}

impl StatusClasses {
    pub fn ordered(&self) -> [(&'static str, u64); 5] {
        [
            ("1xx", self.one_xx),
            ("2xx", self.two_xx),
            ("3xx", self.three_xx),
            ("4xx", self.four_xx),
            ("5xx", self.five_xx),
        ]
    }

    /// Adds `other` to `self`, wrapping like the upstream counters do.
    pub fn accumulate(&mut self, other: &StatusClasses) {
        self.one_xx = self.one_xx.wrapping_add(other.one_xx);
        self.two_xx = self.two_xx.wrapping_add(other.two_xx);
        self.three_xx = self.three_xx.wrapping_add(other.three_xx);
        self.four_xx = self.four_xx.wrapping_add(other.four_xx);
        self.five_xx = self.five_xx.wrapping_add(other.five_xx);
    }
}

/// Cache lookup outcomes (`$upstream_cache_status`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheOutcomes {
    #[serde(deserialize_with = "null_as_default")]
    pub miss: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub bypass: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub expired: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub stale: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub updating: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub revalidated: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub hit: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub scarce: u64,
}

impl CacheOutcomes {
    /// Outcomes in alphabetical order, as emitted.
    pub fn ordered(&self) -> [(&'static str, u64); 8] {
        [
            ("bypass", self.bypass),
            ("expired", self.expired),
            ("hit", self.hit),
            ("miss", self.miss),
            ("revalidated", self.revalidated),
            ("scarce", self.scarce),
            ("stale", self.stale),
            ("updating", self.updating),
        ]
    }
}
