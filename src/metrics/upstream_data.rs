use crate::metrics::{
    null_as_default,
    StatusClasses,
};
use serde::{
    Deserialize,
    Serialize,
};

/// One backend server of an upstream group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpstreamMemberStats {
    #[serde(deserialize_with = "null_as_default")]
    pub server: String,
    #[serde(deserialize_with = "null_as_default")]
    pub request_counter: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub in_bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub out_bytes: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub responses: StatusClasses,
    #[serde(deserialize_with = "null_as_default")]
    pub response_msec: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub weight: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_fails: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub fail_timeout: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub backup: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub down: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub over_counts: UpstreamOverCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpstreamOverCounts {
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
}

/// Counters of an upstream group summed over its members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpstreamTotals {
    pub request_counter: u64,
    pub responses: StatusClasses,
    pub in_bytes: u64,
    pub out_bytes: u64,
}

impl UpstreamTotals {
    pub fn add(&mut self, member: &UpstreamMemberStats) {
        self.request_counter = self.request_counter.wrapping_add(member.request_counter);
        self.responses.accumulate(&member.responses);
        self.in_bytes = self.in_bytes.wrapping_add(member.in_bytes);
        self.out_bytes = self.out_bytes.wrapping_add(member.out_bytes);
    }
}

impl<'a> FromIterator<&'a UpstreamMemberStats> for UpstreamTotals {
    fn from_iter<I: IntoIterator<Item = &'a UpstreamMemberStats>>(members: I) -> Self {
        let mut totals = UpstreamTotals::default();
        for member in members {
            totals.add(member);
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn member(requests: u64, two_xx: u64, five_xx: u64, in_bytes: u64, out_bytes: u64) -> UpstreamMemberStats {
        UpstreamMemberStats {
            request_counter: requests,
            in_bytes,
            out_bytes,
            responses: StatusClasses {
                two_xx,
                five_xx,
                ..StatusClasses::default()
            },
            ..UpstreamMemberStats::default()
        }
    }

    #[test]
    fn empty_group_sums_to_zero() {
        let totals: UpstreamTotals = Vec::<UpstreamMemberStats>::new().iter().collect();
        assert_eq!(totals, UpstreamTotals::default());
    }

    #[test]
    fn single_member_is_passed_through() {
        let members = [member(7, 6, 1, 100, 200)];
        let totals: UpstreamTotals = members.iter().collect();
        assert_eq!(totals.request_counter, 7);
        assert_eq!(totals.responses.two_xx, 6);
        assert_eq!(totals.responses.five_xx, 1);
        assert_eq!(totals.in_bytes, 100);
        assert_eq!(totals.out_bytes, 200);
    }

    #[test]
    fn members_are_summed_per_counter() {
        let members = [member(7, 6, 1, 100, 200), member(3, 3, 0, 10, 20), member(0, 0, 0, 0, 0)];
        let totals: UpstreamTotals = members.iter().collect();
        assert_eq!(
            totals,
            UpstreamTotals {
                request_counter: 10,
                responses: StatusClasses {
                    two_xx: 9,
                    five_xx: 1,
                    ..StatusClasses::default()
                },
                in_bytes: 110,
                out_bytes: 220,
            }
        );
    }
}
