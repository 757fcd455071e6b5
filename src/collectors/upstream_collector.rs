use crate::{
    collectors::{
        collector::push_metric,
        Collector,
    },
    metrics::{
        DiscoveryDocument,
        DiscoveryKind,
        StatusSnapshot,
        UpstreamMemberStats,
        UpstreamTotals,
    },
};
use std::collections::BTreeMap;
use tracing::debug;

/// Emits one set of `nginx.status[upstream,"<group>",...]` lines per upstream
/// group. Members are summed, never reported on their own.
pub struct UpstreamCollector<'a> {
    groups: &'a BTreeMap<String, Vec<UpstreamMemberStats>>,
}

impl<'a> UpstreamCollector<'a> {
    pub fn new(snapshot: &'a StatusSnapshot) -> Self {
        Self {
            groups: &snapshot.upstream_zones,
        }
    }

    /// Group totals in output order.
    pub fn totals(&self) -> impl Iterator<Item = (&'a str, UpstreamTotals)> {
        self.groups.iter().map(|(group, members)| {
            if members.is_empty() {
                debug!(%group, "upstream group has no members");
            }
            (group.as_str(), members.iter().collect::<UpstreamTotals>())
        })
    }
}

impl Collector for UpstreamCollector<'_> {
    fn format(&self) -> String {
        let mut output = String::new();
        for (group, totals) in self.totals() {
            push_metric(&mut output, &format!("nginx.status[upstream,\"{group}\",total]"), totals.request_counter);
            for (class, value) in totals.responses.ordered() {
                push_metric(&mut output, &format!("nginx.status[upstream,\"{group}\",{class}]"), value);
            }
            push_metric(&mut output, &format!("nginx.status[upstream,\"{group}\",in]"), totals.in_bytes);
            push_metric(&mut output, &format!("nginx.status[upstream,\"{group}\",out]"), totals.out_bytes);
        }
        output
    }

    fn discovery(&self) -> Option<DiscoveryDocument> {
        let mut document = DiscoveryDocument::new(DiscoveryKind::Upstream);
        for group in self.groups.keys() {
            document.push(group.as_str());
        }
        (!document.is_empty()).then_some(document)
    }

    fn name(&self) -> &'static str {
        "UpstreamCollector"
    }
}
