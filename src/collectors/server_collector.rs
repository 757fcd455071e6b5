use crate::{
    collectors::{
        collector::push_metric,
        Collector,
    },
    metrics::{
        display_zone_name,
        DiscoveryDocument,
        DiscoveryKind,
        ServerStats,
        StatusSnapshot,
    },
};
use std::collections::BTreeMap;

/// Emits the per server zone lines, `nginx.status["<zone>",...]`.
pub struct ServerCollector<'a> {
    zones: &'a BTreeMap<String, ServerStats>,
}

impl<'a> ServerCollector<'a> {
    pub fn new(snapshot: &'a StatusSnapshot) -> Self {
        Self {
            zones: &snapshot.server_zones,
        }
    }

    fn format_zone(output: &mut String, zone: &str, stats: &ServerStats) {
        push_metric(output, &format!("nginx.status[\"{zone}\",requests]"), stats.request_counter);
        for (class, value) in stats.responses.status.ordered() {
            push_metric(output, &format!("nginx.status[\"{zone}\",response,{class}]"), value);
        }
        for (outcome, value) in stats.responses.cache.ordered() {
            push_metric(output, &format!("nginx.status[\"{zone}\",response,{outcome}]"), value);
        }
        push_metric(output, &format!("nginx.status[\"{zone}\",in]"), stats.in_bytes);
        push_metric(output, &format!("nginx.status[\"{zone}\",out]"), stats.out_bytes);
    }
}

impl Collector for ServerCollector<'_> {
    fn format(&self) -> String {
        let mut output = String::new();
        for (zone, stats) in self.zones {
            Self::format_zone(&mut output, display_zone_name(zone), stats);
        }
        output
    }

    fn discovery(&self) -> Option<DiscoveryDocument> {
        let mut document = DiscoveryDocument::new(DiscoveryKind::Server);
        for zone in self.zones.keys() {
            document.push(display_zone_name(zone));
        }
        (!document.is_empty()).then_some(document)
    }

    fn name(&self) -> &'static str {
        "ServerCollector"
    }
}
