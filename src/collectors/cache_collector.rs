use crate::{
    collectors::{
        collector::push_metric,
        Collector,
    },
    metrics::{
        CacheStats,
        DiscoveryDocument,
        DiscoveryKind,
        StatusSnapshot,
    },
};
use std::collections::BTreeMap;

/// Emits the `nginx.status[cachezone,"<zone>",...]` lines. Cache zones carry
/// lookup outcomes and traffic only, no status classes.
pub struct CacheCollector<'a> {
    zones: &'a BTreeMap<String, CacheStats>,
}

impl<'a> CacheCollector<'a> {
    pub fn new(snapshot: &'a StatusSnapshot) -> Self {
        Self {
            zones: &snapshot.cache_zones,
        }
    }
}

impl Collector for CacheCollector<'_> {
    fn format(&self) -> String {
        let mut output = String::new();
        for (zone, stats) in self.zones {
            for (outcome, value) in stats.responses.ordered() {
                push_metric(&mut output, &format!("nginx.status[cachezone,\"{zone}\",{outcome}]"), value);
            }
            push_metric(&mut output, &format!("nginx.status[cachezone,\"{zone}\",in]"), stats.in_bytes);
            push_metric(&mut output, &format!("nginx.status[cachezone,\"{zone}\",out]"), stats.out_bytes);
        }
        output
    }

    fn discovery(&self) -> Option<DiscoveryDocument> {
        let mut document = DiscoveryDocument::new(DiscoveryKind::CacheZone);
        for zone in self.zones.keys() {
            document.push(zone.as_str());
        }
        (!document.is_empty()).then_some(document)
    }

    fn name(&self) -> &'static str {
        "CacheCollector"
    }
}
