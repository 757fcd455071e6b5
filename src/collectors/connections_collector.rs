use crate::{
    collectors::{
        collector::push_metric,
        Collector,
    },
    metrics::{
        Connections,
        StatusSnapshot,
    },
};

/// Emits the seven `nginx.status[connections,*]` lines.
pub struct ConnectionsCollector {
    connections: Connections,
}

impl ConnectionsCollector {
    pub fn new(snapshot: &StatusSnapshot) -> Self {
        Self {
            connections: snapshot.connections,
        }
    }
}

impl Collector for ConnectionsCollector {
    fn format(&self) -> String {
        let mut output = String::new();
        for (name, value) in self.connections.ordered() {
            push_metric(&mut output, &format!("nginx.status[connections,{name}]"), value);
        }
        output
    }

    fn name(&self) -> &'static str {
        "ConnectionsCollector"
    }
}
