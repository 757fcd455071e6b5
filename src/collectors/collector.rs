use crate::metrics::DiscoveryDocument;

/// One section of the sender output, built from an already decoded snapshot.
pub trait Collector {
    /// Metric lines of this section, each terminated by a newline.
    fn format(&self) -> String;

    /// Discovery document announcing the entities of this section.
    fn discovery(&self) -> Option<DiscoveryDocument> {
        None
    }

    /// Get the name of this collector
    fn name(&self) -> &'static str;
}

/// Appends one `- <key> <value>` line.
pub(crate) fn push_metric(output: &mut String, key: &str, value: u64) {
    output.push_str(&format!("- {key} {value}\n"));
}
