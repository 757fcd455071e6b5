//! # Collectors Module
//!
//! Fetching and formatting of the VTS status page.
//!
//! ## Architecture
//!
//! - **`StatusFetcher`**: one bounded GET of the status page and the JSON decode into [`StatusSnapshot`]
//! - **`Collector` trait**: one section of the sender output built from a decoded snapshot
//! - **`ConnectionsCollector`**: the seven connection counters
//! - **`ServerCollector`**: per server zone counters and the server discovery document
//! - **`UpstreamCollector`**: per upstream group totals and the upstream discovery document
//! - **`CacheCollector`**: per cache zone counters and the cache zone discovery document
//! - **`Orchestrator`**: runs the pipeline and fixes the order of the output
//!
//! [`StatusSnapshot`]: crate::metrics::StatusSnapshot

pub mod cache_collector;
pub mod collector;
pub mod connections_collector;
pub mod orchestrator;
pub mod server_collector;
pub mod status_fetcher;
pub mod upstream_collector;

// Re-export the main types for easy access
pub use cache_collector::CacheCollector;
pub use collector::Collector;
pub use connections_collector::ConnectionsCollector;
pub use orchestrator::Orchestrator;
pub use server_collector::ServerCollector;
pub use status_fetcher::StatusFetcher;
pub use upstream_collector::UpstreamCollector;
