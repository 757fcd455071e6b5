//! # nginx VTS probe
//!
//! Reads the JSON status page of the nginx virtual host traffic status (VTS)
//! module and prints it as Zabbix sender lines.
//!
//! ## Output
//!
//! - `- nginx.status[connections,<counter>] <value>` for the connection counters
//! - `- nginx.<class>.discovery {"data":[...]}` low-level discovery documents for
//!   server zones, upstream groups and cache zones
//! - `- nginx.status["<zone>",...]`, `- nginx.status[upstream,"<group>",...]` and
//!   `- nginx.status[cachezone,"<zone>",...]` per entity counters
//!
//! ## Usage
//!
//! ```bash
//! nginx-vts-probe -uri http://localhost:8899/status/format/json | zabbix_sender -z zabbix -s web-1 -i -
//! ```

pub mod args;
pub mod collectors;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;

pub use args::Args;
pub use collectors::*;
pub use config::Config;
pub use error::ProbeError;
pub use metrics::*;
