//! # Configuration Module
//!
//! The probe has a single setting, the URI of the VTS status page. It is
//! validated once at startup and then handed to the fetcher unchanged.

use crate::error::ProbeError;
use std::time::Duration;
use url::Url;

pub const DEFAULT_URI: &str = "http://localhost:8899/status/format/json";

/// Total budget for the status request, body included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Config {
    pub uri: Url,
    pub timeout: Duration,
}

impl Config {
    pub fn new(uri: &str) -> Result<Self, ProbeError> {
        let uri = Url::parse(uri).map_err(|source| ProbeError::InvalidUri {
            uri: uri.to_string(),
            source,
        })?;

        Ok(Self {
            uri,
            timeout: REQUEST_TIMEOUT,
        })
    }
}
