use crate::{
    config::Config,
    error::ProbeError,
    metrics::StatusSnapshot,
};
use reqwest::Client as HttpClient;
use tracing::{
    debug,
    instrument,
};

/// Downloads and decodes the VTS status page.
pub struct StatusFetcher {
    config: Config,
    http_client: HttpClient,
}

impl StatusFetcher {
    pub fn new(config: Config) -> Result<Self, ProbeError> {
        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ProbeError::Network)?;

        Ok(Self { config, http_client })
    }

    pub fn uri(&self) -> &url::Url {
        &self.config.uri
    }

    /// Performs the single GET and returns the raw body of a 2xx response.
    #[instrument(level = "debug", skip(self), fields(uri = %self.config.uri))]
    pub async fn fetch(&self) -> Result<Vec<u8>, ProbeError> {
        let start = std::time::Instant::now();
        let response = self
            .http_client
            .get(self.config.uri.clone())
            .send()
            .await
            .map_err(ProbeError::Network)?;

        let status = response.status();
        debug!(%status, elapsed = ?start.elapsed(), "status page answered");
        if !status.is_success() {
            return Err(ProbeError::HttpStatus(status));
        }

        let body = response.bytes().await.map_err(ProbeError::BodyRead)?;
        debug!(bytes = body.len(), "status page body read");
        Ok(body.to_vec())
    }

    /// Decodes a status page body. Fields the schema does not know are ignored.
    pub fn decode(body: &[u8]) -> Result<StatusSnapshot, ProbeError> {
        let snapshot: StatusSnapshot = serde_json::from_slice(body)?;
        debug!(
            nginx_version = %snapshot.nginx_version,
            loaded_at = ?snapshot.loaded_at(),
            sampled_at = ?snapshot.sampled_at(),
            uptime_secs = snapshot.uptime().as_secs(),
            server_zones = snapshot.server_zones.len(),
            upstream_zones = snapshot.upstream_zones.len(),
            cache_zones = snapshot.cache_zones.len(),
            "decoded status snapshot"
        );
        Ok(snapshot)
    }

    pub async fn fetch_snapshot(&self) -> Result<StatusSnapshot, ProbeError> {
        let body = self.fetch().await?;
        Self::decode(&body)
    }
}
