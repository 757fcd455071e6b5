use reqwest::StatusCode;

/// Every way a probe run can fail. None of them is recovered from: the
/// scheduler invoking the probe owns the retry cadence.
#[derive(thiserror::Error, Debug)]
pub enum ProbeError {
    #[error("Invalid status page URI {uri:?}: {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Requesting the status page failed: {0}")]
    Network(#[source] reqwest::Error),
    #[error("The status page answered with HTTP {0}")]
    HttpStatus(StatusCode),
    #[error("Reading the status page body failed: {0}")]
    BodyRead(#[source] reqwest::Error),
    #[error("The status page is not a valid VTS document: {0}")]
    Decode(#[from] serde_json::Error),
}
