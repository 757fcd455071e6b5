use eyre::{
    Context as _,
    Result,
};
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
    Layer,
};

/// Installs the error report hook and the tracing subscriber.
///
/// Standard output carries the sender payload, so diagnostics go to stderr.
/// Verbosity follows `RUST_LOG`; without it only errors are shown.
pub fn log_init() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::from_default_env()),
        )
        .with(tracing_error::ErrorLayer::default())
        .try_init()
        .context("Failed to initialize tracing subscriber")
}
