use color_eyre::Result;
use nginx_vts_probe::{
    logging::log_init,
    Args,
    Config,
    Orchestrator,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    log_init()?;
    let args = Args::parse_compat();
    let config = Config::new(&args.uri)?;
    Orchestrator::new(config)?.run(&mut std::io::stdout().lock()).await
}
