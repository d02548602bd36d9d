//! Binary-outcome market maker bot - entry point.

use anyhow::Result;
use clap::Parser;
use tracing::info;

/// Binary-outcome market maker (paper-trading mode)
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via BOMM_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    bomm_bot::logging::init_logging();

    info!("Starting bomm bot v{}", env!("CARGO_PKG_VERSION"));

    // Config path: CLI arg > BOMM_CONFIG env var > default
    let config_path = args
        .config
        .or_else(|| std::env::var("BOMM_CONFIG").ok())
        .unwrap_or_else(|| "config/default.toml".to_string());

    info!(config_path = %config_path, "Loading configuration");
    let config = bomm_bot::AppConfig::from_file(&config_path)?;
    info!(
        venue = %config.quoter.venue,
        market = %config.quoter.market,
        token = %config.quoter.token,
        "Configuration loaded"
    );

    let mut app = bomm_bot::Application::new(config)?;
    app.run().await?;

    Ok(())
}
