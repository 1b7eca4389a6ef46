use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dropship_core::{
    load_config, run_once, validate_config, RunStatus, SendmailNotifier,
};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(status) => std::process::exit(status.exit_code()),
        Err(e) => {
            error!("Fatal error: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<RunStatus> {
    // Determine config path: positional argument, then env var, then default
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var("DROPSHIP_CONFIG").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("config.toml"));

    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    validate_config(&config).context("Configuration validation failed")?;

    info!(
        action = config.action.verb(),
        source = %config.source_folder.display(),
        destination = %config.destination_folder.display(),
        "Configuration loaded"
    );

    let notifier = SendmailNotifier::new(config.mail.clone());
    let status = run_once(&config, &notifier).await;

    info!(?status, "Run finished");
    Ok(status)
}
