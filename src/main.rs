//! Entry point: parse CLI, resolve configuration and run the export.

use chrono::Local;
use clap::Parser;
use espn_ffl_fa::{
    cli::ESPN, commands::export_free_agents::handle_export_free_agents, config::ExportConfig,
    espn::http::EspnClient, Result,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = ESPN::parse();
    init_tracing(app.verbose);

    let config = match ExportConfig::resolve(app.config_layer(), app.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e);
        }
    };

    let client = match EspnClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "An error occurred while setting up the ESPN client");
            warn!("No players found. Exiting.");
            return Ok(());
        }
    };
    let today = Local::now().date_naive();

    if handle_export_free_agents(&client, &config, today)
        .await?
        .is_some()
    {
        info!("Process complete");
    }

    Ok(())
}
