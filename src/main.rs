mod app;
mod cli;
mod client;
mod config;
mod form;
mod i18n;
mod state;
mod task;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{API_URL_ENV, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "sendform=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = cli::Cli::parse();

    // Configuration is read once and handed to whichever front end runs
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load configuration ({}), using defaults", e);
            let mut config = Config::default();
            config.apply_api_url_override(std::env::var(API_URL_ENV).ok());
            config
        }
    };

    match args.command {
        Some(command) => {
            if let Err(e) = cli::run(command, config, &args.output).await {
                cli::print_error(&e.to_string());
                std::process::exit(1);
            }
            Ok(())
        }
        None => run_gui(config),
    }
}

fn run_gui(config: Config) -> Result<()> {
    tracing::info!("Starting Sendform, endpoint {}", config.api.base_url);

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([640.0, 720.0])
        .with_min_inner_size([420.0, 520.0])
        .with_title("Sendform");

    let native_options = eframe::NativeOptions {
        viewport,
        persist_window: true, // Save/restore window size and position
        ..Default::default()
    };

    eframe::run_native(
        "Sendform",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::SendformApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}
