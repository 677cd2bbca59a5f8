//! Pollcast - polling publish/subscribe demo driver
//!
//! Registers the configured channel observers with the process-wide
//! publisher, polls for a while, then stops and deregisters them.

use anyhow::Result;
use clap::Parser;
use pollcast::{
    cli::Cli,
    config::Config,
    observers::{EmailObserver, WhatsAppObserver},
    PollingPublisher,
};
use std::{sync::Arc, time::Duration};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const EMAIL_OBSERVER: &str = "emailObserver";
const WHATS_APP_OBSERVER: &str = "whatsAppObserver";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration by layering sources: defaults, file, environment, and CLI args.
    let config = Config::load(&cli).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        // Exit if configuration fails, as it's a critical step.
        std::process::exit(1);
    });

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!("Pollcast starting up...");

    // Log the loaded configuration settings for visibility
    info!("-------------------- Configuration --------------------");
    info!("Log Level: {}", config.log_level);
    info!("Polling Period: {}s", config.polling.period_seconds);
    match config.polling.run_seconds {
        Some(secs) => info!("Run Duration: {}s", secs),
        None => info!("Run Duration: until Ctrl-C"),
    }
    info!(
        "Email Observer: {}",
        if config.observers.email { "Enabled" } else { "Disabled" }
    );
    info!(
        "WhatsApp Observer: {}",
        if config.observers.whatsapp { "Enabled" } else { "Disabled" }
    );
    info!("-------------------------------------------------------");

    let publisher = PollingPublisher::global();

    if config.observers.email {
        publisher.add_observer(EMAIL_OBSERVER, Arc::new(EmailObserver));
    }
    if config.observers.whatsapp {
        publisher.add_observer(WHATS_APP_OBSERVER, Arc::new(WhatsAppObserver));
    }

    if let Err(err) = publisher.start_polling(Duration::from_secs(config.polling.period_seconds)) {
        error!("Failed to start polling: {err}");
        std::process::exit(1);
    }

    match config.polling.run_seconds {
        Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
        None => {
            tokio::signal::ctrl_c().await?;
            info!("Ctrl-C received, shutting down");
        }
    }

    publisher.stop_polling().await;
    publisher.remove_observer(EMAIL_OBSERVER);
    publisher.remove_observer(WHATS_APP_OBSERVER);

    info!("Shutdown complete.");
    Ok(())
}
