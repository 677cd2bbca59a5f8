//! Configuration management for pollcast
//!
//! This module defines the main `Config` struct and its sub-structs,
//! responsible for holding all application settings. It uses the `figment`
//! crate to load configuration from a `pollcast.toml` file and merge it
//! with environment variables and command-line arguments.

use crate::cli::Cli;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// The logging level for the application.
    pub log_level: String,
    /// Configuration for the polling schedule.
    pub polling: PollingConfig,
    /// Which observers the driver registers.
    pub observers: ObserversConfig,
}

/// Configuration for the polling schedule.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PollingConfig {
    /// The interval between poll ticks, in seconds.
    pub period_seconds: u64,
    /// How long the driver keeps polling before shutting down, in seconds.
    /// When unset the driver runs until interrupted.
    pub run_seconds: Option<u64>,
}

/// Which observers the driver registers.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ObserversConfig {
    pub email: bool,
    pub whatsapp: bool,
}

impl Config {
    /// Loads the application configuration by layering sources: defaults,
    /// the TOML file, environment variables, and CLI arguments.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| "pollcast.toml".into());

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            // Allow overriding with environment variables, e.g., POLLCAST_LOG_LEVEL=debug
            .merge(Env::prefixed("POLLCAST_").split("__"))
            .merge(cli.clone())
            .extract()?;
        Ok(config)
    }
}

// Provide a default implementation for tests and easy setup.
impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            polling: PollingConfig {
                period_seconds: 2,
                run_seconds: Some(15),
            },
            observers: ObserversConfig {
                email: true,
                whatsapp: true,
            },
        }
    }
}
