//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments for the application using
//! the `clap` crate. These arguments are parsed at startup and then merged
//! with the configuration from the `pollcast.toml` file and environment
//! variables.

use clap::Parser;
use figment::{
    value::{Dict, Map, Value},
    Error, Metadata, Profile, Provider,
};
use std::path::PathBuf;

/// A polling publisher that fans generated messages out to channel observers.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Polling period in seconds.
    #[arg(long, value_name = "SECONDS")]
    pub period: Option<u64>,

    /// Stop polling after this many seconds (runs until Ctrl-C when omitted).
    #[arg(long, value_name = "SECONDS")]
    pub run_for: Option<u64>,
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();

        if let Some(period) = self.period {
            dict.insert("polling.period_seconds".into(), Value::from(period));
        }

        if let Some(run_for) = self.run_for {
            dict.insert("polling.run_seconds".into(), Value::from(run_for));
        }

        let mut map = Map::new();
        map.insert(Profile::Default, dict);
        Ok(map)
    }
}
