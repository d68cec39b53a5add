//! Command line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "neo-lookup",
    version,
    about = "Look up near-Earth asteroids in the NASA NeoWs catalog"
)]
pub struct Cli {
    /// Config file (default: <config dir>/neo-lookup/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// NeoWs API key (overrides NASA_API_KEY and the config file)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Override the catalog base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Look up one asteroid by identifier and print it
    Lookup {
        /// NeoWs object identifier, e.g. 3542519
        id: String,
    },
    /// Print the first asteroid of the catalog listing
    Random,
}

impl Cli {
    /// Apply flag overrides on top of the loaded config file.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.catalog.base_url = base_url.clone();
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.command.is_none()
    }
}
