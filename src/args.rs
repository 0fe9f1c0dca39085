//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "moviesearch", version, about = "Look up movies from the terminal")]
pub struct Cli {
    /// Text to pre-fill the search box with (does not start a search)
    pub query: Option<String>,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// OMDb API key (overrides environment and config file)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Override the movie service endpoint
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Abort lookups after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply flag overrides on top of the loaded config.
    ///
    /// The API key is not copied here; it is handed to the key resolver as
    /// an explicit override so it keeps priority over the environment.
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.api.timeout_seconds = Some(timeout);
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }
    }
}
