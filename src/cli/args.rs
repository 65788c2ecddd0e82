use clap::{Args, Subcommand};

use crate::config::TOKEN_ENV_VAR;

/// Count command arguments
#[derive(Args, Debug)]
pub struct CountArgs {
    /// Company CNPJ, with or without punctuation (e.g. 11.222.333/0001-81)
    pub cnpj: String,

    /// Escavador API token (overrides the config file)
    #[arg(long, env = TOKEN_ENV_VAR, hide_env_values = true)]
    pub token: Option<String>,

    /// Stop after this many result pages
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_pages: Option<u32>,

    /// Override the API base URL
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Configuration command arguments
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key (escavador.token, escavador.base_url, escavador.timeout)
        key: String,

        /// Configuration value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Show configuration file path
    Path,

    /// Initialize configuration file
    Init,
}
