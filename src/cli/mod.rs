//! Command-line interface for webext-loader
//!
//! Provides the main CLI structure using clap with subcommands for:
//! - `generate`: Render the loaders of a JSON plan to stdout

mod generate;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use crate::config::{Config, DEFAULT_CONFIG_FILE};

pub use generate::GenerateCommand;

/// Loader file synthesis for bundled browser extension scripts
#[derive(Parser, Debug)]
#[command(name = "webext-loader")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to webext-loader.toml config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the loaders listed in a JSON plan
    Generate(GenerateCommand),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        print_banner();

        // The default file is optional, an explicit path must exist
        let required = self.config != DEFAULT_CONFIG_FILE;
        let config = Config::load_or_default(&self.config, required)
            .with_context(|| format!("Failed to load configuration from {}", self.config))?;
        info!("Using configuration {}", self.config);

        match &self.command {
            Commands::Generate(cmd) => cmd.execute(&config).await,
        }
    }
}

/// Print the banner
fn print_banner() {
    eprintln!(
        "\n{} {}\n",
        "webext-loader".bold().cyan(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
}
