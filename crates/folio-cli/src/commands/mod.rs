//! CLI command definitions and dispatch.

pub mod config;
pub mod preview;
pub mod search;
pub mod serve;

use clap::{Parser, Subcommand};

use folio_core::config::AppConfig;
use folio_core::error::AppError;

use crate::output::OutputFormat;

/// Folio: signed preview links and site tooling for a portfolio
#[derive(Debug, Parser)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file. When omitted, `config/default.toml`
    /// and `config/<env>.toml` are merged if present.
    #[arg(short, long)]
    pub config: Option<String>,

    /// Environment name used to pick `config/<env>.toml`
    #[arg(short, long, env = "FOLIO_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Folio server
    Serve(serve::ServeArgs),
    /// Issue and inspect preview tokens
    Preview(preview::PreviewArgs),
    /// Search blog posts and projects on the content API
    Search(search::SearchArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = self.load_config()?;
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Preview(args) => preview::execute(args, &config, self.format),
            Commands::Search(args) => search::execute(args, &config, self.format).await,
            Commands::Config(args) => config::execute(args, &config, self.format),
        }
    }

    fn load_config(&self) -> Result<AppConfig, AppError> {
        match &self.config {
            Some(path) => AppConfig::load_file(path),
            None => AppConfig::load(&self.env),
        }
    }
}
