//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use folio_core::config::AppConfig;
use folio_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration (secrets redacted)
    Show,
    /// Check that the server could start with this configuration
    Validate,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => output::render(config, format, |config| println!("{config:#?}")),
        ConfigCommand::Validate => {
            if let Err(e) = config.validate() {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }

            output::print_fields(
                "Configuration is valid",
                &[
                    ("Listen", config.server.bind_address()),
                    ("Content API", config.content.base_url.clone()),
                    ("Site", config.site.base_url.clone()),
                    (
                        "Preview TTL",
                        format!("{} minutes", config.preview.ttl_minutes),
                    ),
                ],
            );
            if config.preview.issuer_key().is_none() {
                output::print_warning("No issuer key set; POST /api/preview-links is disabled");
            }
        }
    }

    Ok(())
}
