//! Preview token commands.

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use serde::Serialize;

use folio_auth::{PreviewSecret, SubjectId, TokenCodec};
use folio_core::config::AppConfig;
use folio_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for preview commands
#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Preview subcommand
    #[command(subcommand)]
    pub command: PreviewCommand,
}

/// Preview subcommands
#[derive(Debug, Subcommand)]
pub enum PreviewCommand {
    /// Issue a preview link for a collection
    Issue {
        /// Collection identifier
        subject_id: String,
        /// Override the configured lifetime in minutes
        #[arg(long)]
        ttl_minutes: Option<u64>,
    },
    /// Check a token against the configured secret
    Verify {
        /// Token to check
        token: String,
        /// Require the token to be bound to this collection
        #[arg(long)]
        subject_id: Option<String>,
    },
}

/// An issued preview link.
#[derive(Debug, Serialize)]
struct IssuedLink {
    subject_id: String,
    token: String,
    url: String,
    expires_at: DateTime<Utc>,
}

/// Outcome of a successful verification.
#[derive(Debug, Serialize)]
struct VerifiedLink {
    subject_id: String,
    expires_at: DateTime<Utc>,
}

/// Execute preview commands
pub fn execute(
    args: &PreviewArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let secret = PreviewSecret::from_config(&config.preview)?;

    match &args.command {
        PreviewCommand::Issue {
            subject_id,
            ttl_minutes,
        } => {
            let mut preview = config.preview.clone();
            if let Some(minutes) = ttl_minutes {
                preview.ttl_minutes = *minutes;
            }
            if preview.ttl_minutes == 0 {
                return Err(AppError::validation("--ttl-minutes must be greater than zero"));
            }

            let codec = TokenCodec::new(&secret, preview.ttl())?;
            let subject = SubjectId::parse(subject_id)?;
            let issued = codec.issue(subject.as_str())?;

            let link = IssuedLink {
                url: config.site.absolute_url(&folio_api::handlers::links::preview_path(
                    &subject,
                    issued.as_str(),
                )),
                expires_at: issued.expires_at(),
                subject_id: subject.into_inner(),
                token: issued.into_string(),
            };

            output::render(&link, format, |link| {
                output::print_fields(
                    &format!("Preview link issued for '{}'", link.subject_id),
                    &[
                        ("URL", link.url.clone()),
                        ("Token", link.token.clone()),
                        ("Expires at", link.expires_at.to_rfc3339()),
                    ],
                );
            });
        }
        PreviewCommand::Verify { token, subject_id } => {
            let codec = TokenCodec::new(&secret, config.preview.ttl())?;
            let verified = codec
                .verify(token.trim())
                .ok_or_else(|| AppError::authentication("Token is invalid or expired"))?;

            if let Some(expected) = subject_id {
                if !verified.grants(expected) {
                    return Err(AppError::authorization(format!(
                        "Token is bound to '{}', not '{expected}'",
                        verified.subject_id()
                    )));
                }
            }

            let result = VerifiedLink {
                subject_id: verified.subject_id().to_string(),
                expires_at: verified.expires_at(),
            };

            output::render(&result, format, |result| {
                output::print_fields(
                    "Token is valid",
                    &[
                        ("Subject", result.subject_id.clone()),
                        ("Expires at", result.expires_at.to_rfc3339()),
                    ],
                );
            });
        }
    }

    Ok(())
}
