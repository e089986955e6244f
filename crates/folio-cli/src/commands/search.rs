//! Search the content API from the command line.

use std::sync::Arc;

use clap::Args;
use tabled::Tabled;

use folio_content::search::clamp_limit;
use folio_content::{ContentApiClient, HitKind, SearchHit, SearchService};
use folio_core::config::AppConfig;
use folio_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for the search command
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-text query
    pub query: String,

    /// Maximum number of hits
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// One row of table output.
#[derive(Debug, Tabled)]
struct HitRow {
    #[tabled(rename = "Score")]
    score: u32,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "URL")]
    url: String,
}

impl From<&SearchHit> for HitRow {
    fn from(hit: &SearchHit) -> Self {
        Self {
            score: hit.score,
            kind: match hit.kind {
                HitKind::Post => "post",
                HitKind::Project => "project",
            },
            title: hit.title.clone(),
            url: hit.url.clone(),
        }
    }
}

/// Execute the search command
pub async fn execute(
    args: &SearchArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let client = ContentApiClient::new(&config.content)?;
    let service = SearchService::new(Arc::new(client));
    let hits = service.search(&args.query, clamp_limit(args.limit)).await;

    output::render(&hits, format, |hits| {
        let rows: Vec<HitRow> = hits.iter().map(HitRow::from).collect();
        output::print_rows(&rows, &format!("No matches for '{}'.", args.query));
    });
    Ok(())
}
