//! Relevance-scored search across blog posts and projects.
//!
//! Scoring is deliberately simple substring matching; the corpus is a
//! personal site with at most a few hundred items.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use folio_core::traits::ContentSource;
use folio_core::types::{BlogPost, Project};

use crate::{encode_segment, or_empty};

/// Default number of hits returned.
pub const DEFAULT_LIMIT: usize = 10;

/// Hard upper bound on hits returned.
pub const MAX_LIMIT: usize = 50;

const TITLE_EXACT: u32 = 15;
const TITLE_PHRASE: u32 = 10;
const TITLE_TERM: u32 = 4;
const TAG_TERM: u32 = 3;
const CATEGORY_TERM: u32 = 2;
const BODY_TERM: u32 = 1;

/// What kind of content a hit points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitKind {
    /// A blog post.
    Post,
    /// A portfolio project.
    Project,
}

/// One search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Content type.
    pub kind: HitKind,
    /// URL slug.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Site-relative URL.
    pub url: String,
    /// Relevance score; higher is better.
    pub score: u32,
}

/// Normalizes a requested limit into `1..=MAX_LIMIT`.
pub fn clamp_limit(requested: Option<usize>) -> usize {
    requested.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

struct Query {
    phrase: String,
    terms: Vec<String>,
}

impl Query {
    fn parse(raw: &str) -> Option<Self> {
        let phrase = raw.trim().to_lowercase();
        if phrase.is_empty() {
            return None;
        }
        let terms = phrase.split_whitespace().map(str::to_string).collect();
        Some(Self { phrase, terms })
    }

    fn score(
        &self,
        title: &str,
        tags: &[String],
        category: Option<&str>,
        body: Option<&str>,
    ) -> u32 {
        let title = title.to_lowercase();
        let tags: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();
        let category = category.map(str::to_lowercase);
        let body = body.map(str::to_lowercase);

        let mut score = 0;
        if title == self.phrase {
            score += TITLE_EXACT;
        }
        if title.contains(&self.phrase) {
            score += TITLE_PHRASE;
        }
        for term in &self.terms {
            if title.contains(term.as_str()) {
                score += TITLE_TERM;
            }
            if tags.iter().any(|t| t.contains(term.as_str())) {
                score += TAG_TERM;
            }
            if category.as_deref().is_some_and(|c| c.contains(term.as_str())) {
                score += CATEGORY_TERM;
            }
            if body.as_deref().is_some_and(|b| b.contains(term.as_str())) {
                score += BODY_TERM;
            }
        }
        score
    }
}

/// Ranks posts and projects against `query`.
///
/// Items that match nothing are dropped. Ties are broken by title so the
/// order is stable.
pub fn search(
    posts: &[BlogPost],
    projects: &[Project],
    query: &str,
    limit: usize,
) -> Vec<SearchHit> {
    let Some(query) = Query::parse(query) else {
        return Vec::new();
    };

    let post_hits = posts.iter().map(|p| SearchHit {
        kind: HitKind::Post,
        slug: p.slug.clone(),
        title: p.title.clone(),
        url: format!("/blog/{}", encode_segment(&p.slug)),
        score: query.score(
            &p.title,
            &p.tags,
            p.category.as_deref(),
            p.excerpt.as_deref(),
        ),
    });

    let project_hits = projects.iter().map(|p| SearchHit {
        kind: HitKind::Project,
        slug: p.slug.clone(),
        title: p.title.clone(),
        url: format!("/projects/{}", encode_segment(&p.slug)),
        score: query.score(&p.title, &p.tech_stack, None, p.description.as_deref()),
    });

    let mut hits: Vec<SearchHit> = post_hits
        .chain(project_hits)
        .filter(|hit| hit.score > 0)
        .collect();

    hits.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.title.cmp(&b.title)));
    hits.truncate(limit);
    hits
}

/// Fetches posts and projects concurrently and ranks them.
#[derive(Debug, Clone)]
pub struct SearchService {
    source: Arc<dyn ContentSource>,
}

impl SearchService {
    /// Creates a search service over the given content source.
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Runs a query. A failing endpoint contributes no hits.
    pub async fn search(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let (posts, projects) = tokio::join!(self.source.blog_posts(), self.source.projects());
        let posts = or_empty("blogs", posts);
        let projects = or_empty("projects", projects);

        let hits = search(&posts, &projects, query, limit);
        tracing::debug!(
            query_len = query.len(),
            candidates = posts.len() + projects.len(),
            hits = hits.len(),
            "Search completed"
        );
        hits
    }
}
