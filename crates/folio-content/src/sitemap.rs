//! `sitemap.xml` and `robots.txt` generation.

use std::fmt::Write as _;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use folio_core::config::SiteConfig;
use folio_core::traits::ContentSource;
use folio_core::types::{BlogPost, Category, Project, Tag};

use crate::{encode_segment, or_empty};

/// Pages that exist regardless of content, with their priority.
const STATIC_ROUTES: &[(&str, &str, f32)] = &[
    ("/", "weekly", 1.0),
    ("/about", "monthly", 0.8),
    ("/projects", "weekly", 0.9),
    ("/blog", "daily", 0.9),
];

/// A single `<url>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    /// Absolute URL.
    pub loc: String,
    /// Last modification date.
    pub lastmod: Option<DateTime<Utc>>,
    /// Change frequency hint.
    pub changefreq: &'static str,
    /// Priority between 0.0 and 1.0.
    pub priority: f32,
}

/// Builds the full entry list from already-fetched content.
pub fn collect_entries(
    site: &SiteConfig,
    posts: &[BlogPost],
    projects: &[Project],
    tags: &[Tag],
    categories: &[Category],
) -> Vec<SitemapEntry> {
    let mut entries: Vec<SitemapEntry> = STATIC_ROUTES
        .iter()
        .map(|&(path, changefreq, priority)| SitemapEntry {
            loc: site.absolute_url(path),
            lastmod: None,
            changefreq,
            priority,
        })
        .collect();

    entries.extend(posts.iter().map(|post| SitemapEntry {
        loc: site.absolute_url(&format!("/blog/{}", encode_segment(&post.slug))),
        lastmod: post.updated_at.or(post.published_at),
        changefreq: "monthly",
        priority: 0.7,
    }));

    entries.extend(projects.iter().map(|project| SitemapEntry {
        loc: site.absolute_url(&format!("/projects/{}", encode_segment(&project.slug))),
        lastmod: project.updated_at,
        changefreq: "monthly",
        priority: if project.featured { 0.8 } else { 0.6 },
    }));

    entries.extend(tags.iter().map(|tag| SitemapEntry {
        loc: site.absolute_url(&format!("/blog/tag/{}", encode_segment(&tag.slug))),
        lastmod: None,
        changefreq: "weekly",
        priority: 0.4,
    }));

    entries.extend(categories.iter().map(|category| SitemapEntry {
        loc: site.absolute_url(&format!("/blog/category/{}", encode_segment(&category.slug))),
        lastmod: None,
        changefreq: "weekly",
        priority: 0.5,
    }));

    entries
}

/// Serializes entries as a sitemap protocol 0.9 document.
pub fn render(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for entry in entries {
        xml.push_str("  <url>\n");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape_xml(&entry.loc));
        if let Some(lastmod) = entry.lastmod {
            let _ = writeln!(xml, "    <lastmod>{}</lastmod>", lastmod.format("%Y-%m-%d"));
        }
        let _ = writeln!(xml, "    <changefreq>{}</changefreq>", entry.changefreq);
        let _ = writeln!(xml, "    <priority>{:.1}</priority>", entry.priority);
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Renders `robots.txt`, keeping crawlers off preview links and the API.
pub fn robots_txt(site: &SiteConfig) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /preview/\nDisallow: /api/\n\nSitemap: {}\n",
        site.absolute_url("/sitemap.xml")
    )
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Fans out to the content endpoints and renders the sitemap.
#[derive(Debug, Clone)]
pub struct SitemapService {
    source: Arc<dyn ContentSource>,
    site: SiteConfig,
}

impl SitemapService {
    /// Creates a sitemap service for the given site.
    pub fn new(source: Arc<dyn ContentSource>, site: SiteConfig) -> Self {
        Self { source, site }
    }

    /// Fetches all listings concurrently and builds the entry list. Failing
    /// endpoints are skipped.
    pub async fn entries(&self) -> Vec<SitemapEntry> {
        let (posts, projects, tags, categories) = tokio::join!(
            self.source.blog_posts(),
            self.source.projects(),
            self.source.tags(),
            self.source.categories(),
        );

        collect_entries(
            &self.site,
            &or_empty("blogs", posts),
            &or_empty("projects", projects),
            &or_empty("tags", tags),
            &or_empty("categories", categories),
        )
    }

    /// Renders the sitemap XML document.
    pub async fn generate(&self) -> String {
        let entries = self.entries().await;
        tracing::debug!(urls = entries.len(), "Sitemap generated");
        render(&entries)
    }

    /// Renders `robots.txt`.
    pub fn robots(&self) -> String {
        robots_txt(&self.site)
    }
}
