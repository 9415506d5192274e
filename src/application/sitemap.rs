//! Sitemap generation for the public site.

use std::fmt::Write as _;
use std::sync::Arc;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::application::error::AppError;
use crate::application::repos::{BlogPostRepo, PageRepo};
use crate::domain::entities::{BlogPostRecord, PageRecord};

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const URLSET_OPEN: &str = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#;

fn push_url(
    out: &mut String,
    loc: &str,
    lastmod: Option<OffsetDateTime>,
    changefreq: &str,
    priority: &str,
) {
    // write! to a String cannot fail.
    let _ = write!(out, "<url><loc>{loc}</loc>");
    if let Some(stamp) = lastmod.and_then(|at| at.format(&Rfc3339).ok()) {
        let _ = write!(out, "<lastmod>{stamp}</lastmod>");
    }
    let _ = write!(
        out,
        "<changefreq>{changefreq}</changefreq><priority>{priority}</priority></url>"
    );
}

/// Render the sitemap document. The home page outranks everything; other
/// visible pages and published posts follow with fixed priorities. Each URL
/// carries the record's last update as its `lastmod`.
pub fn render_sitemap(base_url: &str, pages: &[PageRecord], posts: &[BlogPostRecord]) -> String {
    let base = base_url.trim_end_matches('/');
    let mut out = String::with_capacity(512);
    out.push_str(XML_HEADER);
    out.push_str(URLSET_OPEN);

    let home_updated = pages
        .iter()
        .find(|page| page.slug == "home")
        .map(|page| page.updated_at);
    push_url(&mut out, &format!("{base}/"), home_updated, "weekly", "1.0");
    for page in pages {
        if page.slug == "home" {
            continue;
        }
        push_url(
            &mut out,
            &format!("{base}/{}", page.slug),
            Some(page.updated_at),
            "monthly",
            "0.8",
        );
    }
    for post in posts {
        push_url(
            &mut out,
            &format!("{base}/blogs/{}", post.slug),
            Some(post.updated_at),
            "monthly",
            "0.6",
        );
    }

    out.push_str("</urlset>");
    out
}

pub struct SitemapService {
    pages: Arc<dyn PageRepo>,
    posts: Arc<dyn BlogPostRepo>,
}

impl SitemapService {
    pub fn new(pages: Arc<dyn PageRepo>, posts: Arc<dyn BlogPostRepo>) -> Self {
        Self { pages, posts }
    }

    pub async fn render(&self, base_url: &str) -> Result<String, AppError> {
        let pages = self.pages.list_visible().await?;
        let posts = self.posts.list_recent_published(i64::MAX).await?;
        Ok(render_sitemap(base_url, &pages, &posts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fakes::{FakeStore, PAGE_HOME};

    #[tokio::test]
    async fn sitemap_lists_home_pages_and_posts() {
        let store = FakeStore::seeded();
        let service = SitemapService::new(store.pages(), store.posts());
        let xml = service.render("https://example.com/").await.unwrap();

        assert!(xml.starts_with(XML_HEADER));
        assert!(xml.contains("<url><loc>https://example.com/</loc><lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq><priority>1.0</priority></url>"));
        assert!(xml.contains("https://example.com/services</loc>"));
        assert!(xml.contains("https://example.com/blogs/post-0</loc>"));
        // Home, one named page and five published posts each carry a stamp.
        assert_eq!(xml.matches("<lastmod>").count(), 7);
        // The home slug never appears as a named path.
        assert!(!xml.contains(&format!("https://example.com/{PAGE_HOME}<")));
        // Drafts stay out.
        assert!(!xml.contains("draft-post"));
    }

    #[tokio::test]
    async fn hidden_pages_are_excluded() {
        let store = FakeStore::seeded();
        store.hide_page("services").await;
        let service = SitemapService::new(store.pages(), store.posts());
        let xml = service.render("https://example.com").await.unwrap();
        assert!(!xml.contains("/services<"));
    }
}
