//! Public page resolution: slug to a fully composed rendering context.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::error::AppError;
use crate::application::repos::{BlogPostRepo, HeroBannerRepo, PageRepo, SectionRepo};
use crate::domain::blocks::{self, PageBlock, BLOG_FEED_LIMIT};
use crate::domain::entities::{BlogPostRecord, HeroBannerRecord, PageRecord, SectionRecord};
use crate::domain::sections::group_by_type;
use crate::domain::video::{page_og_video, OgVideo};

/// Everything a page template needs, assembled in one pass.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub page: PageRecord,
    pub sections: Vec<SectionRecord>,
    pub sections_by_type: BTreeMap<String, Vec<SectionRecord>>,
    pub blocks: Vec<PageBlock>,
    pub recent_posts: Vec<BlogPostRecord>,
    pub banners: Vec<HeroBannerRecord>,
    pub og_video: Option<OgVideo>,
}

/// Outcome of resolving a public slug.
#[derive(Debug, Clone)]
pub enum PageResolution {
    Resolved(Box<PageContext>),
    /// Pages on the blog template have no standalone render; the blog index
    /// is the canonical location.
    RedirectToBlog,
    NotFound,
}

pub struct PageResolver {
    pages: Arc<dyn PageRepo>,
    sections: Arc<dyn SectionRepo>,
    posts: Arc<dyn BlogPostRepo>,
    banners: Arc<dyn HeroBannerRepo>,
}

impl PageResolver {
    pub fn new(
        pages: Arc<dyn PageRepo>,
        sections: Arc<dyn SectionRepo>,
        posts: Arc<dyn BlogPostRepo>,
        banners: Arc<dyn HeroBannerRepo>,
    ) -> Self {
        Self {
            pages,
            sections,
            posts,
            banners,
        }
    }

    pub async fn resolve(&self, slug: &str) -> Result<PageResolution, AppError> {
        let Some(page) = self.pages.find_by_slug(slug).await? else {
            return Ok(PageResolution::NotFound);
        };
        if !page.is_visible {
            return Ok(PageResolution::NotFound);
        }
        if page.template.is_blog() {
            return Ok(PageResolution::RedirectToBlog);
        }

        let context = self.compose(page).await?;
        Ok(PageResolution::Resolved(Box::new(context)))
    }

    /// Compose the context for an already-fetched page. Visibility and
    /// template routing are the caller's concern, which lets the admin
    /// preview reuse composition for hidden pages.
    pub async fn compose(&self, page: PageRecord) -> Result<PageContext, AppError> {
        let sections = self.sections.list_for_page(page.id).await?;
        let banners = self.banners.list_active_for_page(page.id).await?;
        let parsed_blocks = blocks::parse_blocks(&page.page_blocks);

        let recent_posts = if blocks::wants_blog_feed(&parsed_blocks) {
            self.posts
                .list_recent_published(i64::from(BLOG_FEED_LIMIT))
                .await?
        } else {
            Vec::new()
        };

        let og_video = page_og_video(&sections);
        let sections_by_type = group_by_type(sections.clone());

        Ok(PageContext {
            page,
            sections,
            sections_by_type,
            blocks: parsed_blocks,
            recent_posts,
            banners,
            og_video,
        })
    }
}
