//! Home page composition: named sections, curated portfolio and featured
//! posts assembled around the protected `home` page record.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::error::AppError;
use crate::application::repos::{
    BlogPostRepo, ClientLogoRepo, HomeSectionRepo, PageRepo, SectionRepo,
};
use crate::domain::entities::{BlogPostRecord, ClientLogoRecord, PageRecord, SectionRecord};
use crate::domain::home::HomeSectionView;
use crate::domain::sections::{group_by_type, SectionExtra, PORTFOLIO_SECTION};

/// Slug of the page that anchors the home layout. It cannot be deleted.
pub const HOME_SLUG: &str = "home";

/// How many featured posts the home page shows.
pub const FEATURED_POST_LIMIT: i64 = 3;

#[derive(Debug, Clone)]
pub struct HomeContext {
    pub page: PageRecord,
    pub home_sections: Vec<HomeSectionView>,
    pub sections_by_type: BTreeMap<String, Vec<SectionRecord>>,
    pub featured_portfolio: Vec<SectionRecord>,
    pub featured_posts: Vec<BlogPostRecord>,
    pub logos: Vec<ClientLogoRecord>,
}

pub struct HomeService {
    pages: Arc<dyn PageRepo>,
    sections: Arc<dyn SectionRepo>,
    home_sections: Arc<dyn HomeSectionRepo>,
    posts: Arc<dyn BlogPostRepo>,
    logos: Arc<dyn ClientLogoRepo>,
}

impl HomeService {
    pub fn new(
        pages: Arc<dyn PageRepo>,
        sections: Arc<dyn SectionRepo>,
        home_sections: Arc<dyn HomeSectionRepo>,
        posts: Arc<dyn BlogPostRepo>,
        logos: Arc<dyn ClientLogoRepo>,
    ) -> Self {
        Self {
            pages,
            sections,
            home_sections,
            posts,
            logos,
        }
    }

    pub async fn compose(&self) -> Result<HomeContext, AppError> {
        let page = self
            .pages
            .find_by_slug(HOME_SLUG)
            .await?
            .ok_or(AppError::NotFound)?;

        let sections = self.sections.list_for_page(page.id).await?;
        let featured_portfolio: Vec<SectionRecord> = sections
            .iter()
            .filter(|section| {
                section.kind == PORTFOLIO_SECTION
                    && SectionExtra::parse(&section.extra_json).featured_on_home()
            })
            .cloned()
            .collect();

        let home_sections: Vec<HomeSectionView> = self
            .home_sections
            .list()
            .await?
            .into_iter()
            .filter(|row| row.is_visible)
            .map(HomeSectionView::from)
            .collect();

        let featured_posts = self
            .posts
            .list_featured_published(FEATURED_POST_LIMIT)
            .await?;
        let logos = self.logos.list_active().await?;
        let sections_by_type = group_by_type(sections);

        Ok(HomeContext {
            page,
            home_sections,
            sections_by_type,
            featured_portfolio,
            featured_posts,
            logos,
        })
    }
}
