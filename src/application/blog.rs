//! Public blog surface: the paginated index and the post detail with its
//! related-post rail.

use std::sync::Arc;

use crate::application::error::AppError;
use crate::application::repos::{BlogPostRepo, CategoryRepo};
use crate::domain::entities::{BlogPostRecord, CategoryRecord};
use crate::domain::posts::{select_related, RELATED_LIMIT};
use crate::domain::types::CategoryKind;

/// Posts per index page.
pub const PAGE_SIZE: i64 = 9;

#[derive(Debug, Clone)]
pub struct BlogIndex {
    pub posts: Vec<BlogPostRecord>,
    pub categories: Vec<CategoryRecord>,
    pub category: Option<String>,
    pub page: i64,
    pub total_pages: i64,
    pub total_posts: i64,
}

#[derive(Debug, Clone)]
pub struct BlogDetail {
    pub post: BlogPostRecord,
    pub related: Vec<BlogPostRecord>,
}

pub struct BlogService {
    posts: Arc<dyn BlogPostRepo>,
    categories: Arc<dyn CategoryRepo>,
}

impl BlogService {
    pub fn new(posts: Arc<dyn BlogPostRepo>, categories: Arc<dyn CategoryRepo>) -> Self {
        Self { posts, categories }
    }

    /// Page numbers are 1-based; anything below 1 clamps to the first page
    /// and anything past the end returns an empty page rather than an error.
    pub async fn index(
        &self,
        page: i64,
        category: Option<&str>,
    ) -> Result<BlogIndex, AppError> {
        let page = page.max(1);
        let category = category
            .map(str::trim)
            .filter(|value| !value.is_empty());
        let total_posts = self.posts.count_published(category).await?;
        let total_pages = (total_posts + PAGE_SIZE - 1) / PAGE_SIZE;
        let offset = (page - 1) * PAGE_SIZE;
        let posts = self.posts.list_published(category, offset, PAGE_SIZE).await?;
        let categories = self.categories.list(CategoryKind::Blog).await?;

        Ok(BlogIndex {
            posts,
            categories,
            category: category.map(str::to_string),
            page,
            total_pages,
            total_posts,
        })
    }

    pub async fn detail(&self, slug: &str) -> Result<Option<BlogDetail>, AppError> {
        let Some(post) = self.posts.find_published_by_slug(slug).await? else {
            return Ok(None);
        };

        let same_category = self
            .posts
            .list_published_in_category(&post.category, &post.slug, RELATED_LIMIT as i64)
            .await?;
        let backfill = self
            .posts
            .list_recent_published(RELATED_LIMIT as i64 + 1)
            .await?;
        let related = select_related(&post.slug, same_category, backfill);

        Ok(Some(BlogDetail { post, related }))
    }
}
