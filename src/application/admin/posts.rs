//! Admin blog management. Saves derive the slug, reading time and publish
//! date instead of trusting the form.

use std::sync::Arc;

use time::OffsetDateTime;
use uuid::Uuid;

use crate::application::error::AppError;
use crate::application::repos::{BlogPostRepo, PostUpsertParams};
use crate::domain::entities::BlogPostRecord;
use crate::domain::error::DomainError;
use crate::domain::posts::{derive_published_at, reading_time};
use crate::domain::slug::sanitize_slug;
use crate::domain::types::PostStatus;

/// What the post form submits; derived fields are absent on purpose.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content_html: String,
    pub featured_image: String,
    pub featured_image_alt: String,
    pub category: String,
    pub tags: String,
    pub meta_title: String,
    pub meta_description: String,
    pub og_image: String,
    pub status: PostStatus,
    pub is_featured: bool,
    pub author: String,
    pub published_at: Option<OffsetDateTime>,
    pub faq_json: String,
}

pub struct PostAdminService {
    posts: Arc<dyn BlogPostRepo>,
}

impl PostAdminService {
    pub fn new(posts: Arc<dyn BlogPostRepo>) -> Self {
        Self { posts }
    }

    pub async fn list(&self) -> Result<Vec<BlogPostRecord>, AppError> {
        Ok(self.posts.list_all().await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<BlogPostRecord, AppError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("blog post").into())
    }

    pub async fn create(&self, draft: PostDraft) -> Result<BlogPostRecord, AppError> {
        let params = self.derive(draft, None)?;
        Ok(self.posts.create(params).await?)
    }

    pub async fn update(&self, id: Uuid, draft: PostDraft) -> Result<BlogPostRecord, AppError> {
        let existing = self.get(id).await?;
        let params = self.derive(draft, Some(&existing))?;
        Ok(self.posts.update(id, params).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        Ok(self.posts.delete(id).await?)
    }

    fn derive(
        &self,
        draft: PostDraft,
        existing: Option<&BlogPostRecord>,
    ) -> Result<PostUpsertParams, AppError> {
        if draft.title.trim().is_empty() {
            return Err(AppError::validation("title is required"));
        }
        let slug_source = if draft.slug.trim().is_empty() {
            &draft.title
        } else {
            &draft.slug
        };
        let slug = sanitize_slug(slug_source)
            .map_err(|err| AppError::validation(err.to_string()))?;

        let published_at = derive_published_at(
            draft.status,
            draft.published_at,
            existing.and_then(|post| post.published_at),
            OffsetDateTime::now_utc(),
        );

        Ok(PostUpsertParams {
            slug,
            title: draft.title,
            excerpt: draft.excerpt,
            reading_time: reading_time(&draft.content_html),
            content_html: draft.content_html,
            featured_image: draft.featured_image,
            featured_image_alt: draft.featured_image_alt,
            category: draft.category,
            tags: draft.tags,
            meta_title: draft.meta_title,
            meta_description: draft.meta_description,
            og_image: draft.og_image,
            status: draft.status,
            is_featured: draft.is_featured,
            author: if draft.author.trim().is_empty() {
                "Admin".to_string()
            } else {
                draft.author
            },
            published_at,
            faq_json: if draft.faq_json.trim().is_empty() {
                "[]".to_string()
            } else {
                draft.faq_json
            },
        })
    }
}
