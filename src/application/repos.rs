//! Repository traits describing persistence adapters.

use async_trait::async_trait;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::entities::{
    AdminUserRecord, BlogPostRecord, CategoryRecord, ClientLogoRecord, ContactSubmissionRecord,
    HeroBannerRecord, HomeSectionRecord, MediaRecord, NavLinkRecord, PageRecord, SectionRecord,
};
use crate::domain::types::{CategoryKind, PageTemplate, PostStatus};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("duplicate record violates unique constraint `{constraint}`")]
    Duplicate { constraint: String },
    #[error("resource not found")]
    NotFound,
    #[error("integrity error: {message}")]
    Integrity { message: String },
    #[error("database timeout")]
    Timeout,
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct PageUpsertParams {
    pub slug: String,
    pub title: String,
    pub meta_description: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_label: String,
    pub nav_order: i32,
    pub is_visible: bool,
    pub template: PageTemplate,
    pub schema_type: String,
    pub schema_json: String,
    pub faq_json: String,
    pub page_blocks: String,
}

/// Fields a metadata save may touch. The slug is the page's immutable key
/// and builder blocks have their own write path, so neither appears here.
#[derive(Debug, Clone)]
pub struct PageMetaParams {
    pub title: String,
    pub meta_description: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_label: String,
    pub nav_order: i32,
    pub is_visible: bool,
    pub template: PageTemplate,
    pub schema_type: String,
    pub schema_json: String,
    pub faq_json: String,
}

#[derive(Debug, Clone)]
pub struct SectionUpsertParams {
    pub page_id: Uuid,
    pub kind: String,
    pub title: String,
    pub description: String,
    pub content_html: String,
    pub image_url: String,
    pub video_url: String,
    pub icon: String,
    pub icon_type: String,
    pub icon_image_url: String,
    pub tag: String,
    pub sort_order: i32,
    pub extra_json: String,
}

#[derive(Debug, Clone)]
pub struct HomeSectionUpdateParams {
    pub label: String,
    pub heading: String,
    pub subtitle: String,
    pub is_visible: bool,
    pub config_json: String,
}

#[derive(Debug, Clone)]
pub struct PostUpsertParams {
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
    pub reading_time: i32,
    pub status: PostStatus,
    pub is_featured: bool,
    pub author: String,
    pub published_at: Option<OffsetDateTime>,
    pub faq_json: String,
}

#[derive(Debug, Clone)]
pub struct CategoryUpsertParams {
    pub kind: CategoryKind,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone)]
pub struct NavLinkUpsertParams {
    pub label: String,
    pub url: String,
    pub parent_id: Option<Uuid>,
    pub sort_order: i32,
    pub is_visible: bool,
    pub open_new_tab: bool,
}

#[derive(Debug, Clone)]
pub struct ClientLogoUpsertParams {
    pub name: String,
    pub image_url: String,
    pub website_url: String,
    pub sort_order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct HeroBannerUpsertParams {
    pub page_id: Uuid,
    pub image_url: String,
    pub overlay_title: String,
    pub overlay_subtitle: String,
    pub overlay_position: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub alt_text: String,
    pub seo_title: String,
}

#[derive(Debug, Clone)]
pub struct NewMediaParams {
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub alt_text: String,
}

#[derive(Debug, Clone)]
pub struct MediaMetaParams {
    pub alt_text: String,
    pub seo_title: String,
    pub seo_caption: String,
}

#[derive(Debug, Clone)]
pub struct NewContactParams {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

#[async_trait]
pub trait PageRepo: Send + Sync {
    async fn list_all(&self) -> Result<Vec<PageRecord>, RepoError>;
    async fn list_visible(&self) -> Result<Vec<PageRecord>, RepoError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<PageRecord>, RepoError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<PageRecord>, RepoError>;
    async fn create(&self, params: PageUpsertParams) -> Result<PageRecord, RepoError>;
    async fn update(&self, id: Uuid, params: PageMetaParams) -> Result<PageRecord, RepoError>;
    async fn update_blocks(&self, id: Uuid, page_blocks: &str) -> Result<(), RepoError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
    async fn count(&self) -> Result<i64, RepoError>;
}

#[async_trait]
pub trait SectionRepo: Send + Sync {
    async fn list_for_page(&self, page_id: Uuid) -> Result<Vec<SectionRecord>, RepoError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<SectionRecord>, RepoError>;
    async fn create(&self, params: SectionUpsertParams) -> Result<SectionRecord, RepoError>;
    async fn update(
        &self,
        id: Uuid,
        params: SectionUpsertParams,
    ) -> Result<SectionRecord, RepoError>;
    async fn update_extra(&self, id: Uuid, extra_json: &str) -> Result<(), RepoError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
    async fn reorder(&self, assignments: &[(Uuid, i32)]) -> Result<(), RepoError>;
    async fn create_many(&self, params: Vec<SectionUpsertParams>) -> Result<(), RepoError>;
}

#[async_trait]
pub trait HomeSectionRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<HomeSectionRecord>, RepoError>;
    async fn find_by_key(&self, key: &str) -> Result<Option<HomeSectionRecord>, RepoError>;
    async fn update(
        &self,
        key: &str,
        params: HomeSectionUpdateParams,
    ) -> Result<HomeSectionRecord, RepoError>;
    async fn set_visibility(&self, key: &str, visible: bool) -> Result<bool, RepoError>;
    async fn reorder(&self, assignments: &[(Uuid, i32)]) -> Result<(), RepoError>;
}

#[async_trait]
pub trait BlogPostRepo: Send + Sync {
    async fn list_published(
        &self,
        category: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<BlogPostRecord>, RepoError>;
    async fn count_published(&self, category: Option<&str>) -> Result<i64, RepoError>;
    async fn list_recent_published(&self, limit: i64) -> Result<Vec<BlogPostRecord>, RepoError>;
    async fn list_featured_published(&self, limit: i64)
        -> Result<Vec<BlogPostRecord>, RepoError>;
    async fn list_published_in_category(
        &self,
        category: &str,
        exclude_slug: &str,
        limit: i64,
    ) -> Result<Vec<BlogPostRecord>, RepoError>;
    async fn list_all(&self) -> Result<Vec<BlogPostRecord>, RepoError>;
    async fn find_published_by_slug(&self, slug: &str)
        -> Result<Option<BlogPostRecord>, RepoError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPostRecord>, RepoError>;
    async fn create(&self, params: PostUpsertParams) -> Result<BlogPostRecord, RepoError>;
    async fn update(&self, id: Uuid, params: PostUpsertParams)
        -> Result<BlogPostRecord, RepoError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
    async fn count(&self) -> Result<i64, RepoError>;
}

#[async_trait]
pub trait CategoryRepo: Send + Sync {
    async fn list(&self, kind: CategoryKind) -> Result<Vec<CategoryRecord>, RepoError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CategoryRecord>, RepoError>;
    async fn create(&self, params: CategoryUpsertParams) -> Result<CategoryRecord, RepoError>;
    async fn update(
        &self,
        id: Uuid,
        params: CategoryUpsertParams,
    ) -> Result<CategoryRecord, RepoError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}

#[async_trait]
pub trait NavLinkRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<NavLinkRecord>, RepoError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<NavLinkRecord>, RepoError>;
    async fn create(&self, params: NavLinkUpsertParams) -> Result<NavLinkRecord, RepoError>;
    async fn update(
        &self,
        id: Uuid,
        params: NavLinkUpsertParams,
    ) -> Result<NavLinkRecord, RepoError>;
    async fn delete_many(&self, ids: &[Uuid]) -> Result<(), RepoError>;
}

#[async_trait]
pub trait ClientLogoRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<ClientLogoRecord>, RepoError>;
    async fn list_active(&self) -> Result<Vec<ClientLogoRecord>, RepoError>;
    async fn create(&self, params: ClientLogoUpsertParams)
        -> Result<ClientLogoRecord, RepoError>;
    async fn update(
        &self,
        id: Uuid,
        params: ClientLogoUpsertParams,
    ) -> Result<ClientLogoRecord, RepoError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}

#[async_trait]
pub trait HeroBannerRepo: Send + Sync {
    async fn list_for_page(&self, page_id: Uuid) -> Result<Vec<HeroBannerRecord>, RepoError>;
    async fn list_active_for_page(
        &self,
        page_id: Uuid,
    ) -> Result<Vec<HeroBannerRecord>, RepoError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<HeroBannerRecord>, RepoError>;
    async fn create(&self, params: HeroBannerUpsertParams)
        -> Result<HeroBannerRecord, RepoError>;
    async fn update(
        &self,
        id: Uuid,
        params: HeroBannerUpsertParams,
    ) -> Result<HeroBannerRecord, RepoError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
    async fn reorder(&self, assignments: &[(Uuid, i32)]) -> Result<(), RepoError>;
}

#[async_trait]
pub trait MediaRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<MediaRecord>, RepoError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<MediaRecord>, RepoError>;
    async fn insert(&self, params: NewMediaParams) -> Result<MediaRecord, RepoError>;
    async fn update_meta(&self, id: Uuid, params: MediaMetaParams) -> Result<(), RepoError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
    async fn count(&self) -> Result<i64, RepoError>;
}

#[async_trait]
pub trait SettingsRepo: Send + Sync {
    async fn load_all(&self) -> Result<Vec<(String, String)>, RepoError>;
    async fn upsert_many(&self, entries: &[(String, String)]) -> Result<(), RepoError>;
}

#[async_trait]
pub trait ContactRepo: Send + Sync {
    async fn insert(
        &self,
        params: NewContactParams,
    ) -> Result<ContactSubmissionRecord, RepoError>;
    async fn list(&self) -> Result<Vec<ContactSubmissionRecord>, RepoError>;
    async fn update_status(&self, id: Uuid, status: &str) -> Result<(), RepoError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
    async fn count_with_status(&self, status: &str) -> Result<i64, RepoError>;
}

#[async_trait]
pub trait AdminUserRepo: Send + Sync {
    async fn find_by_username(&self, username: &str)
        -> Result<Option<AdminUserRecord>, RepoError>;
    async fn create(&self, username: &str, password_hash: &str) -> Result<(), RepoError>;
    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), RepoError>;
}
