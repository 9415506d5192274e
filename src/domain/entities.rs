//! Domain entities mirrored from persistent storage.

use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::types::{CategoryKind, PageTemplate, PostStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRecord {
    pub id: Uuid,
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
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionRecord {
    pub id: Uuid,
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

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeSectionRecord {
    pub id: Uuid,
    pub section_key: String,
    pub label: String,
    pub heading: String,
    pub subtitle: String,
    pub sort_order: i32,
    pub is_visible: bool,
    pub config_json: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogPostRecord {
    pub id: Uuid,
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
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRecord {
    pub id: Uuid,
    pub kind: CategoryKind,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLinkRecord {
    pub id: Uuid,
    pub label: String,
    pub url: String,
    pub parent_id: Option<Uuid>,
    pub sort_order: i32,
    pub is_visible: bool,
    pub open_new_tab: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientLogoRecord {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub website_url: String,
    pub sort_order: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroBannerRecord {
    pub id: Uuid,
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

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaRecord {
    pub id: Uuid,
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub alt_text: String,
    pub seo_title: String,
    pub seo_caption: String,
    pub uploaded_at: OffsetDateTime,
}

impl MediaRecord {
    /// Public URL the stored file is served under.
    pub fn url(&self) -> String {
        format!("/uploads/{}", self.filename)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSubmissionRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub status: String,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminUserRecord {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
}
