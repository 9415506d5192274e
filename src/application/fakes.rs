//! In-memory repository doubles shared by the service tests.

use std::sync::Arc;

use async_trait::async_trait;
use time::{Duration, OffsetDateTime};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::application::repos::{
    AdminUserRepo, BlogPostRepo, CategoryRepo, CategoryUpsertParams, ClientLogoRepo,
    ClientLogoUpsertParams, ContactRepo, HeroBannerRepo, HeroBannerUpsertParams, HomeSectionRepo,
    HomeSectionUpdateParams, MediaMetaParams, MediaRepo, NavLinkRepo, NavLinkUpsertParams,
    NewContactParams, NewMediaParams, PageMetaParams, PageRepo, PageUpsertParams,
    PostUpsertParams, RepoError,
    SectionRepo, SectionUpsertParams, SettingsRepo,
};
use crate::domain::entities::{
    AdminUserRecord, BlogPostRecord, CategoryRecord, ClientLogoRecord, ContactSubmissionRecord,
    HeroBannerRecord, HomeSectionRecord, MediaRecord, NavLinkRecord, PageRecord, SectionRecord,
};
use crate::domain::home::HomeSectionKey;
use crate::domain::types::{CategoryKind, PageTemplate, PostStatus};

pub const PAGE_HOME: &str = "home";

#[derive(Default)]
struct Inner {
    pages: Mutex<Vec<PageRecord>>,
    sections: Mutex<Vec<SectionRecord>>,
    home_sections: Mutex<Vec<HomeSectionRecord>>,
    posts: Mutex<Vec<BlogPostRecord>>,
    categories: Mutex<Vec<CategoryRecord>>,
    nav_links: Mutex<Vec<NavLinkRecord>>,
    logos: Mutex<Vec<ClientLogoRecord>>,
    banners: Mutex<Vec<HeroBannerRecord>>,
    media: Mutex<Vec<MediaRecord>>,
    settings: Mutex<Vec<(String, String)>>,
    contacts: Mutex<Vec<ContactSubmissionRecord>>,
    admins: Mutex<Vec<AdminUserRecord>>,
}

/// Handle over one shared state; every accessor hands out a repo trait
/// object backed by the same data.
#[derive(Clone, Default)]
pub struct FakeStore {
    inner: Arc<Inner>,
}

fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

fn page_from(params: PageUpsertParams, id: Uuid) -> PageRecord {
    PageRecord {
        id,
        slug: params.slug,
        title: params.title,
        meta_description: params.meta_description,
        hero_title: params.hero_title,
        hero_subtitle: params.hero_subtitle,
        hero_label: params.hero_label,
        nav_order: params.nav_order,
        is_visible: params.is_visible,
        template: params.template,
        schema_type: params.schema_type,
        schema_json: params.schema_json,
        faq_json: params.faq_json,
        page_blocks: params.page_blocks,
        updated_at: now(),
    }
}

fn section_from(params: SectionUpsertParams, id: Uuid) -> SectionRecord {
    SectionRecord {
        id,
        page_id: params.page_id,
        kind: params.kind,
        title: params.title,
        description: params.description,
        content_html: params.content_html,
        image_url: params.image_url,
        video_url: params.video_url,
        icon: params.icon,
        icon_type: params.icon_type,
        icon_image_url: params.icon_image_url,
        tag: params.tag,
        sort_order: params.sort_order,
        extra_json: params.extra_json,
    }
}

fn post_from(params: PostUpsertParams, id: Uuid, created_at: OffsetDateTime) -> BlogPostRecord {
    BlogPostRecord {
        id,
        slug: params.slug,
        title: params.title,
        excerpt: params.excerpt,
        content_html: params.content_html,
        featured_image: params.featured_image,
        featured_image_alt: params.featured_image_alt,
        category: params.category,
        tags: params.tags,
        meta_title: params.meta_title,
        meta_description: params.meta_description,
        og_image: params.og_image,
        reading_time: params.reading_time,
        status: params.status,
        is_featured: params.is_featured,
        author: params.author,
        published_at: params.published_at,
        faq_json: params.faq_json,
        created_at,
        updated_at: now(),
    }
}

impl FakeStore {
    /// A store with a representative site: a home page with sections, a
    /// visible and a hidden-capable secondary page, home-section rows for
    /// every key and a handful of posts.
    pub fn seeded() -> Self {
        let store = Self::default();
        let inner = &store.inner;

        let home_id = Uuid::new_v4();
        let services_id = Uuid::new_v4();
        // try_lock always succeeds here: the store is not shared yet.
        {
            let mut pages = inner.pages.try_lock().expect("unshared");
            pages.push(PageRecord {
                id: home_id,
                slug: PAGE_HOME.to_string(),
                title: "Home".to_string(),
                meta_description: "Welcome".to_string(),
                hero_title: "We build".to_string(),
                hero_subtitle: "Digital products".to_string(),
                hero_label: "Studio".to_string(),
                nav_order: 1,
                is_visible: true,
                template: PageTemplate::Default,
                schema_type: "WebPage".to_string(),
                schema_json: "{}".to_string(),
                faq_json: "[]".to_string(),
                page_blocks: "[]".to_string(),
                updated_at: now(),
            });
            pages.push(PageRecord {
                id: services_id,
                slug: "services".to_string(),
                title: "Services".to_string(),
                meta_description: "What we do".to_string(),
                hero_title: "Services".to_string(),
                hero_subtitle: String::new(),
                hero_label: String::new(),
                nav_order: 2,
                is_visible: true,
                template: PageTemplate::Default,
                schema_type: "WebPage".to_string(),
                schema_json: "{}".to_string(),
                faq_json: "[]".to_string(),
                page_blocks: "[]".to_string(),
                updated_at: now(),
            });
        }

        {
            let mut sections = inner.sections.try_lock().expect("unshared");
            for (kind, sort_order, extra) in [
                ("service", 1, "{}"),
                ("service", 2, "{}"),
                (
                    "portfolio",
                    3,
                    r#"{"youtube_url":"https://youtu.be/H48FCzlDBF0","is_featured_home":true}"#,
                ),
                ("portfolio", 4, r#"{"is_featured_home":false}"#),
                ("faq", 5, "{}"),
            ] {
                sections.push(SectionRecord {
                    id: Uuid::new_v4(),
                    page_id: home_id,
                    kind: kind.to_string(),
                    title: format!("{kind} {sort_order}"),
                    description: String::new(),
                    content_html: String::new(),
                    image_url: String::new(),
                    video_url: String::new(),
                    icon: String::new(),
                    icon_type: "emoji".to_string(),
                    icon_image_url: String::new(),
                    tag: String::new(),
                    sort_order,
                    extra_json: extra.to_string(),
                });
            }
        }

        {
            let mut rows = inner.home_sections.try_lock().expect("unshared");
            for (index, key) in HomeSectionKey::ALL.into_iter().enumerate() {
                rows.push(HomeSectionRecord {
                    id: Uuid::new_v4(),
                    section_key: key.as_str().to_string(),
                    label: key.as_str().to_string(),
                    heading: format!("{} heading", key.as_str()),
                    subtitle: String::new(),
                    sort_order: index as i32 + 1,
                    is_visible: true,
                    config_json: "{}".to_string(),
                });
            }
        }

        {
            let mut posts = inner.posts.try_lock().expect("unshared");
            let base = now() - Duration::days(30);
            for day in 0..5 {
                let stamp = base + Duration::days(day);
                posts.push(BlogPostRecord {
                    id: Uuid::new_v4(),
                    slug: format!("post-{day}"),
                    title: format!("Post {day}"),
                    excerpt: "An excerpt".to_string(),
                    content_html: "<p>Body</p>".to_string(),
                    featured_image: String::new(),
                    featured_image_alt: String::new(),
                    category: if day % 2 == 0 { "AI Insights" } else { "Design" }.to_string(),
                    tags: String::new(),
                    meta_title: String::new(),
                    meta_description: String::new(),
                    og_image: String::new(),
                    reading_time: 1,
                    status: PostStatus::Published,
                    is_featured: day == 4,
                    author: "Admin".to_string(),
                    published_at: Some(stamp),
                    faq_json: "[]".to_string(),
                    created_at: stamp,
                    updated_at: stamp,
                });
            }
            posts.push(BlogPostRecord {
                id: Uuid::new_v4(),
                slug: "draft-post".to_string(),
                title: "Draft".to_string(),
                excerpt: String::new(),
                content_html: String::new(),
                featured_image: String::new(),
                featured_image_alt: String::new(),
                category: "Design".to_string(),
                tags: String::new(),
                meta_title: String::new(),
                meta_description: String::new(),
                og_image: String::new(),
                reading_time: 1,
                status: PostStatus::Draft,
                is_featured: false,
                author: "Admin".to_string(),
                published_at: None,
                faq_json: "[]".to_string(),
                created_at: now(),
                updated_at: now(),
            });
        }

        store
    }

    pub fn pages(&self) -> Arc<dyn PageRepo> {
        Arc::new(FakeRepo(Arc::clone(&self.inner)))
    }

    pub fn sections(&self) -> Arc<dyn SectionRepo> {
        Arc::new(FakeRepo(Arc::clone(&self.inner)))
    }

    pub fn home_sections(&self) -> Arc<dyn HomeSectionRepo> {
        Arc::new(FakeRepo(Arc::clone(&self.inner)))
    }

    pub fn posts(&self) -> Arc<dyn BlogPostRepo> {
        Arc::new(FakeRepo(Arc::clone(&self.inner)))
    }

    pub fn categories(&self) -> Arc<dyn CategoryRepo> {
        Arc::new(FakeRepo(Arc::clone(&self.inner)))
    }

    pub fn nav_links(&self) -> Arc<dyn NavLinkRepo> {
        Arc::new(FakeRepo(Arc::clone(&self.inner)))
    }

    pub fn logos(&self) -> Arc<dyn ClientLogoRepo> {
        Arc::new(FakeRepo(Arc::clone(&self.inner)))
    }

    pub fn banners(&self) -> Arc<dyn HeroBannerRepo> {
        Arc::new(FakeRepo(Arc::clone(&self.inner)))
    }

    pub fn media(&self) -> Arc<dyn MediaRepo> {
        Arc::new(FakeRepo(Arc::clone(&self.inner)))
    }

    pub fn settings(&self) -> Arc<dyn SettingsRepo> {
        Arc::new(FakeRepo(Arc::clone(&self.inner)))
    }

    pub fn contacts(&self) -> Arc<dyn ContactRepo> {
        Arc::new(FakeRepo(Arc::clone(&self.inner)))
    }

    pub fn admins(&self) -> Arc<dyn AdminUserRepo> {
        Arc::new(FakeRepo(Arc::clone(&self.inner)))
    }

    pub async fn hide_page(&self, slug: &str) {
        let mut pages = self.inner.pages.lock().await;
        if let Some(page) = pages.iter_mut().find(|p| p.slug == slug) {
            page.is_visible = false;
        }
    }

    pub async fn add_page(
        &self,
        slug: &str,
        template: PageTemplate,
        is_visible: bool,
        page_blocks: &str,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.inner.pages.lock().await.push(PageRecord {
            id,
            slug: slug.to_string(),
            title: slug.to_string(),
            meta_description: String::new(),
            hero_title: String::new(),
            hero_subtitle: String::new(),
            hero_label: String::new(),
            nav_order: 99,
            is_visible,
            template,
            schema_type: "WebPage".to_string(),
            schema_json: "{}".to_string(),
            faq_json: "[]".to_string(),
            page_blocks: page_blocks.to_string(),
            updated_at: now(),
        });
        id
    }

    pub async fn page_id(&self, slug: &str) -> Uuid {
        self.inner
            .pages
            .lock()
            .await
            .iter()
            .find(|p| p.slug == slug)
            .map(|p| p.id)
            .expect("seeded page")
    }

    pub async fn section_ids(&self, page_id: Uuid) -> Vec<Uuid> {
        let mut sections: Vec<SectionRecord> = self
            .inner
            .sections
            .lock()
            .await
            .iter()
            .filter(|s| s.page_id == page_id)
            .cloned()
            .collect();
        sections.sort_by_key(|s| s.sort_order);
        sections.into_iter().map(|s| s.id).collect()
    }
}

struct FakeRepo(Arc<Inner>);

#[async_trait]
impl PageRepo for FakeRepo {
    async fn list_all(&self) -> Result<Vec<PageRecord>, RepoError> {
        let mut pages = self.0.pages.lock().await.clone();
        pages.sort_by_key(|p| p.nav_order);
        Ok(pages)
    }

    async fn list_visible(&self) -> Result<Vec<PageRecord>, RepoError> {
        Ok(PageRepo::list_all(self)
            .await?
            .into_iter()
            .filter(|p| p.is_visible)
            .collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PageRecord>, RepoError> {
        Ok(self
            .0
            .pages
            .lock()
            .await
            .iter()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PageRecord>, RepoError> {
        Ok(self.0.pages.lock().await.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, params: PageUpsertParams) -> Result<PageRecord, RepoError> {
        let mut pages = self.0.pages.lock().await;
        if pages.iter().any(|p| p.slug == params.slug) {
            return Err(RepoError::Duplicate {
                constraint: "pages_slug_key".to_string(),
            });
        }
        let record = page_from(params, Uuid::new_v4());
        pages.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: Uuid, params: PageMetaParams) -> Result<PageRecord, RepoError> {
        let mut pages = self.0.pages.lock().await;
        let slot = pages
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        // Slug and builder blocks are not part of a metadata save.
        slot.title = params.title;
        slot.meta_description = params.meta_description;
        slot.hero_title = params.hero_title;
        slot.hero_subtitle = params.hero_subtitle;
        slot.hero_label = params.hero_label;
        slot.nav_order = params.nav_order;
        slot.is_visible = params.is_visible;
        slot.template = params.template;
        slot.schema_type = params.schema_type;
        slot.schema_json = params.schema_json;
        slot.faq_json = params.faq_json;
        slot.updated_at = now();
        Ok(slot.clone())
    }

    async fn update_blocks(&self, id: Uuid, page_blocks: &str) -> Result<(), RepoError> {
        let mut pages = self.0.pages.lock().await;
        let slot = pages
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        slot.page_blocks = page_blocks.to_string();
        slot.updated_at = now();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut pages = self.0.pages.lock().await;
        let before = pages.len();
        pages.retain(|p| p.id != id);
        if pages.len() == before {
            return Err(RepoError::NotFound);
        }
        self.0.sections.lock().await.retain(|s| s.page_id != id);
        Ok(())
    }

    async fn count(&self) -> Result<i64, RepoError> {
        Ok(self.0.pages.lock().await.len() as i64)
    }
}

#[async_trait]
impl SectionRepo for FakeRepo {
    async fn list_for_page(&self, page_id: Uuid) -> Result<Vec<SectionRecord>, RepoError> {
        let mut sections: Vec<SectionRecord> = self
            .0
            .sections
            .lock()
            .await
            .iter()
            .filter(|s| s.page_id == page_id)
            .cloned()
            .collect();
        sections.sort_by_key(|s| s.sort_order);
        Ok(sections)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SectionRecord>, RepoError> {
        Ok(self
            .0
            .sections
            .lock()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn create(&self, params: SectionUpsertParams) -> Result<SectionRecord, RepoError> {
        let record = section_from(params, Uuid::new_v4());
        self.0.sections.lock().await.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: Uuid,
        params: SectionUpsertParams,
    ) -> Result<SectionRecord, RepoError> {
        let mut sections = self.0.sections.lock().await;
        let slot = sections
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RepoError::NotFound)?;
        *slot = section_from(params, id);
        Ok(slot.clone())
    }

    async fn update_extra(&self, id: Uuid, extra_json: &str) -> Result<(), RepoError> {
        let mut sections = self.0.sections.lock().await;
        let slot = sections
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RepoError::NotFound)?;
        slot.extra_json = extra_json.to_string();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut sections = self.0.sections.lock().await;
        let before = sections.len();
        sections.retain(|s| s.id != id);
        if sections.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn reorder(&self, assignments: &[(Uuid, i32)]) -> Result<(), RepoError> {
        let mut sections = self.0.sections.lock().await;
        for (id, sort_order) in assignments {
            if let Some(slot) = sections.iter_mut().find(|s| s.id == *id) {
                slot.sort_order = *sort_order;
            }
        }
        Ok(())
    }

    async fn create_many(&self, params: Vec<SectionUpsertParams>) -> Result<(), RepoError> {
        let mut sections = self.0.sections.lock().await;
        for param in params {
            sections.push(section_from(param, Uuid::new_v4()));
        }
        Ok(())
    }
}

#[async_trait]
impl HomeSectionRepo for FakeRepo {
    async fn list(&self) -> Result<Vec<HomeSectionRecord>, RepoError> {
        let mut rows = self.0.home_sections.lock().await.clone();
        rows.sort_by_key(|r| r.sort_order);
        Ok(rows)
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<HomeSectionRecord>, RepoError> {
        Ok(self
            .0
            .home_sections
            .lock()
            .await
            .iter()
            .find(|r| r.section_key == key)
            .cloned())
    }

    async fn update(
        &self,
        key: &str,
        params: HomeSectionUpdateParams,
    ) -> Result<HomeSectionRecord, RepoError> {
        let mut rows = self.0.home_sections.lock().await;
        let slot = rows
            .iter_mut()
            .find(|r| r.section_key == key)
            .ok_or(RepoError::NotFound)?;
        slot.label = params.label;
        slot.heading = params.heading;
        slot.subtitle = params.subtitle;
        slot.is_visible = params.is_visible;
        slot.config_json = params.config_json;
        Ok(slot.clone())
    }

    async fn set_visibility(&self, key: &str, visible: bool) -> Result<bool, RepoError> {
        let mut rows = self.0.home_sections.lock().await;
        let slot = rows
            .iter_mut()
            .find(|r| r.section_key == key)
            .ok_or(RepoError::NotFound)?;
        slot.is_visible = visible;
        Ok(slot.is_visible)
    }

    async fn reorder(&self, assignments: &[(Uuid, i32)]) -> Result<(), RepoError> {
        let mut rows = self.0.home_sections.lock().await;
        for (id, sort_order) in assignments {
            if let Some(slot) = rows.iter_mut().find(|r| r.id == *id) {
                slot.sort_order = *sort_order;
            }
        }
        Ok(())
    }
}

fn published(posts: &[BlogPostRecord]) -> Vec<BlogPostRecord> {
    let mut rows: Vec<BlogPostRecord> = posts
        .iter()
        .filter(|p| p.status == PostStatus::Published)
        .cloned()
        .collect();
    rows.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    rows
}

#[async_trait]
impl BlogPostRepo for FakeRepo {
    async fn list_published(
        &self,
        category: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<BlogPostRecord>, RepoError> {
        let rows = published(&self.0.posts.lock().await);
        Ok(rows
            .into_iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count_published(&self, category: Option<&str>) -> Result<i64, RepoError> {
        Ok(published(&self.0.posts.lock().await)
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .count() as i64)
    }

    async fn list_recent_published(&self, limit: i64) -> Result<Vec<BlogPostRecord>, RepoError> {
        self.list_published(None, 0, limit).await
    }

    async fn list_featured_published(
        &self,
        limit: i64,
    ) -> Result<Vec<BlogPostRecord>, RepoError> {
        Ok(published(&self.0.posts.lock().await)
            .into_iter()
            .filter(|p| p.is_featured)
            .take(limit as usize)
            .collect())
    }

    async fn list_published_in_category(
        &self,
        category: &str,
        exclude_slug: &str,
        limit: i64,
    ) -> Result<Vec<BlogPostRecord>, RepoError> {
        Ok(published(&self.0.posts.lock().await)
            .into_iter()
            .filter(|p| p.category == category && p.slug != exclude_slug)
            .take(limit as usize)
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<BlogPostRecord>, RepoError> {
        let mut rows = self.0.posts.lock().await.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn find_published_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<BlogPostRecord>, RepoError> {
        Ok(self
            .0
            .posts
            .lock()
            .await
            .iter()
            .find(|p| p.slug == slug && p.status == PostStatus::Published)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPostRecord>, RepoError> {
        Ok(self.0.posts.lock().await.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, params: PostUpsertParams) -> Result<BlogPostRecord, RepoError> {
        let mut posts = self.0.posts.lock().await;
        if posts.iter().any(|p| p.slug == params.slug) {
            return Err(RepoError::Duplicate {
                constraint: "blog_posts_slug_key".to_string(),
            });
        }
        let record = post_from(params, Uuid::new_v4(), now());
        posts.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: Uuid,
        params: PostUpsertParams,
    ) -> Result<BlogPostRecord, RepoError> {
        let mut posts = self.0.posts.lock().await;
        let slot = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        let created_at = slot.created_at;
        *slot = post_from(params, id, created_at);
        Ok(slot.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.0.posts.lock().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, RepoError> {
        Ok(self.0.posts.lock().await.len() as i64)
    }
}

#[async_trait]
impl CategoryRepo for FakeRepo {
    async fn list(&self, kind: CategoryKind) -> Result<Vec<CategoryRecord>, RepoError> {
        let mut rows: Vec<CategoryRecord> = self
            .0
            .categories
            .lock()
            .await
            .iter()
            .filter(|c| c.kind == kind)
            .cloned()
            .collect();
        rows.sort_by_key(|c| c.sort_order);
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CategoryRecord>, RepoError> {
        Ok(self
            .0
            .categories
            .lock()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn create(&self, params: CategoryUpsertParams) -> Result<CategoryRecord, RepoError> {
        let record = CategoryRecord {
            id: Uuid::new_v4(),
            kind: params.kind,
            name: params.name,
            slug: params.slug,
            description: params.description,
            sort_order: params.sort_order,
        };
        self.0.categories.lock().await.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: Uuid,
        params: CategoryUpsertParams,
    ) -> Result<CategoryRecord, RepoError> {
        let mut rows = self.0.categories.lock().await;
        let slot = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RepoError::NotFound)?;
        slot.kind = params.kind;
        slot.name = params.name;
        slot.slug = params.slug;
        slot.description = params.description;
        slot.sort_order = params.sort_order;
        Ok(slot.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut rows = self.0.categories.lock().await;
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl NavLinkRepo for FakeRepo {
    async fn list(&self) -> Result<Vec<NavLinkRecord>, RepoError> {
        let mut rows = self.0.nav_links.lock().await.clone();
        rows.sort_by_key(|l| l.sort_order);
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<NavLinkRecord>, RepoError> {
        Ok(self
            .0
            .nav_links
            .lock()
            .await
            .iter()
            .find(|l| l.id == id)
            .cloned())
    }

    async fn create(&self, params: NavLinkUpsertParams) -> Result<NavLinkRecord, RepoError> {
        let record = NavLinkRecord {
            id: Uuid::new_v4(),
            label: params.label,
            url: params.url,
            parent_id: params.parent_id,
            sort_order: params.sort_order,
            is_visible: params.is_visible,
            open_new_tab: params.open_new_tab,
        };
        self.0.nav_links.lock().await.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: Uuid,
        params: NavLinkUpsertParams,
    ) -> Result<NavLinkRecord, RepoError> {
        let mut rows = self.0.nav_links.lock().await;
        let slot = rows
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(RepoError::NotFound)?;
        slot.label = params.label;
        slot.url = params.url;
        slot.parent_id = params.parent_id;
        slot.sort_order = params.sort_order;
        slot.is_visible = params.is_visible;
        slot.open_new_tab = params.open_new_tab;
        Ok(slot.clone())
    }

    async fn delete_many(&self, ids: &[Uuid]) -> Result<(), RepoError> {
        self.0
            .nav_links
            .lock()
            .await
            .retain(|l| !ids.contains(&l.id));
        Ok(())
    }
}

#[async_trait]
impl ClientLogoRepo for FakeRepo {
    async fn list(&self) -> Result<Vec<ClientLogoRecord>, RepoError> {
        let mut rows = self.0.logos.lock().await.clone();
        rows.sort_by_key(|l| l.sort_order);
        Ok(rows)
    }

    async fn list_active(&self) -> Result<Vec<ClientLogoRecord>, RepoError> {
        Ok(ClientLogoRepo::list(self)
            .await?
            .into_iter()
            .filter(|l| l.is_active)
            .collect())
    }

    async fn create(
        &self,
        params: ClientLogoUpsertParams,
    ) -> Result<ClientLogoRecord, RepoError> {
        let record = ClientLogoRecord {
            id: Uuid::new_v4(),
            name: params.name,
            image_url: params.image_url,
            website_url: params.website_url,
            sort_order: params.sort_order,
            is_active: params.is_active,
        };
        self.0.logos.lock().await.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: Uuid,
        params: ClientLogoUpsertParams,
    ) -> Result<ClientLogoRecord, RepoError> {
        let mut rows = self.0.logos.lock().await;
        let slot = rows
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(RepoError::NotFound)?;
        slot.name = params.name;
        slot.image_url = params.image_url;
        slot.website_url = params.website_url;
        slot.sort_order = params.sort_order;
        slot.is_active = params.is_active;
        Ok(slot.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut rows = self.0.logos.lock().await;
        let before = rows.len();
        rows.retain(|l| l.id != id);
        if rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl HeroBannerRepo for FakeRepo {
    async fn list_for_page(&self, page_id: Uuid) -> Result<Vec<HeroBannerRecord>, RepoError> {
        let mut rows: Vec<HeroBannerRecord> = self
            .0
            .banners
            .lock()
            .await
            .iter()
            .filter(|b| b.page_id == page_id)
            .cloned()
            .collect();
        rows.sort_by_key(|b| b.sort_order);
        Ok(rows)
    }

    async fn list_active_for_page(
        &self,
        page_id: Uuid,
    ) -> Result<Vec<HeroBannerRecord>, RepoError> {
        Ok(HeroBannerRepo::list_for_page(self, page_id)
            .await?
            .into_iter()
            .filter(|b| b.is_active)
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<HeroBannerRecord>, RepoError> {
        Ok(self
            .0
            .banners
            .lock()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn create(
        &self,
        params: HeroBannerUpsertParams,
    ) -> Result<HeroBannerRecord, RepoError> {
        let record = HeroBannerRecord {
            id: Uuid::new_v4(),
            page_id: params.page_id,
            image_url: params.image_url,
            overlay_title: params.overlay_title,
            overlay_subtitle: params.overlay_subtitle,
            overlay_position: params.overlay_position,
            sort_order: params.sort_order,
            is_active: params.is_active,
            alt_text: params.alt_text,
            seo_title: params.seo_title,
        };
        self.0.banners.lock().await.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: Uuid,
        params: HeroBannerUpsertParams,
    ) -> Result<HeroBannerRecord, RepoError> {
        let mut rows = self.0.banners.lock().await;
        let slot = rows
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(RepoError::NotFound)?;
        slot.page_id = params.page_id;
        slot.image_url = params.image_url;
        slot.overlay_title = params.overlay_title;
        slot.overlay_subtitle = params.overlay_subtitle;
        slot.overlay_position = params.overlay_position;
        slot.sort_order = params.sort_order;
        slot.is_active = params.is_active;
        slot.alt_text = params.alt_text;
        slot.seo_title = params.seo_title;
        Ok(slot.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut rows = self.0.banners.lock().await;
        let before = rows.len();
        rows.retain(|b| b.id != id);
        if rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn reorder(&self, assignments: &[(Uuid, i32)]) -> Result<(), RepoError> {
        let mut rows = self.0.banners.lock().await;
        for (id, sort_order) in assignments {
            if let Some(slot) = rows.iter_mut().find(|b| b.id == *id) {
                slot.sort_order = *sort_order;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl MediaRepo for FakeRepo {
    async fn list(&self) -> Result<Vec<MediaRecord>, RepoError> {
        let mut rows = self.0.media.lock().await.clone();
        rows.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MediaRecord>, RepoError> {
        Ok(self.0.media.lock().await.iter().find(|m| m.id == id).cloned())
    }

    async fn insert(&self, params: NewMediaParams) -> Result<MediaRecord, RepoError> {
        let record = MediaRecord {
            id: Uuid::new_v4(),
            filename: params.filename,
            original_name: params.original_name,
            mime_type: params.mime_type,
            size_bytes: params.size_bytes,
            alt_text: params.alt_text,
            seo_title: String::new(),
            seo_caption: String::new(),
            uploaded_at: now(),
        };
        self.0.media.lock().await.push(record.clone());
        Ok(record)
    }

    async fn update_meta(&self, id: Uuid, params: MediaMetaParams) -> Result<(), RepoError> {
        let mut rows = self.0.media.lock().await;
        let slot = rows
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(RepoError::NotFound)?;
        slot.alt_text = params.alt_text;
        slot.seo_title = params.seo_title;
        slot.seo_caption = params.seo_caption;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut rows = self.0.media.lock().await;
        let before = rows.len();
        rows.retain(|m| m.id != id);
        if rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, RepoError> {
        Ok(self.0.media.lock().await.len() as i64)
    }
}

#[async_trait]
impl SettingsRepo for FakeRepo {
    async fn load_all(&self) -> Result<Vec<(String, String)>, RepoError> {
        Ok(self.0.settings.lock().await.clone())
    }

    async fn upsert_many(&self, entries: &[(String, String)]) -> Result<(), RepoError> {
        let mut stored = self.0.settings.lock().await;
        for (key, value) in entries {
            if let Some(slot) = stored.iter_mut().find(|(k, _)| k == key) {
                slot.1 = value.clone();
            } else {
                stored.push((key.clone(), value.clone()));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ContactRepo for FakeRepo {
    async fn insert(
        &self,
        params: NewContactParams,
    ) -> Result<ContactSubmissionRecord, RepoError> {
        let record = ContactSubmissionRecord {
            id: Uuid::new_v4(),
            name: params.name,
            email: params.email,
            company: params.company,
            message: params.message,
            status: "new".to_string(),
            created_at: now(),
        };
        self.0.contacts.lock().await.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<ContactSubmissionRecord>, RepoError> {
        let mut rows = self.0.contacts.lock().await.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn update_status(&self, id: Uuid, status: &str) -> Result<(), RepoError> {
        let mut rows = self.0.contacts.lock().await;
        let slot = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RepoError::NotFound)?;
        slot.status = status.to_string();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut rows = self.0.contacts.lock().await;
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn count_with_status(&self, status: &str) -> Result<i64, RepoError> {
        Ok(self
            .0
            .contacts
            .lock()
            .await
            .iter()
            .filter(|c| c.status == status)
            .count() as i64)
    }
}

#[async_trait]
impl AdminUserRepo for FakeRepo {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminUserRecord>, RepoError> {
        Ok(self
            .0
            .admins
            .lock()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create(&self, username: &str, password_hash: &str) -> Result<(), RepoError> {
        let mut rows = self.0.admins.lock().await;
        if rows.iter().any(|u| u.username == username) {
            return Err(RepoError::Duplicate {
                constraint: "admin_users_username_key".to_string(),
            });
        }
        rows.push(AdminUserRecord {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        });
        Ok(())
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), RepoError> {
        let mut rows = self.0.admins.lock().await;
        let slot = rows
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(RepoError::NotFound)?;
        slot.password_hash = password_hash.to_string();
        Ok(())
    }
}
