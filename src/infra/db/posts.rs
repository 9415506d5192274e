use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::application::repos::{BlogPostRepo, PostUpsertParams, RepoError};
use crate::domain::entities::BlogPostRecord;
use crate::domain::types::PostStatus;

use super::util::map_sqlx_error;

const POST_COLUMNS: &str = "id, slug, title, excerpt, content_html, featured_image, \
     featured_image_alt, category, tags, meta_title, meta_description, og_image, reading_time, \
     status, is_featured, author, published_at, faq_json, created_at, updated_at";

const PUBLISHED: &str = "status = 'published'::post_status AND published_at IS NOT NULL";

#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    slug: String,
    title: String,
    excerpt: String,
    content_html: String,
    featured_image: String,
    featured_image_alt: String,
    category: String,
    tags: String,
    meta_title: String,
    meta_description: String,
    og_image: String,
    reading_time: i32,
    status: PostStatus,
    is_featured: bool,
    author: String,
    published_at: Option<OffsetDateTime>,
    faq_json: String,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl From<PostRow> for BlogPostRecord {
    fn from(row: PostRow) -> Self {
        BlogPostRecord {
            id: row.id,
            slug: row.slug,
            title: row.title,
            excerpt: row.excerpt,
            content_html: row.content_html,
            featured_image: row.featured_image,
            featured_image_alt: row.featured_image_alt,
            category: row.category,
            tags: row.tags,
            meta_title: row.meta_title,
            meta_description: row.meta_description,
            og_image: row.og_image,
            reading_time: row.reading_time,
            status: row.status,
            is_featured: row.is_featured,
            author: row.author,
            published_at: row.published_at,
            faq_json: row.faq_json,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub struct PostgresBlogPostRepo {
    pool: Arc<PgPool>,
}

impl PostgresBlogPostRepo {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn fetch_many(&self, sql: String) -> Result<Vec<BlogPostRecord>, RepoError> {
        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

fn bind_params<'q>(
    query: sqlx::query::QueryAs<'q, sqlx::Postgres, PostRow, sqlx::postgres::PgArguments>,
    params: &'q PostUpsertParams,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, PostRow, sqlx::postgres::PgArguments> {
    query
        .bind(&params.slug)
        .bind(&params.title)
        .bind(&params.excerpt)
        .bind(&params.content_html)
        .bind(&params.featured_image)
        .bind(&params.featured_image_alt)
        .bind(&params.category)
        .bind(&params.tags)
        .bind(&params.meta_title)
        .bind(&params.meta_description)
        .bind(&params.og_image)
        .bind(params.reading_time)
        .bind(params.status)
        .bind(params.is_featured)
        .bind(&params.author)
        .bind(params.published_at)
        .bind(&params.faq_json)
}

#[async_trait]
impl BlogPostRepo for PostgresBlogPostRepo {
    async fn list_published(
        &self,
        category: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<BlogPostRecord>, RepoError> {
        let rows = match category {
            Some(category) => {
                sqlx::query_as::<_, PostRow>(&format!(
                    "SELECT {POST_COLUMNS} FROM blog_posts WHERE {PUBLISHED} \
                     AND category = $1 ORDER BY published_at DESC OFFSET $2 LIMIT $3"
                ))
                .bind(category)
                .bind(offset)
                .bind(limit)
                .fetch_all(self.pool.as_ref())
                .await
            }
            None => {
                sqlx::query_as::<_, PostRow>(&format!(
                    "SELECT {POST_COLUMNS} FROM blog_posts WHERE {PUBLISHED} \
                     ORDER BY published_at DESC OFFSET $1 LIMIT $2"
                ))
                .bind(offset)
                .bind(limit)
                .fetch_all(self.pool.as_ref())
                .await
            }
        }
        .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count_published(&self, category: Option<&str>) -> Result<i64, RepoError> {
        let count: (i64,) = match category {
            Some(category) => {
                sqlx::query_as(&format!(
                    "SELECT COUNT(*) FROM blog_posts WHERE {PUBLISHED} AND category = $1"
                ))
                .bind(category)
                .fetch_one(self.pool.as_ref())
                .await
            }
            None => {
                sqlx::query_as(&format!(
                    "SELECT COUNT(*) FROM blog_posts WHERE {PUBLISHED}"
                ))
                .fetch_one(self.pool.as_ref())
                .await
            }
        }
        .map_err(map_sqlx_error)?;
        Ok(count.0)
    }

    async fn list_recent_published(&self, limit: i64) -> Result<Vec<BlogPostRecord>, RepoError> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM blog_posts WHERE {PUBLISHED} \
             ORDER BY published_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_featured_published(
        &self,
        limit: i64,
    ) -> Result<Vec<BlogPostRecord>, RepoError> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM blog_posts WHERE {PUBLISHED} AND is_featured \
             ORDER BY published_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_published_in_category(
        &self,
        category: &str,
        exclude_slug: &str,
        limit: i64,
    ) -> Result<Vec<BlogPostRecord>, RepoError> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM blog_posts WHERE {PUBLISHED} AND category = $1 \
             AND slug <> $2 ORDER BY published_at DESC LIMIT $3"
        ))
        .bind(category)
        .bind(exclude_slug)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_all(&self) -> Result<Vec<BlogPostRecord>, RepoError> {
        self.fetch_many(format!(
            "SELECT {POST_COLUMNS} FROM blog_posts ORDER BY created_at DESC"
        ))
        .await
    }

    async fn find_published_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<BlogPostRecord>, RepoError> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM blog_posts WHERE slug = $1 AND {PUBLISHED}"
        ))
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.map(Into::into))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPostRecord>, RepoError> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM blog_posts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.map(Into::into))
    }

    async fn create(&self, params: PostUpsertParams) -> Result<BlogPostRecord, RepoError> {
        let sql = format!(
            "INSERT INTO blog_posts (slug, title, excerpt, content_html, featured_image, \
             featured_image_alt, category, tags, meta_title, meta_description, og_image, \
             reading_time, status, is_featured, author, published_at, faq_json) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             RETURNING {POST_COLUMNS}"
        );
        let row = bind_params(sqlx::query_as::<_, PostRow>(&sql), &params)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.into())
    }

    async fn update(
        &self,
        id: Uuid,
        params: PostUpsertParams,
    ) -> Result<BlogPostRecord, RepoError> {
        let sql = format!(
            "UPDATE blog_posts SET slug = $1, title = $2, excerpt = $3, content_html = $4, \
             featured_image = $5, featured_image_alt = $6, category = $7, tags = $8, \
             meta_title = $9, meta_description = $10, og_image = $11, reading_time = $12, \
             status = $13, is_featured = $14, author = $15, published_at = $16, faq_json = $17, \
             updated_at = now() WHERE id = $18 RETURNING {POST_COLUMNS}"
        );
        let row = bind_params(sqlx::query_as::<_, PostRow>(&sql), &params)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        row.map(Into::into).ok_or(RepoError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, RepoError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM blog_posts")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        Ok(count.0)
    }
}
