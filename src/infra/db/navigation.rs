use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use uuid::Uuid;

use crate::application::repos::{
    ClientLogoRepo, ClientLogoUpsertParams, NavLinkRepo, NavLinkUpsertParams, RepoError,
};
use crate::domain::entities::{ClientLogoRecord, NavLinkRecord};

use super::util::map_sqlx_error;

const NAV_COLUMNS: &str = "id, label, url, parent_id, sort_order, is_visible, open_new_tab";
const LOGO_COLUMNS: &str = "id, name, image_url, website_url, sort_order, is_active";

#[derive(sqlx::FromRow)]
struct NavLinkRow {
    id: Uuid,
    label: String,
    url: String,
    parent_id: Option<Uuid>,
    sort_order: i32,
    is_visible: bool,
    open_new_tab: bool,
}

impl From<NavLinkRow> for NavLinkRecord {
    fn from(row: NavLinkRow) -> Self {
        NavLinkRecord {
            id: row.id,
            label: row.label,
            url: row.url,
            parent_id: row.parent_id,
            sort_order: row.sort_order,
            is_visible: row.is_visible,
            open_new_tab: row.open_new_tab,
        }
    }
}

pub struct PostgresNavLinkRepo {
    pool: Arc<PgPool>,
}

impl PostgresNavLinkRepo {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NavLinkRepo for PostgresNavLinkRepo {
    async fn list(&self) -> Result<Vec<NavLinkRecord>, RepoError> {
        let rows = sqlx::query_as::<_, NavLinkRow>(&format!(
            "SELECT {NAV_COLUMNS} FROM nav_links ORDER BY sort_order, label"
        ))
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<NavLinkRecord>, RepoError> {
        let row = sqlx::query_as::<_, NavLinkRow>(&format!(
            "SELECT {NAV_COLUMNS} FROM nav_links WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.map(Into::into))
    }

    async fn create(&self, params: NavLinkUpsertParams) -> Result<NavLinkRecord, RepoError> {
        let row = sqlx::query_as::<_, NavLinkRow>(&format!(
            "INSERT INTO nav_links (label, url, parent_id, sort_order, is_visible, open_new_tab) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {NAV_COLUMNS}"
        ))
        .bind(&params.label)
        .bind(&params.url)
        .bind(params.parent_id)
        .bind(params.sort_order)
        .bind(params.is_visible)
        .bind(params.open_new_tab)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.into())
    }

    async fn update(
        &self,
        id: Uuid,
        params: NavLinkUpsertParams,
    ) -> Result<NavLinkRecord, RepoError> {
        let row = sqlx::query_as::<_, NavLinkRow>(&format!(
            "UPDATE nav_links SET label = $2, url = $3, parent_id = $4, sort_order = $5, \
             is_visible = $6, open_new_tab = $7 WHERE id = $1 RETURNING {NAV_COLUMNS}"
        ))
        .bind(id)
        .bind(&params.label)
        .bind(&params.url)
        .bind(params.parent_id)
        .bind(params.sort_order)
        .bind(params.is_visible)
        .bind(params.open_new_tab)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        row.map(Into::into).ok_or(RepoError::NotFound)
    }

    async fn delete_many(&self, ids: &[Uuid]) -> Result<(), RepoError> {
        sqlx::query("DELETE FROM nav_links WHERE id = ANY($1)")
            .bind(ids)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct ClientLogoRow {
    id: Uuid,
    name: String,
    image_url: String,
    website_url: String,
    sort_order: i32,
    is_active: bool,
}

impl From<ClientLogoRow> for ClientLogoRecord {
    fn from(row: ClientLogoRow) -> Self {
        ClientLogoRecord {
            id: row.id,
            name: row.name,
            image_url: row.image_url,
            website_url: row.website_url,
            sort_order: row.sort_order,
            is_active: row.is_active,
        }
    }
}

pub struct PostgresClientLogoRepo {
    pool: Arc<PgPool>,
}

impl PostgresClientLogoRepo {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientLogoRepo for PostgresClientLogoRepo {
    async fn list(&self) -> Result<Vec<ClientLogoRecord>, RepoError> {
        let rows = sqlx::query_as::<_, ClientLogoRow>(&format!(
            "SELECT {LOGO_COLUMNS} FROM client_logos ORDER BY sort_order, name"
        ))
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_active(&self) -> Result<Vec<ClientLogoRecord>, RepoError> {
        let rows = sqlx::query_as::<_, ClientLogoRow>(&format!(
            "SELECT {LOGO_COLUMNS} FROM client_logos WHERE is_active ORDER BY sort_order, name"
        ))
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(
        &self,
        params: ClientLogoUpsertParams,
    ) -> Result<ClientLogoRecord, RepoError> {
        let row = sqlx::query_as::<_, ClientLogoRow>(&format!(
            "INSERT INTO client_logos (name, image_url, website_url, sort_order, is_active) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {LOGO_COLUMNS}"
        ))
        .bind(&params.name)
        .bind(&params.image_url)
        .bind(&params.website_url)
        .bind(params.sort_order)
        .bind(params.is_active)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        Ok(row.into())
    }

    async fn update(
        &self,
        id: Uuid,
        params: ClientLogoUpsertParams,
    ) -> Result<ClientLogoRecord, RepoError> {
        let row = sqlx::query_as::<_, ClientLogoRow>(&format!(
            "UPDATE client_logos SET name = $2, image_url = $3, website_url = $4, \
             sort_order = $5, is_active = $6 WHERE id = $1 RETURNING {LOGO_COLUMNS}"
        ))
        .bind(id)
        .bind(&params.name)
        .bind(&params.image_url)
        .bind(&params.website_url)
        .bind(params.sort_order)
        .bind(params.is_active)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;
        row.map(Into::into).ok_or(RepoError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM client_logos WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
