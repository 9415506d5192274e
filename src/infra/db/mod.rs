//! Postgres-backed repository implementations.

mod admin_users;
mod banners;
mod categories;
mod contact;
mod home_sections;
mod media;
mod navigation;
mod pages;
mod posts;
mod sections;
mod settings;
mod util;

pub use admin_users::PostgresAdminUserRepo;
pub use banners::PostgresHeroBannerRepo;
pub use categories::PostgresCategoryRepo;
pub use contact::PostgresContactRepo;
pub use home_sections::PostgresHomeSectionRepo;
pub use media::PostgresMediaRepo;
pub use navigation::{PostgresClientLogoRepo, PostgresNavLinkRepo};
pub use pages::PostgresPageRepo;
pub use posts::PostgresBlogPostRepo;
pub use sections::PostgresSectionRepo;
pub use settings::PostgresSettingsRepo;
pub use util::map_sqlx_error;

use std::sync::Arc;

use sqlx::{
    postgres::{PgPool, PgPoolOptions},
    query,
};

/// Shared pool handle the repository adapters are cloned from.
#[derive(Clone)]
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn connect(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
    }

    pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        query("SELECT 1").execute(self.pool()).await.map(|_| ())
    }

    pub fn pages(&self) -> PostgresPageRepo {
        PostgresPageRepo::new(Arc::clone(&self.pool))
    }

    pub fn sections(&self) -> PostgresSectionRepo {
        PostgresSectionRepo::new(Arc::clone(&self.pool))
    }

    pub fn home_sections(&self) -> PostgresHomeSectionRepo {
        PostgresHomeSectionRepo::new(Arc::clone(&self.pool))
    }

    pub fn posts(&self) -> PostgresBlogPostRepo {
        PostgresBlogPostRepo::new(Arc::clone(&self.pool))
    }

    pub fn categories(&self) -> PostgresCategoryRepo {
        PostgresCategoryRepo::new(Arc::clone(&self.pool))
    }

    pub fn nav_links(&self) -> PostgresNavLinkRepo {
        PostgresNavLinkRepo::new(Arc::clone(&self.pool))
    }

    pub fn logos(&self) -> PostgresClientLogoRepo {
        PostgresClientLogoRepo::new(Arc::clone(&self.pool))
    }

    pub fn banners(&self) -> PostgresHeroBannerRepo {
        PostgresHeroBannerRepo::new(Arc::clone(&self.pool))
    }

    pub fn media(&self) -> PostgresMediaRepo {
        PostgresMediaRepo::new(Arc::clone(&self.pool))
    }

    pub fn settings(&self) -> PostgresSettingsRepo {
        PostgresSettingsRepo::new(Arc::clone(&self.pool))
    }

    pub fn contacts(&self) -> PostgresContactRepo {
        PostgresContactRepo::new(Arc::clone(&self.pool))
    }

    pub fn admin_users(&self) -> PostgresAdminUserRepo {
        PostgresAdminUserRepo::new(Arc::clone(&self.pool))
    }
}
