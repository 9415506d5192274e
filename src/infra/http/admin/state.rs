use std::sync::Arc;

use crate::application::{
    admin::{
        auth::AuthService, banners::BannerAdminService, categories::CategoryAdminService,
        dashboard::DashboardService, home_sections::HomeSectionAdminService,
        media::MediaAdminService, navigation::NavigationAdminService, pages::PageAdminService,
        posts::PostAdminService, sections::SectionAdminService,
    },
    chrome::ChromeService,
    repos::ContactRepo,
    resolver::PageResolver,
    settings_cache::SettingsCache,
};
use crate::infra::{
    ai::AiClient, db::PostgresRepositories, http::session::SessionSigner, oembed::OembedClient,
    uploads::UploadStorage,
};

#[derive(Clone)]
pub struct AdminState {
    pub sessions: Arc<SessionSigner>,
    pub auth: Arc<AuthService>,
    pub chrome: Arc<ChromeService>,
    pub dashboard: Arc<DashboardService>,
    pub pages: Arc<PageAdminService>,
    pub resolver: Arc<PageResolver>,
    pub sections: Arc<SectionAdminService>,
    pub home_sections: Arc<HomeSectionAdminService>,
    pub posts: Arc<PostAdminService>,
    pub categories: Arc<CategoryAdminService>,
    pub navigation: Arc<NavigationAdminService>,
    pub media: Arc<MediaAdminService>,
    pub banners: Arc<BannerAdminService>,
    pub settings: Arc<SettingsCache>,
    pub contacts: Arc<dyn ContactRepo>,
    pub ai: Option<Arc<AiClient>>,
    pub oembed: Arc<OembedClient>,
    pub upload_storage: Arc<UploadStorage>,
    pub db: Arc<PostgresRepositories>,
}
