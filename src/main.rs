use std::{process, sync::Arc};

use tokio::try_join;
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;
use vetrina::{
    application::{
        admin::{
            auth::AuthService, banners::BannerAdminService, categories::CategoryAdminService,
            dashboard::DashboardService, home_sections::HomeSectionAdminService,
            media::MediaAdminService, navigation::NavigationAdminService, pages::PageAdminService,
            posts::PostAdminService, sections::SectionAdminService,
        },
        blog::BlogService,
        chrome::ChromeService,
        contact::{ContactNotifier, ContactService},
        error::AppError,
        home::HomeService,
        repos::{
            AdminUserRepo, BlogPostRepo, CategoryRepo, ClientLogoRepo, ContactRepo,
            HeroBannerRepo, HomeSectionRepo, MediaRepo, NavLinkRepo, PageRepo, SectionRepo,
            SettingsRepo,
        },
        resolver::PageResolver,
        settings_cache::SettingsCache,
        sitemap::SitemapService,
    },
    config,
    infra::{
        ai::AiClient,
        db::PostgresRepositories,
        email::SmtpContactNotifier,
        error::InfraError,
        http::{self, AdminState, HttpState, SessionSigner},
        oembed::OembedClient,
        telemetry,
        uploads::UploadStorage,
    },
};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
        config::Command::CreateAdmin(args) => run_create_admin(settings, args).await,
    }
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let repositories = init_repositories(&settings).await?;
    let (http_state, admin_state) = build_application_context(repositories, &settings)?;
    serve_http(&settings, http_state, admin_state).await
}

async fn run_create_admin(
    settings: config::Settings,
    args: config::CreateAdminArgs,
) -> Result<(), AppError> {
    let repositories = init_repositories(&settings).await?;
    let admins: Arc<dyn AdminUserRepo> = Arc::new(repositories.admin_users());
    AuthService::new(admins)
        .create_admin(&args.username, &args.password)
        .await?;
    info!(username = %args.username, "administrator account created");
    Ok(())
}

async fn init_repositories(
    settings: &config::Settings,
) -> Result<Arc<PostgresRepositories>, AppError> {
    let database_url = settings
        .database
        .url
        .as_ref()
        .ok_or_else(|| InfraError::configuration("database url is not configured"))
        .map_err(AppError::from)?;

    let pool = PostgresRepositories::connect(database_url, settings.database.max_connections.get())
        .await
        .map_err(|err| AppError::from(InfraError::database(err.to_string())))?;

    PostgresRepositories::run_migrations(&pool)
        .await
        .map_err(|err| AppError::from(InfraError::database(err.to_string())))?;

    Ok(Arc::new(PostgresRepositories::new(pool)))
}

fn build_application_context(
    repositories: Arc<PostgresRepositories>,
    settings: &config::Settings,
) -> Result<(HttpState, AdminState), AppError> {
    let pages_repo: Arc<dyn PageRepo> = Arc::new(repositories.pages());
    let sections_repo: Arc<dyn SectionRepo> = Arc::new(repositories.sections());
    let home_sections_repo: Arc<dyn HomeSectionRepo> = Arc::new(repositories.home_sections());
    let posts_repo: Arc<dyn BlogPostRepo> = Arc::new(repositories.posts());
    let categories_repo: Arc<dyn CategoryRepo> = Arc::new(repositories.categories());
    let nav_links_repo: Arc<dyn NavLinkRepo> = Arc::new(repositories.nav_links());
    let logos_repo: Arc<dyn ClientLogoRepo> = Arc::new(repositories.logos());
    let banners_repo: Arc<dyn HeroBannerRepo> = Arc::new(repositories.banners());
    let media_repo: Arc<dyn MediaRepo> = Arc::new(repositories.media());
    let settings_repo: Arc<dyn SettingsRepo> = Arc::new(repositories.settings());
    let contacts_repo: Arc<dyn ContactRepo> = Arc::new(repositories.contacts());
    let admins_repo: Arc<dyn AdminUserRepo> = Arc::new(repositories.admin_users());

    let upload_storage = Arc::new(
        UploadStorage::new(settings.uploads.directory.clone())
            .map_err(|err| AppError::from(InfraError::Io(err)))?,
    );

    let settings_cache = Arc::new(SettingsCache::new(settings_repo));
    let chrome = Arc::new(ChromeService::new(
        nav_links_repo.clone(),
        logos_repo.clone(),
        settings_cache.clone(),
    ));
    let resolver = Arc::new(PageResolver::new(
        pages_repo.clone(),
        sections_repo.clone(),
        posts_repo.clone(),
        banners_repo.clone(),
    ));
    let home = Arc::new(HomeService::new(
        pages_repo.clone(),
        sections_repo.clone(),
        home_sections_repo.clone(),
        posts_repo.clone(),
        logos_repo.clone(),
    ));
    let blog = Arc::new(BlogService::new(posts_repo.clone(), categories_repo.clone()));
    let sitemap = Arc::new(SitemapService::new(pages_repo.clone(), posts_repo.clone()));

    let notifier: Option<Arc<dyn ContactNotifier>> = match settings.email.as_ref() {
        Some(email) => Some(Arc::new(
            SmtpContactNotifier::new(email)
                .map_err(|err| AppError::from(InfraError::upstream("smtp", err.to_string())))?,
        )),
        None => None,
    };
    let contact = Arc::new(ContactService::new(contacts_repo.clone(), notifier));

    let ai = match settings.ai.as_ref() {
        Some(ai_settings) => Some(Arc::new(AiClient::new(ai_settings)?)),
        None => None,
    };
    let oembed = Arc::new(OembedClient::new()?);

    let http_state = HttpState {
        home,
        resolver: resolver.clone(),
        blog,
        chrome: chrome.clone(),
        sitemap,
        contact,
        db: repositories.clone(),
        upload_storage: upload_storage.clone(),
        base_url: settings.site.base_url.clone(),
    };

    let admin_state = AdminState {
        sessions: Arc::new(SessionSigner::new(
            settings.site.session_secret.clone(),
            settings.site.session_ttl_seconds,
        )),
        auth: Arc::new(AuthService::new(admins_repo)),
        chrome,
        dashboard: Arc::new(DashboardService::new(
            pages_repo.clone(),
            posts_repo.clone(),
            media_repo.clone(),
            contacts_repo.clone(),
        )),
        pages: Arc::new(PageAdminService::new(
            pages_repo.clone(),
            sections_repo.clone(),
        )),
        resolver,
        sections: Arc::new(SectionAdminService::new(sections_repo)),
        home_sections: Arc::new(HomeSectionAdminService::new(home_sections_repo)),
        posts: Arc::new(PostAdminService::new(posts_repo)),
        categories: Arc::new(CategoryAdminService::new(categories_repo)),
        navigation: Arc::new(NavigationAdminService::new(nav_links_repo, logos_repo)),
        media: Arc::new(MediaAdminService::new(media_repo)),
        banners: Arc::new(BannerAdminService::new(banners_repo)),
        settings: settings_cache,
        contacts: contacts_repo,
        ai,
        oembed,
        upload_storage,
        db: repositories,
    };

    Ok((http_state, admin_state))
}

async fn serve_http(
    settings: &config::Settings,
    http_state: HttpState,
    admin_state: AdminState,
) -> Result<(), AppError> {
    let public_router = http::build_router(http_state);
    let upload_body_limit = settings.uploads.max_request_bytes.get() as usize;
    let admin_router = http::build_admin_router(admin_state, upload_body_limit);

    let public_listener = tokio::net::TcpListener::bind(settings.server.public_addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;
    let admin_listener = tokio::net::TcpListener::bind(settings.server.admin_addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    info!(
        public = %settings.server.public_addr,
        admin = %settings.server.admin_addr,
        "listening"
    );

    let public_server = axum::serve(public_listener, public_router.into_make_service());
    let admin_server = axum::serve(admin_listener, admin_router.into_make_service());

    try_join!(public_server, admin_server)
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))?;

    Ok(())
}
