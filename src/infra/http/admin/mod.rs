mod ai;
mod auth;
mod banners;
mod categories;
mod contacts;
mod dashboard;
mod home;
mod media;
mod navigation;
mod pages;
mod posts;
mod sections;
mod settings;
mod shared;
mod state;

pub use state::AdminState;

use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    middleware,
    response::Response,
    routing::{get, post},
};

use super::{
    db_health_response,
    middleware::{log_responses, set_request_context},
};

pub fn build_admin_router(state: AdminState, upload_body_limit: usize) -> Router {
    let protected = Router::new()
        .route("/", get(dashboard::admin_dashboard))
        .route("/password", post(auth::change_password))
        .route("/pages", get(pages::admin_pages))
        .route("/pages/create", post(pages::admin_page_create))
        .route("/pages/new", get(pages::admin_page_new))
        .route(
            "/pages/{id}/edit",
            get(pages::admin_page_edit).post(pages::admin_page_update),
        )
        .route("/pages/{id}/delete", post(pages::admin_page_delete))
        .route("/pages/{id}/duplicate", post(pages::admin_page_duplicate))
        .route(
            "/pages/{id}/builder",
            get(pages::admin_page_builder).post(pages::admin_page_save_blocks),
        )
        .route("/pages/{id}/preview", get(pages::admin_page_preview))
        .route(
            "/pages/{id}/sections/create",
            post(sections::admin_section_create),
        )
        .route(
            "/sections/{id}/edit",
            post(sections::admin_section_update),
        )
        .route(
            "/sections/{id}/delete",
            post(sections::admin_section_delete),
        )
        .route(
            "/sections/{id}/feature",
            post(sections::admin_section_feature),
        )
        .route("/sections/reorder", post(sections::admin_sections_reorder))
        .route("/home", get(home::admin_home_sections))
        .route("/home/reorder", post(home::admin_home_reorder))
        .route("/home/{key}", post(home::admin_home_update))
        .route("/home/{key}/toggle", post(home::admin_home_toggle))
        .route("/posts", get(posts::admin_posts))
        .route("/posts/new", get(posts::admin_post_new))
        .route("/posts/create", post(posts::admin_post_create))
        .route(
            "/posts/{id}/edit",
            get(posts::admin_post_edit).post(posts::admin_post_update),
        )
        .route("/posts/{id}/delete", post(posts::admin_post_delete))
        .route("/categories", get(categories::admin_categories))
        .route(
            "/categories/create",
            post(categories::admin_category_create),
        )
        .route(
            "/categories/{id}/edit",
            post(categories::admin_category_update),
        )
        .route(
            "/categories/{id}/delete",
            post(categories::admin_category_delete),
        )
        .route("/navigation", get(navigation::admin_navigation))
        .route(
            "/navigation/create",
            post(navigation::admin_nav_link_create),
        )
        .route(
            "/navigation/{id}/edit",
            post(navigation::admin_nav_link_update),
        )
        .route(
            "/navigation/{id}/delete",
            post(navigation::admin_nav_link_delete),
        )
        .route("/logos/create", post(navigation::admin_logo_create))
        .route("/logos/{id}/edit", post(navigation::admin_logo_update))
        .route("/logos/{id}/delete", post(navigation::admin_logo_delete))
        .route("/media", get(media::admin_media))
        .route(
            "/media/upload",
            post(media::admin_media_upload).layer(DefaultBodyLimit::max(upload_body_limit)),
        )
        .route("/media/{id}/meta", post(media::admin_media_meta))
        .route("/media/{id}/delete", post(media::admin_media_delete))
        .route("/pages/{id}/banners", get(banners::admin_banners))
        .route("/banners/create", post(banners::admin_banner_create))
        .route("/banners/{id}/edit", post(banners::admin_banner_update))
        .route("/banners/{id}/delete", post(banners::admin_banner_delete))
        .route("/banners/reorder", post(banners::admin_banners_reorder))
        .route(
            "/settings",
            get(settings::admin_settings).post(settings::admin_settings_update),
        )
        .route(
            "/settings/branding",
            post(settings::admin_branding_upload)
                .layer(DefaultBodyLimit::max(upload_body_limit)),
        )
        .route("/contacts", get(contacts::admin_contacts))
        .route(
            "/contacts/{id}/status",
            post(contacts::admin_contact_status),
        )
        .route(
            "/contacts/{id}/delete",
            post(contacts::admin_contact_delete),
        )
        .route("/ai/generate", post(ai::admin_ai_generate))
        .route("/ai/video-info", post(ai::admin_video_info))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_session,
        ));

    Router::new()
        .route(
            "/login",
            get(auth::login_form).post(auth::login_submit),
        )
        .route("/logout", post(auth::logout))
        .route("/_health/db", get(admin_health))
        .merge(protected)
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

async fn admin_health(State(state): State<AdminState>) -> Response {
    db_health_response(state.db.health_check().await)
}
