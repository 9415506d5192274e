use std::{io::ErrorKind, sync::Arc};

use axum::{
    Router,
    body::Body,
    extract::{Path, Query, State},
    http::{
        HeaderValue, StatusCode,
        header::{CACHE_CONTROL, CONTENT_LENGTH, CONTENT_TYPE},
    },
    middleware,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::error;

use crate::{
    application::{
        blog::BlogService,
        chrome::ChromeService,
        contact::{ContactForm, ContactService},
        error::HttpError,
        home::HomeService,
        resolver::{PageResolution, PageResolver},
        sitemap::SitemapService,
    },
    domain::{sections::PORTFOLIO_SECTION, video::page_og_video},
    infra::{
        db::PostgresRepositories,
        uploads::{UploadStorage, UploadStorageError},
    },
    presentation::views::{
        BlogIndexTemplate, BlogPostTemplate, HomeTemplate, LayoutChrome, PageTemplate,
        render_not_found_response, render_template_response,
    },
};

use super::{
    db_health_response,
    middleware::{log_responses, set_request_context},
};

#[derive(Clone)]
pub struct HttpState {
    pub home: Arc<HomeService>,
    pub resolver: Arc<PageResolver>,
    pub blog: Arc<BlogService>,
    pub chrome: Arc<ChromeService>,
    pub sitemap: Arc<SitemapService>,
    pub contact: Arc<ContactService>,
    pub db: Arc<PostgresRepositories>,
    pub upload_storage: Arc<UploadStorage>,
    pub base_url: String,
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/blogs", get(blog_index))
        .route("/blogs/{slug}", get(blog_detail))
        .route("/contact", get(contact_page).post(contact_submit))
        .route("/sitemap.xml", get(sitemap))
        .route("/robots.txt", get(robots_txt))
        .route("/uploads/{*path}", get(serve_upload))
        .route("/_health/db", get(public_health))
        .route("/{slug}", get(page_detail))
        .fallback(fallback)
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BlogQuery {
    page: Option<i64>,
    category: Option<String>,
}

async fn index(State(state): State<HttpState>) -> Response {
    let chrome = match state.chrome.load().await {
        Ok(chrome) => chrome,
        Err(err) => return err.into_response(),
    };
    let chrome = LayoutChrome::from_chrome(chrome, &state.base_url);

    match state.home.compose().await {
        Ok(home) => {
            let og_video = home
                .sections_by_type
                .get(PORTFOLIO_SECTION)
                .and_then(|sections| page_og_video(sections));
            let chrome = chrome.with_meta(
                &home.page.title,
                &home.page.meta_description,
                "/",
                og_video,
            );
            render_template_response(HomeTemplate { chrome, home }, StatusCode::OK)
        }
        Err(err) => err.into_response(),
    }
}

async fn page_detail(State(state): State<HttpState>, Path(slug): Path<String>) -> Response {
    let chrome = match state.chrome.load().await {
        Ok(chrome) => chrome,
        Err(err) => return err.into_response(),
    };
    let chrome = LayoutChrome::from_chrome(chrome, &state.base_url);

    match state.resolver.resolve(&slug).await {
        Ok(PageResolution::Resolved(context)) => {
            let context = *context;
            let chrome = chrome.with_meta(
                &context.page.title,
                &context.page.meta_description,
                &format!("/{}", context.page.slug),
                context.og_video.clone(),
            );
            render_template_response(PageTemplate { chrome, context }, StatusCode::OK)
        }
        Ok(PageResolution::RedirectToBlog) => Redirect::permanent("/blogs").into_response(),
        Ok(PageResolution::NotFound) => render_not_found_response(chrome),
        Err(err) => err.into_response(),
    }
}

async fn blog_index(State(state): State<HttpState>, Query(query): Query<BlogQuery>) -> Response {
    let chrome = match state.chrome.load().await {
        Ok(chrome) => chrome,
        Err(err) => return err.into_response(),
    };
    let chrome = LayoutChrome::from_chrome(chrome, &state.base_url);

    match state
        .blog
        .index(query.page.unwrap_or(1), query.category.as_deref())
        .await
    {
        Ok(index) => {
            let chrome = chrome.with_meta("Blog", "", "/blogs", None);
            render_template_response(BlogIndexTemplate { chrome, index }, StatusCode::OK)
        }
        Err(err) => err.into_response(),
    }
}

async fn blog_detail(State(state): State<HttpState>, Path(slug): Path<String>) -> Response {
    let chrome = match state.chrome.load().await {
        Ok(chrome) => chrome,
        Err(err) => return err.into_response(),
    };
    let chrome = LayoutChrome::from_chrome(chrome, &state.base_url);

    match state.blog.detail(&slug).await {
        Ok(Some(detail)) => {
            let description = if detail.post.meta_description.is_empty() {
                detail.post.excerpt.clone()
            } else {
                detail.post.meta_description.clone()
            };
            let chrome = chrome.with_meta(
                &detail.post.title,
                &description,
                &format!("/blogs/{}", detail.post.slug),
                None,
            );
            render_template_response(BlogPostTemplate { chrome, detail }, StatusCode::OK)
        }
        Ok(None) => render_not_found_response(chrome),
        Err(err) => err.into_response(),
    }
}

// "/contact" is registered for POST, so the GET render cannot fall through
// to the generic slug route and is forwarded explicitly.
async fn contact_page(state: State<HttpState>) -> Response {
    page_detail(state, Path("contact".to_string())).await
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContactFormPayload {
    name: String,
    email: String,
    company: String,
    message: String,
}

async fn contact_submit(
    State(state): State<HttpState>,
    axum::extract::Form(payload): axum::extract::Form<ContactFormPayload>,
) -> Response {
    let form = ContactForm {
        name: payload.name,
        email: payload.email,
        company: payload.company,
        message: payload.message,
    };
    match state.contact.submit(form).await {
        Ok(_) => Redirect::to("/contact?sent=1").into_response(),
        Err(err) => err.into_response(),
    }
}

async fn sitemap(State(state): State<HttpState>) -> Response {
    match state.sitemap.render(&state.base_url).await {
        Ok(xml) => (
            StatusCode::OK,
            [(CONTENT_TYPE, "application/xml; charset=utf-8")],
            xml,
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

async fn robots_txt(State(state): State<HttpState>) -> Response {
    let body = format!(
        "User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml\n",
        state.base_url
    );
    (
        StatusCode::OK,
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

async fn serve_upload(State(state): State<HttpState>, Path(path): Path<String>) -> Response {
    const SOURCE: &str = "infra::http::public::serve_upload";

    match state.upload_storage.read(&path).await {
        Ok(bytes) => build_upload_response(&path, bytes),
        Err(UploadStorageError::InvalidPath) => HttpError::new(
            SOURCE,
            StatusCode::NOT_FOUND,
            "Upload not found",
            "The requested upload is not available",
        )
        .into_response(),
        Err(UploadStorageError::Io(err)) if err.kind() == ErrorKind::NotFound => HttpError::new(
            SOURCE,
            StatusCode::NOT_FOUND,
            "Upload not found",
            "The requested upload is not available",
        )
        .into_response(),
        Err(err) => {
            error!(
                target = SOURCE,
                path = %path,
                error = %err,
                "failed to read stored upload"
            );
            HttpError::new(
                SOURCE,
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to read uploaded file",
                err.to_string(),
            )
            .into_response()
        }
    }
}

fn build_upload_response(path: &str, bytes: Bytes) -> Response {
    let mime_type = mime_guess::from_path(path).first_or_octet_stream();
    let length = bytes.len();

    let mut response = Response::new(Body::from(bytes));
    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(mime_type.as_ref()) {
        headers.insert(CONTENT_TYPE, value);
    }
    headers.insert(CONTENT_LENGTH, HeaderValue::from(length));
    headers.insert(
        CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=31536000, immutable"),
    );
    response
}

async fn public_health(State(state): State<HttpState>) -> Response {
    db_health_response(state.db.health_check().await)
}

async fn fallback(State(state): State<HttpState>) -> Response {
    match state.chrome.load().await {
        Ok(chrome) => {
            render_not_found_response(LayoutChrome::from_chrome(chrome, &state.base_url))
        }
        Err(err) => err.into_response(),
    }
}
