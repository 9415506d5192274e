use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use uuid::Uuid;

use crate::application::admin::posts::PostDraft;
use crate::domain::types::{CategoryKind, PostStatus};
use crate::presentation::views::{
    AdminPostFormTemplate, AdminPostsTemplate, render_template_response,
};

use super::{
    AdminState,
    shared::{SavedQuery, redirect_saved},
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct PostForm {
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
    status: String,
    is_featured: Option<String>,
    author: String,
    published_at: String,
    faq_json: String,
}

impl PostForm {
    fn into_draft(self) -> PostDraft {
        // An unparseable timestamp falls back to the stamping rules rather
        // than failing the save.
        let published_at = OffsetDateTime::parse(self.published_at.trim(), &Rfc3339).ok();
        PostDraft {
            slug: self.slug,
            title: self.title,
            excerpt: self.excerpt,
            content_html: self.content_html,
            featured_image: self.featured_image,
            featured_image_alt: self.featured_image_alt,
            category: self.category,
            tags: self.tags,
            meta_title: self.meta_title,
            meta_description: self.meta_description,
            og_image: self.og_image,
            status: PostStatus::parse_form(&self.status),
            is_featured: self.is_featured.is_some(),
            author: self.author,
            published_at,
            faq_json: self.faq_json,
        }
    }
}

pub(super) async fn admin_posts(
    State(state): State<AdminState>,
    Query(query): Query<SavedQuery>,
) -> Response {
    match state.posts.list().await {
        Ok(posts) => render_template_response(
            AdminPostsTemplate {
                posts,
                saved: query.saved.is_some(),
            },
            StatusCode::OK,
        ),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_post_new(State(state): State<AdminState>) -> Response {
    match state.categories.list(CategoryKind::Blog).await {
        Ok(categories) => render_template_response(
            AdminPostFormTemplate {
                post: None,
                categories,
                saved: false,
            },
            StatusCode::OK,
        ),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_post_create(
    State(state): State<AdminState>,
    Form(form): Form<PostForm>,
) -> Response {
    match state.posts.create(form.into_draft()).await {
        Ok(post) => redirect_saved(&format!("/posts/{}/edit", post.id)),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_post_edit(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
    Query(query): Query<SavedQuery>,
) -> Response {
    let post = match state.posts.get(id).await {
        Ok(post) => post,
        Err(err) => return err.into_response(),
    };
    match state.categories.list(CategoryKind::Blog).await {
        Ok(categories) => render_template_response(
            AdminPostFormTemplate {
                post: Some(post),
                categories,
                saved: query.saved.is_some(),
            },
            StatusCode::OK,
        ),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_post_update(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
    Form(form): Form<PostForm>,
) -> Response {
    match state.posts.update(id, form.into_draft()).await {
        Ok(_) => redirect_saved(&format!("/posts/{id}/edit")),
        Err(err) => err.into_response(),
    }
}

pub(super) async fn admin_post_delete(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.posts.delete(id).await {
        Ok(()) => redirect_saved("/posts"),
        Err(err) => err.into_response(),
    }
}
