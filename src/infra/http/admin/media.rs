use axum::{
    Json,
    extract::{Form, Multipart, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;
use uuid::Uuid;

use crate::application::repos::{MediaMetaParams, NewMediaParams};
use crate::presentation::views::{AdminMediaTemplate, render_template_response};

use super::{
    AdminState,
    shared::{SavedQuery, json_error, redirect_saved},
};

const SOURCE_BASE: &str = "infra::http::admin::media";

pub(super) async fn admin_media(
    State(state): State<AdminState>,
    Query(query): Query<SavedQuery>,
) -> Response {
    match state.media.list().await {
        Ok(items) => render_template_response(
            AdminMediaTemplate {
                items,
                saved: query.saved.is_some(),
            },
            StatusCode::OK,
        ),
        Err(err) => err.into_response(),
    }
}

/// Multipart upload: the `file` part is stored on disk and catalogued; an
/// optional `alt_text` part seeds the alt attribute.
pub(super) async fn admin_media_upload(
    State(state): State<AdminState>,
    mut multipart: Multipart,
) -> Response {
    let mut stored = None;
    let mut original_name = String::new();
    let mut alt_text = String::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => {
                return json_error(SOURCE_BASE, StatusCode::BAD_REQUEST, err.to_string());
            }
        };

        match field.name() {
            Some("file") => {
                let name = field.file_name().unwrap_or("upload").to_string();
                let data = match field.bytes().await {
                    Ok(data) => data,
                    Err(err) => {
                        return json_error(SOURCE_BASE, StatusCode::BAD_REQUEST, err.to_string());
                    }
                };
                match state.upload_storage.store(&name, data).await {
                    Ok(upload) => {
                        original_name = name;
                        stored = Some(upload);
                    }
                    Err(err) => {
                        return json_error(SOURCE_BASE, StatusCode::BAD_REQUEST, err.to_string());
                    }
                }
            }
            Some("alt_text") => {
                alt_text = field.text().await.unwrap_or_default();
            }
            _ => {}
        }
    }

    let Some(upload) = stored else {
        return json_error(SOURCE_BASE, StatusCode::BAD_REQUEST, "no file part supplied");
    };

    match state
        .media
        .register(NewMediaParams {
            filename: upload.filename,
            original_name,
            mime_type: upload.mime_type,
            size_bytes: upload.size_bytes,
            alt_text,
        })
        .await
    {
        Ok(record) => Json(json!({
            "success": true,
            "id": record.id,
            "url": record.url(),
        }))
        .into_response(),
        Err(err) => err.into_response(),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct MediaMetaForm {
    alt_text: String,
    seo_title: String,
    seo_caption: String,
}

pub(super) async fn admin_media_meta(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
    Form(form): Form<MediaMetaForm>,
) -> Response {
    match state
        .media
        .update_meta(
            id,
            MediaMetaParams {
                alt_text: form.alt_text,
                seo_title: form.seo_title,
                seo_caption: form.seo_caption,
            },
        )
        .await
    {
        Ok(_) => redirect_saved("/media"),
        Err(err) => err.into_response(),
    }
}

/// The catalogue row is authoritative; file removal is best effort.
pub(super) async fn admin_media_delete(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.media.delete(id).await {
        Ok(filename) => {
            if let Err(err) = state.upload_storage.delete(&filename).await {
                warn!(
                    target = SOURCE_BASE,
                    filename = %filename,
                    error = %err,
                    "stored file could not be removed"
                );
            }
            redirect_saved("/media")
        }
        Err(err) => err.into_response(),
    }
}
