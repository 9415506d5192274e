use axum::{
    extract::{Form, Path, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::infra::http::repo_error_to_http;
use crate::presentation::views::{AdminContactsTemplate, render_template_response};

use super::{AdminState, shared::redirect_saved};

const SOURCE_BASE: &str = "infra::http::admin::contacts";

pub(super) async fn admin_contacts(State(state): State<AdminState>) -> Response {
    match state.contacts.list().await {
        Ok(submissions) => render_template_response(
            AdminContactsTemplate { submissions },
            axum::http::StatusCode::OK,
        ),
        Err(err) => repo_error_to_http(SOURCE_BASE, err).into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct StatusForm {
    status: String,
}

pub(super) async fn admin_contact_status(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
    Form(form): Form<StatusForm>,
) -> Response {
    match state.contacts.update_status(id, form.status.trim()).await {
        Ok(()) => redirect_saved("/contacts"),
        Err(err) => repo_error_to_http(SOURCE_BASE, err).into_response(),
    }
}

pub(super) async fn admin_contact_delete(
    State(state): State<AdminState>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.contacts.delete(id).await {
        Ok(()) => redirect_saved("/contacts"),
        Err(err) => repo_error_to_http(SOURCE_BASE, err).into_response(),
    }
}
