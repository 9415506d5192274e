use axum::{extract::State, http::StatusCode, response::{IntoResponse, Response}};

use crate::presentation::views::{AdminDashboardTemplate, render_template_response};

use super::AdminState;

pub(super) async fn admin_dashboard(State(state): State<AdminState>) -> Response {
    match state.dashboard.counts().await {
        Ok(counts) => {
            render_template_response(AdminDashboardTemplate { counts }, StatusCode::OK)
        }
        Err(err) => err.into_response(),
    }
}
