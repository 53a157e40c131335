//! Lead routes: JSON API, status `PATCH`, and the tag form endpoint.
//!
//! ERROR HANDLING
//! ==============
//! JSON endpoints answer failures with an [`ApiError`] body and the status
//! from [`lead_error_to_status`]. The tag form redirects back to the edit
//! page on validation errors so the browser never sees a bare error page.

#[cfg(test)]
#[path = "leads_test.rs"]
mod leads_test;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::Form;
use client::net::types::{ApiError, Lead, LeadStatusPatch};
use serde::Deserialize;

use crate::services::leads::{self, LeadError};
use crate::state::AppState;

pub const CSRF_HEADER: &str = "x-csrf-token";

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

pub(crate) fn lead_error_to_status(err: &LeadError) -> StatusCode {
    match err {
        LeadError::NotFound(_) => StatusCode::NOT_FOUND,
        LeadError::UnknownStatus(_) | LeadError::BlankTags => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn api_error(err: &LeadError) -> (StatusCode, Json<ApiError>) {
    (lead_error_to_status(err), Json(ApiError::new(err.to_string())))
}

fn forbidden() -> (StatusCode, Json<ApiError>) {
    (StatusCode::FORBIDDEN, Json(ApiError::new("invalid CSRF token")))
}

fn csrf_matches(expected: &str, provided: Option<&str>) -> bool {
    provided.is_some_and(|token| token == expected)
}

/// Edit page URL carrying a validation error code.
pub(crate) fn edit_error_path(id: u64, code: &str) -> String {
    format!("/leads/{id}/edit?error={code}")
}

/// `GET /api/leads` — every lead, ordered by id.
pub async fn list_leads(State(state): State<AppState>) -> Json<Vec<Lead>> {
    Json(leads::list_leads(&state).await)
}

/// `GET /api/leads/{id}`.
pub async fn get_lead(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<Lead> {
    leads::get_lead(&state, id).await.map(Json).map_err(|e| api_error(&e))
}

/// `PATCH {prefix}/{id}` — kanban status move. Requires `X-CSRF-Token`.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Json(body): Json<LeadStatusPatch>,
) -> ApiResult<Lead> {
    let provided = headers.get(CSRF_HEADER).and_then(|v| v.to_str().ok());
    if !csrf_matches(&state.config.csrf_token, provided) {
        tracing::warn!(lead_id = id, "status update rejected: CSRF mismatch");
        return Err(forbidden());
    }
    leads::update_status(&state, id, &body.lead.status).await.map(Json).map_err(|e| {
        tracing::warn!(lead_id = id, error = %e, "status update rejected");
        api_error(&e)
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct TagsForm {
    #[serde(default)]
    pub csrf_token: String,
    #[serde(default, rename = "tags[]")]
    pub tags: Vec<String>,
}

/// `POST /leads/{id}/tags` — form submission from the tag editor.
pub async fn update_tags(State(state): State<AppState>, Path(id): Path<u64>, Form(form): Form<TagsForm>) -> Response {
    if !csrf_matches(&state.config.csrf_token, Some(form.csrf_token.as_str())) {
        tracing::warn!(lead_id = id, "tag update rejected: CSRF mismatch");
        return forbidden().into_response();
    }
    match leads::set_tags(&state, id, form.tags).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(LeadError::BlankTags) => Redirect::to(&edit_error_path(id, "tags_blank")).into_response(),
        Err(e) => api_error(&e).into_response(),
    }
}
