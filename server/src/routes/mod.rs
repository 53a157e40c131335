//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the lead API and form endpoints and stitches them with
//! Leptos SSR rendering under a single Axum router. The server-derived
//! [`client::config::ClientConfig`] is provided as route context so the SSR
//! shell can embed it for hydration.

pub mod leads;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API, status updates, the tag form, and the health check.
///
/// The status route follows the configured prefix (`/leads` by default).
pub fn api_routes(state: AppState) -> Router {
    let status_route = format!("{}/{{id}}", state.config.status_prefix);
    Router::new()
        .route("/api/leads", get(leads::list_leads))
        .route("/api/leads/{id}", get(leads::get_lead))
        .route(&status_route, patch(leads::update_status))
        .route("/leads/{id}/tags", post(leads::update_tags))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// API routes + Leptos SSR pages + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    let client_config = state.config.client_config();

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(client_config.clone()),
            {
                let opts = leptos_options.clone();
                move || client::app::shell(opts.clone())
            },
        )
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
