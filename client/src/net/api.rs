//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. A failed status
//! update surfaces as a [`SyncError`] and the kanban board decides what to do
//! with the card.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use widgets::sync::{StatusChange, StatusSync, SyncError};

use super::types::{Lead, LeadStatusPatch};
use crate::config::ClientConfig;

pub const LEADS_ENDPOINT: &str = "/api/leads";

/// `{prefix}/{id}`, tolerating a trailing slash on the prefix.
fn status_update_path(prefix: &str, card_id: &str) -> String {
    format!("{}/{card_id}", prefix.trim_end_matches('/'))
}

fn lead_endpoint(id: u64) -> String {
    format!("{LEADS_ENDPOINT}/{id}")
}

/// Headers sent with every status update.
fn status_update_headers(csrf_token: &str) -> [(&'static str, String); 3] {
    [
        ("X-CSRF-Token", csrf_token.to_owned()),
        ("Accept", "application/json".to_owned()),
        ("Content-Type", "application/json".to_owned()),
    ]
}

#[cfg(any(test, feature = "hydrate"))]
fn leads_request_failed_message(status: u16) -> String {
    format!("leads request failed: {status}")
}

/// Fetch every lead from `GET /api/leads`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-2xx status, or the body is not a lead list.
pub async fn fetch_leads() -> Result<Vec<Lead>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(LEADS_ENDPOINT)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(leads_request_failed_message(resp.status()));
        }
        resp.json::<Vec<Lead>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch one lead from `GET /api/leads/{id}`. `None` when missing or on the
/// server.
pub async fn fetch_lead(id: u64) -> Option<Lead> {
    #[cfg(feature = "hydrate")]
    {
        let url = lead_endpoint(id);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Lead>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lead_endpoint(id);
        None
    }
}

/// [`StatusSync`] over HTTP: `PATCH {prefix}/{id}` with a JSON body and the
/// CSRF token taken from [`ClientConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpStatusSync {
    prefix: String,
    csrf_token: String,
}

impl HttpStatusSync {
    pub fn new(prefix: impl Into<String>, csrf_token: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), csrf_token: csrf_token.into() }
    }

    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.status_prefix, &config.csrf_token)
    }

    #[must_use]
    pub fn url_for(&self, change: &StatusChange) -> String {
        status_update_path(&self.prefix, &change.card_id)
    }
}

impl StatusSync for HttpStatusSync {
    fn update_status(&self, change: &StatusChange) -> impl Future<Output = Result<(), SyncError>> {
        let url = self.url_for(change);
        let headers = status_update_headers(&self.csrf_token);
        let body = LeadStatusPatch::new(&change.to);
        send_status_patch(url, headers, body)
    }
}

async fn send_status_patch(
    url: String,
    headers: [(&'static str, String); 3],
    body: LeadStatusPatch,
) -> Result<(), SyncError> {
    #[cfg(feature = "hydrate")]
    {
        let mut builder = gloo_net::http::Request::patch(&url);
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }
        let resp = builder
            .json(&body)
            .map_err(|e| SyncError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;
        widgets::sync::check_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, headers, body);
        Err(SyncError::Unavailable)
    }
}
