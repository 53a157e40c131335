//! Client configuration handed down from the server.
//!
//! DESIGN
//! ======
//! The server serializes a [`ClientConfig`] into a JSON `<script>` element in
//! the SSR shell. At hydration the browser reads it back once and provides it
//! through context, so controllers receive the CSRF token and endpoint prefix
//! explicitly instead of scraping meta tags.
//!
//! ERROR HANDLING
//! ==============
//! A missing or malformed config element logs a warning and falls back to
//! [`ClientConfig::default`]; status updates will then be rejected by the
//! server's CSRF check rather than crashing hydration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use widgets::kanban::{Column, FailureStrategy};

/// DOM id of the embedded config script element.
pub const CONFIG_ELEMENT_ID: &str = "leadboard-config";

pub const DEFAULT_STATUS_PREFIX: &str = "/leads";
pub const DEFAULT_TOAST_DURATION_MS: f64 = 4000.0;
pub const DEFAULT_MAX_TOASTS: usize = 5;

/// One kanban column: status id plus its localized label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusColumn {
    pub id: String,
    pub label: String,
}

impl StatusColumn {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Sent as `X-CSRF-Token` on every status update.
    pub csrf_token: String,
    /// Status updates go to `{status_prefix}/{id}`.
    pub status_prefix: String,
    pub failure_strategy: FailureStrategy,
    pub statuses: Vec<StatusColumn>,
    /// Raw tag catalog, parsed with `widgets::multi_select::options_from_json`.
    pub tag_options: serde_json::Value,
    pub toast_duration_ms: f64,
    pub max_toasts: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            csrf_token: String::new(),
            status_prefix: DEFAULT_STATUS_PREFIX.to_owned(),
            failure_strategy: FailureStrategy::Keep,
            statuses: default_statuses(),
            tag_options: default_tag_options(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            max_toasts: DEFAULT_MAX_TOASTS,
        }
    }
}

/// Pipeline stages in board order.
#[must_use]
pub fn default_statuses() -> Vec<StatusColumn> {
    vec![
        StatusColumn::new("nouveau", "Nouveau"),
        StatusColumn::new("contacted", "Contacté"),
        StatusColumn::new("qualified", "Qualifié"),
        StatusColumn::new("proposal", "Proposition"),
        StatusColumn::new("won", "Gagné"),
        StatusColumn::new("lost", "Perdu"),
    ]
}

#[must_use]
pub fn default_tag_options() -> serde_json::Value {
    serde_json::json!({
        "Languages": ["Ruby", "Rails", "JavaScript", "Rust"],
        "Industry": [
            { "label": "SaaS", "value": "saas" },
            { "label": "Retail", "value": "retail" },
            { "label": "Public sector", "value": "public", "disabled": true }
        ]
    })
}

impl ClientConfig {
    /// Parse the embedded JSON form.
    ///
    /// # Errors
    ///
    /// Returns the serde error when `raw` is not a JSON object of this shape.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// JSON safe to place inside a `<script>` element.
    #[must_use]
    pub fn to_embedded_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_owned())
            .replace("</", "<\\/")
    }

    #[must_use]
    pub fn columns(&self) -> Vec<Column> {
        self.statuses.iter().map(|s| Column::new(&s.id, &s.label)).collect()
    }

    #[must_use]
    pub fn status_label(&self, status: &str) -> Option<&str> {
        self.statuses.iter().find(|s| s.id == status).map(|s| s.label.as_str())
    }

    #[must_use]
    pub fn is_known_status(&self, status: &str) -> bool {
        self.status_label(status).is_some()
    }
}

/// Read the config embedded by the server. Outside the browser this is the
/// default config.
#[must_use]
pub fn load_embedded() -> ClientConfig {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw.as_deref().map(ClientConfig::from_json) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                log::warn!("malformed #{CONFIG_ELEMENT_ID}: {e}");
                ClientConfig::default()
            }
            None => {
                log::warn!("#{CONFIG_ELEMENT_ID} not found, using defaults");
                ClientConfig::default()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ClientConfig::default()
    }
}
