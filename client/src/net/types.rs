//! Shared JSON DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server depends on this module directly, so both sides agree on field
//! names without a separate schema crate.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use widgets::kanban::Card;

/// A sales lead as returned by `GET /api/leads`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
    /// Pipeline status id (e.g. `"nouveau"`).
    pub status: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Lead {
    /// Kanban card for this lead. The badge is filled in by the board.
    #[must_use]
    pub fn to_card(&self) -> Card {
        let title = match &self.company {
            Some(company) if !company.is_empty() => format!("{} · {company}", self.name),
            _ => self.name.clone(),
        };
        Card::new(self.id.to_string(), title, &self.status)
    }
}

/// Body of `PATCH /leads/{id}`: `{"lead":{"status":"…"}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadStatusPatch {
    pub lead: LeadStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadStatus {
    pub status: String,
}

impl LeadStatusPatch {
    pub fn new(status: impl Into<String>) -> Self {
        Self { lead: LeadStatus { status: status.into() } }
    }
}

/// Error body returned by the server for rejected requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
