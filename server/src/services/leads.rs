//! Lead service: listing, status moves, and tag edits.
//!
//! DESIGN
//! ======
//! All mutations take the store's write lock for the whole read-modify-write,
//! so concurrent status updates for one lead apply in lock order. The last
//! write wins; there is no version check.

#[cfg(test)]
#[path = "leads_test.rs"]
mod leads_test;

use client::net::types::Lead;
use tracing::info;

use crate::state::AppState;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LeadError {
    #[error("lead not found: {0}")]
    NotFound(u64),
    #[error("unknown status: {0}")]
    UnknownStatus(String),
    #[error("at least one tag is required")]
    BlankTags,
}

// =============================================================================
// QUERIES
// =============================================================================

/// Every lead, ordered by id.
pub async fn list_leads(state: &AppState) -> Vec<Lead> {
    let leads = state.leads.read().await;
    let mut list: Vec<Lead> = leads.values().cloned().collect();
    list.sort_by_key(|lead| lead.id);
    list
}

/// # Errors
///
/// [`LeadError::NotFound`] when no lead has `id`.
pub async fn get_lead(state: &AppState, id: u64) -> Result<Lead, LeadError> {
    state.leads.read().await.get(&id).cloned().ok_or(LeadError::NotFound(id))
}

// =============================================================================
// MUTATIONS
// =============================================================================

/// Move a lead to `status`.
///
/// # Errors
///
/// [`LeadError::NotFound`] for an unknown id, [`LeadError::UnknownStatus`]
/// when `status` is not a configured pipeline stage.
pub async fn update_status(state: &AppState, id: u64, status: &str) -> Result<Lead, LeadError> {
    let mut leads = state.leads.write().await;
    let lead = leads.get_mut(&id).ok_or(LeadError::NotFound(id))?;
    if !state.config.is_known_status(status) {
        return Err(LeadError::UnknownStatus(status.to_owned()));
    }
    if lead.status != status {
        info!(lead_id = id, from = %lead.status, to = %status, "lead status changed");
        status.clone_into(&mut lead.status);
    }
    Ok(lead.clone())
}

/// Replace a lead's tags. Values are trimmed; blanks and duplicates are
/// dropped with first-seen order kept.
///
/// # Errors
///
/// [`LeadError::NotFound`] for an unknown id, [`LeadError::BlankTags`] when
/// nothing remains after cleanup.
pub async fn set_tags(state: &AppState, id: u64, tags: Vec<String>) -> Result<Lead, LeadError> {
    let tags = clean_tags(tags);
    let mut leads = state.leads.write().await;
    let lead = leads.get_mut(&id).ok_or(LeadError::NotFound(id))?;
    if tags.is_empty() {
        return Err(LeadError::BlankTags);
    }
    info!(lead_id = id, count = tags.len(), "lead tags updated");
    lead.tags = tags;
    Ok(lead.clone())
}

fn clean_tags(tags: Vec<String>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !cleaned.iter().any(|t| t == tag) {
            cleaned.push(tag.to_owned());
        }
    }
    cleaned
}
