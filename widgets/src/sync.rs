//! Async seam between the kanban board and whatever confirms moves.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`crate::kanban::KanbanBoardState::drop`] applies a move locally and hands
//! back a [`StatusChange`]. The caller sends it through a [`StatusSync`]
//! implementation (HTTP in the browser, a recorder in tests) and feeds the
//! result to [`crate::kanban::KanbanBoardState::settle`]. The board itself
//! never awaits anything.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use std::future::Future;

use serde::{Deserialize, Serialize};

/// A card move that still needs server confirmation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    /// Board-local sequence number; distinguishes repeated moves of one card.
    pub seq: u64,
    pub card_id: String,
    pub from: String,
    pub to: String,
}

/// Why a status update was not confirmed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// No transport exists in this environment (e.g. during SSR).
    #[error("status sync unavailable")]
    Unavailable,
}

/// Any 2xx counts as success.
#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Map an HTTP status code onto the sync result.
///
/// # Errors
///
/// Returns [`SyncError::Status`] for anything outside 2xx.
pub fn check_status(status: u16) -> Result<(), SyncError> {
    if is_success(status) { Ok(()) } else { Err(SyncError::Status(status)) }
}

/// Sends one status change to the server.
///
/// Implementations issue exactly one request per call, with no retry and no
/// timeout.
pub trait StatusSync {
    fn update_status(&self, change: &StatusChange) -> impl Future<Output = Result<(), SyncError>>;
}
