//! Transient UI chrome state (notifications).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of `leads` so a failed status update can
//! raise a toast without the board knowing about the toast stack.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use widgets::kanban::STATUS_UPDATE_FAILED;
use widgets::toast::{ToastKind, ToastStack};

use crate::config::ClientConfig;

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub toasts: ToastStack,
}

impl UiState {
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self { toasts: ToastStack::new(config.toast_duration_ms, config.max_toasts) }
    }

    pub fn notify(&mut self, kind: ToastKind, message: impl Into<String>, now: f64) -> u64 {
        self.toasts.push(kind, message, now)
    }

    /// Sticky error toast mirroring the blocking alert.
    pub fn status_update_failed(&mut self, now: f64) -> u64 {
        self.toasts.push(ToastKind::Error, STATUS_UPDATE_FAILED, now)
    }

    pub fn status_updated(&mut self, label: &str, now: f64) -> u64 {
        self.toasts.push(ToastKind::Success, format!("Moved to {label}"), now)
    }
}
