//! Toast notification stack.
//!
//! Time is passed in by the caller as milliseconds (`performance.now()` in the
//! browser, plain numbers in tests), so the stack itself never reads a clock.
//! A toast with a duration expires once it has been visible, unpaused, for
//! that long. Hovering pauses the countdown; error toasts are sticky unless
//! given an explicit duration.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// CSS modifier and ARIA live-region politeness.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "toast--info",
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }

    #[must_use]
    pub fn aria_live(self) -> &'static str {
        if self == Self::Error { "assertive" } else { "polite" }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    /// `None` means the toast stays until dismissed.
    pub duration_ms: Option<f64>,
    remaining_ms: Option<f64>,
    resumed_at: Option<f64>,
}

impl Toast {
    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.duration_ms.is_none()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.resumed_at.is_none()
    }

    /// Time left at `now`, or `None` for sticky toasts.
    #[must_use]
    pub fn remaining_at(&self, now: f64) -> Option<f64> {
        let remaining = self.remaining_ms?;
        Some(match self.resumed_at {
            Some(since) => (remaining - (now - since)).max(0.0),
            None => remaining,
        })
    }
}

#[derive(Clone, Debug)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
    default_duration_ms: f64,
    max_visible: usize,
}

impl Default for ToastStack {
    fn default() -> Self {
        Self::new(4000.0, 5)
    }
}

impl ToastStack {
    #[must_use]
    pub fn new(default_duration_ms: f64, max_visible: usize) -> Self {
        Self { toasts: Vec::new(), next_id: 0, default_duration_ms, max_visible: max_visible.max(1) }
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Push with the kind's default lifetime.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, now: f64) -> u64 {
        let duration = (kind != ToastKind::Error).then_some(self.default_duration_ms);
        self.push_with_duration(kind, message, duration, now)
    }

    /// Push with an explicit lifetime; `None` is sticky. When the stack is full
    /// the oldest toast is dropped.
    pub fn push_with_duration(&mut self, kind: ToastKind, message: impl Into<String>, duration_ms: Option<f64>, now: f64) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        let duration_ms = duration_ms.filter(|d| *d > 0.0);
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            duration_ms,
            remaining_ms: duration_ms,
            resumed_at: Some(now),
        });
        while self.toasts.len() > self.max_visible {
            self.toasts.remove(0);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Freeze the countdown of `id` (pointer entered the toast).
    pub fn pause(&mut self, id: u64, now: f64) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            if toast.resumed_at.is_some() {
                toast.remaining_ms = toast.remaining_at(now);
                toast.resumed_at = None;
            }
        }
    }

    pub fn resume(&mut self, id: u64, now: f64) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            if toast.resumed_at.is_none() {
                toast.resumed_at = Some(now);
            }
        }
    }

    /// Drop every toast whose time ran out. Returns the expired ids.
    pub fn tick(&mut self, now: f64) -> Vec<u64> {
        let mut expired = Vec::new();
        self.toasts.retain(|t| {
            let done = t.remaining_at(now).is_some_and(|r| r <= 0.0);
            if done {
                expired.push(t.id);
            }
            !done
        });
        expired
    }
}
