//! Copy-to-clipboard button feedback.
//!
//! The browser write itself lives in the client; this only tracks which label
//! the button shows and when it falls back to idle.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// How long the "Copied" / "Copy failed" label stays up.
pub const FEEDBACK_MS: f64 = 2000.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Copied { until: f64 },
    Failed { until: f64 },
}

impl CopyFeedback {
    #[must_use]
    pub fn succeeded(now: f64) -> Self {
        Self::Copied { until: now + FEEDBACK_MS }
    }

    #[must_use]
    pub fn failed(now: f64) -> Self {
        Self::Failed { until: now + FEEDBACK_MS }
    }

    /// Fall back to idle once the feedback window has passed.
    #[must_use]
    pub fn tick(self, now: f64) -> Self {
        match self {
            Self::Copied { until } | Self::Failed { until } if now >= until => Self::Idle,
            other => other,
        }
    }

    #[must_use]
    pub fn label<'a>(self, idle: &'a str) -> &'a str {
        match self {
            Self::Idle => idle,
            Self::Copied { .. } => "Copied",
            Self::Failed { .. } => "Copy failed",
        }
    }

    #[must_use]
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }
}
