//! Keyboard keys relevant to widget navigation.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// A keyboard key as reported by `KeyboardEvent.key`, narrowed to the keys
/// widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Enter,
    Space,
    Escape,
    Backspace,
    Tab,
    /// Any key no widget handles.
    Other,
}

impl Key {
    /// Parse a browser key name. Legacy IE/Edge names (`"Down"`, `"Esc"`,
    /// `"Spacebar"`) map to the same variants.
    #[must_use]
    pub fn from_dom(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "Home" => Self::Home,
            "End" => Self::End,
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            "Backspace" => Self::Backspace,
            "Tab" => Self::Tab,
            _ => Self::Other,
        }
    }
}
