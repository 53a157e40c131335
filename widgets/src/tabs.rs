//! Tab list selection with roving keyboard focus.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

use serde::{Deserialize, Serialize};

use crate::keys::Key;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
}

impl Tab {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into(), disabled: false }
    }
}

#[derive(Clone, Debug)]
pub struct TabsState {
    tabs: Vec<Tab>,
    selected: usize,
}

impl TabsState {
    /// Select `initial` when it names an enabled tab, otherwise the first
    /// enabled tab.
    #[must_use]
    pub fn new(tabs: Vec<Tab>, initial: Option<&str>) -> Self {
        let first_enabled = tabs.iter().position(|t| !t.disabled).unwrap_or(0);
        let selected = initial
            .and_then(|id| tabs.iter().position(|t| t.id == id && !t.disabled))
            .unwrap_or(first_enabled);
        Self { tabs, selected }
    }

    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.tabs.get(self.selected).map(|t| t.id.as_str())
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id() == Some(id)
    }

    /// Roving tabindex: only the selected tab is reachable with Tab.
    #[must_use]
    pub fn tab_index(&self, index: usize) -> i32 {
        if index == self.selected { 0 } else { -1 }
    }

    #[must_use]
    pub fn tab_dom_id(prefix: &str, id: &str) -> String {
        format!("{prefix}-tab-{id}")
    }

    #[must_use]
    pub fn panel_dom_id(prefix: &str, id: &str) -> String {
        format!("{prefix}-panel-{id}")
    }

    /// Select by id. Unknown and disabled tabs are ignored.
    pub fn select(&mut self, id: &str) -> bool {
        match self.tabs.iter().position(|t| t.id == id && !t.disabled) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    /// Arrow keys wrap around; Home/End jump to the ends. Returns whether the
    /// key was handled.
    pub fn handle_key(&mut self, key: Key) -> bool {
        let enabled: Vec<usize> = (0..self.tabs.len()).filter(|&i| !self.tabs[i].disabled).collect();
        let Some((&first, &last)) = enabled.first().zip(enabled.last()) else {
            return false;
        };
        let pos = enabled.iter().position(|&i| i == self.selected);
        self.selected = match (key, pos) {
            (Key::ArrowRight, Some(p)) => enabled[(p + 1) % enabled.len()],
            (Key::ArrowLeft, Some(p)) => enabled[(p + enabled.len() - 1) % enabled.len()],
            (Key::ArrowRight | Key::ArrowLeft, None) | (Key::Home, _) => first,
            (Key::End, _) => last,
            _ => return false,
        };
        true
    }
}
