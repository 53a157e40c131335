//! Menu button state: open/close and keyboard movement through items.

#[cfg(test)]
#[path = "dropdown_test.rs"]
mod dropdown_test;

use crate::keys::Key;

/// What the view should do after a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownCommand {
    /// Key not handled; let the browser act.
    Ignored,
    /// State changed; prevent the default action.
    Handled,
    /// The item at this index was activated; the menu is now closed.
    Activate(usize),
    /// The menu closed; move focus back to the trigger button.
    RestoreFocus,
}

#[derive(Clone, Debug, Default)]
pub struct DropdownState {
    open: bool,
    disabled: Vec<bool>,
    active: Option<usize>,
}

impl DropdownState {
    /// A closed menu; `disabled[i]` marks item `i` as skipped by navigation.
    #[must_use]
    pub fn new(disabled: Vec<bool>) -> Self {
        Self { open: false, disabled, active: None }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.disabled.len()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.active = None;
    }

    pub fn toggle(&mut self) {
        if self.open { self.close() } else { self.open() }
    }

    /// Close on a pointer interaction outside the menu. Returns whether it closed.
    pub fn close_on_outside_interaction(&mut self, inside: bool) -> bool {
        if self.open && !inside {
            self.close();
            return true;
        }
        false
    }

    /// Point the active item at `index` (pointer hover). Disabled items are ignored.
    pub fn hover(&mut self, index: usize) {
        if self.is_enabled(index) {
            self.active = Some(index);
        }
    }

    pub fn handle_key(&mut self, key: Key) -> DropdownCommand {
        match key {
            Key::ArrowDown => {
                self.open = true;
                self.step(true);
                DropdownCommand::Handled
            }
            Key::ArrowUp => {
                self.open = true;
                self.step(false);
                DropdownCommand::Handled
            }
            Key::Home if self.open => {
                let first = self.enabled().next();
                self.active = first;
                DropdownCommand::Handled
            }
            Key::End if self.open => {
                let last = self.enabled().next_back();
                self.active = last;
                DropdownCommand::Handled
            }
            Key::Enter | Key::Space if self.open => match self.active {
                Some(index) => {
                    self.close();
                    DropdownCommand::Activate(index)
                }
                None => DropdownCommand::Handled,
            },
            Key::Escape if self.open => {
                self.close();
                DropdownCommand::RestoreFocus
            }
            Key::Tab if self.open => {
                self.close();
                DropdownCommand::Ignored
            }
            _ => DropdownCommand::Ignored,
        }
    }

    fn is_enabled(&self, index: usize) -> bool {
        self.disabled.get(index).is_some_and(|d| !d)
    }

    fn enabled(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        (0..self.disabled.len()).filter(|&i| !self.disabled[i])
    }

    /// Move to the next/previous enabled item, wrapping around.
    fn step(&mut self, forward: bool) {
        let enabled: Vec<usize> = self.enabled().collect();
        if enabled.is_empty() {
            self.active = None;
            return;
        }
        let next = match self.active.and_then(|a| enabled.iter().position(|&i| i == a)) {
            None if forward => 0,
            None => enabled.len() - 1,
            Some(pos) if forward => (pos + 1) % enabled.len(),
            Some(pos) => (pos + enabled.len() - 1) % enabled.len(),
        };
        self.active = Some(enabled[next]);
    }
}
