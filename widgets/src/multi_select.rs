//! Multi-value combobox state: search filter, keyboard highlight, chips, and
//! the hidden inputs submitted with the surrounding form.
//!
//! DESIGN
//! ======
//! The selection is an ordered list of [`Chip`]s; insertion order is display
//! order and also the order of the hidden inputs. Everything the view needs
//! (visible options, highlight, error display, ARIA ids) is derived from this
//! struct, so the rendered markup can be rebuilt from state at any time.
//!
//! ERROR DISPLAY
//! =============
//! A server-side validation error ("select at least one") arrives with the
//! initial render. The message is kept for the lifetime of the widget and is
//! shown only while the selection is empty: selecting anything hides it,
//! removing the last chip brings it back.

#[cfg(test)]
#[path = "multi_select_test.rs"]
mod multi_select_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::keys::Key;

/// One selectable entry in the option list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    /// Optional category heading the option is listed under.
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into(), group: None, disabled: false }
    }

    #[must_use]
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    #[must_use]
    pub fn disable(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Build an option from loosely-shaped JSON.
    ///
    /// Accepted shapes: `{"label": .., "value": ..}` (also `text`/`name` for
    /// the label and `id` for the value), a `[label, value]` pair, or any
    /// scalar. Whatever cannot be read falls back to the coerced string form
    /// of the raw value, used as both label and value.
    #[must_use]
    pub fn from_raw(raw: &Value, group: Option<&str>) -> Self {
        let (label, value, disabled) = match raw {
            Value::Object(map) => {
                let label = ["label", "text", "name"].iter().find_map(|k| map.get(*k)).map(coerce);
                let value = ["value", "id"].iter().find_map(|k| map.get(*k)).map(coerce);
                let disabled = map.get("disabled").and_then(Value::as_bool).unwrap_or(false);
                match (label, value) {
                    (Some(label), Some(value)) => (label, value, disabled),
                    (Some(label), None) => (label.clone(), label, disabled),
                    (None, Some(value)) => (value.clone(), value, disabled),
                    (None, None) => {
                        let fallback = coerce(raw);
                        log::warn!("option without label or value, using {fallback}");
                        (fallback.clone(), fallback, disabled)
                    }
                }
            }
            Value::Array(pair) if pair.len() == 2 => (coerce(&pair[0]), coerce(&pair[1]), false),
            other => {
                let text = coerce(other);
                (text.clone(), text, false)
            }
        };
        Self { label, value, group: group.map(str::to_owned), disabled }
    }
}

/// String form of a JSON value: strings verbatim, `null` as empty, anything
/// else as its JSON text.
fn coerce(raw: &Value) -> String {
    match raw {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Parse an option list embedded in markup.
///
/// An array yields ungrouped options; an object maps group names to arrays of
/// options. `null` yields nothing and any other scalar becomes one option.
#[must_use]
pub fn options_from_json(raw: &Value) -> Vec<SelectOption> {
    match raw {
        Value::Array(items) => items.iter().map(|item| SelectOption::from_raw(item, None)).collect(),
        Value::Object(groups) => groups
            .iter()
            .flat_map(|(group, items)| match items {
                Value::Array(items) => items
                    .iter()
                    .map(|item| SelectOption::from_raw(item, Some(group.as_str())))
                    .collect::<Vec<_>>(),
                single => vec![SelectOption::from_raw(single, Some(group.as_str()))],
            })
            .collect(),
        Value::Null => Vec::new(),
        scalar => vec![SelectOption::from_raw(scalar, None)],
    }
}

/// A selected value as displayed in the chip list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chip {
    pub value: String,
    pub label: String,
}

/// A `<input type="hidden">` to render for form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HiddenInput {
    pub name: String,
    pub value: String,
}

/// Highlight movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// What a toggle did to the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Selected,
    Deselected,
}

/// A visible option together with its positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleEntry<'a> {
    /// Position within the visible list (what `highlighted` indexes).
    pub position: usize,
    /// Index into the full option list; stable across filtering.
    pub index: usize,
    pub option: &'a SelectOption,
}

/// A run of visible options sharing the same group heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibleGroup<'a> {
    pub name: Option<&'a str>,
    pub entries: Vec<VisibleEntry<'a>>,
}

/// Combobox state. See the module docs for the selection and error model.
#[derive(Clone, Debug)]
pub struct MultiSelectState {
    name: String,
    options: Vec<SelectOption>,
    selected: Vec<Chip>,
    query: String,
    /// Indices into `options`, in display order.
    visible: Vec<usize>,
    /// Position within `visible`.
    highlighted: Option<usize>,
    open: bool,
    original_error: Option<String>,
    focus_request: u64,
}

impl MultiSelectState {
    /// Create a closed combobox submitting under `name`.
    pub fn new(name: impl Into<String>, options: Vec<SelectOption>) -> Self {
        let mut state = Self {
            name: name.into(),
            options,
            selected: Vec::new(),
            query: String::new(),
            visible: Vec::new(),
            highlighted: None,
            open: false,
            original_error: None,
            focus_request: 0,
        };
        state.refilter();
        state
    }

    /// Seed the selection from server-rendered values. Labels come from the
    /// option list when known; duplicates are dropped.
    #[must_use]
    pub fn with_selected<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            let value = value.into();
            if self.is_selected(&value) {
                continue;
            }
            let label = self.label_for(&value).unwrap_or(value.as_str()).to_owned();
            self.selected.push(Chip { value, label });
        }
        self
    }

    /// Attach the validation error the field was rendered with, if any.
    #[must_use]
    pub fn with_error(mut self, message: Option<String>) -> Self {
        self.original_error = message.filter(|m| !m.trim().is_empty());
        self
    }

    // -----------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn selected(&self) -> &[Chip] {
        &self.selected
    }

    #[must_use]
    pub fn selected_values(&self) -> Vec<&str> {
        self.selected.iter().map(|c| c.value.as_str()).collect()
    }

    #[must_use]
    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|c| c.value == value)
    }

    /// Visible options in display order.
    #[must_use]
    pub fn visible_options(&self) -> Vec<&SelectOption> {
        self.visible.iter().map(|&i| &self.options[i]).collect()
    }

    /// Visible options grouped into consecutive runs by group heading.
    #[must_use]
    pub fn visible_groups(&self) -> Vec<VisibleGroup<'_>> {
        let mut groups: Vec<VisibleGroup<'_>> = Vec::new();
        for (position, &index) in self.visible.iter().enumerate() {
            let option = &self.options[index];
            let name = option.group.as_deref();
            let entry = VisibleEntry { position, index, option };
            match groups.last_mut() {
                Some(group) if group.name == name => group.entries.push(entry),
                _ => groups.push(VisibleGroup { name, entries: vec![entry] }),
            }
        }
        groups
    }

    /// Position of the highlighted option within the visible list.
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    #[must_use]
    pub fn highlighted_option(&self) -> Option<&SelectOption> {
        self.highlighted
            .and_then(|pos| self.visible.get(pos))
            .map(|&i| &self.options[i])
    }

    /// Whether the validation message is currently shown.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.original_error.is_some() && self.selected.is_empty()
    }

    /// The validation message, only while it is shown.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        if self.has_error() { self.original_error.as_deref() } else { None }
    }

    /// Bumped whenever the search input should regain focus.
    #[must_use]
    pub fn focus_request(&self) -> u64 {
        self.focus_request
    }

    /// Hidden inputs for form submission, one per selected value, in order.
    #[must_use]
    pub fn hidden_inputs(&self) -> Vec<HiddenInput> {
        self.selected
            .iter()
            .map(|c| HiddenInput { name: self.name.clone(), value: c.value.clone() })
            .collect()
    }

    /// DOM id of the option at `index` (full list index) for a widget whose
    /// root id is `prefix`.
    #[must_use]
    pub fn option_dom_id(prefix: &str, index: usize) -> String {
        format!("{prefix}-option-{index}")
    }

    /// Value for `aria-activedescendant`.
    #[must_use]
    pub fn active_descendant(&self, prefix: &str) -> Option<String> {
        self.highlighted
            .and_then(|pos| self.visible.get(pos))
            .map(|&i| Self::option_dom_id(prefix, i))
    }

    // -----------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------

    /// Show the panel with an empty query.
    pub fn open(&mut self) {
        self.open = true;
        self.query.clear();
        self.refilter();
    }

    /// Hide the panel and clear the query. The selection is untouched.
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.refilter();
    }

    /// Replace the query and recompute the visible options.
    pub fn filter(&mut self, query: &str) {
        query.clone_into(&mut self.query);
        self.refilter();
    }

    /// Select `value` if absent, deselect it if present.
    pub fn toggle_option(&mut self, value: &str, label: &str) -> Toggle {
        let outcome = if let Some(pos) = self.position_of(value) {
            self.selected.remove(pos);
            Toggle::Deselected
        } else {
            self.selected.push(Chip { value: value.to_owned(), label: label.to_owned() });
            Toggle::Selected
        };
        self.after_selection_change();
        log::debug!("multi-select {}: {outcome:?} {value}", self.name);
        outcome
    }

    /// Remove one chip, as its own remove control does.
    pub fn remove(&mut self, value: &str) -> bool {
        let Some(pos) = self.position_of(value) else {
            return false;
        };
        self.selected.remove(pos);
        self.after_selection_change();
        true
    }

    /// Backspace in an empty search input removes the most recent chip.
    pub fn remove_last_on_backspace(&mut self) -> Option<Chip> {
        if !self.query.is_empty() {
            return None;
        }
        let chip = self.selected.pop()?;
        self.after_selection_change();
        Some(chip)
    }

    /// Move the highlight one enabled option in `direction`, clamped at the
    /// ends. With nothing highlighted, both directions land on the first
    /// enabled option.
    pub fn navigate(&mut self, direction: Direction) {
        let enabled: Vec<usize> = (0..self.visible.len())
            .filter(|&pos| !self.options[self.visible[pos]].disabled)
            .collect();
        let Some(&first) = enabled.first() else {
            self.highlighted = None;
            return;
        };
        self.highlighted = Some(match (self.highlighted, direction) {
            (None, _) => first,
            (Some(current), Direction::Next) => {
                enabled.iter().copied().find(|&pos| pos > current).unwrap_or(current)
            }
            (Some(current), Direction::Previous) => {
                enabled.iter().rev().copied().find(|&pos| pos < current).unwrap_or(current)
            }
        });
    }

    /// Toggle the highlighted option, if any.
    pub fn select_highlighted(&mut self) -> Option<Toggle> {
        let option = self.highlighted_option()?;
        if option.disabled {
            return None;
        }
        let (value, label) = (option.value.clone(), option.label.clone());
        Some(self.toggle_option(&value, &label))
    }

    /// Close when a pointer interaction happened outside the widget root.
    /// Returns whether the panel closed.
    pub fn close_on_outside_interaction(&mut self, inside: bool) -> bool {
        if self.open && !inside {
            self.close();
            return true;
        }
        false
    }

    /// Keyboard dispatch for the search input. Returns `true` when the key
    /// was consumed and its default action should be prevented.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::ArrowDown => {
                if !self.open {
                    self.open();
                }
                self.navigate(Direction::Next);
                true
            }
            Key::ArrowUp => {
                if !self.open {
                    self.open();
                }
                self.navigate(Direction::Previous);
                true
            }
            Key::Enter if self.open => {
                self.select_highlighted();
                true
            }
            Key::Escape if self.open => {
                self.close();
                true
            }
            Key::Backspace => self.remove_last_on_backspace().is_some(),
            Key::Tab => {
                if self.open {
                    self.close();
                }
                false
            }
            _ => false,
        }
    }

    // -----------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------

    fn position_of(&self, value: &str) -> Option<usize> {
        self.selected.iter().position(|c| c.value == value)
    }

    fn label_for(&self, value: &str) -> Option<&str> {
        self.options.iter().find(|o| o.value == value).map(|o| o.label.as_str())
    }

    fn after_selection_change(&mut self) {
        self.query.clear();
        self.refilter();
        self.focus_request += 1;
    }

    /// Recompute `visible` from `query`, keeping options of the same group
    /// together in order of each group's first appearance. Always clears the
    /// highlight.
    fn refilter(&mut self) {
        let needle = self.query.to_lowercase();
        let mut group_order: Vec<Option<&str>> = Vec::new();
        for option in &self.options {
            let group = option.group.as_deref();
            if !group_order.contains(&group) {
                group_order.push(group);
            }
        }
        let rank = |group: Option<&str>| group_order.iter().position(|g| *g == group).unwrap_or(0);

        let mut visible: Vec<usize> = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, o)| needle.is_empty() || o.label.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect();
        visible.sort_by_key(|&i| rank(self.options[i].group.as_deref()));

        self.visible = visible;
        self.highlighted = None;
    }
}
