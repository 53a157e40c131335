use serde_json::json;

use super::*;

fn languages() -> MultiSelectState {
    MultiSelectState::new(
        "tags[]",
        vec![
            SelectOption::new("Ruby", "Ruby"),
            SelectOption::new("Rails", "Rails"),
            SelectOption::new("JavaScript", "JavaScript"),
        ],
    )
}

fn visible_labels(state: &MultiSelectState) -> Vec<&str> {
    state.visible_options().iter().map(|o| o.label.as_str()).collect()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_is_closed_with_everything_visible() {
    let state = languages();
    assert!(!state.is_open());
    assert_eq!(state.query(), "");
    assert_eq!(visible_labels(&state), ["Ruby", "Rails", "JavaScript"]);
    assert!(state.highlighted().is_none());
    assert!(state.selected().is_empty());
    assert_eq!(state.name(), "tags[]");
}

#[test]
fn with_selected_uses_option_labels_and_drops_duplicates() {
    let state = MultiSelectState::new("tags[]", vec![SelectOption::new("Ruby on Rails", "rails")])
        .with_selected(["rails", "unknown", "rails"]);
    assert_eq!(state.selected_values(), ["rails", "unknown"]);
    assert_eq!(state.selected()[0].label, "Ruby on Rails");
    assert_eq!(state.selected()[1].label, "unknown");
}

#[test]
fn blank_error_message_is_ignored() {
    let state = languages().with_error(Some("   ".to_owned()));
    assert!(!state.has_error());
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filter_is_case_insensitive_substring() {
    let mut state = languages();
    state.filter("ra");
    assert_eq!(visible_labels(&state), ["Rails"]);
    state.filter("SCRIPT");
    assert_eq!(visible_labels(&state), ["JavaScript"]);
    state.filter("zzz");
    assert!(visible_labels(&state).is_empty());
}

#[test]
fn filter_empty_twice_is_idempotent() {
    let mut state = languages();
    state.filter("ru");
    state.filter("");
    let once = visible_labels(&state).into_iter().map(str::to_owned).collect::<Vec<_>>();
    state.filter("");
    assert_eq!(visible_labels(&state), once);
    assert_eq!(once, ["Ruby", "Rails", "JavaScript"]);
}

#[test]
fn filter_resets_highlight() {
    let mut state = languages();
    state.open();
    state.navigate(Direction::Next);
    assert_eq!(state.highlighted(), Some(0));
    state.filter("r");
    assert!(state.highlighted().is_none());
}

#[test]
fn grouped_options_stay_together_in_first_appearance_order() {
    let state = MultiSelectState::new(
        "skills[]",
        vec![
            SelectOption::new("Rust", "rust").in_group("Languages"),
            SelectOption::new("Axum", "axum").in_group("Frameworks"),
            SelectOption::new("Go", "go").in_group("Languages"),
        ],
    );
    let groups = state.visible_groups();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, Some("Languages"));
    assert_eq!(
        groups[0].entries.iter().map(|e| e.option.value.as_str()).collect::<Vec<_>>(),
        ["rust", "go"]
    );
    assert_eq!(groups[0].entries[1].position, 1);
    assert_eq!(groups[0].entries[1].index, 2);
    assert_eq!(groups[1].name, Some("Frameworks"));
    assert_eq!(groups[1].entries[0].position, 2);
}

// =============================================================
// Open / close
// =============================================================

#[test]
fn open_and_close_clear_query_but_keep_selection() {
    let mut state = languages();
    state.toggle_option("Ruby", "Ruby");
    state.filter("ja");
    state.open();
    assert!(state.is_open());
    assert_eq!(state.query(), "");
    assert_eq!(visible_labels(&state).len(), 3);

    state.filter("ja");
    state.close();
    assert!(!state.is_open());
    assert_eq!(state.query(), "");
    assert_eq!(visible_labels(&state).len(), 3);
    assert_eq!(state.selected_values(), ["Ruby"]);
}

#[test]
fn outside_interaction_closes_only_when_open_and_outside() {
    let mut state = languages();
    assert!(!state.close_on_outside_interaction(false));

    state.open();
    assert!(!state.close_on_outside_interaction(true));
    assert!(state.is_open());

    assert!(state.close_on_outside_interaction(false));
    assert!(!state.is_open());
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn toggle_appends_then_removes() {
    let mut state = languages();
    assert_eq!(state.toggle_option("Rails", "Rails"), Toggle::Selected);
    assert_eq!(state.toggle_option("Ruby", "Ruby"), Toggle::Selected);
    assert_eq!(state.selected_values(), ["Rails", "Ruby"]);
    assert_eq!(state.toggle_option("Rails", "Rails"), Toggle::Deselected);
    assert_eq!(state.selected_values(), ["Ruby"]);
}

#[test]
fn toggle_sequence_reflects_parity_without_duplicates() {
    let mut state = languages();
    let sequence = ["Ruby", "Rails", "Ruby", "JavaScript", "Ruby", "Rails", "Rails", "Rails"];
    for value in sequence {
        state.toggle_option(value, value);
    }
    let values = state.selected_values();
    for value in ["Ruby", "Rails", "JavaScript"] {
        let toggles = sequence.iter().filter(|v| **v == value).count();
        let present = values.iter().filter(|v| **v == value).count();
        assert_eq!(present, toggles % 2, "{value}");
    }
    assert_eq!(values, ["JavaScript", "Ruby"]);
}

#[test]
fn toggle_clears_query_and_requests_focus() {
    let mut state = languages();
    state.open();
    state.filter("ra");
    let before = state.focus_request();
    state.toggle_option("Rails", "Rails");
    assert_eq!(state.query(), "");
    assert_eq!(visible_labels(&state).len(), 3);
    assert_eq!(state.focus_request(), before + 1);
    assert!(state.is_open());
}

#[test]
fn toggle_accepts_values_outside_the_option_list() {
    let mut state = languages();
    state.toggle_option("elixir", "Elixir");
    assert_eq!(state.selected()[0], Chip { value: "elixir".into(), label: "Elixir".into() });
}

#[test]
fn remove_chip_by_value() {
    let mut state = languages().with_selected(["Ruby", "Rails"]);
    assert!(state.remove("Ruby"));
    assert!(!state.remove("Ruby"));
    assert_eq!(state.selected_values(), ["Rails"]);
}

// =============================================================
// Error display
// =============================================================

#[test]
fn original_error_hides_on_selection_and_returns_when_empty() {
    let mut state = languages().with_error(Some("can't be blank".to_owned()));
    assert!(state.has_error());
    assert_eq!(state.error_message(), Some("can't be blank"));

    state.toggle_option("Ruby", "Ruby");
    assert!(!state.has_error());
    assert!(state.error_message().is_none());

    state.toggle_option("Ruby", "Ruby");
    assert!(state.has_error());
    assert_eq!(state.error_message(), Some("can't be blank"));
}

#[test]
fn no_original_error_never_shows_error() {
    let mut state = languages();
    state.toggle_option("Ruby", "Ruby");
    state.toggle_option("Ruby", "Ruby");
    assert!(!state.has_error());
}

#[test]
fn backspace_removing_last_chip_restores_error() {
    let mut state = languages()
        .with_selected(["Ruby"])
        .with_error(Some("required".to_owned()));
    assert!(!state.has_error());
    assert!(state.remove_last_on_backspace().is_some());
    assert!(state.has_error());
}

// =============================================================
// Backspace
// =============================================================

#[test]
fn backspace_removes_last_added_only_with_empty_query() {
    let mut state = languages();
    state.toggle_option("Ruby", "Ruby");
    state.toggle_option("Rails", "Rails");

    state.filter("j");
    assert!(state.remove_last_on_backspace().is_none());
    assert_eq!(state.selected_values(), ["Ruby", "Rails"]);

    state.filter("");
    let removed = state.remove_last_on_backspace();
    assert_eq!(removed.map(|c| c.value), Some("Rails".to_owned()));
    assert_eq!(state.selected_values(), ["Ruby"]);
}

#[test]
fn backspace_with_nothing_selected_is_noop() {
    let mut state = languages();
    assert!(state.remove_last_on_backspace().is_none());
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn navigate_from_none_lands_on_first() {
    let mut state = languages();
    state.navigate(Direction::Previous);
    assert_eq!(state.highlighted(), Some(0));

    let mut state = languages();
    state.navigate(Direction::Next);
    assert_eq!(state.highlighted(), Some(0));
}

#[test]
fn navigate_next_clamps_at_last() {
    let mut state = languages();
    for _ in 0..10 {
        state.navigate(Direction::Next);
    }
    assert_eq!(state.highlighted(), Some(2));
}

#[test]
fn navigate_previous_clamps_at_first() {
    let mut state = languages();
    state.navigate(Direction::Next);
    state.navigate(Direction::Next);
    for _ in 0..10 {
        state.navigate(Direction::Previous);
    }
    assert_eq!(state.highlighted(), Some(0));
}

#[test]
fn navigate_skips_disabled_options() {
    let mut state = MultiSelectState::new(
        "tags[]",
        vec![
            SelectOption::new("A", "a").disable(),
            SelectOption::new("B", "b"),
            SelectOption::new("C", "c").disable(),
            SelectOption::new("D", "d"),
            SelectOption::new("E", "e").disable(),
        ],
    );
    state.navigate(Direction::Next);
    assert_eq!(state.highlighted(), Some(1));
    state.navigate(Direction::Next);
    assert_eq!(state.highlighted(), Some(3));
    state.navigate(Direction::Next);
    assert_eq!(state.highlighted(), Some(3));
    state.navigate(Direction::Previous);
    assert_eq!(state.highlighted(), Some(1));
    state.navigate(Direction::Previous);
    assert_eq!(state.highlighted(), Some(1));
}

#[test]
fn navigate_with_no_visible_options_clears_highlight() {
    let mut state = languages();
    state.filter("nothing matches");
    state.navigate(Direction::Next);
    assert!(state.highlighted().is_none());
}

#[test]
fn highlight_moves_within_filtered_list() {
    let mut state = languages();
    state.filter("ru");
    state.navigate(Direction::Next);
    state.navigate(Direction::Next);
    assert_eq!(state.highlighted(), Some(0));
    assert_eq!(state.highlighted_option().map(|o| o.value.as_str()), Some("Ruby"));
}

#[test]
fn select_highlighted_toggles_that_option() {
    let mut state = languages();
    state.open();
    state.navigate(Direction::Next);
    state.navigate(Direction::Next);
    assert_eq!(state.select_highlighted(), Some(Toggle::Selected));
    assert_eq!(state.selected_values(), ["Rails"]);
    // Toggling re-filters, which clears the highlight.
    assert!(state.select_highlighted().is_none());
}

#[test]
fn active_descendant_uses_full_list_index() {
    let mut state = languages();
    assert!(state.active_descendant("tags").is_none());
    state.filter("java");
    state.navigate(Direction::Next);
    assert_eq!(state.active_descendant("tags"), Some("tags-option-2".to_owned()));
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn arrow_down_opens_and_highlights() {
    let mut state = languages();
    assert!(state.handle_key(Key::ArrowDown));
    assert!(state.is_open());
    assert_eq!(state.highlighted(), Some(0));
    assert!(state.handle_key(Key::ArrowDown));
    assert_eq!(state.highlighted(), Some(1));
    assert!(state.handle_key(Key::ArrowUp));
    assert_eq!(state.highlighted(), Some(0));
}

#[test]
fn enter_selects_highlighted_when_open() {
    let mut state = languages();
    assert!(!state.handle_key(Key::Enter));
    state.handle_key(Key::ArrowDown);
    assert!(state.handle_key(Key::Enter));
    assert_eq!(state.selected_values(), ["Ruby"]);
}

#[test]
fn escape_closes_when_open() {
    let mut state = languages();
    assert!(!state.handle_key(Key::Escape));
    state.open();
    assert!(state.handle_key(Key::Escape));
    assert!(!state.is_open());
}

#[test]
fn tab_closes_without_consuming() {
    let mut state = languages();
    state.open();
    assert!(!state.handle_key(Key::Tab));
    assert!(!state.is_open());
}

#[test]
fn backspace_key_consumed_only_when_chip_removed() {
    let mut state = languages();
    assert!(!state.handle_key(Key::Backspace));
    state.toggle_option("Ruby", "Ruby");
    assert!(state.handle_key(Key::Backspace));
    assert!(state.selected().is_empty());
}

#[test]
fn other_keys_are_ignored() {
    let mut state = languages();
    assert!(!state.handle_key(Key::Other));
    assert!(!state.handle_key(Key::Home));
}

// =============================================================
// Form integration
// =============================================================

#[test]
fn hidden_inputs_mirror_selection_in_order() {
    let mut state = languages();
    assert!(state.hidden_inputs().is_empty());
    state.toggle_option("JavaScript", "JavaScript");
    state.toggle_option("Ruby", "Ruby");
    let inputs = state.hidden_inputs();
    assert_eq!(
        inputs,
        vec![
            HiddenInput { name: "tags[]".into(), value: "JavaScript".into() },
            HiddenInput { name: "tags[]".into(), value: "Ruby".into() },
        ]
    );
}

#[test]
fn typing_ra_then_selecting_rails_yields_one_hidden_input() {
    let mut state = languages();
    state.open();
    state.filter("ra");
    assert_eq!(visible_labels(&state), ["Rails"]);
    state.navigate(Direction::Next);
    state.select_highlighted();
    assert_eq!(state.selected_values(), ["Rails"]);
    let inputs = state.hidden_inputs();
    assert_eq!(inputs.len(), 1);
    assert_eq!(inputs[0].value, "Rails");
}

// =============================================================
// Option parsing
// =============================================================

#[test]
fn from_raw_reads_label_and_value() {
    let option = SelectOption::from_raw(&json!({"label": "Ruby", "value": "rb"}), None);
    assert_eq!(option, SelectOption::new("Ruby", "rb"));
}

#[test]
fn from_raw_accepts_text_and_id_aliases() {
    let option = SelectOption::from_raw(&json!({"text": "Hot", "id": 7, "disabled": true}), Some("Temp"));
    assert_eq!(option.label, "Hot");
    assert_eq!(option.value, "7");
    assert_eq!(option.group.as_deref(), Some("Temp"));
    assert!(option.disabled);
}

#[test]
fn from_raw_fills_missing_half_from_the_other() {
    let only_label = SelectOption::from_raw(&json!({"label": "Solo"}), None);
    assert_eq!(only_label.value, "Solo");
    let only_value = SelectOption::from_raw(&json!({"value": "v"}), None);
    assert_eq!(only_value.label, "v");
}

#[test]
fn from_raw_pair_is_label_then_value() {
    let option = SelectOption::from_raw(&json!(["Contacted", "contacted"]), None);
    assert_eq!(option.label, "Contacted");
    assert_eq!(option.value, "contacted");
}

#[test]
fn from_raw_malformed_falls_back_to_string_form() {
    let scalar = SelectOption::from_raw(&json!(42), None);
    assert_eq!((scalar.label.as_str(), scalar.value.as_str()), ("42", "42"));

    let text = SelectOption::from_raw(&json!("plain"), None);
    assert_eq!((text.label.as_str(), text.value.as_str()), ("plain", "plain"));

    let object = SelectOption::from_raw(&json!({"colour": "red"}), None);
    assert_eq!(object.label, r#"{"colour":"red"}"#);
    assert_eq!(object.value, object.label);

    let triple = SelectOption::from_raw(&json!([1, 2, 3]), None);
    assert_eq!(triple.value, "[1,2,3]");

    let null = SelectOption::from_raw(&json!(null), None);
    assert_eq!(null.value, "");
}

#[test]
fn options_from_json_handles_flat_and_grouped_lists() {
    let flat = options_from_json(&json!(["Ruby", {"label": "Rails", "value": "rails"}]));
    assert_eq!(flat.len(), 2);
    assert!(flat.iter().all(|o| o.group.is_none()));

    let grouped = options_from_json(&json!({
        "Backend": ["Ruby", "Rust"],
        "Frontend": [{"label": "Stimulus", "value": "stimulus"}],
        "Misc": "Other"
    }));
    assert_eq!(
        grouped.iter().map(|o| (o.group.as_deref(), o.value.as_str())).collect::<Vec<_>>(),
        [
            (Some("Backend"), "Ruby"),
            (Some("Backend"), "Rust"),
            (Some("Frontend"), "stimulus"),
            (Some("Misc"), "Other"),
        ]
    );

    assert!(options_from_json(&json!(null)).is_empty());
    assert_eq!(options_from_json(&json!(true))[0].value, "true");
}
