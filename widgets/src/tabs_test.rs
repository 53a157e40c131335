use super::*;

fn lead_tabs() -> TabsState {
    let mut notes = Tab::new("notes", "Notes");
    notes.disabled = true;
    TabsState::new(
        vec![Tab::new("details", "Details"), notes, Tab::new("activity", "Activity"), Tab::new("files", "Files")],
        None,
    )
}

#[test]
fn defaults_to_first_enabled_tab() {
    let state = lead_tabs();
    assert_eq!(state.selected_id(), Some("details"));

    let mut first = Tab::new("a", "A");
    first.disabled = true;
    let state = TabsState::new(vec![first, Tab::new("b", "B")], None);
    assert_eq!(state.selected_id(), Some("b"));
}

#[test]
fn initial_selection_is_honoured_unless_disabled() {
    let tabs = lead_tabs().tabs().to_vec();
    assert_eq!(TabsState::new(tabs.clone(), Some("files")).selected_id(), Some("files"));
    assert_eq!(TabsState::new(tabs.clone(), Some("notes")).selected_id(), Some("details"));
    assert_eq!(TabsState::new(tabs, Some("nope")).selected_id(), Some("details"));
}

#[test]
fn select_ignores_disabled_and_unknown() {
    let mut state = lead_tabs();
    assert!(state.select("activity"));
    assert!(state.is_selected("activity"));
    assert!(!state.select("notes"));
    assert!(!state.select("nope"));
    assert!(state.is_selected("activity"));
}

#[test]
fn arrows_wrap_and_skip_disabled() {
    let mut state = lead_tabs();
    assert!(state.handle_key(Key::ArrowRight));
    assert_eq!(state.selected_id(), Some("activity"));
    state.handle_key(Key::ArrowRight);
    assert_eq!(state.selected_id(), Some("files"));
    state.handle_key(Key::ArrowRight);
    assert_eq!(state.selected_id(), Some("details"));
    state.handle_key(Key::ArrowLeft);
    assert_eq!(state.selected_id(), Some("files"));
}

#[test]
fn home_and_end() {
    let mut state = lead_tabs();
    assert!(state.handle_key(Key::End));
    assert_eq!(state.selected_id(), Some("files"));
    assert!(state.handle_key(Key::Home));
    assert_eq!(state.selected_id(), Some("details"));
}

#[test]
fn unrelated_keys_are_not_handled() {
    let mut state = lead_tabs();
    assert!(!state.handle_key(Key::ArrowDown));
    assert!(!state.handle_key(Key::Enter));
    assert_eq!(state.selected_id(), Some("details"));
}

#[test]
fn empty_tab_list_handles_nothing() {
    let mut state = TabsState::new(Vec::new(), None);
    assert!(state.selected_id().is_none());
    assert!(!state.handle_key(Key::ArrowRight));
}

#[test]
fn roving_tab_index_and_dom_ids() {
    let state = lead_tabs();
    assert_eq!(state.tab_index(0), 0);
    assert_eq!(state.tab_index(2), -1);
    assert_eq!(TabsState::tab_dom_id("lead", "files"), "lead-tab-files");
    assert_eq!(TabsState::panel_dom_id("lead", "files"), "lead-panel-files");
}
