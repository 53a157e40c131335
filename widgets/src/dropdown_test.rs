use super::*;

fn menu() -> DropdownState {
    // Items: Edit, Duplicate (disabled), Archive, Delete.
    DropdownState::new(vec![false, true, false, false])
}

#[test]
fn starts_closed_without_active_item() {
    let state = menu();
    assert!(!state.is_open());
    assert!(state.active().is_none());
    assert_eq!(state.item_count(), 4);
}

#[test]
fn toggle_opens_and_closes() {
    let mut state = menu();
    state.toggle();
    assert!(state.is_open());
    state.toggle();
    assert!(!state.is_open());
}

#[test]
fn arrow_down_opens_and_walks_enabled_items_with_wraparound() {
    let mut state = menu();
    assert_eq!(state.handle_key(Key::ArrowDown), DropdownCommand::Handled);
    assert!(state.is_open());
    assert_eq!(state.active(), Some(0));
    state.handle_key(Key::ArrowDown);
    assert_eq!(state.active(), Some(2));
    state.handle_key(Key::ArrowDown);
    assert_eq!(state.active(), Some(3));
    state.handle_key(Key::ArrowDown);
    assert_eq!(state.active(), Some(0));
}

#[test]
fn arrow_up_from_nothing_lands_on_last() {
    let mut state = menu();
    state.handle_key(Key::ArrowUp);
    assert_eq!(state.active(), Some(3));
    state.handle_key(Key::ArrowUp);
    assert_eq!(state.active(), Some(2));
    state.handle_key(Key::ArrowUp);
    assert_eq!(state.active(), Some(0));
    state.handle_key(Key::ArrowUp);
    assert_eq!(state.active(), Some(3));
}

#[test]
fn home_and_end_jump_to_ends() {
    let mut state = DropdownState::new(vec![true, false, false, true]);
    state.open();
    state.handle_key(Key::End);
    assert_eq!(state.active(), Some(2));
    state.handle_key(Key::Home);
    assert_eq!(state.active(), Some(1));
}

#[test]
fn enter_activates_and_closes() {
    let mut state = menu();
    state.handle_key(Key::ArrowDown);
    state.handle_key(Key::ArrowDown);
    assert_eq!(state.handle_key(Key::Enter), DropdownCommand::Activate(2));
    assert!(!state.is_open());
    assert!(state.active().is_none());
}

#[test]
fn space_without_active_item_is_handled_but_activates_nothing() {
    let mut state = menu();
    state.open();
    assert_eq!(state.handle_key(Key::Space), DropdownCommand::Handled);
    assert!(state.is_open());
}

#[test]
fn escape_closes_and_restores_focus() {
    let mut state = menu();
    state.open();
    assert_eq!(state.handle_key(Key::Escape), DropdownCommand::RestoreFocus);
    assert!(!state.is_open());
    assert_eq!(state.handle_key(Key::Escape), DropdownCommand::Ignored);
}

#[test]
fn tab_closes_without_consuming() {
    let mut state = menu();
    state.open();
    assert_eq!(state.handle_key(Key::Tab), DropdownCommand::Ignored);
    assert!(!state.is_open());
}

#[test]
fn hover_ignores_disabled_and_out_of_range() {
    let mut state = menu();
    state.open();
    state.hover(1);
    assert!(state.active().is_none());
    state.hover(9);
    assert!(state.active().is_none());
    state.hover(2);
    assert_eq!(state.active(), Some(2));
}

#[test]
fn all_disabled_menu_has_no_active_item() {
    let mut state = DropdownState::new(vec![true, true]);
    state.handle_key(Key::ArrowDown);
    assert!(state.active().is_none());
}

#[test]
fn outside_interaction_closes_open_menu() {
    let mut state = menu();
    assert!(!state.close_on_outside_interaction(false));
    state.open();
    assert!(!state.close_on_outside_interaction(true));
    assert!(state.close_on_outside_interaction(false));
    assert!(!state.is_open());
}
