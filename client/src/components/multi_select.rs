//! Searchable multi-value combobox with chips and hidden form inputs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside a plain `<form>`: the hidden inputs carry the selection, so
//! submission needs no JavaScript. All behavior lives in
//! [`MultiSelectState`]; this component only maps events and ARIA.
//!
//! The click-outside listener exists only while the panel is open.

use leptos::html;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use widgets::keys::Key;
use widgets::multi_select::{MultiSelectState, SelectOption};
#[cfg(feature = "hydrate")]
use widgets::subscription::SubscriptionSlot;

/// One option row, detached from the state borrow for rendering.
#[derive(Clone)]
struct OptionRow {
    dom_id: String,
    value: String,
    label: String,
    disabled: bool,
    selected: bool,
    highlighted: bool,
}

fn option_rows(state: &MultiSelectState, prefix: &str) -> Vec<(Option<String>, Vec<OptionRow>)> {
    let highlighted = state.highlighted();
    state
        .visible_groups()
        .into_iter()
        .map(|group| {
            let rows = group
                .entries
                .iter()
                .map(|entry| OptionRow {
                    dom_id: MultiSelectState::option_dom_id(prefix, entry.index),
                    value: entry.option.value.clone(),
                    label: entry.option.label.clone(),
                    disabled: entry.option.disabled,
                    selected: state.is_selected(&entry.option.value),
                    highlighted: highlighted == Some(entry.position),
                })
                .collect();
            (group.name.map(str::to_owned), rows)
        })
        .collect()
}

#[component]
pub fn MultiSelect(
    /// Root element id; option ids are derived from it.
    #[prop(into)]
    id: String,
    /// Form field name, e.g. `tags[]`.
    #[prop(into)]
    name: String,
    options: Vec<SelectOption>,
    #[prop(optional)] selected: Vec<String>,
    /// Validation message the form was rendered with.
    #[prop(optional_no_strip)]
    error: Option<String>,
    #[prop(into, default = "Search…".to_owned())] placeholder: String,
) -> impl IntoView {
    let state = RwSignal::new(MultiSelectState::new(name, options).with_selected(selected).with_error(error));
    let root_ref = NodeRef::<html::Div>::new();
    let input_ref = NodeRef::<html::Input>::new();

    let input_id = format!("{id}-input");
    let listbox_id = format!("{id}-listbox");
    let controls_id = listbox_id.clone();
    let error_id = format!("{id}-error");

    #[cfg(feature = "hydrate")]
    {
        // Re-focus the search input after every selection change.
        Effect::new(move |prev: Option<u64>| {
            let request = state.with(MultiSelectState::focus_request);
            if prev.is_some_and(|p| p != request) {
                if let Some(input) = input_ref.get_untracked() {
                    if let Err(e) = input.focus() {
                        log::warn!("multi-select focus failed: {e:?}");
                    }
                }
            }
            request
        });

        let outside = StoredValue::new_local(SubscriptionSlot::new());
        let open = Memo::new(move |_| state.with(MultiSelectState::is_open));
        Effect::new(move || {
            if open.get() {
                let subscription = crate::util::dom::on_document("mousedown", move |ev| {
                    let Some(root) = root_ref.get_untracked() else {
                        return;
                    };
                    let inside = crate::util::dom::event_within(&root, &ev);
                    state.update(|s| {
                        s.close_on_outside_interaction(inside);
                    });
                });
                outside.update_value(|slot| slot.set(subscription));
            } else {
                outside.update_value(SubscriptionSlot::clear);
            }
        });
        on_cleanup(move || outside.update_value(SubscriptionSlot::clear));
    }

    let on_input = move |ev: leptos::ev::Event| {
        let query = event_target_value(&ev);
        state.update(|s| {
            if !s.is_open() {
                s.open();
            }
            s.filter(&query);
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let key = Key::from_dom(&ev.key());
        if state.try_update(|s| s.handle_key(key)).unwrap_or(false) {
            ev.prevent_default();
        }
    };

    let on_focus = move |_| {
        state.update(|s| {
            if !s.is_open() {
                s.open();
            }
        });
    };

    let prefix = id.clone();
    let active_descendant = move || state.with(|s| s.active_descendant(&prefix));
    let describedby = {
        let error_id = error_id.clone();
        move || state.with(MultiSelectState::has_error).then(|| error_id.clone())
    };

    let chips = move || {
        state
            .with(|s| s.selected().to_vec())
            .into_iter()
            .map(|chip| {
                let value = chip.value.clone();
                let remove_label = format!("Remove {}", chip.label);
                view! {
                    <li class="multi-select__chip">
                        <span class="multi-select__chip-label">{chip.label}</span>
                        <button
                            type="button"
                            class="multi-select__chip-remove"
                            aria-label=remove_label
                            on:click=move |_| {
                                state.update(|s| {
                                    s.remove(&value);
                                });
                            }
                        >
                            "×"
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    let prefix = id.clone();
    let listbox = move || {
        state.with(|s| option_rows(s, &prefix)).into_iter().map(|(group, rows)| {
            let rows = rows
                .into_iter()
                .map(|row| {
                    let OptionRow { dom_id, value, label, disabled, selected, highlighted } = row;
                    let toggle_label = label.clone();
                    view! {
                        <li
                            id=dom_id
                            role="option"
                            class="multi-select__option"
                            class:multi-select__option--highlighted=highlighted
                            class:multi-select__option--selected=selected
                            aria-selected=selected.to_string()
                            aria-disabled=disabled.then_some("true")
                            on:mousedown=move |ev: leptos::ev::MouseEvent| {
                                // Keep focus in the search input.
                                ev.prevent_default();
                                if !disabled {
                                    state.update(|s| {
                                        s.toggle_option(&value, &toggle_label);
                                    });
                                }
                            }
                        >
                            {label}
                        </li>
                    }
                })
                .collect_view();
            match group {
                Some(name) => view! {
                    <li role="presentation" class="multi-select__group">
                        <div class="multi-select__group-label" role="presentation">{name}</div>
                        <ul role="group" class="multi-select__group-options">{rows}</ul>
                    </li>
                }
                .into_any(),
                None => rows.into_any(),
            }
        })
        .collect_view()
    };

    let hidden_inputs = move || {
        state
            .with(MultiSelectState::hidden_inputs)
            .into_iter()
            .map(|input| view! { <input type="hidden" name=input.name value=input.value/> })
            .collect_view()
    };

    let error_text = move || state.with(|s| s.error_message().map(str::to_owned));

    view! {
        <div
            id=id
            class="multi-select"
            class:multi-select--open=move || state.with(MultiSelectState::is_open)
            class:multi-select--invalid=move || state.with(MultiSelectState::has_error)
            node_ref=root_ref
        >
            <ul class="multi-select__chips">{chips}</ul>
            <input
                type="text"
                id=input_id
                class="multi-select__search"
                role="combobox"
                autocomplete="off"
                aria-autocomplete="list"
                aria-controls=controls_id
                aria-expanded=move || state.with(MultiSelectState::is_open).to_string()
                aria-activedescendant=active_descendant
                aria-invalid=move || state.with(MultiSelectState::has_error).to_string()
                aria-describedby=describedby
                placeholder=placeholder
                node_ref=input_ref
                prop:value=move || state.with(|s| s.query().to_owned())
                on:input=on_input
                on:keydown=on_keydown
                on:focus=on_focus
            />
            <Show when=move || state.with(MultiSelectState::is_open)>
                <ul id=listbox_id.clone() class="multi-select__listbox" role="listbox" aria-multiselectable="true">
                    {listbox.clone()}
                </ul>
            </Show>
            {hidden_inputs}
            <Show when=move || state.with(MultiSelectState::has_error)>
                <p id=error_id.clone() class="multi-select__error" role="alert">{error_text}</p>
            </Show>
        </div>
    }
}
