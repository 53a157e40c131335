//! Menu button driven by [`DropdownState`].
//!
//! Focus stays on the trigger while the menu is open; the active item is
//! announced through `aria-activedescendant`. A document `mousedown`
//! listener closes the menu on outside clicks and exists only while open.

use leptos::html;
use leptos::prelude::*;
use widgets::dropdown::{DropdownCommand, DropdownState};
use widgets::keys::Key;
#[cfg(feature = "hydrate")]
use widgets::subscription::SubscriptionSlot;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub disabled: bool,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), disabled: false }
    }
}

fn item_dom_id(prefix: &str, index: usize) -> String {
    format!("{prefix}-item-{index}")
}

#[component]
pub fn Dropdown(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    items: Vec<MenuItem>,
    on_select: Callback<usize>,
) -> impl IntoView {
    let state = RwSignal::new(DropdownState::new(items.iter().map(|i| i.disabled).collect()));
    let root_ref = NodeRef::<html::Div>::new();
    let trigger_ref = NodeRef::<html::Button>::new();
    let menu_id = format!("{id}-menu");

    #[cfg(feature = "hydrate")]
    {
        let outside = StoredValue::new_local(SubscriptionSlot::new());
        let open = Memo::new(move |_| state.with(DropdownState::is_open));
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

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let key = Key::from_dom(&ev.key());
        match state.try_update(|s| s.handle_key(key)) {
            Some(DropdownCommand::Handled) => ev.prevent_default(),
            Some(DropdownCommand::Activate(index)) => {
                ev.prevent_default();
                on_select.run(index);
            }
            Some(DropdownCommand::RestoreFocus) => {
                ev.prevent_default();
                if let Some(trigger) = trigger_ref.get_untracked() {
                    if let Err(e) = trigger.focus() {
                        leptos::logging::warn!("dropdown focus failed: {e:?}");
                    }
                }
            }
            Some(DropdownCommand::Ignored) | None => {}
        }
    };

    let prefix = id.clone();
    let active_descendant = move || state.with(|s| s.active().map(|i| item_dom_id(&prefix, i)));

    let prefix = id.clone();
    let rendered_items = move || {
        let active = state.with(DropdownState::active);
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let disabled = item.disabled;
                let is_active = active == Some(index);
                view! {
                    <li
                        id=item_dom_id(&prefix, index)
                        role="menuitem"
                        class="dropdown__item"
                        class:dropdown__item--active=is_active
                        aria-disabled=disabled.then_some("true")
                        on:mouseenter=move |_| state.update(|s| s.hover(index))
                        on:mousedown=move |ev: leptos::ev::MouseEvent| ev.prevent_default()
                        on:click=move |_| {
                            if !disabled {
                                state.update(DropdownState::close);
                                on_select.run(index);
                            }
                        }
                    >
                        {item.label.clone()}
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div id=id class="dropdown" class:dropdown--open=move || state.with(DropdownState::is_open) node_ref=root_ref>
            <button
                type="button"
                class="dropdown__trigger"
                aria-haspopup="menu"
                aria-controls=menu_id.clone()
                aria-expanded=move || state.with(DropdownState::is_open).to_string()
                aria-activedescendant=active_descendant
                node_ref=trigger_ref
                on:click=move |_| state.update(DropdownState::toggle)
                on:keydown=on_keydown
            >
                {label}
            </button>
            <ul id=menu_id class="dropdown__menu" role="menu" hidden=move || !state.with(DropdownState::is_open)>
                {rendered_items}
            </ul>
        </div>
    }
}
