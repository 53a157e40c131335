//! Accessible tab list driven by [`TabsState`].

use leptos::prelude::*;
use leptos::tachys::view::any_view::AnyView;
use widgets::keys::Key;
use widgets::tabs::{Tab, TabsState};

use crate::util::dom;

#[component]
pub fn Tabs(
    /// Prefix for tab and panel element ids.
    #[prop(into)]
    id: String,
    tabs: Vec<Tab>,
    #[prop(optional, into)] initial: Option<String>,
    /// Renders the panel for the selected tab id.
    #[prop(into)]
    render_panel: Callback<String, AnyView>,
) -> impl IntoView {
    let state = RwSignal::new(TabsState::new(tabs, initial.as_deref()));

    let prefix = id.clone();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let key = Key::from_dom(&ev.key());
        if !state.try_update(|s| s.handle_key(key)).unwrap_or(false) {
            return;
        }
        ev.prevent_default();
        if let Some(tab_id) = state.with_untracked(|s| s.selected_id().map(str::to_owned)) {
            dom::focus_by_id(&TabsState::tab_dom_id(&prefix, &tab_id));
        }
    };

    let prefix = id.clone();
    let buttons = move || {
        let (tabs, selected_index) = state.with(|s| (s.tabs().to_vec(), s.selected_index()));
        tabs.into_iter()
            .enumerate()
            .map(|(index, tab)| {
                let is_selected = index == selected_index;
                let tab_index = state.with_untracked(|s| s.tab_index(index));
                let select_id = tab.id.clone();
                view! {
                    <button
                        type="button"
                        role="tab"
                        class="tabs__tab"
                        class:tabs__tab--selected=is_selected
                        id=TabsState::tab_dom_id(&prefix, &tab.id)
                        aria-controls=TabsState::panel_dom_id(&prefix, &tab.id)
                        aria-selected=is_selected.to_string()
                        tabindex=tab_index
                        disabled=tab.disabled
                        on:click=move |_| {
                            state.update(|s| {
                                s.select(&select_id);
                            });
                        }
                    >
                        {tab.label}
                    </button>
                }
            })
            .collect_view()
    };

    let prefix = id.clone();
    let panel = move || {
        let selected = state.with(|s| s.selected_id().map(str::to_owned)).unwrap_or_default();
        view! {
            <div
                role="tabpanel"
                class="tabs__panel"
                id=TabsState::panel_dom_id(&prefix, &selected)
                aria-labelledby=TabsState::tab_dom_id(&prefix, &selected)
                tabindex="0"
            >
                {render_panel.run(selected.clone())}
            </div>
        }
    };

    view! {
        <div class="tabs" id=id>
            <div class="tabs__list" role="tablist" on:keydown=on_keydown>
                {buttons}
            </div>
            {panel}
        </div>
    }
}
