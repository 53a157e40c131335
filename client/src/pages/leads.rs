//! Lead pipeline page: kanban board plus a flat list view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leads are fetched once on hydration (and again from the actions menu) and
//! folded into [`LeadsState`]. Status changes go through [`HttpStatusSync`]
//! built from the embedded [`ClientConfig`].

#[cfg(test)]
#[path = "leads_test.rs"]
mod leads_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use widgets::tabs::Tab;
#[cfg(feature = "hydrate")]
use widgets::toast::ToastKind;

use crate::components::copy_button::CopyButton;
use crate::components::dropdown::{Dropdown, MenuItem};
use crate::components::kanban_board::KanbanBoard;
use crate::components::tabs::Tabs;
use crate::components::toast_stack::ToastStack;
use crate::config::ClientConfig;
use crate::net::api::HttpStatusSync;
use crate::state::leads::{LeadsState, edit_path};
use crate::state::ui::UiState;

const ACTION_REFRESH: usize = 0;
const ACTION_DISMISS: usize = 1;

fn page_tabs() -> Vec<Tab> {
    vec![Tab::new("board", "Board"), Tab::new("list", "List")]
}

fn action_items() -> Vec<MenuItem> {
    vec![MenuItem::new("Refresh"), MenuItem::new("Dismiss notifications")]
}

/// `"12 leads"`, `"1 lead"`.
fn lead_count_label(count: usize) -> String {
    if count == 1 { "1 lead".to_owned() } else { format!("{count} leads") }
}

/// One row of the list view.
#[derive(Clone, Debug, PartialEq, Eq)]
struct LeadRow {
    id: String,
    title: String,
    status_label: String,
}

fn lead_rows(state: &LeadsState) -> Vec<LeadRow> {
    state
        .board
        .columns()
        .iter()
        .flat_map(|column| {
            column.cards.iter().map(|card| LeadRow {
                id: card.id.clone(),
                title: card.title.clone(),
                status_label: column.label.clone(),
            })
        })
        .collect()
}

fn load_leads(leads: RwSignal<LeadsState>, ui: RwSignal<UiState>, config: ClientConfig) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_leads().await {
                Ok(list) => {
                    log::debug!("loaded {} leads", list.len());
                    leads.set(LeadsState::loaded(&config, &list));
                }
                Err(e) => {
                    log::error!("lead fetch failed: {e}");
                    let now = crate::util::dom::now_ms();
                    ui.update(|u| {
                        u.notify(ToastKind::Error, "Leads could not be loaded.", now);
                    });
                    leads.set(LeadsState::failed(&config, e));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (leads, ui, config);
    }
}

#[component]
fn LeadList(leads: RwSignal<LeadsState>) -> impl IntoView {
    view! {
        <table class="lead-list">
            <thead>
                <tr>
                    <th scope="col">"Lead"</th>
                    <th scope="col">"Status"</th>
                    <th scope="col">"Link"</th>
                </tr>
            </thead>
            <tbody>
                <For each=move || leads.with(lead_rows) key=|row| row.id.clone() let:row>
                    <tr>
                        <td>
                            <a href=edit_path(&row.id)>{row.title}</a>
                        </td>
                        <td>{row.status_label}</td>
                        <td>
                            <CopyButton text=edit_path(&row.id) label="Copy link"/>
                        </td>
                    </tr>
                </For>
            </tbody>
        </table>
    }
}

#[component]
pub fn LeadsPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let leads = expect_context::<RwSignal<LeadsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let sync = HttpStatusSync::from_config(&config);
    let config = StoredValue::new(config);

    load_leads(leads, ui, config.get_value());

    let on_action = Callback::new(move |index: usize| match index {
        ACTION_REFRESH => {
            leads.update(|l| l.loading = true);
            load_leads(leads, ui, config.get_value());
        }
        ACTION_DISMISS => ui.update(|u| u.toasts.clear()),
        _ => {}
    });

    let render_panel = Callback::new(move |tab: String| {
        if tab == "list" {
            view! { <LeadList leads=leads/> }.into_any()
        } else {
            view! { <KanbanBoard leads=leads sync=sync.clone()/> }.into_any()
        }
    });

    view! {
        <main class="leads-page">
            <header class="leads-page__header">
                <h1>"Leads"</h1>
                <span class="leads-page__count">{move || leads.with(|l| lead_count_label(l.total()))}</span>
                <Dropdown id="lead-actions" label="Actions" items=action_items() on_select=on_action/>
            </header>
            <Show when=move || leads.with(|l| l.loading)>
                <p class="leads-page__loading" aria-busy="true">"Loading leads…"</p>
            </Show>
            {move || {
                leads
                    .with(|l| l.error.clone())
                    .map(|e| view! { <p class="leads-page__error" role="alert">{e}</p> })
            }}
            <Tabs id="leads" tabs=page_tabs() initial="board" render_panel=render_panel/>
            <ToastStack/>
        </main>
    }
}
