//! Drag-and-drop lead board.
//!
//! SYSTEM CONTEXT
//! ==============
//! Native HTML5 drag events drive [`KanbanBoardState`] (held inside
//! [`LeadsState`]). A cross-column drop mutates the board first, then spawns
//! the status `PATCH`; the answer is fed back through `settle`.
//!
//! ERROR HANDLING
//! ==============
//! A rejected move raises a blocking `window.alert`, a sticky error toast, and
//! a console error. The board's failure strategy decides whether the card
//! stays or goes back.

use leptos::prelude::*;
use widgets::kanban::{CardPhase, DropOutcome, STATUS_UPDATE_FAILED, Settlement};
#[cfg(feature = "hydrate")]
use widgets::subscription::SubscriptionSlot;
use widgets::sync::{StatusChange, StatusSync};

use crate::net::api::HttpStatusSync;
use crate::state::leads::{LeadsState, edit_path};
use crate::state::ui::UiState;
use crate::util::dom;

/// Send `change` and reconcile the board with the server's answer.
fn confirm_move(leads: RwSignal<LeadsState>, ui: RwSignal<UiState>, sync: HttpStatusSync, change: StatusChange) {
    leptos::task::spawn_local(async move {
        let result = sync.update_status(&change).await;
        let Some(settlement) = leads.try_update(|l| l.board.settle(&change, result)) else {
            return;
        };
        let now = dom::now_ms();
        match settlement {
            Settlement::Confirmed => {
                let label = leads
                    .with_untracked(|l| l.board.column(&change.to).map(|c| c.label.clone()))
                    .unwrap_or_else(|| change.to.clone());
                ui.update(|u| {
                    u.status_updated(&label, now);
                });
            }
            Settlement::Superseded => {}
            Settlement::Kept | Settlement::Reverted => {
                leptos::logging::error!("lead {} stayed unconfirmed in {}: {settlement:?}", change.card_id, change.to);
                ui.update(|u| {
                    u.status_update_failed(now);
                });
                // `window.alert` blocks until acknowledged.
                dom::alert(STATUS_UPDATE_FAILED);
                leads.update(|l| l.board.dismiss_alert());
            }
        }
    });
}

#[component]
fn KanbanCard(leads: RwSignal<LeadsState>, id: String, title: String) -> impl IntoView {
    let phase = {
        let id = id.clone();
        Memo::new(move |_| leads.with(|l| l.board.phase(&id)))
    };
    let badge = {
        let id = id.clone();
        move || leads.with(|l| l.board.card(&id).map(|c| c.badge.clone()).unwrap_or_default())
    };
    let status = {
        let id = id.clone();
        move || leads.with(|l| l.board.card(&id).map(|c| c.status.clone()).unwrap_or_default())
    };

    let drag_id = id.clone();
    let on_dragstart = move |ev: leptos::ev::DragEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(transfer) = ev.data_transfer() {
                transfer.set_effect_allowed("move");
                if let Err(e) = transfer.set_data("text/plain", &drag_id) {
                    log::warn!("drag payload rejected: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
        leads.update(|l| {
            let origin = l.board.card(&drag_id).map(|c| c.status.clone());
            if let Some(origin) = origin {
                l.board.begin_drag(&drag_id, &origin);
            }
        });
    };
    let on_dragend = move |_| leads.update(|l| l.board.end_drag());

    view! {
        <article
            class="kanban-card"
            class:kanban-card--dragging=move || phase.get() == CardPhase::Dragging
            class:kanban-card--pending=move || phase.get() == CardPhase::Pending
            class:kanban-card--stale=move || phase.get() == CardPhase::Stale
            draggable="true"
            data-id=id.clone()
            data-status=status
            aria-grabbed=move || (phase.get() == CardPhase::Dragging).to_string()
            on:dragstart=on_dragstart
            on:dragend=on_dragend
        >
            <h3 class="kanban-card__title">{title}</h3>
            <span class="kanban-card__badge">{badge}</span>
            <a class="kanban-card__edit" href=edit_path(&id)>"Edit tags"</a>
        </article>
    }
}

#[component]
fn KanbanColumn(
    leads: RwSignal<LeadsState>,
    ui: RwSignal<UiState>,
    sync: HttpStatusSync,
    status: String,
    label: String,
) -> impl IntoView {
    let highlighted = {
        let status = status.clone();
        move || leads.with(|l| l.board.is_highlighted(&status))
    };
    let count = {
        let status = status.clone();
        Memo::new(move |_| leads.with(|l| l.board.count(&status)))
    };
    let cards = {
        let status = status.clone();
        move || {
            leads
                .with(|l| {
                    l.board
                        .column(&status)
                        .map(|c| c.cards.iter().map(|card| (card.id.clone(), card.title.clone())).collect::<Vec<_>>())
                })
                .unwrap_or_default()
        }
    };

    let enter_status = status.clone();
    let on_dragenter = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        leads.update(|l| l.board.enter_column(&enter_status));
    };
    let leave_status = status.clone();
    let on_dragleave = move |_| leads.update(|l| l.board.leave_column(&leave_status));
    let drop_status = status.clone();
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        if let Some(DropOutcome::Moved(change)) = leads.try_update(|l| l.board.drop(&drop_status)) {
            confirm_move(leads, ui, sync.clone(), change);
        }
    };

    view! {
        <section
            class="kanban-column"
            class:kanban-column--highlighted=highlighted
            data-status=status
            on:dragenter=on_dragenter
            on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <header class="kanban-column__header">
                <h2 class="kanban-column__title">{label}</h2>
                <span class="kanban-column__count">{count}</span>
            </header>
            <div class="kanban-column__cards">
                <Show
                    when=move || { count.get() > 0 }
                    fallback=|| view! { <p class="kanban-column__empty">"No leads"</p> }
                >
                    {
                        let cards = cards.clone();
                        move || {
                            cards()
                                .into_iter()
                                .map(|(id, title)| view! { <KanbanCard leads=leads id=id title=title/> })
                                .collect_view()
                        }
                    }
                </Show>
            </div>
        </section>
    }
}

/// Board with one column per status. Reads `RwSignal<UiState>` from context.
#[component]
pub fn KanbanBoard(leads: RwSignal<LeadsState>, sync: HttpStatusSync) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // A card re-rendered mid-drag loses its own `dragend`; the document
    // listener still clears the drag.
    #[cfg(feature = "hydrate")]
    {
        let drag_end = StoredValue::new_local(SubscriptionSlot::new());
        let dragging = Memo::new(move |_| leads.with(|l| l.board.drag().is_some()));
        Effect::new(move || {
            if dragging.get() {
                let subscription = dom::on_document("dragend", move |_| leads.update(|l| l.board.end_drag()));
                drag_end.update_value(|slot| slot.set(subscription));
            } else {
                drag_end.update_value(SubscriptionSlot::clear);
            }
        });
        on_cleanup(move || drag_end.update_value(SubscriptionSlot::clear));
    }

    let columns = move || {
        leads.with(|l| {
            l.board
                .columns()
                .iter()
                .map(|c| (c.status.clone(), c.label.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="kanban" role="list">
            <For each=columns key=|(status, _)| status.clone() let:column>
                <KanbanColumn leads=leads ui=ui sync=sync.clone() status=column.0 label=column.1/>
            </For>
        </div>
    }
}
