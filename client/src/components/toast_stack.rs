//! Notification region rendering `UiState::toasts`.
//!
//! A background loop ticks the stack so expired toasts disappear; hovering a
//! toast pauses its countdown.

use leptos::prelude::*;
use widgets::toast::Toast;

use crate::state::ui::UiState;
use crate::util::dom;

#[cfg(feature = "hydrate")]
const TICK_MS: u64 = 250;

#[component]
fn ToastItem(ui: RwSignal<UiState>, toast: Toast) -> impl IntoView {
    let id = toast.id;
    view! {
        <li
            class=format!("toast {}", toast.kind.class())
            role="status"
            aria-live=toast.kind.aria_live()
            on:mouseenter=move |_| ui.update(|u| u.toasts.pause(id, dom::now_ms()))
            on:mouseleave=move |_| ui.update(|u| u.toasts.resume(id, dom::now_ms()))
        >
            <span class="toast__message">{toast.message}</span>
            <button
                type="button"
                class="toast__close"
                aria-label="Dismiss notification"
                on:click=move |_| {
                    ui.update(|u| {
                        u.toasts.dismiss(id);
                    });
                }
            >
                "×"
            </button>
        </li>
    }
}

/// Fixed-position stack of toasts. Reads `RwSignal<UiState>` from context.
#[component]
pub fn ToastStack() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(TICK_MS)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if ui.with_untracked(|u| u.toasts.is_empty()) {
                    continue;
                }
                let now = dom::now_ms();
                ui.update(|u| {
                    u.toasts.tick(now);
                });
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <ol class="toast-stack" aria-label="Notifications">
            <For
                each=move || ui.with(|u| u.toasts.toasts().to_vec())
                key=|toast| toast.id
                let:toast
            >
                <ToastItem ui=ui toast=toast/>
            </For>
        </ol>
    }
}
