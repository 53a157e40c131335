//! Button that copies a string to the clipboard and briefly confirms it.

use leptos::prelude::*;
use widgets::clipboard::CopyFeedback;

#[component]
pub fn CopyButton(
    #[prop(into)] text: String,
    #[prop(into, default = "Copy".to_owned())] label: String,
) -> impl IntoView {
    let feedback = RwSignal::new(CopyFeedback::Idle);

    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let text = text.clone();
            leptos::task::spawn_local(async move {
                let now = crate::util::dom::now_ms();
                match crate::util::dom::copy_text(&text).await {
                    Ok(()) => feedback.set(CopyFeedback::succeeded(now)),
                    Err(e) => {
                        log::warn!("copy failed: {e}");
                        feedback.set(CopyFeedback::failed(now));
                    }
                }
                let wait = std::time::Duration::from_secs_f64(widgets::clipboard::FEEDBACK_MS / 1000.0);
                gloo_timers::future::sleep(wait).await;
                let now = crate::util::dom::now_ms();
                feedback.update(|f| *f = f.tick(now));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &text;
        }
    };

    view! {
        <button
            type="button"
            class="copy-button"
            class:copy-button--copied=move || matches!(feedback.get(), CopyFeedback::Copied { .. })
            class:copy-button--failed=move || matches!(feedback.get(), CopyFeedback::Failed { .. })
            aria-live="polite"
            on:click=on_click
        >
            {move || feedback.get().label(&label).to_owned()}
        </button>
    }
}
