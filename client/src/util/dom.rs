//! Browser glue: clock, alerts, clipboard, and scoped document listeners.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every helper has a hydrate implementation and an SSR fallback so callers
//! never need their own `cfg` blocks for the common cases. Document listeners
//! are returned as `widgets::subscription::Subscription`s; dropping the handle removes the
//! listener.

#[cfg(feature = "hydrate")]
use widgets::subscription::Subscription;

/// Wall-clock milliseconds, used as the time base for toasts and copy
/// feedback.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::warn!("alert outside browser: {message}");
    }
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error string when the clipboard API is missing or the browser
/// rejects the write (e.g. no user gesture, permission denied).
pub async fn copy_text(text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or("no window")?;
        let Some(clipboard) = window.navigator().clipboard() else {
            return Err("clipboard unavailable".to_owned());
        };
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| format!("clipboard write rejected: {e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("clipboard unavailable on server".to_owned())
    }
}

/// Listen for `event` on `document` until the returned handle is dropped.
#[cfg(feature = "hydrate")]
pub fn on_document(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Subscription {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Subscription::noop();
    };
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Err(e) = document.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        log::warn!("failed to listen for document {event}: {e:?}");
        return Subscription::noop();
    }
    Subscription::new(move || {
        if let Err(e) = document.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            log::warn!("failed to remove document {event} listener: {e:?}");
        }
    })
}

/// Whether `event` originated inside `root`.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn event_within(root: &web_sys::Element, event: &web_sys::Event) -> bool {
    use wasm_bindgen::JsCast;

    event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| root.contains(Some(&node)))
}

/// Move keyboard focus to the element with DOM id `id`, if present.
pub fn focus_by_id(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(element) = element {
            if let Err(e) = element.focus() {
                log::warn!("focus #{id} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
