//! DOM Wiring Utilities
//!
//! Thin helpers for attaching page-lifetime behavior to server-rendered markup.
//! Listener closures are leaked on purpose: they live until the page unloads.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget};

/// `document.readyState` while the parser is still running
const READY_STATE_LOADING: &str = "loading";

/// Collect every element matching `selector`, in document order.
/// An invalid selector yields an empty list.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First descendant of `element` matching `selector`, if any
pub fn query_within(element: &Element, selector: &str) -> Option<Element> {
    element.query_selector(selector).ok().flatten()
}

/// Bind `handler` to `event` on `target` for the lifetime of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), String>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|e| format!("failed to bind '{}' listener: {:?}", event, e))?;
    cb.forget();
    Ok(())
}

/// Run `f` once after `millis`. Fire-and-forget: the timer cannot be cancelled.
pub fn after<F>(millis: u32, f: F)
where
    F: FnOnce() + 'static,
{
    let _ = gloo_timers::callback::Timeout::new(millis, f).forget();
}

/// Run `f` once the document has been parsed.
///
/// If parsing already finished (script loaded with `defer` or at the end of
/// `<body>`), `f` runs immediately.
pub fn on_document_ready<F>(document: &Document, f: F) -> Result<(), String>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != READY_STATE_LOADING {
        f();
        return Ok(());
    }

    let mut pending = Some(f);
    listen(document, "DOMContentLoaded", move |_ev: Event| {
        if let Some(f) = pending.take() {
            f();
        }
    })
}
