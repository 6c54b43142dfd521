//! Flash message auto-dismiss

use dom_wiring::{after, query_all, query_within};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::selectors::{FLASH_ALERT, FLASH_CLOSE};

/// Schedule a dismiss for every flash alert on the page.
/// Returns the number of alerts scheduled.
pub fn wire(document: &Document, delay_ms: u32) -> usize {
    let alerts = query_all(document, FLASH_ALERT);
    for alert in &alerts {
        let alert = alert.clone();
        after(delay_ms, move || {
            if !dismiss(&alert) {
                log::debug!("[FLASH] Alert already dismissed");
            }
        });
    }
    alerts.len()
}

/// Click the alert's close control if the alert is still on the page.
///
/// A manually dismissed alert is detached (or has lost its control), in which
/// case nothing happens.
pub fn dismiss(alert: &Element) -> bool {
    if !alert.is_connected() {
        return false;
    }
    match query_within(alert, FLASH_CLOSE).and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
        Some(close) => {
            close.click();
            true
        }
        None => false,
    }
}
