//! Tooltip activation

use dom_wiring::query_all;
use web_sys::Document;

use crate::selectors::TOOLTIP_TRIGGER;
use crate::widgets::WidgetLibrary;

/// Enable tooltips on every flagged element. Without a widget library this
/// does nothing. Returns the number of tooltips enabled.
pub fn wire(document: &Document, widgets: Option<&dyn WidgetLibrary>) -> usize {
    let Some(widgets) = widgets else {
        return 0;
    };

    let mut enabled = 0;
    for trigger in query_all(document, TOOLTIP_TRIGGER) {
        match widgets.attach_tooltip(&trigger) {
            Ok(()) => enabled += 1,
            Err(e) => log::warn!("[TOOLTIP] {}", e),
        }
    }
    enabled
}
