//! Task description toggle
//!
//! Each toggle names its description block by id in `data-target`. Targets
//! are resolved once at startup; a toggle whose target is missing is left
//! unwired.

use dom_wiring::{listen, query_all, query_within};
use web_sys::{Document, Element, Event};

use crate::models::Chevron;
use crate::selectors::{
    ATTR_TOGGLE_TARGET, CLASS_CHEVRON_DOWN, CLASS_HIDDEN, DESCRIPTION_TOGGLE, TOGGLE_ICON,
};

/// Chevron direction currently shown by an icon with the given class state
pub fn current_chevron(has_down: bool) -> Chevron {
    if has_down {
        Chevron::Down
    } else {
        Chevron::Up
    }
}

/// Flip the description's visibility and the toggle's icon to match
pub fn toggle(control: &Element, description: &Element) {
    if let Err(e) = description.class_list().toggle(CLASS_HIDDEN) {
        log::warn!("[TOGGLE] failed to toggle {}: {:?}", CLASS_HIDDEN, e);
    }

    if let Some(icon) = query_within(control, TOGGLE_ICON) {
        let classes = icon.class_list();
        let current = current_chevron(classes.contains(CLASS_CHEVRON_DOWN));
        if let Err(e) = classes.replace(current.class_name(), current.flipped().class_name()) {
            log::warn!("[TOGGLE] failed to flip chevron: {:?}", e);
        }
    }
}

/// Resolve the description a toggle controls
fn resolve_target(document: &Document, control: &Element) -> Option<Element> {
    let Some(target_id) = control.get_attribute(ATTR_TOGGLE_TARGET).filter(|id| !id.is_empty()) else {
        log::warn!("[TOGGLE] Toggle without {}; skipped", ATTR_TOGGLE_TARGET);
        return None;
    };
    let target = document.get_element_by_id(&target_id);
    if target.is_none() {
        log::warn!("[TOGGLE] No element #{}; toggle skipped", target_id);
    }
    target
}

/// Wire every toggle with a resolvable target.
/// Returns the number of toggles wired.
pub fn wire(document: &Document) -> Result<usize, String> {
    let mut wired = 0;
    for control in query_all(document, DESCRIPTION_TOGGLE) {
        let Some(description) = resolve_target(document, &control) else {
            continue;
        };
        let source = control.clone();
        listen(&control, "click", move |_ev: Event| toggle(&source, &description))?;
        wired += 1;
    }
    Ok(wired)
}
