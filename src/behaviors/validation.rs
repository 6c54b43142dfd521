//! Client-side form validation

use dom_wiring::{listen, query_all};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement};

use crate::selectors::{CLASS_WAS_VALIDATED, VALIDATED_FORM};

/// Block invalid submissions on every flagged form.
/// Returns the number of forms wired.
pub fn wire(document: &Document) -> Result<usize, String> {
    let forms: Vec<HtmlFormElement> = query_all(document, VALIDATED_FORM)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlFormElement>().ok())
        .collect();

    for form in &forms {
        let target = form.clone();
        listen(form, "submit", move |ev: Event| {
            if !target.check_validity() {
                ev.prevent_default();
                ev.stop_propagation();
            }
            // Styling applies after any submit attempt
            if let Err(e) = target.class_list().add_1(CLASS_WAS_VALIDATED) {
                log::warn!("[VALIDATION] failed to add {}: {:?}", CLASS_WAS_VALIDATED, e);
            }
        })?;
    }
    Ok(forms.len())
}
