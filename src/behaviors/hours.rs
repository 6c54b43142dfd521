//! Estimated hours normalization
//!
//! Hours are entered in half-hour steps. On change the value is snapped to
//! the nearest 0.5 with a floor of 0.5. Input that is not a number is left
//! alone. The field is expected to be an `<input type="number">`.

use dom_wiring::listen;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement};

use crate::selectors::HOURS_INPUT_ID;

/// Smallest hour value the field accepts
pub const MIN_HOURS: f64 = 0.5;

/// Wire the hours field if the page has one
pub fn wire(document: &Document) -> Result<bool, String> {
    let Some(input) = document
        .get_element_by_id(HOURS_INPUT_ID)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return Ok(false);
    };

    let field = input.clone();
    listen(&input, "change", move |_ev: Event| {
        if let Some(normalized) = normalize(&field.value()) {
            field.set_value(&normalized);
        }
    })?;
    Ok(true)
}

/// Normalized field text for `raw`, or `None` when it does not parse.
/// Parsing and formatting use the browser's own number rules.
pub fn normalize(raw: &str) -> Option<String> {
    let parsed = js_sys::parse_float(raw);
    if parsed.is_nan() {
        return None;
    }
    Some(format_number(snap(parsed)))
}

/// Round to the nearest half (halves round up), then apply the floor.
///
/// `round` differs from `Math.round` only for negative halves, and those
/// land under the floor either way. A number input cannot hold infinities,
/// so those fall to the floor too.
pub fn snap(value: f64) -> f64 {
    let snapped = (value * 2.0).round() / 2.0;
    if !snapped.is_finite() || snapped < MIN_HOURS {
        MIN_HOURS
    } else {
        snapped
    }
}

/// Render the way the page would show a number: `3` not `3.0`
fn format_number(value: f64) -> String {
    js_sys::Number::from(value)
        .to_string(10)
        .map(String::from)
        .unwrap_or_else(|_| value.to_string())
}
