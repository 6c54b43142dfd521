//! Log date constraint
//!
//! Hours cannot be logged against a future day. The field's `max` caps the
//! native picker; typed values are checked on change.

use std::rc::Rc;

use chrono::{Local, NaiveDate};
use dom_wiring::listen;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement};

use crate::models::DateCheck;
use crate::prompts::Prompts;
use crate::selectors::LOG_DATE_INPUT_ID;

/// Format used by `<input type="date">`
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Today in the browser's local timezone
pub fn today() -> String {
    format_date(Local::now().date_naive())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Compare an entered value against `today`.
///
/// Both sides are fixed-width, zero-padded ISO dates, so string order is
/// calendar order.
pub fn check(value: &str, today: &str) -> DateCheck {
    if value > today {
        DateCheck::Future {
            reset_to: today.to_string(),
        }
    } else {
        DateCheck::Allowed
    }
}

/// Wire the log date field if the page has one
pub fn wire(
    document: &Document,
    future_date_alert: &str,
    prompts: Rc<dyn Prompts>,
) -> Result<bool, String> {
    let Some(input) = document
        .get_element_by_id(LOG_DATE_INPUT_ID)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return Ok(false);
    };

    // Computed once per page view
    let max_date = today();
    input
        .set_attribute("max", &max_date)
        .map_err(|e| format!("failed to set max on #{}: {:?}", LOG_DATE_INPUT_ID, e))?;

    let field = input.clone();
    let alert = future_date_alert.to_string();
    listen(&input, "change", move |_ev: Event| {
        if let DateCheck::Future { reset_to } = check(&field.value(), &max_date) {
            prompts.alert(&alert);
            field.set_value(&reset_to);
        }
    })?;
    Ok(true)
}
