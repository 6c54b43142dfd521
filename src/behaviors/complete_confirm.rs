//! Task completion confirmation

use std::rc::Rc;

use dom_wiring::{listen, query_all};
use web_sys::{Document, Event};

use crate::prompts::Prompts;
use crate::selectors::COMPLETE_TRIGGER;

/// Ask before every task completion; a cancelled prompt suppresses the
/// trigger's default action. Returns the number of triggers wired.
pub fn wire(document: &Document, message: &str, prompts: Rc<dyn Prompts>) -> Result<usize, String> {
    let triggers = query_all(document, COMPLETE_TRIGGER);
    for trigger in &triggers {
        let message = message.to_string();
        let prompts = Rc::clone(&prompts);
        listen(trigger, "click", move |ev: Event| {
            if !prompts.confirm(&message) {
                ev.prevent_default();
            }
        })?;
    }
    Ok(triggers.len())
}
