//! Delete Confirmation Dialog
//!
//! All delete triggers on a page share one confirmation modal. Each click
//! rebinds the modal to the clicked task before showing it.

use std::rc::Rc;

use dom_wiring::{listen, query_all};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlFormElement};

use crate::models::DeleteTarget;
use crate::selectors::{
    ATTR_TASK_ID, ATTR_TASK_TITLE, DELETE_FORM_ID, DELETE_MODAL_ID, DELETE_TITLE_ID,
    DELETE_TRIGGER,
};
use crate::widgets::{ModalHandle, WidgetLibrary};

/// The single shared confirmation dialog
pub struct DeleteDialog {
    modal: Box<dyn ModalHandle>,
    title_slot: Option<Element>,
    form: Option<HtmlFormElement>,
}

impl DeleteDialog {
    pub fn new(
        modal: Box<dyn ModalHandle>,
        title_slot: Option<Element>,
        form: Option<HtmlFormElement>,
    ) -> Self {
        Self { modal, title_slot, form }
    }

    /// Point the dialog at `target`, then show it
    pub fn present(&self, target: &DeleteTarget) -> Result<(), String> {
        if let Some(slot) = &self.title_slot {
            slot.set_text_content(Some(&target.title));
        }
        if let Some(form) = &self.form {
            form.set_action(&target.action_path());
        }
        self.modal.show()
    }
}

/// Read the task a trigger refers to. Missing attributes read as empty.
pub fn read_target(trigger: &Element) -> DeleteTarget {
    DeleteTarget::new(
        trigger.get_attribute(ATTR_TASK_ID).unwrap_or_default(),
        trigger.get_attribute(ATTR_TASK_TITLE).unwrap_or_default(),
    )
}

/// Wire every delete trigger to the shared dialog.
/// Returns the number of triggers wired.
pub fn wire(document: &Document, widgets: Option<&dyn WidgetLibrary>) -> Result<usize, String> {
    let triggers = query_all(document, DELETE_TRIGGER);
    if triggers.is_empty() {
        return Ok(0);
    }
    let Some(modal_el) = document.get_element_by_id(DELETE_MODAL_ID) else {
        return Ok(0);
    };
    let Some(widgets) = widgets else {
        log::warn!(
            "[DELETE] {} trigger(s) left unwired: no modal library",
            triggers.len()
        );
        return Ok(0);
    };

    let form = document
        .get_element_by_id(DELETE_FORM_ID)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
    let dialog = Rc::new(DeleteDialog::new(
        widgets.modal(&modal_el)?,
        document.get_element_by_id(DELETE_TITLE_ID),
        form,
    ));

    for trigger in &triggers {
        let dialog = Rc::clone(&dialog);
        let source = trigger.clone();
        listen(trigger, "click", move |_ev: Event| {
            let target = read_target(&source);
            log::debug!("[DELETE] Confirming task {} ({})", target.id, target.title);
            if let Err(e) = dialog.present(&target) {
                log::error!("[DELETE] {}", e);
            }
        })?;
    }
    Ok(triggers.len())
}
