//! Widget Library Bindings
//!
//! Tooltips and modals come from Bootstrap's bundle when the page loads it.
//! The library is optional: `detect` probes for the global `bootstrap`
//! namespace and the controller skips widget features when it is absent.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Name of the global the Bootstrap bundle installs
const BOOTSTRAP_GLOBAL: &str = "bootstrap";

/// Widget behaviors the page controller needs from a UI library
pub trait WidgetLibrary {
    /// Enable a tooltip on `element`
    fn attach_tooltip(&self, element: &Element) -> Result<(), String>;
    /// Build a modal controller around a dialog element
    fn modal(&self, element: &Element) -> Result<Box<dyn ModalHandle>, String>;
}

/// A constructed modal that can be shown repeatedly
pub trait ModalHandle {
    fn show(&self) -> Result<(), String>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Tooltip)]
    type BsTooltip;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Tooltip")]
    fn new(element: &Element) -> Result<BsTooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Modal)]
    type BsModal;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Modal")]
    fn new(element: &Element) -> Result<BsModal, JsValue>;

    #[wasm_bindgen(catch, method)]
    fn show(this: &BsModal) -> Result<(), JsValue>;
}

/// Bootstrap 5 bundle, present as `window.bootstrap`
pub struct Bootstrap;

impl WidgetLibrary for Bootstrap {
    fn attach_tooltip(&self, element: &Element) -> Result<(), String> {
        // Bootstrap keeps the instance on the element; our handle can drop
        BsTooltip::new(element)
            .map(|_| ())
            .map_err(|e| format!("tooltip construction failed: {:?}", e))
    }

    fn modal(&self, element: &Element) -> Result<Box<dyn ModalHandle>, String> {
        let modal = BsModal::new(element)
            .map_err(|e| format!("modal construction failed: {:?}", e))?;
        Ok(Box::new(BootstrapModal(modal)))
    }
}

struct BootstrapModal(BsModal);

impl ModalHandle for BootstrapModal {
    fn show(&self) -> Result<(), String> {
        self.0
            .show()
            .map_err(|e| format!("modal show failed: {:?}", e))
    }
}

/// Probe the runtime for the widget library
pub fn detect() -> Option<Rc<dyn WidgetLibrary>> {
    let namespace = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(BOOTSTRAP_GLOBAL)).ok()?;
    if namespace.is_undefined() || namespace.is_null() {
        log::info!("[WIDGETS] '{}' not loaded; tooltips and modals disabled", BOOTSTRAP_GLOBAL);
        return None;
    }
    Some(Rc::new(Bootstrap))
}
