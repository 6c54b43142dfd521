//! Page Behavior Controller
//!
//! Runs every page behavior once against the loaded document. Behaviors are
//! independent: one that finds nothing to wire, or fails, does not affect
//! the others.

use std::rc::Rc;

use web_sys::Document;

use crate::behaviors::{
    complete_confirm, delete_dialog, description_toggle, flash, hours, log_date, quote, tooltips,
    validation,
};
use crate::config::PageConfig;
use crate::prompts::Prompts;
use crate::widgets::WidgetLibrary;

/// What got wired on this page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WiringReport {
    pub flash_alerts: usize,
    pub tooltips: usize,
    pub delete_triggers: usize,
    pub validated_forms: usize,
    pub hours_field: bool,
    pub quote_shown: bool,
    pub complete_triggers: usize,
    pub log_date_field: bool,
    pub description_toggles: usize,
}

pub struct PageController {
    config: PageConfig,
    widgets: Option<Rc<dyn WidgetLibrary>>,
    prompts: Rc<dyn Prompts>,
}

impl PageController {
    /// `widgets` is `None` when the page did not load a widget library
    pub fn new(
        config: PageConfig,
        widgets: Option<Rc<dyn WidgetLibrary>>,
        prompts: Rc<dyn Prompts>,
    ) -> Self {
        Self {
            config,
            widgets,
            prompts,
        }
    }

    pub fn init(&self, document: &Document) -> WiringReport {
        let widgets = self.widgets.as_deref();

        let report = WiringReport {
            flash_alerts: flash::wire(document, self.config.flash_dismiss_ms),
            tooltips: tooltips::wire(document, widgets),
            delete_triggers: settle("DELETE", delete_dialog::wire(document, widgets)),
            validated_forms: settle("VALIDATION", validation::wire(document)),
            hours_field: settle("HOURS", hours::wire(document)),
            quote_shown: quote::wire(document, &self.config.quotes),
            complete_triggers: settle(
                "COMPLETE",
                complete_confirm::wire(
                    document,
                    &self.config.complete_prompt,
                    Rc::clone(&self.prompts),
                ),
            ),
            log_date_field: settle(
                "LOG_DATE",
                log_date::wire(
                    document,
                    &self.config.future_date_alert,
                    Rc::clone(&self.prompts),
                ),
            ),
            description_toggles: settle("TOGGLE", description_toggle::wire(document)),
        };

        log::info!("[APP] Page behaviors wired: {:?}", report);
        report
    }
}

/// Log a wiring failure and carry on with nothing wired for that behavior
fn settle<T: Default>(area: &str, result: Result<T, String>) -> T {
    result.unwrap_or_else(|e| {
        log::error!("[{}] {}", area, e);
        T::default()
    })
}
