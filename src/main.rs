//! Task Scheduler Page Behaviors Entry Point

mod behaviors;
mod config;
mod controller;
mod models;
mod prompts;
mod selectors;
mod widgets;


use std::rc::Rc;

use config::PageConfig;
use controller::PageController;
use prompts::BrowserPrompts;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    })
    .ok();

    if let Err(e) = start() {
        log::error!("[APP] {}", e);
    }
}

fn start() -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "document is unavailable".to_string())?;

    let ready_document = document.clone();
    dom_wiring::on_document_ready(&document, move || {
        let config = PageConfig::load(&ready_document);
        let controller = PageController::new(config, widgets::detect(), Rc::new(BrowserPrompts));
        controller.init(&ready_document);
    })
}
