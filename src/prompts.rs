//! Blocking user prompts
//!
//! The two intentional interruptions on the page: confirming a task
//! completion and warning about a future log date.

/// Blocking dialogs the page behaviors may raise
pub trait Prompts {
    /// Ask a yes/no question; `false` when the user cancels
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// `window.confirm` / `window.alert`
pub struct BrowserPrompts;

impl Prompts for BrowserPrompts {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("[PROMPT] alert failed: {:?}", e);
            }
        }
    }
}
