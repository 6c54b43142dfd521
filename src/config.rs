//! Page Configuration
//!
//! Tunables for the page behaviors. Templates may override any field by
//! rendering a JSON island:
//!
//! ```html
//! <script type="application/json" id="page-behavior-config">
//!   {"flash_dismiss_ms": 8000}
//! </script>
//! ```

use serde::Deserialize;
use web_sys::Document;

use crate::selectors::CONFIG_SCRIPT_ID;

/// Quotes shown in the motivational quote container
pub const DEFAULT_QUOTES: &[&str] = &[
    "The secret of getting ahead is getting started. – Mark Twain",
    "Don't wish it were easier, wish you were better. – Jim Rohn",
    "Education is the most powerful weapon which you can use to change the world. – Nelson Mandela",
    "The beautiful thing about learning is that no one can take it away from you. – B.B. King",
    "The more that you read, the more things you will know. The more that you learn, the more places you'll go. – Dr. Seuss",
    "The expert in anything was once a beginner. – Helen Hayes",
    "Learn from yesterday, live for today, hope for tomorrow. – Albert Einstein",
];

pub const DEFAULT_FLASH_DISMISS_MS: u32 = 5000;
pub const DEFAULT_COMPLETE_PROMPT: &str =
    "Mark this task as complete? This will update the task status.";
pub const DEFAULT_FUTURE_DATE_ALERT: &str = "Cannot log hours for future dates!";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub quotes: Vec<String>,
    pub flash_dismiss_ms: u32,
    pub complete_prompt: String,
    pub future_date_alert: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            quotes: DEFAULT_QUOTES.iter().map(|q| q.to_string()).collect(),
            flash_dismiss_ms: DEFAULT_FLASH_DISMISS_MS,
            complete_prompt: DEFAULT_COMPLETE_PROMPT.to_string(),
            future_date_alert: DEFAULT_FUTURE_DATE_ALERT.to_string(),
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override; absent fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// Read the config island from the page, falling back to defaults
    pub fn load(document: &Document) -> Self {
        let Some(island) = document.get_element_by_id(CONFIG_SCRIPT_ID) else {
            return Self::default();
        };
        let json = island.text_content().unwrap_or_default();
        match Self::from_json(&json) {
            Ok(config) => {
                log::debug!("[CONFIG] Loaded overrides from #{}", CONFIG_SCRIPT_ID);
                config
            }
            Err(e) => {
                log::warn!("[CONFIG] Ignoring malformed #{}: {}", CONFIG_SCRIPT_ID, e);
                Self::default()
            }
        }
    }
}
