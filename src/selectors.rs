//! DOM Contract
//!
//! Every class, id and attribute the page behaviors rely on. The server
//! templates render these; nothing here is created by the client.

// Flash messages
pub const FLASH_ALERT: &str = ".alert-dismissible";
pub const FLASH_CLOSE: &str = ".btn-close";

// Tooltips
pub const TOOLTIP_TRIGGER: &str = "[data-bs-toggle=\"tooltip\"]";

// Delete confirmation dialog
pub const DELETE_TRIGGER: &str = ".delete-btn";
pub const DELETE_MODAL_ID: &str = "deleteTaskModal";
pub const DELETE_TITLE_ID: &str = "deleteTaskTitle";
pub const DELETE_FORM_ID: &str = "deleteTaskForm";
pub const ATTR_TASK_ID: &str = "data-task-id";
pub const ATTR_TASK_TITLE: &str = "data-task-title";

// Client-side validation
pub const VALIDATED_FORM: &str = ".needs-validation";
pub const CLASS_WAS_VALIDATED: &str = "was-validated";

// Form fields
pub const HOURS_INPUT_ID: &str = "estimated_hours";
pub const LOG_DATE_INPUT_ID: &str = "log_date";

// Quote
pub const QUOTE_CONTAINER_ID: &str = "motivational-quote";

// Task completion
pub const COMPLETE_TRIGGER: &str = ".task-complete-btn";

// Description toggle
pub const DESCRIPTION_TOGGLE: &str = ".task-description-toggle";
pub const ATTR_TOGGLE_TARGET: &str = "data-target";
pub const CLASS_HIDDEN: &str = "d-none";
pub const TOGGLE_ICON: &str = "i";
pub const CLASS_CHEVRON_DOWN: &str = "fa-chevron-down";
pub const CLASS_CHEVRON_UP: &str = "fa-chevron-up";

// Config island
pub const CONFIG_SCRIPT_ID: &str = "page-behavior-config";
