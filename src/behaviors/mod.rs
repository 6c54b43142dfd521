//! Page Behaviors
//!
//! One module per behavior. Each exposes a `wire` function the controller
//! calls once at startup; pure decision logic sits beside it so it can be
//! tested without a browser.

pub mod complete_confirm;
pub mod delete_dialog;
pub mod description_toggle;
pub mod flash;
pub mod hours;
pub mod log_date;
pub mod quote;
pub mod tooltips;
pub mod validation;
