//! Page Models
//!
//! Transient values passed between DOM reads and DOM writes.

/// Task selected for deletion, read from a trigger's data attributes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeleteTarget {
    pub id: String,
    pub title: String,
}

impl DeleteTarget {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Server route the confirmation form posts to
    pub fn action_path(&self) -> String {
        format!("/tasks/{}/delete", self.id)
    }
}

/// Outcome of checking a log date against today
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateCheck {
    Allowed,
    /// Date is in the future; the field must be reset to today
    Future { reset_to: String },
}

/// Direction of a description toggle's chevron icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chevron {
    Down,
    Up,
}

impl Chevron {
    pub fn flipped(self) -> Self {
        match self {
            Chevron::Down => Chevron::Up,
            Chevron::Up => Chevron::Down,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Chevron::Down => crate::selectors::CLASS_CHEVRON_DOWN,
            Chevron::Up => crate::selectors::CLASS_CHEVRON_UP,
        }
    }
}
