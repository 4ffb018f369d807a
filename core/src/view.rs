//! The UI surface the presenter drives.
//!
//! # Design
//! Rendering belongs to whatever toolkit hosts the form. The presenter only
//! needs two things from it: replace the displayed list, and show a blocking
//! notification that the user acknowledges before the handler returns.

use std::fmt;

use crate::error::ListFailure;

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Added,
    Updated,
    Deleted,
    AddFailed,
    UpdateFailed,
    DeleteFailed,
    ListFailed { kind: ListFailure, detail: String },
    InvalidInput(String),
}

impl Notice {
    pub fn is_error(&self) -> bool {
        !matches!(self, Notice::Added | Notice::Updated | Notice::Deleted)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Added => write!(f, "Item added successfully"),
            Notice::Updated => write!(f, "Item updated successfully"),
            Notice::Deleted => write!(f, "Item deleted successfully"),
            Notice::AddFailed => write!(f, "Failed to add item."),
            Notice::UpdateFailed => write!(f, "Failed to update item."),
            Notice::DeleteFailed => write!(f, "Failed to delete item."),
            Notice::ListFailed { kind, detail } => match kind {
                ListFailure::Request => write!(f, "Request error: {detail}"),
                ListFailure::Json => write!(f, "JSON error: {detail}"),
                ListFailure::Unexpected => write!(f, "Unexpected error: {detail}"),
            },
            Notice::InvalidInput(msg) => write!(f, "{msg}"),
        }
    }
}

/// List display plus notification primitive of the hosting UI.
pub trait ItemView {
    /// Replace every displayed entry.
    fn show_entries(&mut self, entries: Vec<String>);

    /// Show a notification; returns once the user has acknowledged it.
    fn notify(&mut self, notice: &Notice);
}

impl<V: ItemView + ?Sized> ItemView for &mut V {
    fn show_entries(&mut self, entries: Vec<String>) {
        (**self).show_entries(entries)
    }

    fn notify(&mut self, notice: &Notice) {
        (**self).notify(notice)
    }
}
