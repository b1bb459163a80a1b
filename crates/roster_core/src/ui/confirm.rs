//! Delete confirmation dialog state.
//!
//! # Invariants
//! - A pending id exists exactly while the dialog is open.
//! - Cancel never yields an id.

use crate::model::id::EmployeeId;

pub const DELETE_TITLE: &str = "Are you sure?";
pub const DELETE_DESCRIPTION: &str =
    "This action cannot be undone. This will permanently delete the employee record.";
pub const DELETE_CONFIRM_LABEL: &str = "Delete";
pub const DELETE_CANCEL_LABEL: &str = "Cancel";

/// Two-state confirmation keyed by the pending id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteDialog {
    #[default]
    Closed,
    Open {
        pending: EmployeeId,
    },
}

impl DeleteDialog {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn pending(&self) -> Option<&EmployeeId> {
        match self {
            Self::Open { pending } => Some(pending),
            Self::Closed => None,
        }
    }

    /// Records `id` as the deletion target. Re-opening replaces the target.
    pub fn open(&mut self, id: EmployeeId) {
        *self = Self::Open { pending: id };
    }

    /// Closes and hands back the pending id; `None` if already closed.
    pub fn confirm(&mut self) -> Option<EmployeeId> {
        match std::mem::take(self) {
            Self::Open { pending } => Some(pending),
            Self::Closed => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }
}
