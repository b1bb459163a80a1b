//! Transient success notifications.
//!
//! Fire-and-forget: callers push after a mutation, the front end drains and
//! shows them. Nothing waits for acknowledgement.

use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    EmployeeAdded,
    EmployeeUpdated,
    EmployeeDeleted,
}

impl NotificationKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::EmployeeAdded => "Employee added",
            Self::EmployeeUpdated => "Employee updated",
            Self::EmployeeDeleted => "Employee deleted",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::EmployeeAdded => "New employee has been added successfully.",
            Self::EmployeeUpdated => "Employee information has been updated successfully.",
            Self::EmployeeDeleted => "The employee has been removed successfully.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl From<NotificationKind> for Notification {
    fn from(kind: NotificationKind) -> Self {
        Self {
            kind,
            title: kind.title(),
            description: kind.description(),
        }
    }
}

/// FIFO queue of pending notifications.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    queue: VecDeque<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: NotificationKind) {
        self.queue.push_back(kind.into());
    }

    /// Removes and returns every pending notification, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.queue.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
