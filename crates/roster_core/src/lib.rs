//! Core domain logic for the employee roster.
//! This crate is the single source of truth for roster invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod ui;

pub use config::{ConfigError, DisplayConfig, LoggingConfig, RosterConfig, SeedConfig};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::employee::{Employee, EmployeeDraft, EmployeeValidationError};
pub use model::id::{EmployeeId, IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use model::sample::sample_roster;
pub use repo::employee_repo::{
    EmployeeRepository, InMemoryEmployeeRepository, RepoError, RepoResult,
};
pub use search::filter::{FilterView, Filtered, SearchQuery};
pub use service::roster_service::{MutationOutcome, RosterError, RosterResult, RosterService};
pub use ui::app::{AppError, RosterApp};
pub use ui::confirm::DeleteDialog;
pub use ui::form::{EditorDialog, EditorMode, EmployeeForm, FormError, FormField, Submission};
pub use ui::notify::{Notification, NotificationKind, Notifications};
pub use ui::table::{format_date, render_table, try_format_date, TableRow};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
