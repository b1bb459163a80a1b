//! Roster screen controller.
//!
//! # Responsibility
//! - Own the roster service, search query, both dialogs and the
//!   notification queue for one screen.
//! - Route dialog results into service mutations.
//!
//! # Invariants
//! - Every roster write goes through the owned `RosterService`.
//! - One notification per applied mutation, none for ignored ones.

use crate::model::employee::Employee;
use crate::model::id::{EmployeeId, IdGenerator};
use crate::repo::employee_repo::EmployeeRepository;
use crate::search::filter::SearchQuery;
use crate::service::roster_service::{MutationOutcome, RosterError, RosterService};
use crate::ui::confirm::DeleteDialog;
use crate::ui::form::{EditorDialog, FormError, FormField, Submission};
use crate::ui::notify::{Notification, NotificationKind, Notifications};
use crate::ui::table::{render_table, TableRow, DEFAULT_DATE_FORMAT};
use log::info;
use thiserror::Error;

/// Controller-level failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Roster(#[from] RosterError),
}

/// Screen state for listing, searching and editing the roster.
pub struct RosterApp<R: EmployeeRepository, G: IdGenerator> {
    service: RosterService<R, G>,
    query: SearchQuery,
    editor: EditorDialog,
    delete_dialog: DeleteDialog,
    notifications: Notifications,
    date_format: String,
}

impl<R: EmployeeRepository, G: IdGenerator> RosterApp<R, G> {
    pub fn new(service: RosterService<R, G>) -> Self {
        Self {
            service,
            query: SearchQuery::default(),
            editor: EditorDialog::default(),
            delete_dialog: DeleteDialog::default(),
            notifications: Notifications::new(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Sets the `strftime` pattern for the hire date column.
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn service(&self) -> &RosterService<R, G> {
        &self.service
    }

    pub fn editor(&self) -> &EditorDialog {
        &self.editor
    }

    pub fn delete_dialog(&self) -> &DeleteDialog {
        &self.delete_dialog
    }

    pub fn search_query(&self) -> &str {
        self.query.text()
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.query = SearchQuery::new(text);
    }

    /// Records matching the current query, in roster order.
    pub fn visible(&self) -> Vec<&Employee> {
        self.service.filter(self.query.clone()).to_vec()
    }

    pub fn rows(&self) -> Vec<TableRow> {
        self.visible()
            .into_iter()
            .map(|employee| TableRow::from_employee(employee, &self.date_format))
            .collect()
    }

    pub fn render(&self) -> String {
        render_table(&self.rows())
    }

    /// Opens the editor in create mode.
    pub fn begin_add(&mut self) {
        self.editor.open_create();
    }

    /// Opens the editor pre-populated from `id`; `false` if unknown.
    pub fn begin_edit(&mut self, id: &EmployeeId) -> bool {
        match self.service.get(id) {
            Some(employee) => {
                self.editor.open_edit(employee);
                true
            }
            None => false,
        }
    }

    pub fn set_field(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) -> Result<(), AppError> {
        self.editor.set_field(field, value)?;
        Ok(())
    }

    /// Submits the open editor and applies the result to the roster.
    ///
    /// Returns the id of the added or edited record with the outcome. An
    /// edit whose record was deleted meanwhile is `Ignored` and notifies
    /// nothing.
    ///
    /// # Errors
    /// - `Form` when the editor is closed or its input is rejected; the
    ///   editor then stays open.
    /// - `Roster` when the service rejects the record.
    pub fn submit_editor(&mut self) -> Result<(EmployeeId, MutationOutcome), AppError> {
        match self.editor.submit()? {
            Submission::Add(draft) => {
                let id = self.service.add(draft)?;
                self.notifications.push(NotificationKind::EmployeeAdded);
                Ok((id, MutationOutcome::Applied))
            }
            Submission::Update(employee) => {
                let id = employee.id.clone();
                let outcome = self.service.update(employee)?;
                if outcome.is_applied() {
                    self.notifications.push(NotificationKind::EmployeeUpdated);
                }
                Ok((id, outcome))
            }
        }
    }

    pub fn cancel_editor(&mut self) {
        self.editor.cancel();
    }

    /// Opens the delete confirmation for `id`.
    pub fn request_delete(&mut self, id: EmployeeId) {
        self.delete_dialog.open(id);
    }

    /// Deletes the pending record and closes the confirmation.
    pub fn confirm_delete(&mut self) -> MutationOutcome {
        let Some(id) = self.delete_dialog.confirm() else {
            return MutationOutcome::Ignored;
        };

        let outcome = self.service.delete(&id);
        if outcome.is_applied() {
            self.notifications.push(NotificationKind::EmployeeDeleted);
        }
        outcome
    }

    pub fn cancel_delete(&mut self) {
        if let Some(id) = self.delete_dialog.pending() {
            info!("event=delete_cancel module=ui id={id}");
        }
        self.delete_dialog.cancel();
    }

    /// Drains pending notifications, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }
}
