//! Edit-or-create dialog state.
//!
//! # Responsibility
//! - Hold transient form input for one create or edit session.
//! - Apply input-layer constraints at submit time and emit a typed submission.
//!
//! # Invariants
//! - Edit submissions always carry the id the dialog was opened with.
//! - A rejected submit leaves the dialog open with its input unchanged.
//! - A successful submit closes the dialog.

use crate::model::employee::{Employee, EmployeeDraft};
use crate::model::id::EmployeeId;
use chrono::NaiveDate;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// `type=date` wire format.
pub const HIRE_DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$").expect("valid email regex"));

/// Input-layer failure on submit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("no employee form is open")]
    NotOpen,
    #[error("{} is required", .0.label())]
    MissingField(FormField),
    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),
    #[error("`{0}` is not a valid salary; expected a non-negative number")]
    InvalidSalary(String),
    #[error("`{0}` is not a valid hire date; expected YYYY-MM-DD")]
    InvalidHireDate(String),
}

impl FormError {
    /// The input the error points at, when there is one.
    pub fn field(&self) -> Option<FormField> {
        match self {
            Self::NotOpen => None,
            Self::MissingField(field) => Some(*field),
            Self::InvalidEmail(_) => Some(FormField::Email),
            Self::InvalidSalary(_) => Some(FormField::Salary),
            Self::InvalidHireDate(_) => Some(FormField::HireDate),
        }
    }
}

/// One input of the employee form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
    Position,
    Department,
    Salary,
    HireDate,
}

impl FormField {
    /// Every input in form order.
    pub const ALL: [FormField; 8] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Phone,
        FormField::Position,
        FormField::Department,
        FormField::Salary,
        FormField::HireDate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Position => "Position",
            Self::Department => "Department",
            Self::Salary => "Salary",
            Self::HireDate => "Hire Date",
        }
    }
}

/// Raw text of every form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub salary: String,
    pub hire_date: String,
}

impl EmployeeForm {
    pub fn blank() -> Self {
        Self::default()
    }

    /// Pre-populates every input from an existing record.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            position: employee.position.clone(),
            department: employee.department.clone(),
            salary: employee.salary.to_string(),
            hire_date: employee.hire_date.format(HIRE_DATE_FORMAT).to_string(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Position => &self.position,
            FormField::Department => &self.department,
            FormField::Salary => &self.salary,
            FormField::HireDate => &self.hire_date,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Position => &mut self.position,
            FormField::Department => &mut self.department,
            FormField::Salary => &mut self.salary,
            FormField::HireDate => &mut self.hire_date,
        };
        *slot = value.into();
    }

    /// Converts the inputs into a draft, enforcing input constraints.
    ///
    /// Checks run in form order; the first failing input is reported.
    ///
    /// # Errors
    /// - `MissingField` for any input that is blank after trimming.
    /// - `InvalidEmail`, `InvalidSalary`, `InvalidHireDate` for malformed values.
    pub fn to_draft(&self) -> Result<EmployeeDraft, FormError> {
        if let Some(field) = FormField::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
        {
            return Err(FormError::MissingField(field));
        }

        let email = self.email.trim();
        if !EMAIL_RE.is_match(email) {
            return Err(FormError::InvalidEmail(email.to_string()));
        }

        let salary_text = self.salary.trim();
        let salary = salary_text
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
            .ok_or_else(|| FormError::InvalidSalary(salary_text.to_string()))?;

        let date_text = self.hire_date.trim();
        let hire_date = NaiveDate::parse_from_str(date_text, HIRE_DATE_FORMAT)
            .map_err(|_| FormError::InvalidHireDate(date_text.to_string()))?;

        Ok(EmployeeDraft {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: email.to_string(),
            position: self.position.trim().to_string(),
            department: self.department.trim().to_string(),
            salary,
            hire_date,
            phone: self.phone.trim().to_string(),
        })
    }
}

/// Whether the dialog creates a record or edits one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(EmployeeId),
}

impl EditorMode {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Create => "Add New Employee",
            Self::Edit(_) => "Edit Employee",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Create => "Enter the details of the new employee.",
            Self::Edit(_) => "Update employee information below.",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Create => "Add Employee",
            Self::Edit(_) => "Update Employee",
        }
    }
}

/// Payload emitted by a successful submit.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Add(EmployeeDraft),
    Update(Employee),
}

/// Two-state edit-or-create dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorDialog {
    #[default]
    Closed,
    Open {
        mode: EditorMode,
        form: EmployeeForm,
    },
}

impl EditorDialog {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn mode(&self) -> Option<&EditorMode> {
        match self {
            Self::Open { mode, .. } => Some(mode),
            Self::Closed => None,
        }
    }

    pub fn form(&self) -> Option<&EmployeeForm> {
        match self {
            Self::Open { form, .. } => Some(form),
            Self::Closed => None,
        }
    }

    /// Opens in create mode with every input blank.
    pub fn open_create(&mut self) {
        *self = Self::Open {
            mode: EditorMode::Create,
            form: EmployeeForm::blank(),
        };
    }

    /// Opens in edit mode pre-populated from `employee`.
    pub fn open_edit(&mut self, employee: &Employee) {
        *self = Self::Open {
            mode: EditorMode::Edit(employee.id.clone()),
            form: EmployeeForm::from_employee(employee),
        };
    }

    /// Replaces the text of one input.
    ///
    /// # Errors
    /// - `NotOpen` when the dialog is closed.
    pub fn set_field(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        match self {
            Self::Open { form, .. } => {
                form.set(field, value);
                Ok(())
            }
            Self::Closed => Err(FormError::NotOpen),
        }
    }

    /// Validates the form and closes the dialog on success.
    ///
    /// # Errors
    /// - `NotOpen` when the dialog is closed.
    /// - Any input-constraint error from [`EmployeeForm::to_draft`]; the
    ///   dialog stays open.
    pub fn submit(&mut self) -> Result<Submission, FormError> {
        let Self::Open { mode, form } = self else {
            return Err(FormError::NotOpen);
        };

        let draft = form.to_draft().inspect_err(|err| {
            debug!("event=form_submit module=ui status=rejected reason={err}");
        })?;
        let submission = match mode {
            EditorMode::Create => Submission::Add(draft),
            EditorMode::Edit(id) => Submission::Update(Employee::from_draft(id.clone(), draft)),
        };

        *self = Self::Closed;
        Ok(submission)
    }

    /// Closes without emitting anything.
    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }
}
