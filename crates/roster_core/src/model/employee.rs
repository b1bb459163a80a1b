//! Employee record model.
//!
//! # Responsibility
//! - Define the canonical employee record and its id-less draft form.
//! - Provide record-level validation used by repository write paths.
//!
//! # Invariants
//! - `id` is non-empty and never changes after assignment.
//! - Required text fields are non-blank.
//! - `salary` is finite and non-negative.

use crate::model::id::EmployeeId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Record-level validation failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmployeeValidationError {
    #[error("employee id cannot be empty")]
    EmptyId,
    #[error("{0} cannot be blank")]
    BlankField(&'static str),
    #[error("salary must be a finite, non-negative number, got {0}")]
    InvalidSalary(f64),
}

/// Employee data without an identifier, as submitted by the create form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
    pub hire_date: NaiveDate,
    pub phone: String,
}

/// Canonical roster record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
    /// Serialized as `YYYY-MM-DD`.
    pub hire_date: NaiveDate,
    pub phone: String,
}

impl EmployeeDraft {
    /// Checks required fields and the salary range.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        let required = [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("email", &self.email),
            ("position", &self.position),
            ("department", &self.department),
            ("phone", &self.phone),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(EmployeeValidationError::BlankField(*name));
        }

        if !self.salary.is_finite() || self.salary < 0.0 {
            return Err(EmployeeValidationError::InvalidSalary(self.salary));
        }

        Ok(())
    }
}

impl Employee {
    /// Attaches an identifier to a draft.
    pub fn from_draft(id: EmployeeId, draft: EmployeeDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            position: draft.position,
            department: draft.department,
            salary: draft.salary,
            hire_date: draft.hire_date,
            phone: draft.phone,
        }
    }

    /// Returns every field except the identifier.
    pub fn draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            position: self.position.clone(),
            department: self.department.clone(),
            salary: self.salary,
            hire_date: self.hire_date,
            phone: self.phone.clone(),
        }
    }

    /// Display name: first and last name joined by one space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Validates the identifier and every draft-level field.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        if self.id.is_empty() {
            return Err(EmployeeValidationError::EmptyId);
        }
        self.draft().validate()
    }
}
