//! Employee repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the ordered roster.
//! - Keep insertion order as the only ordering.
//!
//! # Invariants
//! - No two stored records share an `EmployeeId`.
//! - `replace` keeps the record at its original position.

use crate::model::employee::{Employee, EmployeeValidationError};
use crate::model::id::EmployeeId;
use thiserror::Error;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for roster mutations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RepoError {
    #[error(transparent)]
    Validation(#[from] EmployeeValidationError),
    #[error("employee id already exists: {0}")]
    DuplicateId(EmployeeId),
    #[error("employee not found: {0}")]
    NotFound(EmployeeId),
}

/// Repository interface for roster CRUD operations.
pub trait EmployeeRepository {
    fn insert(&mut self, employee: Employee) -> RepoResult<()>;
    fn replace(&mut self, employee: Employee) -> RepoResult<()>;
    fn remove(&mut self, id: &EmployeeId) -> RepoResult<Employee>;
    fn get(&self, id: &EmployeeId) -> Option<&Employee>;
    /// All records in insertion order.
    fn all(&self) -> &[Employee];

    fn contains(&self, id: &EmployeeId) -> bool {
        self.get(id).is_some()
    }

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}

/// `Vec`-backed roster storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    employees: Vec<Employee>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository from seed records, keeping their order.
    ///
    /// # Errors
    /// - Returns `Validation` for an invalid record.
    /// - Returns `DuplicateId` when two seeds share an id.
    pub fn with_employees(employees: impl IntoIterator<Item = Employee>) -> RepoResult<Self> {
        let mut repo = Self::new();
        for employee in employees {
            repo.insert(employee)?;
        }
        Ok(repo)
    }

    fn position(&self, id: &EmployeeId) -> Option<usize> {
        self.employees.iter().position(|employee| &employee.id == id)
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn insert(&mut self, employee: Employee) -> RepoResult<()> {
        employee.validate()?;
        if self.contains(&employee.id) {
            return Err(RepoError::DuplicateId(employee.id));
        }
        self.employees.push(employee);
        Ok(())
    }

    fn replace(&mut self, employee: Employee) -> RepoResult<()> {
        employee.validate()?;
        let Some(index) = self.position(&employee.id) else {
            return Err(RepoError::NotFound(employee.id));
        };
        self.employees[index] = employee;
        Ok(())
    }

    fn remove(&mut self, id: &EmployeeId) -> RepoResult<Employee> {
        let Some(index) = self.position(id) else {
            return Err(RepoError::NotFound(id.clone()));
        };
        Ok(self.employees.remove(index))
    }

    fn get(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|employee| &employee.id == id)
    }

    fn all(&self) -> &[Employee] {
        &self.employees
    }
}

#[cfg(test)]
mod tests {
    use super::{EmployeeRepository, InMemoryEmployeeRepository, RepoError};
    use crate::model::employee::EmployeeValidationError;
    use crate::model::sample::sample_roster;

    #[test]
    fn seeding_rejects_duplicate_ids() {
        let mut seeds = sample_roster();
        seeds[1].id = seeds[0].id.clone();

        let err = InMemoryEmployeeRepository::with_employees(seeds).unwrap_err();
        assert!(matches!(err, RepoError::DuplicateId(id) if id.as_str() == "1"));
    }

    #[test]
    fn replace_validates_before_mutation() {
        let mut repo = InMemoryEmployeeRepository::with_employees(sample_roster()).unwrap();
        let mut broken = repo.all()[0].clone();
        broken.salary = -1.0;

        let err = repo.replace(broken).unwrap_err();
        assert_eq!(
            err,
            RepoError::Validation(EmployeeValidationError::InvalidSalary(-1.0))
        );
        assert_eq!(repo.all()[0].salary, 85_000.0);
    }

    #[test]
    fn remove_missing_returns_not_found() {
        let mut repo = InMemoryEmployeeRepository::new();
        let err = repo.remove(&"404".into()).unwrap_err();
        assert_eq!(err, RepoError::NotFound("404".into()));
        assert!(repo.is_empty());
    }
}
