//! Roster use-case service.
//!
//! # Responsibility
//! - Provide the add/update/delete/filter entry points over the roster.
//! - Assign identifiers through an explicit `IdGenerator`.
//! - Emit metadata-only diagnostic events for every mutation.
//!
//! # Invariants
//! - This service is the only write path into its repository.
//! - Update and delete of an absent id are no-ops, never errors.
//! - Generated ids never collide with stored ids.

use crate::model::employee::{Employee, EmployeeDraft};
use crate::model::id::{EmployeeId, IdGenerator, SequentialIdGenerator, UuidIdGenerator};
use crate::model::sample::sample_roster;
use crate::repo::employee_repo::{EmployeeRepository, InMemoryEmployeeRepository, RepoError};
use crate::search::filter::{FilterView, SearchQuery};
use log::{debug, info, warn};
use thiserror::Error;

pub type RosterResult<T> = Result<T, RosterError>;

/// Service error for roster mutations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    /// Repository rejected the write.
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Result of an update or delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The target record existed and was changed.
    Applied,
    /// No record with the given id; nothing changed.
    Ignored,
}

impl MutationOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Use-case service over a roster repository.
pub struct RosterService<R: EmployeeRepository, G: IdGenerator> {
    repo: R,
    ids: G,
}

impl RosterService<InMemoryEmployeeRepository, UuidIdGenerator> {
    /// In-memory roster seeded with the sample records and UUID ids.
    pub fn with_sample_roster() -> RosterResult<Self> {
        let repo = InMemoryEmployeeRepository::with_employees(sample_roster())?;
        Ok(Self::new(repo, UuidIdGenerator))
    }
}

impl RosterService<InMemoryEmployeeRepository, SequentialIdGenerator> {
    /// Empty in-memory roster with counter ids starting at `1`.
    pub fn sequential() -> Self {
        Self::new(
            InMemoryEmployeeRepository::new(),
            SequentialIdGenerator::default(),
        )
    }
}

impl<R: EmployeeRepository, G: IdGenerator> RosterService<R, G> {
    /// Creates a service using the provided repository and id factory.
    pub fn new(repo: R, ids: G) -> Self {
        Self { repo, ids }
    }

    /// Appends a new record built from `draft` and returns its fresh id.
    ///
    /// # Errors
    /// - Returns `Repo(Validation)` when the draft violates record invariants.
    pub fn add(&mut self, draft: EmployeeDraft) -> RosterResult<EmployeeId> {
        let id = self.fresh_id();
        let employee = Employee::from_draft(id.clone(), draft);
        self.repo.insert(employee)?;

        info!(
            "event=employee_add module=service status=ok id={} roster_len={}",
            id,
            self.repo.len()
        );
        Ok(id)
    }

    /// Replaces the record with `employee.id` in place.
    ///
    /// Returns `Ignored` when no record has that id.
    ///
    /// # Errors
    /// - Returns `Repo(Validation)` when the replacement is invalid.
    pub fn update(&mut self, employee: Employee) -> RosterResult<MutationOutcome> {
        let id = employee.id.clone();
        match self.repo.replace(employee) {
            Ok(()) => {
                info!("event=employee_update module=service status=ok id={id}");
                Ok(MutationOutcome::Applied)
            }
            Err(RepoError::NotFound(_)) => {
                warn!(
                    "event=employee_update module=service status=ignored reason=not_found id={id}"
                );
                Ok(MutationOutcome::Ignored)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Removes the record with `id`, if present.
    pub fn delete(&mut self, id: &EmployeeId) -> MutationOutcome {
        match self.repo.remove(id) {
            Ok(_) => {
                info!(
                    "event=employee_delete module=service status=ok id={} roster_len={}",
                    id,
                    self.repo.len()
                );
                MutationOutcome::Applied
            }
            Err(_) => {
                warn!(
                    "event=employee_delete module=service status=ignored reason=not_found id={id}"
                );
                MutationOutcome::Ignored
            }
        }
    }

    /// Lazy view of records matching `query`, in roster order.
    pub fn filter(&self, query: impl Into<SearchQuery>) -> FilterView<'_> {
        let query = query.into();
        debug!(
            "event=roster_filter module=service query_len={}",
            query.text().chars().count()
        );
        FilterView::new(self.repo.all(), query)
    }

    pub fn get(&self, id: &EmployeeId) -> Option<&Employee> {
        self.repo.get(id)
    }

    /// All records in insertion order.
    pub fn employees(&self) -> &[Employee] {
        self.repo.all()
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    fn fresh_id(&mut self) -> EmployeeId {
        loop {
            let candidate = self.ids.next_id();
            if !candidate.is_empty() && !self.repo.contains(&candidate) {
                return candidate;
            }
            debug!("event=id_collision module=service id={candidate}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MutationOutcome, RosterService};
    use crate::model::id::SequentialIdGenerator;
    use crate::model::sample::sample_roster;
    use crate::repo::employee_repo::InMemoryEmployeeRepository;

    #[test]
    fn generated_ids_skip_seed_ids() {
        let repo = InMemoryEmployeeRepository::with_employees(sample_roster()).unwrap();
        let mut service = RosterService::new(repo, SequentialIdGenerator::default());

        let draft = service.employees()[0].draft();
        let id = service.add(draft).unwrap();
        assert_eq!(id.as_str(), "3");
        assert_eq!(service.len(), 3);
    }

    #[test]
    fn outcome_reports_application() {
        assert!(MutationOutcome::Applied.is_applied());
        assert!(!MutationOutcome::Ignored.is_applied());
    }
}
