//! Repository layer abstractions and in-memory storage.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep ordering and id-uniqueness rules inside the storage boundary.
//!
//! # Invariants
//! - Repository writes must enforce `Employee::validate()` before mutation.
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateId`).

pub mod employee_repo;
