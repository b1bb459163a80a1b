//! Roster domain model.
//!
//! # Responsibility
//! - Define the employee record, its draft form and identifier types.
//! - Provide the built-in sample roster.
//!
//! # Invariants
//! - Every record is identified by a stable `EmployeeId`.
//! - Deletion removes the record; there are no tombstones.

pub mod employee;
pub mod id;
pub mod sample;
