//! Employee identifiers and identifier factories.
//!
//! # Responsibility
//! - Define the stable key used by roster lookup.
//! - Keep identifier generation behind an explicit factory.
//!
//! # Invariants
//! - An `EmployeeId` is never re-assigned to a different record.
//! - Generators only propose candidates; the service skips ids already in use.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of one employee record.
///
/// Plain string on the wire so seed rows like `"1"` and generated UUIDs share
/// one representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Display for EmployeeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EmployeeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Factory for fresh identifier candidates.
pub trait IdGenerator {
    fn next_id(&mut self) -> EmployeeId;
}

/// Random UUID v4 identifiers (hyphenated form).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> EmployeeId {
        EmployeeId(Uuid::new_v4().to_string())
    }
}

/// Monotonic counter identifiers: `"1"`, `"2"`, ...
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    /// Creates a counter whose first candidate is `start`.
    pub fn starting_at(start: u64) -> Self {
        Self { next: start }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> EmployeeId {
        let value = self.next;
        self.next = self.next.saturating_add(1);
        EmployeeId(value.to_string())
    }
}
