//! Presentation state for the roster screen.
//!
//! # Responsibility
//! - Model the edit-or-create and delete-confirmation workflows as explicit
//!   state machines.
//! - Shape visible records into table rows and queue success notifications.
//!
//! # Invariants
//! - Presentation code holds only transient clones of records.
//! - No terminal or network I/O happens in this module.

pub mod app;
pub mod confirm;
pub mod form;
pub mod notify;
pub mod table;
