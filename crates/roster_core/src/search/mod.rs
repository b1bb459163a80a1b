//! Roster search entry points.
//!
//! # Responsibility
//! - Expose the case-insensitive substring filter over roster records.
//! - Keep match rules inside core so every front end filters the same way.

pub mod filter;
