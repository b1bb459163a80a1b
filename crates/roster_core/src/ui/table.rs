//! Plain-text roster table.
//!
//! # Responsibility
//! - Project visible records into display rows.
//! - Render rows as an aligned text table with an empty-state line.
//!
//! # Invariants
//! - Row order equals the order of the input records.
//! - Rendering never panics on a malformed date format; it falls back to
//!   `YYYY-MM-DD`.

use crate::model::employee::Employee;
use chrono::NaiveDate;
use std::fmt::Write as _;

/// en-US `toLocaleDateString` output: month and day without zero padding.
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

pub const EMPTY_TABLE_MESSAGE: &str =
    "No employees found. Add your first employee to get started.";

const HEADERS: [&str; 6] = ["ID", "Name", "Email", "Position", "Department", "Hire Date"];
const COLUMN_GAP: &str = "  ";

/// One visible record, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub hire_date: String,
}

impl TableRow {
    pub fn from_employee(employee: &Employee, date_format: &str) -> Self {
        Self {
            id: employee.id.to_string(),
            name: employee.full_name(),
            email: employee.email.clone(),
            position: employee.position.clone(),
            department: employee.department.clone(),
            hire_date: format_date(employee.hire_date, date_format),
        }
    }

    fn cells(&self) -> [&str; 6] {
        [
            &self.id,
            &self.name,
            &self.email,
            &self.position,
            &self.department,
            &self.hire_date,
        ]
    }
}

/// Formats `date` with a chrono `strftime` pattern.
///
/// Falls back to ISO format when `pattern` cannot format a date.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    try_format_date(date, pattern).unwrap_or_else(|| date.to_string())
}

/// Formats `date`, or `None` when `pattern` has invalid specifiers or
/// needs a time or offset.
pub fn try_format_date(date: NaiveDate, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

/// Renders `rows` under a header line and a separator line.
pub fn render_table(rows: &[TableRow]) -> String {
    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, HEADERS, &widths);
    let separators = widths.map(|width| "-".repeat(width));
    push_line(&mut out, separators.each_ref().map(String::as_str), &widths);

    if rows.is_empty() {
        out.push_str(EMPTY_TABLE_MESSAGE);
        out.push('\n');
        return out;
    }

    for row in rows {
        push_line(&mut out, row.cells(), &widths);
    }
    out
}

fn push_line(out: &mut String, cells: [&str; 6], widths: &[usize; 6]) {
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if index > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat(' ').take(pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
