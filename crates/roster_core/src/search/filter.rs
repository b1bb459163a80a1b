//! Case-insensitive substring filter.
//!
//! # Responsibility
//! - Match a query against first name, last name, email, position and
//!   department (logical OR).
//! - Provide a lazy view that can be iterated any number of times.
//!
//! # Invariants
//! - An empty query matches every record.
//! - Output order is roster order.
//! - The query is not trimmed; whitespace is matched literally.

use crate::model::employee::Employee;
use std::iter::FusedIterator;
use std::slice::Iter;

/// Search text plus its lowercase needle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    needle: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let needle = text.to_lowercase();
        Self { text, needle }
    }

    /// The query exactly as entered.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns whether `employee` matches this query.
    pub fn matches(&self, employee: &Employee) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        [
            &employee.first_name,
            &employee.last_name,
            &employee.email,
            &employee.position,
            &employee.department,
        ]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

impl From<&str> for SearchQuery {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<&String> for SearchQuery {
    fn from(value: &String) -> Self {
        Self::new(value.as_str())
    }
}

impl From<String> for SearchQuery {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Returns whether `employee` matches `query`.
pub fn matches(employee: &Employee, query: &SearchQuery) -> bool {
    query.matches(employee)
}

/// Filtered view over a record slice.
///
/// Nothing is evaluated until iteration; every call to [`FilterView::iter`]
/// restarts from the first record.
#[derive(Debug, Clone)]
pub struct FilterView<'a> {
    records: &'a [Employee],
    query: SearchQuery,
}

impl<'a> FilterView<'a> {
    pub fn new(records: &'a [Employee], query: SearchQuery) -> Self {
        Self { records, query }
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn iter(&self) -> Filtered<'a, '_> {
        Filtered {
            inner: self.records.iter(),
            query: &self.query,
        }
    }

    /// Number of matching records. Walks the view once.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn to_vec(&self) -> Vec<&'a Employee> {
        self.iter().collect()
    }
}

impl<'a, 'v> IntoIterator for &'v FilterView<'a> {
    type Item = &'a Employee;
    type IntoIter = Filtered<'a, 'v>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the records of a [`FilterView`].
#[derive(Debug, Clone)]
pub struct Filtered<'a, 'v> {
    inner: Iter<'a, Employee>,
    query: &'v SearchQuery,
}

impl<'a> Iterator for Filtered<'a, '_> {
    type Item = &'a Employee;

    fn next(&mut self) -> Option<Self::Item> {
        let query = self.query;
        self.inner.by_ref().find(|employee| query.matches(employee))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl FusedIterator for Filtered<'_, '_> {}
