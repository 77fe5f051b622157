//! View projection: the searched, filtered and sorted rows shown in the grid.
//!
//! Recomputation is pure; the same inputs always give the same sequence.

use crate::models::{EmailStatus, Record, RecordField};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: RecordField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: RecordField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: RecordField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

/// Search term, status filters and sort of the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub search: String,
    pub filters: BTreeSet<EmailStatus>,
    pub sort: Option<SortSpec>,
}

impl ViewQuery {
    /// Cycle the sort on `field`: asc → desc → none; another field restarts at asc.
    pub fn toggle_sort(&mut self, field: RecordField) {
        self.sort = match self.sort {
            Some(spec) if spec.field == field => match spec.direction {
                SortDirection::Asc => Some(SortSpec::desc(field)),
                SortDirection::Desc => None,
            },
            _ => Some(SortSpec::asc(field)),
        };
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Add or remove one status from the active filter set.
    pub fn toggle_filter(&mut self, status: EmailStatus) {
        if !self.filters.remove(&status) {
            self.filters.insert(status);
        }
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    pub fn is_filtered(&self) -> bool {
        !self.filters.is_empty()
    }
}

/// Case-insensitive substring match on the four searchable columns.
pub fn matches_search(record: &Record, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let lower = term.to_lowercase();
    record
        .searchable_values()
        .iter()
        .any(|v| v.to_lowercase().contains(&lower))
}

pub fn matches_filters(record: &Record, filters: &BTreeSet<EmailStatus>) -> bool {
    filters.is_empty() || filters.contains(&record.email_waterfall)
}

/// Project `rows` through `query`. Sorting is stable in both directions.
pub fn project<'a>(rows: &'a [Record], query: &ViewQuery) -> Vec<&'a Record> {
    let mut result: Vec<&Record> = rows
        .iter()
        .filter(|r| matches_search(r, &query.search))
        .filter(|r| matches_filters(r, &query.filters))
        .collect();

    if let Some(spec) = query.sort {
        result.sort_by(|a, b| {
            let av = a.field_value(spec.field);
            let bv = b.field_value(spec.field);
            match spec.direction {
                SortDirection::Asc => av.cmp(bv),
                SortDirection::Desc => bv.cmp(av),
            }
        });
    }

    result
}
