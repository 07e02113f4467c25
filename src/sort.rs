// ============================================================================
// src/sort.rs - stable record sorting by a designated field
// ============================================================================

use crate::core::{Record, Value};
use std::cmp::Ordering;

/// `(field, direction)` pair. `None` at the call sites means source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub descending: bool,
}

impl SortState {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: false,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }

    /// Header-click semantics: toggling the current field flips direction,
    /// selecting a new field resets to ascending.
    pub fn toggle(current: Option<&SortState>, field: &str) -> SortState {
        match current {
            Some(state) if state.field == field => SortState {
                field: field.to_string(),
                descending: !state.descending,
            },
            _ => SortState::ascending(field),
        }
    }
}

/// Stable sort by the designated field (ties preserve relative input order).
///
/// String fields compare case-insensitively, numeric fields numerically,
/// date-like text fields by parsed timestamp; see [`Value::compare`].
/// Missing fields sort as NULL (last).
pub fn apply_sort(records: &[Record], sort: Option<&SortState>) -> Vec<Record> {
    let mut sorted = records.to_vec();
    let Some(state) = sort else {
        return sorted;
    };

    // Vec::sort_by is stable, which is what keeps equal keys in input order
    sorted.sort_by(|a, b| {
        let va = a.get(&state.field).unwrap_or(&Value::Null);
        let vb = b.get(&state.field).unwrap_or(&Value::Null);
        let cmp = va.compare(vb);
        if state.descending { cmp.reverse() } else { cmp }
    });
    sorted
}

/// Compare two records by one field, reusable outside the full pipeline.
pub fn compare_records(a: &Record, b: &Record, field: &str) -> Ordering {
    let va = a.get(field).unwrap_or(&Value::Null);
    let vb = b.get(field).unwrap_or(&Value::Null);
    va.compare(vb)
}
