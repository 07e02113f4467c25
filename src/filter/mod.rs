//! Filter pipeline: declarative filter definitions, user-driven filter
//! state, and a pluggable evaluator registry that turns both into a pure
//! predicate over records.
//!
//! Active filters combine as a logical AND. Applying the same state to the
//! same collection always yields the same result (no side effects), so the
//! pipeline is idempotent by construction.

pub mod choice;
pub mod range;
pub mod text;

pub use choice::ChoiceEvaluator;
pub use range::RangeEvaluator;
pub use text::TextEvaluator;

use crate::core::Record;
use log::warn;
use std::collections::HashMap;

/// Selection sentinel that deactivates a choice filter ("show everything").
pub const CHOICE_ALL: &str = "All";

/// What a filter inspects, fixed by the list configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterKind {
    /// Case-insensitive substring search across one or more fields.
    Text { fields: Vec<String> },
    /// Case-sensitive exact match on one field.
    Choice { field: String },
    /// Numeric `[min, max]` window on one field.
    Range { field: String },
}

/// One configured filter slot: a stable key plus the kind of predicate
/// bound to it.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDef {
    pub key: String,
    pub kind: FilterKind,
}

impl FilterDef {
    pub fn text<K, I, F>(key: K, fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        Self {
            key: key.into(),
            kind: FilterKind::Text {
                fields: fields.into_iter().map(Into::into).collect(),
            },
        }
    }

    pub fn choice(key: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: FilterKind::Choice {
                field: field.into(),
            },
        }
    }

    pub fn range(key: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: FilterKind::Range {
                field: field.into(),
            },
        }
    }
}

/// The user-supplied predicate value for one filter slot.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Choice(String),
    Range { min: Option<f64>, max: Option<f64> },
}

impl FilterValue {
    /// An inactive value matches everything and is skipped entirely.
    pub fn is_active(&self) -> bool {
        match self {
            Self::Text(q) => !q.trim().is_empty(),
            Self::Choice(sel) => !sel.is_empty() && sel != CHOICE_ALL,
            Self::Range { min, max } => min.is_some() || max.is_some(),
        }
    }
}

/// Current predicate value per filter key. Purely derived state: reapplying
/// it to the same collection is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    values: HashMap<String, FilterValue>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: FilterValue) {
        self.values.insert(key.into(), value);
    }

    pub fn clear(&mut self, key: &str) {
        self.values.remove(key);
    }

    pub fn clear_all(&mut self) {
        self.values.clear();
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Trait for filter predicate evaluators (plugin interface).
pub trait FilterEvaluator: Send + Sync {
    fn name(&self) -> &'static str;

    fn can_evaluate(&self, kind: &FilterKind, value: &FilterValue) -> bool;

    /// Decide whether `record` passes the predicate. Must be pure.
    fn matches(&self, kind: &FilterKind, value: &FilterValue, record: &Record) -> bool;
}

/// Registry of filter evaluators, dispatched by kind/value shape.
pub struct EvaluatorRegistry {
    evaluators: Vec<Box<dyn FilterEvaluator>>,
}

impl EvaluatorRegistry {
    pub fn new() -> Self {
        Self {
            evaluators: Vec::new(),
        }
    }

    /// Registry with the three built-in evaluators: text, choice, range.
    pub fn with_default_evaluators() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(TextEvaluator));
        registry.register(Box::new(ChoiceEvaluator));
        registry.register(Box::new(RangeEvaluator));
        registry
    }

    pub fn register(&mut self, evaluator: Box<dyn FilterEvaluator>) {
        self.evaluators.push(evaluator);
    }

    fn matches(&self, kind: &FilterKind, value: &FilterValue, record: &Record) -> bool {
        for evaluator in &self.evaluators {
            if evaluator.can_evaluate(kind, value) {
                return evaluator.matches(kind, value, record);
            }
        }
        // A kind/value mismatch (e.g. stale state after a config change)
        // must not silently hide rows
        warn!("no evaluator for filter kind {:?}, record passes", kind);
        true
    }
}

impl Default for EvaluatorRegistry {
    fn default() -> Self {
        Self::with_default_evaluators()
    }
}

/// Evaluate every active filter as a logical AND across the collection.
///
/// Pure function: same inputs → same output, `records` is never mutated.
pub fn apply_filters(
    records: &[Record],
    defs: &[FilterDef],
    state: &FilterState,
    registry: &EvaluatorRegistry,
) -> Vec<Record> {
    let active: Vec<(&FilterDef, &FilterValue)> = defs
        .iter()
        .filter_map(|def| {
            state
                .get(&def.key)
                .filter(|value| value.is_active())
                .map(|value| (def, value))
        })
        .collect();

    if active.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| {
            active
                .iter()
                .all(|(def, value)| registry.matches(&def.kind, value, record))
        })
        .cloned()
        .collect()
}
