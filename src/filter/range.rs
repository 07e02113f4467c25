use super::{FilterEvaluator, FilterKind, FilterValue};
use crate::core::Record;

/// Numeric `[min, max]` window predicate.
///
/// An omitted bound is satisfied vacuously. When at least one bound is
/// supplied, a record whose field is missing or non-numeric fails: it
/// cannot be shown to lie inside the window.
pub struct RangeEvaluator;

impl FilterEvaluator for RangeEvaluator {
    fn name(&self) -> &'static str {
        "RANGE"
    }

    fn can_evaluate(&self, kind: &FilterKind, value: &FilterValue) -> bool {
        matches!(kind, FilterKind::Range { .. }) && matches!(value, FilterValue::Range { .. })
    }

    fn matches(&self, kind: &FilterKind, value: &FilterValue, record: &Record) -> bool {
        let (FilterKind::Range { field }, FilterValue::Range { min, max }) = (kind, value) else {
            unreachable!();
        };

        if min.is_none() && max.is_none() {
            return true;
        }

        let Some(v) = record.get(field).and_then(|v| v.as_f64()) else {
            return false;
        };

        let ge_min = min.map(|m| v >= m).unwrap_or(true);
        let le_max = max.map(|m| v <= m).unwrap_or(true);
        ge_min && le_max
    }
}
