use super::{CHOICE_ALL, FilterEvaluator, FilterKind, FilterValue};
use crate::core::Record;

/// Exact-match predicate for enum-like fields (status badges, categories).
///
/// Comparison is case-sensitive against the field's display form. The
/// `"All"` sentinel and the empty string match every record; normally the
/// state layer already treats those as inactive, the check here keeps the
/// evaluator safe on its own.
pub struct ChoiceEvaluator;

impl FilterEvaluator for ChoiceEvaluator {
    fn name(&self) -> &'static str {
        "CHOICE"
    }

    fn can_evaluate(&self, kind: &FilterKind, value: &FilterValue) -> bool {
        matches!(kind, FilterKind::Choice { .. }) && matches!(value, FilterValue::Choice(_))
    }

    fn matches(&self, kind: &FilterKind, value: &FilterValue, record: &Record) -> bool {
        let (FilterKind::Choice { field }, FilterValue::Choice(selected)) = (kind, value) else {
            unreachable!();
        };

        if selected.is_empty() || selected == CHOICE_ALL {
            return true;
        }

        record
            .get(field)
            .is_some_and(|v| v.to_string() == *selected)
    }
}
