use super::{FilterEvaluator, FilterKind, FilterValue};
use crate::core::Record;

/// Case-insensitive substring search across the configured fields.
///
/// A record matches when any field's display form contains the query as a
/// literal substring (no word-boundary logic: "an" matches "Manager" but
/// not "Admin"). NULL and missing fields never match.
pub struct TextEvaluator;

impl FilterEvaluator for TextEvaluator {
    fn name(&self) -> &'static str {
        "TEXT"
    }

    fn can_evaluate(&self, kind: &FilterKind, value: &FilterValue) -> bool {
        matches!(kind, FilterKind::Text { .. }) && matches!(value, FilterValue::Text(_))
    }

    fn matches(&self, kind: &FilterKind, value: &FilterValue, record: &Record) -> bool {
        let (FilterKind::Text { fields }, FilterValue::Text(query)) = (kind, value) else {
            unreachable!();
        };

        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        fields.iter().any(|field| {
            record
                .get(field)
                .filter(|v| !v.is_null())
                .is_some_and(|v| v.to_string().to_lowercase().contains(&needle))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Value;

    fn role(name: &str) -> Record {
        Record::from_iter([("roleName", Value::from(name))])
    }

    fn matches(query: &str, record: &Record) -> bool {
        TextEvaluator.matches(
            &FilterKind::Text {
                fields: vec!["roleName".into()],
            },
            &FilterValue::Text(query.into()),
            record,
        )
    }

    #[test]
    fn test_literal_substring_semantics() {
        assert!(matches("an", &role("Manager")));
        assert!(!matches("an", &role("Admin")));
        assert!(!matches("an", &role("Cashier")));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(matches("ADMIN", &role("admin")));
        assert!(matches("adm", &role("Admin")));
    }

    #[test]
    fn test_null_field_never_matches() {
        let record = Record::from_iter([("roleName", Value::Null)]);
        assert!(!matches("x", &record));
    }

    #[test]
    fn test_numeric_field_matches_display_form() {
        let record = Record::from_iter([("roleName", Value::Integer(1042))]);
        assert!(matches("04", &record));
    }
}
