/// Filter pipeline tests
///
/// Run with: cargo test --test filter_tests
use listgrid::{
    EvaluatorRegistry, FilterDef, FilterState, FilterValue, Record, SortState, Value,
    apply_filters, apply_sort,
};

fn role(id: i64, name: &str, status: &str, level: i64) -> Record {
    Record::from_iter([
        ("id", Value::Integer(id)),
        ("roleName", Value::from(name)),
        ("status", Value::from(status)),
        ("level", Value::Integer(level)),
    ])
}

fn roles() -> Vec<Record> {
    vec![
        role(1, "Admin", "Active", 10),
        role(2, "Cashier", "Active", 3),
        role(3, "Manager", "Inactive", 7),
    ]
}

#[test]
fn test_filter_is_idempotent() {
    let registry = EvaluatorRegistry::with_default_evaluators();
    let defs = vec![
        FilterDef::text("search", ["roleName"]),
        FilterDef::choice("status", "status"),
    ];
    let mut state = FilterState::new();
    state.set("search", FilterValue::Text("a".into()));
    state.set("status", FilterValue::Choice("Active".into()));

    let once = apply_filters(&roles(), &defs, &state, &registry);
    let twice = apply_filters(&once, &defs, &state, &registry);
    assert_eq!(once, twice);
}

#[test]
fn test_active_filters_combine_as_and() {
    let registry = EvaluatorRegistry::with_default_evaluators();
    let defs = vec![
        FilterDef::choice("status", "status"),
        FilterDef::range("level", "level"),
    ];
    let mut state = FilterState::new();
    state.set("status", FilterValue::Choice("Active".into()));
    state.set(
        "level",
        FilterValue::Range {
            min: Some(5.0),
            max: None,
        },
    );

    let result = apply_filters(&roles(), &defs, &state, &registry);
    // Active AND level >= 5 leaves only Admin
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].get("roleName").and_then(Value::as_str), Some("Admin"));
}

#[test]
fn test_empty_state_passes_everything() {
    let registry = EvaluatorRegistry::with_default_evaluators();
    let defs = vec![FilterDef::text("search", ["roleName"])];
    let state = FilterState::new();

    let result = apply_filters(&roles(), &defs, &state, &registry);
    assert_eq!(result, roles());
}

#[test]
fn test_all_sentinel_deactivates_choice() {
    let registry = EvaluatorRegistry::with_default_evaluators();
    let defs = vec![FilterDef::choice("status", "status")];
    let mut state = FilterState::new();
    state.set("status", FilterValue::Choice("All".into()));

    assert_eq!(apply_filters(&roles(), &defs, &state, &registry).len(), 3);
}

#[test]
fn test_blank_text_query_is_inactive() {
    let registry = EvaluatorRegistry::with_default_evaluators();
    let defs = vec![FilterDef::text("search", ["roleName"])];
    let mut state = FilterState::new();
    state.set("search", FilterValue::Text("   ".into()));

    assert_eq!(apply_filters(&roles(), &defs, &state, &registry).len(), 3);
}

#[test]
fn test_end_to_end_roles_scenario() {
    // Substring "an" is literal: it hits "Manager" but not "Admin"
    let registry = EvaluatorRegistry::with_default_evaluators();
    let defs = vec![FilterDef::text("search", ["roleName"])];
    let mut state = FilterState::new();
    state.set("search", FilterValue::Text("an".into()));

    let filtered = apply_filters(&roles(), &defs, &state, &registry);
    assert_eq!(filtered.len(), 1);
    assert_eq!(
        filtered[0].get("roleName").and_then(Value::as_str),
        Some("Manager")
    );

    // Ascending sort over the unfiltered set
    let sorted = apply_sort(&roles(), Some(&SortState::ascending("roleName")));
    let names: Vec<_> = sorted
        .iter()
        .map(|r| r.get("roleName").unwrap().to_string())
        .collect();
    assert_eq!(names, ["Admin", "Cashier", "Manager"]);
}

#[test]
fn test_text_filter_spans_multiple_fields() {
    let registry = EvaluatorRegistry::with_default_evaluators();
    let defs = vec![FilterDef::text("search", ["roleName", "status"])];
    let mut state = FilterState::new();
    state.set("search", FilterValue::Text("inact".into()));

    let result = apply_filters(&roles(), &defs, &state, &registry);
    assert_eq!(result.len(), 1);
    assert_eq!(
        result[0].get("roleName").and_then(Value::as_str),
        Some("Manager")
    );
}

#[test]
fn test_range_bounds_are_inclusive() {
    let registry = EvaluatorRegistry::with_default_evaluators();
    let defs = vec![FilterDef::range("level", "level")];
    let mut state = FilterState::new();
    state.set(
        "level",
        FilterValue::Range {
            min: Some(3.0),
            max: Some(7.0),
        },
    );

    let result = apply_filters(&roles(), &defs, &state, &registry);
    let ids: Vec<_> = result
        .iter()
        .map(|r| r.get("id").unwrap().as_i64().unwrap())
        .collect();
    assert_eq!(ids, [2, 3]);
}
