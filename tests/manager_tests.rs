/// ListManager lifecycle tests
///
/// Run with: cargo test --test manager_tests
use async_trait::async_trait;
use listgrid::{
    DataSource, Envelope, FilterValue, ListConfig, ListError, ListManager, MemorySource, Record,
    SourceError, SourceResult, Value,
};

fn role(id: i64, name: &str) -> Record {
    Record::from_iter([("id", Value::Integer(id)), ("roleName", Value::from(name))])
}

fn manager() -> ListManager {
    ListManager::new(
        ListConfig::builder("roles")
            .unique_field("roleName")
            .text_filter("search", ["roleName"])
            .build(),
    )
}

/// Source double that always answers with a fixed envelope.
struct FixedSource(Envelope);

#[async_trait]
impl DataSource for FixedSource {
    async fn get(&self, _entity: &str) -> SourceResult<Envelope> {
        Ok(self.0.clone())
    }

    async fn post(&self, _entity: &str, _record: &Record) -> SourceResult<Envelope> {
        Ok(self.0.clone())
    }

    async fn put(&self, _entity: &str, _record: &Record) -> SourceResult<Envelope> {
        Ok(self.0.clone())
    }

    async fn delete(&self, _entity: &str, _id: &Value) -> SourceResult<Envelope> {
        Ok(self.0.clone())
    }
}

/// Source double whose transport always fails.
struct BrokenSource;

#[async_trait]
impl DataSource for BrokenSource {
    async fn get(&self, _entity: &str) -> SourceResult<Envelope> {
        Err(SourceError::Transport("connection refused".into()))
    }

    async fn post(&self, _entity: &str, _record: &Record) -> SourceResult<Envelope> {
        Err(SourceError::Transport("connection refused".into()))
    }

    async fn put(&self, _entity: &str, _record: &Record) -> SourceResult<Envelope> {
        Err(SourceError::Transport("connection refused".into()))
    }

    async fn delete(&self, _entity: &str, _id: &Value) -> SourceResult<Envelope> {
        Err(SourceError::Transport("connection refused".into()))
    }
}

#[tokio::test]
async fn test_load_success_replaces_collection_and_clears_error() {
    let mut manager = manager();

    // Leave an error behind first
    manager
        .load(&FixedSource(Envelope::failure("timeout")))
        .await;
    assert_eq!(manager.error(), Some("timeout"));

    manager
        .load(&FixedSource(Envelope::success(vec![role(1, "Admin")])))
        .await;
    assert_eq!(manager.records().len(), 1);
    assert!(manager.error().is_none());
    assert!(!manager.loading());
}

#[tokio::test]
async fn test_load_failure_surfaces_description() {
    let mut manager = manager();
    manager
        .load(&FixedSource(Envelope::failure("timeout")))
        .await;

    assert!(manager.records().is_empty());
    assert_eq!(manager.error(), Some("timeout"));
    assert!(!manager.loading());
}

#[tokio::test]
async fn test_load_empty_is_silent() {
    let mut manager = manager();
    manager
        .load(&FixedSource(Envelope::empty("nothing here")))
        .await;

    assert!(manager.records().is_empty());
    assert!(manager.error().is_none());
}

#[tokio::test]
async fn test_load_transport_error_becomes_state() {
    let mut manager = manager();
    manager.load(&BrokenSource).await;

    assert!(manager.records().is_empty());
    assert_eq!(manager.error(), Some("Transport error: connection refused"));
    assert!(!manager.loading());
}

#[tokio::test]
async fn test_last_load_wins() {
    let mut manager = manager();
    manager
        .load(&FixedSource(Envelope::success(vec![role(1, "Admin")])))
        .await;
    manager
        .load(&FixedSource(Envelope::success(vec![
            role(2, "Cashier"),
            role(3, "Manager"),
        ])))
        .await;

    // Whole-collection replacement: only the later response is visible
    assert_eq!(manager.records().len(), 2);
    assert_eq!(manager.records()[0].get("id"), Some(&Value::Integer(2)));
}

#[tokio::test]
async fn test_load_from_memory_source() {
    let source = MemorySource::new();
    source
        .seed("roles", vec![role(1, "Admin"), role(2, "Cashier")])
        .await;

    let mut manager = manager();
    manager.load(&source).await;
    assert_eq!(manager.records().len(), 2);
}

#[test]
fn test_create_uniqueness_is_case_insensitive() {
    let mut manager = manager();
    manager.create(role(1, "Admin")).unwrap();

    let err = manager.create(role(2, "admin")).unwrap_err();
    match err {
        ListError::Validation { field, message } => {
            assert_eq!(field, "roleName");
            assert!(message.contains("already exists"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    // Collection unchanged
    assert_eq!(manager.records().len(), 1);
}

#[test]
fn test_update_uniqueness_excludes_own_record() {
    let mut manager = manager();
    manager.create(role(1, "Admin")).unwrap();
    manager.create(role(2, "Cashier")).unwrap();

    // Renaming Cashier to Admin clashes
    let err = manager
        .update(&Value::Integer(2), role(2, "Admin"))
        .unwrap_err();
    assert!(matches!(err, ListError::Validation { .. }));

    // Re-saving Admin as itself does not
    manager.update(&Value::Integer(1), role(1, "Admin")).unwrap();
}

#[test]
fn test_end_to_end_filter_sort_paginate() {
    let mut manager = manager();
    manager.create(role(1, "Admin")).unwrap();
    manager.create(role(2, "Cashier")).unwrap();
    manager.create(role(3, "Manager")).unwrap();

    manager.set_filter("search", FilterValue::Text("an".into()));
    let slice = manager.page();
    assert_eq!(slice.len(), 1);
    assert_eq!(
        slice.records[0].get("roleName").and_then(Value::as_str),
        Some("Manager")
    );

    manager.clear_filters();
    manager.toggle_sort("roleName");
    let slice = manager.page();
    let names: Vec<_> = slice
        .records
        .iter()
        .map(|r| r.get("roleName").unwrap().to_string())
        .collect();
    assert_eq!(names, ["Admin", "Cashier", "Manager"]);

    // Second click flips to descending
    manager.toggle_sort("roleName");
    let slice = manager.page();
    assert_eq!(
        slice.records[0].get("roleName").and_then(Value::as_str),
        Some("Manager")
    );
}

#[tokio::test]
async fn test_explicit_persistence_roundtrip() {
    // Mutations are local-only; a caller that wants persistence pushes the
    // record to the source itself and reloads
    let source = MemorySource::new();
    source.seed("roles", vec![role(1, "Admin")]).await;

    let mut manager = manager();
    manager.load(&source).await;

    let new_role = role(2, "Cashier");
    manager.create(new_role.clone()).unwrap();
    source.post("roles", &new_role).await.unwrap();

    let mut fresh = self::manager();
    fresh.load(&source).await;
    assert_eq!(fresh.records().len(), 2);
}
