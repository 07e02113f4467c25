use super::{DataSource, Envelope, SourceResult};
use crate::core::{Record, Value};
use async_trait::async_trait;
use log::debug;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory [`DataSource`] with full CRUD, keyed by entity name.
///
/// Backs tests and demo wiring, and gives callers that do persist their
/// mutations a working `post`/`put`/`delete` target. All state lives
/// behind one async `RwLock`; a write replaces the stored collection in a
/// single step.
pub struct MemorySource {
    collections: RwLock<HashMap<String, Vec<Record>>>,
    id_field: String,
}

impl MemorySource {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
            id_field: "id".to_string(),
        }
    }

    pub fn with_id_field(mut self, field: impl Into<String>) -> Self {
        self.id_field = field.into();
        self
    }

    /// Seed an entity collection (replacing any previous contents).
    pub async fn seed(&self, entity: impl Into<String>, records: Vec<Record>) {
        self.collections.write().await.insert(entity.into(), records);
    }

    fn find_index(&self, records: &[Record], id: &Value) -> Option<usize> {
        records
            .iter()
            .position(|r| r.get(&self.id_field) == Some(id))
    }
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSource for MemorySource {
    async fn get(&self, entity: &str) -> SourceResult<Envelope> {
        let collections = self.collections.read().await;
        match collections.get(entity) {
            Some(records) if !records.is_empty() => Ok(Envelope::success(records.clone())),
            Some(_) => Ok(Envelope::empty(format!("no records for '{}'", entity))),
            None => Ok(Envelope::empty(format!("entity '{}' not found", entity))),
        }
    }

    async fn post(&self, entity: &str, record: &Record) -> SourceResult<Envelope> {
        let mut collections = self.collections.write().await;
        let records = collections.entry(entity.to_string()).or_default();
        records.push(record.clone());
        debug!("post '{}': {} record(s) stored", entity, records.len());
        Ok(Envelope::success(vec![record.clone()]))
    }

    async fn put(&self, entity: &str, record: &Record) -> SourceResult<Envelope> {
        let Some(id) = record.get(&self.id_field).cloned() else {
            return Ok(Envelope::failure(format!(
                "record has no '{}' field",
                self.id_field
            )));
        };

        let mut collections = self.collections.write().await;
        let records = collections.entry(entity.to_string()).or_default();
        match self.find_index(records, &id) {
            Some(i) => {
                records[i] = record.clone();
                Ok(Envelope::success(vec![record.clone()]))
            }
            None => Ok(Envelope::empty(format!("record '{}' not found", id))),
        }
    }

    async fn delete(&self, entity: &str, id: &Value) -> SourceResult<Envelope> {
        let mut collections = self.collections.write().await;
        let records = collections.entry(entity.to_string()).or_default();
        match self.find_index(records, id) {
            Some(i) => {
                let removed = records.remove(i);
                Ok(Envelope::success(vec![removed]))
            }
            None => Ok(Envelope::empty(format!("record '{}' not found", id))),
        }
    }
}
