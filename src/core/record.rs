use crate::core::{ListError, Result, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entity instance (row) in a collection: an opaque mapping of field
/// name → scalar [`Value`]. The engine is generic over the shape; the id
/// lives in whatever field the list configuration designates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Build a record from a JSON object of scalar fields.
    ///
    /// Nested objects and arrays are rejected: collections hold flat rows.
    pub fn from_json(json: serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::Object(map) => {
                let mut record = Record::new();
                for (key, value) in map {
                    match serde_json::from_value::<Value>(value) {
                        Ok(v) => record.fields.insert(key, v),
                        Err(_) => {
                            return Err(ListError::ParseError(format!(
                                "field '{}' is not a scalar value",
                                key
                            )));
                        }
                    };
                }
                Ok(record)
            }
            other => Err(ListError::ParseError(format!(
                "expected a JSON object, got {}",
                other
            ))),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.set(k, v);
        }
        record
    }
}
