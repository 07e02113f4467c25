use super::{DataSource, Envelope, SourceError, SourceResult};
use crate::core::{Record, Value};
use async_trait::async_trait;
use log::debug;
use std::path::PathBuf;

/// Read-only [`DataSource`] over static JSON files, one file per entity:
/// `get("roles")` reads `<root>/roles.json`.
///
/// A file may hold either a full `{status, result}` envelope or a bare
/// array of records; the bare form is wrapped in a success envelope. A
/// missing file yields an `N` envelope (empty, not an error); write
/// methods always yield an `F` envelope.
pub struct FixtureSource {
    root: PathBuf,
}

impl FixtureSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn parse(raw: &str) -> SourceResult<Envelope> {
        if let Ok(envelope) = serde_json::from_str::<Envelope>(raw) {
            return Ok(envelope);
        }
        match serde_json::from_str::<Vec<Record>>(raw) {
            Ok(records) => Ok(Envelope::success(records)),
            Err(err) => Err(SourceError::Malformed(format!(
                "neither an envelope nor a record array: {}",
                err
            ))),
        }
    }
}

#[async_trait]
impl DataSource for FixtureSource {
    async fn get(&self, entity: &str) -> SourceResult<Envelope> {
        let path = self.root.join(format!("{}.json", entity));
        debug!("reading fixture {}", path.display());

        if !path.is_file() {
            return Ok(Envelope::empty(format!(
                "fixture '{}' not found",
                entity
            )));
        }

        let raw = tokio::fs::read_to_string(&path).await?;
        Self::parse(&raw)
    }

    async fn post(&self, _entity: &str, _record: &Record) -> SourceResult<Envelope> {
        Ok(Envelope::failure("fixture source is read-only"))
    }

    async fn put(&self, _entity: &str, _record: &Record) -> SourceResult<Envelope> {
        Ok(Envelope::failure("fixture source is read-only"))
    }

    async fn delete(&self, _entity: &str, _id: &Value) -> SourceResult<Envelope> {
        Ok(Envelope::failure("fixture source is read-only"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StatusCode;

    #[test]
    fn test_parse_bare_array() {
        let env = FixtureSource::parse(r#"[{"id":1,"roleName":"Admin"}]"#).unwrap();
        assert!(env.is_success());
        assert_eq!(env.result.len(), 1);
    }

    #[test]
    fn test_parse_full_envelope() {
        let env =
            FixtureSource::parse(r#"{"status":{"code":"F","description":"broken"},"result":[]}"#)
                .unwrap();
        assert_eq!(env.status.code, StatusCode::Failure);
        assert_eq!(env.status.description, "broken");
    }

    #[test]
    fn test_parse_garbage_is_malformed() {
        assert!(matches!(
            FixtureSource::parse("not json"),
            Err(SourceError::Malformed(_))
        ));
    }
}
