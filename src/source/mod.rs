//! Data-source contract: the async provider behind `ListManager::load`.
//!
//! Every call returns a `{status, result}` envelope: `S` success, `N`
//! empty/not-found (not an error), `F` failure (description surfaced to the
//! caller as a displayable string). Transport and decoding problems are a
//! separate [`SourceError`] layer; the manager folds both into its error
//! state and never lets them escape as panics or raw `Err`s to the UI.

pub mod fixture;
pub mod memory;

pub use fixture::FixtureSource;
pub use memory::MemorySource;

use crate::core::{ListError, Record, Value};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type SourceResult<T> = std::result::Result<T, SourceError>;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed payload: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<SourceError> for ListError {
    fn from(err: SourceError) -> Self {
        Self::LoadFailure(err.to_string())
    }
}

/// Wire status code of an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCode {
    #[serde(rename = "S")]
    Success,
    #[serde(rename = "N")]
    Empty,
    #[serde(rename = "F")]
    Failure,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    pub code: StatusCode,
    #[serde(default)]
    pub description: String,
}

/// The `{status, result}` wrapper every data-source call returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub status: Status,
    #[serde(default)]
    pub result: Vec<Record>,
}

impl Envelope {
    pub fn success(result: Vec<Record>) -> Self {
        Self {
            status: Status {
                code: StatusCode::Success,
                description: String::new(),
            },
            result,
        }
    }

    pub fn empty(description: impl Into<String>) -> Self {
        Self {
            status: Status {
                code: StatusCode::Empty,
                description: description.into(),
            },
            result: Vec::new(),
        }
    }

    pub fn failure(description: impl Into<String>) -> Self {
        Self {
            status: Status {
                code: StatusCode::Failure,
                description: description.into(),
            },
            result: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.code == StatusCode::Success
    }
}

/// Async provider of record collections, one entity per name.
///
/// `get` is the only call the manager itself issues; the write methods
/// exist for callers that choose to persist their local mutations.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn get(&self, entity: &str) -> SourceResult<Envelope>;

    async fn post(&self, entity: &str, record: &Record) -> SourceResult<Envelope>;

    async fn put(&self, entity: &str, record: &Record) -> SourceResult<Envelope>;

    async fn delete(&self, entity: &str, id: &Value) -> SourceResult<Envelope>;
}
