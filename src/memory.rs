//! Engine memory.
//!
//! The engine records detection summaries, resolution summaries, and
//! explanations as tagged JSON records, and later retrieves resolution
//! history to drive priority learning. Memory is best-effort everywhere:
//! the engine logs store/retrieve failures and carries on, so a broken
//! backend degrades learning but never detection or resolution.

use std::fmt::Debug;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default retrieval limit when a query does not set one.
pub const DEFAULT_RETRIEVE_LIMIT: usize = 50;

/// Memory backend failure.
#[derive(Debug, Error)]
pub enum MemoryError {
    /// The backend could not be reached or is in a bad state.
    #[error("memory store unavailable: {0}")]
    Unavailable(String),
    /// A payload could not be serialized or deserialized.
    #[error("memory payload error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One stored record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryRecord {
    /// Store-assigned id.
    pub id: String,
    /// Agent that wrote the record.
    pub agent_id: String,
    /// Free-form tags (e.g. `resolution-summary`, a sport name).
    pub tags: Vec<String>,
    /// Arbitrary JSON payload.
    pub payload: serde_json::Value,
}

/// Retrieval filter.
#[derive(Debug, Clone, Default)]
pub struct MemoryQuery {
    /// Records must carry every listed tag.
    pub tags: Vec<String>,
    /// Restrict to one agent's records.
    pub agent_id: Option<String>,
    /// Maximum records returned, most recent first.
    pub limit: Option<usize>,
    /// Minimum relevance score. Backends without scoring ignore it.
    pub relevance_threshold: Option<f64>,
}

impl MemoryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_agent_id(mut self, agent_id: impl Into<String>) -> Self {
        self.agent_id = Some(agent_id.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Tagged record storage with filtered retrieval.
pub trait MemoryStore: Send + Sync + Debug {
    /// Stores a record, returning its assigned id.
    fn store(
        &self,
        agent_id: &str,
        tags: &[String],
        payload: serde_json::Value,
    ) -> Result<String, MemoryError>;

    /// Returns matching records, most recent first.
    fn retrieve(&self, query: &MemoryQuery) -> Result<Vec<MemoryRecord>, MemoryError>;
}

/// In-process memory store.
///
/// Records live in insertion order behind a mutex. Retrieval scans from
/// the newest record backwards; `relevance_threshold` is ignored since
/// there is no scoring here.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Mutex<Vec<MemoryRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MemoryStore for InMemoryStore {
    fn store(
        &self,
        agent_id: &str,
        tags: &[String],
        payload: serde_json::Value,
    ) -> Result<String, MemoryError> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| MemoryError::Unavailable(e.to_string()))?;
        let id = format!("mem-{}", records.len() + 1);
        records.push(MemoryRecord {
            id: id.clone(),
            agent_id: agent_id.to_string(),
            tags: tags.to_vec(),
            payload,
        });
        Ok(id)
    }

    fn retrieve(&self, query: &MemoryQuery) -> Result<Vec<MemoryRecord>, MemoryError> {
        let records = self
            .records
            .lock()
            .map_err(|e| MemoryError::Unavailable(e.to_string()))?;
        let limit = query.limit.unwrap_or(DEFAULT_RETRIEVE_LIMIT);
        Ok(records
            .iter()
            .rev()
            .filter(|r| {
                query.tags.iter().all(|t| r.tags.contains(t))
                    && query
                        .agent_id
                        .as_ref()
                        .map_or(true, |agent| *agent == r.agent_id)
            })
            .take(limit)
            .cloned()
            .collect())
    }
}
