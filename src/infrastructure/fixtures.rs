//! Key → document store backing the fixture-echo endpoints.
//!
//! Fixtures are opaque, immutable JSON documents; the service never writes
//! them. The file-backed store caches parsed documents process-wide, which
//! is safe because nothing mutates them after startup.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("{0}")]
    NotFound(String),

    #[error("failed to read fixture {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("fixture {key} is not valid JSON: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only document lookup, shared across concurrent requests.
#[async_trait]
pub trait FixtureStore: Send + Sync {
    async fn load(&self, key: &str) -> Result<Value, FixtureError>;
}

/// Reads `<dir>/<key>.json`, keeping parsed documents in a cache.
pub struct FileFixtureStore {
    dir: PathBuf,
    cache: DashMap<String, Arc<Value>>,
}

impl FileFixtureStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: DashMap::new(),
        }
    }
}

#[async_trait]
impl FixtureStore for FileFixtureStore {
    async fn load(&self, key: &str) -> Result<Value, FixtureError> {
        if let Some(doc) = self.cache.get(key) {
            return Ok(doc.value().as_ref().clone());
        }
        let path = self.dir.join(format!("{key}.json"));
        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FixtureError::NotFound(key.to_string())
            } else {
                FixtureError::Io {
                    key: key.to_string(),
                    source: e,
                }
            }
        })?;
        let doc: Value = serde_json::from_slice(&bytes).map_err(|e| FixtureError::Parse {
            key: key.to_string(),
            source: e,
        })?;
        self.cache.insert(key.to_string(), Arc::new(doc.clone()));
        tracing::debug!(key, "fixture loaded from {}", path.display());
        Ok(doc)
    }
}

/// In-memory store, used by tests and available for embedding.
#[derive(Default)]
pub struct MemoryFixtureStore {
    docs: DashMap<String, Value>,
}

impl MemoryFixtureStore {
    pub fn with(docs: impl IntoIterator<Item = (&'static str, Value)>) -> Self {
        let store = Self::default();
        for (key, doc) in docs {
            store.docs.insert(key.to_string(), doc);
        }
        store
    }
}

#[async_trait]
impl FixtureStore for MemoryFixtureStore {
    async fn load(&self, key: &str) -> Result<Value, FixtureError> {
        self.docs
            .get(key)
            .map(|doc| doc.value().clone())
            .ok_or_else(|| FixtureError::NotFound(key.to_string()))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn memory_store_returns_documents_by_key() {
        let store = MemoryFixtureStore::with([("code_list", json!({"result": "0"}))]);
        let doc = store.load("code_list").await.unwrap();
        assert_eq!(doc["result"], "0");
    }

    #[tokio::test]
    async fn missing_key_is_not_found() {
        let store = MemoryFixtureStore::default();
        let err = store.load("trade_list_9").await.unwrap_err();
        assert!(matches!(err, FixtureError::NotFound(ref k) if k == "trade_list_9"));
    }

    #[tokio::test]
    async fn file_store_reads_and_caches_documents() {
        let dir = std::env::temp_dir().join(format!("evroam-fixtures-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("code_list.json"), br#"{"result":"0","list":[]}"#).unwrap();

        let store = FileFixtureStore::new(&dir);
        let doc = store.load("code_list").await.unwrap();
        assert_eq!(doc["result"], "0");

        // Second read is served from the cache even if the file disappears.
        std::fs::remove_file(dir.join("code_list.json")).unwrap();
        let doc = store.load("code_list").await.unwrap();
        assert_eq!(doc["result"], "0");

        let err = store.load("unknown").await.unwrap_err();
        assert!(matches!(err, FixtureError::NotFound(_)));

        std::fs::remove_dir_all(&dir).ok();
    }
}
