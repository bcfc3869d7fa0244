//! In-process stores used by the handler tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use super::TelemetryStore;

/// A store seeded up front, with Redis list/hash read semantics
#[derive(Default)]
pub struct MemoryStore {
    lists: HashMap<String, Vec<String>>,
    hashes: HashMap<String, HashMap<String, String>>,
    reads: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(mut self, key: &str, values: &[&str]) -> Self {
        self.lists
            .insert(key.to_string(), values.iter().map(|v| v.to_string()).collect());
        self
    }

    pub fn with_hash(mut self, key: &str, fields: &[(&str, &str)]) -> Self {
        self.hashes.insert(
            key.to_string(),
            fields
                .iter()
                .map(|(f, v)| (f.to_string(), v.to_string()))
                .collect(),
        );
        self
    }

    /// Number of reads served so far
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

/// Resolve `LRANGE` bounds against a list of `len` elements
fn resolve_range(len: usize, start: isize, stop: isize) -> Option<(usize, usize)> {
    let len = len as isize;
    let start = if start < 0 { (start + len).max(0) } else { start };
    let stop = if stop < 0 { stop + len } else { stop.min(len - 1) };
    if len == 0 || start >= len || stop < start {
        return None;
    }
    Some((start as usize, stop as usize))
}

#[async_trait]
impl TelemetryStore for MemoryStore {
    async fn lrange(&self, key: &str, start: isize, stop: isize) -> Result<Vec<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let Some(list) = self.lists.get(key) else {
            return Ok(Vec::new());
        };
        Ok(match resolve_range(list.len(), start, stop) {
            Some((from, to)) => list[from..=to].to_vec(),
            None => Vec::new(),
        })
    }

    async fn hgetall(&self, key: &str) -> Result<HashMap<String, String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.hashes.get(key).cloned().unwrap_or_default())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// A store whose every call fails, as if Redis were unreachable
pub struct UnreachableStore;

#[async_trait]
impl TelemetryStore for UnreachableStore {
    async fn lrange(&self, key: &str, _start: isize, _stop: isize) -> Result<Vec<String>> {
        Err(anyhow!("connection refused reading {}", key))
    }

    async fn hgetall(&self, key: &str) -> Result<HashMap<String, String>> {
        Err(anyhow!("connection refused reading {}", key))
    }

    async fn ping(&self) -> Result<()> {
        Err(anyhow!("connection refused"))
    }
}

/// A store that never answers
pub struct StalledStore;

#[async_trait]
impl TelemetryStore for StalledStore {
    async fn lrange(&self, _key: &str, _start: isize, _stop: isize) -> Result<Vec<String>> {
        std::future::pending().await
    }

    async fn hgetall(&self, _key: &str) -> Result<HashMap<String, String>> {
        std::future::pending().await
    }

    async fn ping(&self) -> Result<()> {
        std::future::pending().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lrange_full_and_single() {
        let store = MemoryStore::new().with_list("k", &["a", "b", "c"]);

        assert_eq!(store.lrange("k", 0, -1).await.unwrap(), vec!["a", "b", "c"]);
        assert_eq!(store.lrange("k", 1, 1).await.unwrap(), vec!["b"]);
        assert_eq!(store.lrange("k", -1, -1).await.unwrap(), vec!["c"]);
        assert!(store.lrange("k", 3, 3).await.unwrap().is_empty());
        assert!(store.lrange("k", 2, 1).await.unwrap().is_empty());
        assert!(store.lrange("missing", 0, -1).await.unwrap().is_empty());
        assert_eq!(store.reads(), 6);
    }

    #[tokio::test]
    async fn test_hgetall_missing_is_empty() {
        let store = MemoryStore::new().with_hash("h", &[("lr", "0.001")]);

        assert_eq!(store.hgetall("h").await.unwrap().get("lr").unwrap(), "0.001");
        assert!(store.hgetall("other").await.unwrap().is_empty());
    }
}
