//! Read access to the telemetry store.
//!
//! Handlers only ever see [`TelemetryStore`]; the Redis-backed implementation
//! is constructed once in `main` and injected through the application state.

mod redis_store;

#[cfg(test)]
pub mod memory;

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

pub use redis_store::RedisStore;

/// The read operations the API needs from the store
#[async_trait]
pub trait TelemetryStore: Send + Sync {
    /// Range-read an ordered list, with Redis `LRANGE` index semantics
    /// (inclusive bounds, negative indices count from the tail).
    ///
    /// A missing key reads as an empty list.
    async fn lrange(&self, key: &str, start: isize, stop: isize) -> Result<Vec<String>>;

    /// Read a full hash. A missing key reads as an empty map.
    async fn hgetall(&self, key: &str) -> Result<HashMap<String, String>>;

    /// Round-trip to the store to verify it is reachable
    async fn ping(&self) -> Result<()>;
}
