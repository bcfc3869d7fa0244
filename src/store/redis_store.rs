use std::collections::HashMap;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use super::TelemetryStore;
use crate::config::Config;

/// Shareable Redis handle for use across async handlers
///
/// Wraps a `ConnectionManager`, which multiplexes commands over one
/// connection and reconnects after failures. Cloning is cheap.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Open a connection to the Redis instance named by the config
    pub async fn connect(config: &Config) -> Result<Self> {
        let url = config.redis_url();
        tracing::info!("Connecting to Redis at: {}:{}", config.redis_host, config.redis_port);

        let client = redis::Client::open(url.as_str())
            .with_context(|| format!("Invalid Redis URL: {}", url))?;

        let conn = tokio::time::timeout(config.store_timeout, ConnectionManager::new(client))
            .await
            .context("Timed out connecting to Redis")?
            .context("Failed to connect to Redis")?;

        tracing::info!("Successfully connected to Redis database {}", config.redis_db);

        Ok(Self { conn })
    }
}

#[async_trait]
impl TelemetryStore for RedisStore {
    async fn lrange(&self, key: &str, start: isize, stop: isize) -> Result<Vec<String>> {
        let mut conn = self.conn.clone();
        let values: Vec<String> = conn
            .lrange(key, start, stop)
            .await
            .with_context(|| format!("LRANGE {} {} {} failed", key, start, stop))?;

        tracing::debug!("LRANGE {} {} {} -> {} values", key, start, stop, values.len());
        Ok(values)
    }

    async fn hgetall(&self, key: &str) -> Result<HashMap<String, String>> {
        let mut conn = self.conn.clone();
        let fields: HashMap<String, String> = conn
            .hgetall(key)
            .await
            .with_context(|| format!("HGETALL {} failed", key))?;

        tracing::debug!("HGETALL {} -> {} fields", key, fields.len());
        Ok(fields)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let reply: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .context("PING failed")?;

        if reply == "PONG" {
            Ok(())
        } else {
            bail!("Unexpected PING reply: {}", reply)
        }
    }
}
