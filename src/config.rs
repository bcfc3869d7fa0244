use std::env;
use std::time::Duration;
use anyhow::{Context, Result, bail};

#[derive(Debug, Clone)]
pub struct Config {
    pub redis_host: String,
    pub redis_port: u16,
    pub redis_db: i64,
    pub store_timeout: Duration,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from an arbitrary variable lookup, applying defaults
    /// for anything the lookup does not provide.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let redis_host = lookup("REDIS_HOST")
            .unwrap_or_else(|| "127.0.0.1".to_string());

        let redis_port = lookup("REDIS_PORT")
            .unwrap_or_else(|| "6379".to_string())
            .parse::<u16>()
            .context("REDIS_PORT must be a valid port number (0-65535)")?;

        let redis_db = lookup("REDIS_DB")
            .unwrap_or_else(|| "0".to_string())
            .parse::<i64>()
            .context("REDIS_DB must be a database index")?;
        if redis_db < 0 {
            bail!("REDIS_DB must be non-negative, got {}", redis_db);
        }

        let timeout_ms = lookup("STORE_TIMEOUT_MS")
            .unwrap_or_else(|| "5000".to_string())
            .parse::<u64>()
            .context("STORE_TIMEOUT_MS must be a number of milliseconds")?;
        if timeout_ms == 0 {
            bail!("STORE_TIMEOUT_MS must be greater than zero");
        }

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            redis_host,
            redis_port,
            redis_db,
            store_timeout: Duration::from_millis(timeout_ms),
            service_port,
            service_host,
        })
    }

    /// Connection URL understood by `redis::Client::open`
    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}/{}", self.redis_host, self.redis_port, self.redis_db)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Redis: {}:{} (db {})", self.redis_host, self.redis_port, self.redis_db);
        tracing::info!("  Store timeout: {}ms", self.store_timeout.as_millis());
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}
