use crate::config::Config;
use crate::error::ApiError;
use crate::store::TelemetryStore;
use std::collections::HashMap;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TelemetryStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Arc<dyn TelemetryStore>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// List range-read bounded by the configured store timeout
    pub async fn read_list(&self, key: &str, start: isize, stop: isize) -> Result<Vec<String>, ApiError> {
        tokio::time::timeout(self.config.store_timeout, self.store.lrange(key, start, stop))
            .await
            .map_err(|_| ApiError::StoreTimeout(key.to_string()))?
            .map_err(ApiError::from)
    }

    /// Hash read bounded by the configured store timeout
    pub async fn read_hash(&self, key: &str) -> Result<HashMap<String, String>, ApiError> {
        tokio::time::timeout(self.config.store_timeout, self.store.hgetall(key))
            .await
            .map_err(|_| ApiError::StoreTimeout(key.to_string()))?
            .map_err(ApiError::from)
    }
}
