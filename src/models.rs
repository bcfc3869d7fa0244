use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

const MAX_MODEL_NAME_LEN: usize = 256;

/// Validated model identifier, safe to splice into a storage key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelName(String);

impl ModelName {
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        if raw.is_empty() {
            return Err(ApiError::InvalidModel("model name must not be empty".to_string()));
        }
        if raw.len() > MAX_MODEL_NAME_LEN {
            return Err(ApiError::InvalidModel(format!(
                "model name must be at most {} bytes, got {}",
                MAX_MODEL_NAME_LEN,
                raw.len()
            )));
        }
        if raw.contains(':') {
            return Err(ApiError::InvalidModel(format!(
                "model name must not contain ':', got '{}'",
                raw
            )));
        }
        if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ApiError::InvalidModel(format!(
                "model name must not contain whitespace or control characters, got {:?}",
                raw
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-negative index into a model's series
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestep(u32);

impl Timestep {
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        // u32::from_str accepts a leading '+', which is not a timestep
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ApiError::InvalidTimestep(raw.to_string()));
        }
        raw.parse::<u32>()
            .map(Self)
            .map_err(|_| ApiError::InvalidTimestep(raw.to_string()))
    }

    /// Index as passed to a list range-read
    pub fn index(self) -> isize {
        self.0 as isize
    }
}

impl fmt::Display for Timestep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Values of a list key, in insertion order
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(transparent)]
#[schema(example = json!(["0.91", "0.87", "0.85"]))]
pub struct SeriesResponse(pub Vec<String>);

/// Field/value pairs of a model's specs hash
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(transparent)]
#[schema(example = json!({"learning_rate": "0.00025", "gamma": "0.99"}))]
pub struct SpecsResponse(pub HashMap<String, String>);
