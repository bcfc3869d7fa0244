// Storage key templates - single source of truth for the key layout
//
// Series and specs live at `<model>:<field>`, per-timestep blobs at
// `<model>:<field>:<timestep>`.

use crate::models::{ModelName, Timestep};

pub const MODEL_NAMES: &str = "model_names";

/// Per-model lists indexed by timestep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    Loss,
    Reward,
    Action,
    SelectiveTimes,
}

impl Series {
    pub fn field(self) -> &'static str {
        match self {
            Series::Loss => "loss",
            Series::Reward => "reward",
            Series::Action => "action",
            Series::SelectiveTimes => "selective_times",
        }
    }
}

/// Per-timestep blobs. Their serialization is not settled, so nothing reads them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blob {
    Screen,
    QEstimate,
    QFuture,
}

impl Blob {
    pub fn field(self) -> &'static str {
        match self {
            Blob::Screen => "screen",
            Blob::QEstimate => "q_estimate",
            Blob::QFuture => "q_future",
        }
    }
}

pub fn specs_key(model: &ModelName) -> String {
    format!("{}:specs", model)
}

pub fn series_key(model: &ModelName, series: Series) -> String {
    format!("{}:{}", model, series.field())
}

pub fn blob_key(model: &ModelName, blob: Blob, timestep: Timestep) -> String {
    format!("{}:{}:{}", model, blob.field(), timestep)
}
