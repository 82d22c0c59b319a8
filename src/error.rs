//! Error types for level and configuration loading
//!
//! Nothing in the simulation itself fails: these only surface while
//! building a level or reading configuration, before the first tick.

use std::path::PathBuf;
use thiserror::Error;

/// Errors while building or loading a level definition
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("spawn wall {index} at x={trigger_x} comes before the previous wall at x={previous_x}")]
    UnsortedWalls {
        index: usize,
        trigger_x: f32,
        previous_x: f32,
    },

    #[error("spawn wall {index} has a non-finite trigger x")]
    NonFiniteTrigger { index: usize },

    #[error("level declares a second boss in wall {second} (first in wall {first})")]
    MultipleBosses { first: usize, second: usize },

    #[error("failed to read level file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse level JSON")]
    Parse(#[source] serde_json::Error),
}

/// Errors while loading tuning or settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config file {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config JSON error")]
    Json(#[source] serde_json::Error),

    #[error("invalid tuning value `{field}`: {reason}")]
    InvalidTuning { field: &'static str, reason: String },
}
