//! Error taxonomy for replay, ingestion and configuration.
//!
//! Input anomalies (unknown players, missing positions, zero equipment) are
//! recovered inside the engine and never surface here.

use std::io;

use thiserror::Error;

use crate::events::Tick;

/// Fatal, match-level engine errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("event at tick {tick} precedes last processed tick {last_tick} in round {round}")]
    OutOfOrder { tick: Tick, last_tick: Tick, round: u32 },
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed event on line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("unable to parse json config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unable to parse yaml config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported config format '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Why a single match failed to produce ratings.
#[derive(Debug, Error)]
pub enum FailureReason {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("event source failed: {0}")]
    Source(String),
}

/// A match that was cancelled. No ratings are emitted for it.
#[derive(Debug, Error)]
#[error("match '{match_id}' failed at event {event_index}: {reason}")]
pub struct MatchFailure {
    pub match_id: String,
    pub event_index: usize,
    #[source]
    pub reason: FailureReason,
}
