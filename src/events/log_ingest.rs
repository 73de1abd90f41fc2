//! Decoded match log ingestion.
//!
//! Two shapes are accepted: a whole-match JSON document and a JSON-lines
//! stream with one event per line. Decoding the binary recording itself is
//! the job of an upstream tool.

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::error::IngestError;
use crate::events::MatchEvent;

pub const DEFAULT_TICK_RATE: f64 = 64.0;

fn default_tick_rate() -> f64 {
    DEFAULT_TICK_RATE
}

/// Whole-match event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestedMatch {
    pub match_id: String,
    #[serde(default = "default_tick_rate")]
    pub tick_rate: f64,
    #[serde(default)]
    pub events: Vec<MatchEvent>,
}

impl IngestedMatch {
    /// Number of rounds that went live in this log.
    pub fn round_starts(&self) -> usize {
        self.events.iter().filter(|e| e.name() == "round_start").count()
    }
}

pub fn parse_match_log_json(input: &str) -> Result<IngestedMatch, IngestError> {
    Ok(serde_json::from_str(input)?)
}

/// Lazily decode a JSON-lines stream. Blank lines are skipped; a line that
/// fails to decode yields [IngestError::Line] with its 1-based number.
pub fn read_event_lines<R: BufRead>(
    reader: R,
) -> impl Iterator<Item = Result<MatchEvent, IngestError>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| match line {
            Ok(text) if text.trim().is_empty() => None,
            Ok(text) => Some(
                serde_json::from_str::<MatchEvent>(&text).map_err(|source| IngestError::Line {
                    line: index + 1,
                    source,
                }),
            ),
            Err(err) => Some(Err(IngestError::Io(err))),
        })
}
