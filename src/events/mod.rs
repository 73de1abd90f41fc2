pub mod log_ingest;
pub mod types;

pub use log_ingest::{parse_match_log_json, read_event_lines, IngestedMatch, DEFAULT_TICK_RATE};
pub use types::{
    EventKind, FlashedPlayer, MatchEvent, PerSide, PlayerId, Position, RosterEntry, Side, Tick,
    WeaponClass,
};
