pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod model;
pub mod parallel;
pub mod rating;

pub use config::{load_config_or_default, RatingConfig, RoundClock};
pub use engine::{replay_match, MatchEngine, MatchPhase};
pub use error::{ConfigError, EngineError, IngestError, MatchFailure};
pub use model::{MatchReport, PlayerReport};
