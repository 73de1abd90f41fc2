//! Replay engine: per-round ledgers and the match state machine that
//! drives them.

pub mod advantage;
pub mod economy;
pub mod state;
pub mod swing;
pub mod trade;
pub mod win_probability;

pub use advantage::{AdvantageSlot, AdvantageTracker};
pub use economy::{EcoMultipliers, EconomyTable, RatioTier};
pub use state::{replay_match, MatchEngine, MatchPhase};
pub use swing::{KillAttribution, KillContext, SwingAttributor, SwingSettings};
pub use trade::{TradeDetector, TradeMatch, TradeSettings, TradeWindow, UntradedDeath};
pub use win_probability::{
    BombState, LogisticModel, RoundSnapshot, WinProbabilityModel, WinProbabilityParams,
};
