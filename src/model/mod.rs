pub mod player;
pub mod report;
pub mod round;
pub mod stat_line;

pub use player::PlayerStats;
pub use report::{MatchReport, PlayerReport};
pub use round::{is_pistol_round, RoundSummary};
pub use stat_line::{per_round, PlayerRates, StatLine};
