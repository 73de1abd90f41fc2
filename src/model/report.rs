use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::events::{PerSide, PlayerId};
use crate::model::{PlayerRates, RoundSummary, StatLine};
use crate::rating::RatingBreakdown;

/// Finalized per-player output. Built once by
/// [crate::engine::MatchEngine::finish] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerReport {
    pub id: PlayerId,
    pub name: String,
    pub rounds_played: u32,
    pub stats: StatLine,
    pub side_stats: PerSide<StatLine>,
    pub rates: PlayerRates,
    pub side_rates: PerSide<PlayerRates>,
    pub rating: f64,
    pub breakdown: RatingBreakdown,
    /// `None` for a side the player never played.
    pub side_ratings: PerSide<Option<f64>>,
    pub pistol_stats: StatLine,
    /// `None` when the player took part in no pistol round.
    pub pistol_rating: Option<f64>,
    /// HLTV 2.0 style figure, reported alongside `rating` for comparison.
    pub hltv_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub match_id: String,
    pub rounds: Vec<RoundSummary>,
    pub players: BTreeMap<PlayerId, PlayerReport>,
}

impl MatchReport {
    pub fn player(&self, id: PlayerId) -> Option<&PlayerReport> {
        self.players.get(&id)
    }

    /// Players ordered by rating, best first.
    pub fn ranked(&self) -> Vec<&PlayerReport> {
        let mut players: Vec<_> = self.players.values().collect();
        players.sort_by(|a, b| b.rating.total_cmp(&a.rating).then(a.id.cmp(&b.id)));
        players
    }
}
