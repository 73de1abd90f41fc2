//! Folds a player's statistics into one bounded rating.
//!
//! Components are collected per [RatingComponent] into a breakdown, summed
//! onto the baseline and clamped. A side rating runs the same formula on
//! one side's [StatLine] with the per-side component subset. The HLTV 2.0
//! style rating is a separate, unclamped figure for comparison only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{per_round, PlayerReport, PlayerStats, StatLine};
use crate::rating::RatingWeights;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingComponent {
    KillValue,
    DeathValue,
    Damage,
    Kast,
    Swing,
    MultiKill,
    OpeningDuel,
    Trade,
    Utility,
    Clutch,
}

impl RatingComponent {
    pub const MATCH: [RatingComponent; 10] = [
        Self::KillValue,
        Self::DeathValue,
        Self::Damage,
        Self::Kast,
        Self::Swing,
        Self::MultiKill,
        Self::OpeningDuel,
        Self::Trade,
        Self::Utility,
        Self::Clutch,
    ];

    /// Components meaningful on a single side's rounds.
    pub const SIDE: [RatingComponent; 7] = [
        Self::KillValue,
        Self::DeathValue,
        Self::Damage,
        Self::Kast,
        Self::Swing,
        Self::MultiKill,
        Self::Clutch,
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingBreakdown {
    pub components: BTreeMap<RatingComponent, f64>,
    /// Baseline plus components, before clamping.
    pub raw: f64,
    pub rating: f64,
}

impl RatingBreakdown {
    pub fn contribution(&self, component: RatingComponent) -> Option<f64> {
        self.components.get(&component).copied()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RatingComposer<'a> {
    weights: &'a RatingWeights,
}

impl<'a> RatingComposer<'a> {
    pub fn new(weights: &'a RatingWeights) -> Self {
        Self { weights }
    }

    /// Whole-match rating. A player with no rounds gets `min_rating`.
    pub fn compose(&self, line: &StatLine) -> RatingBreakdown {
        self.compose_with(line, &RatingComponent::MATCH)
    }

    /// Rating over one side's rounds, or `None` if that side was never played.
    pub fn compose_side(&self, line: &StatLine) -> Option<RatingBreakdown> {
        (line.rounds_played > 0).then(|| self.compose_with(line, &RatingComponent::SIDE))
    }

    pub fn compose_with(&self, line: &StatLine, components: &[RatingComponent]) -> RatingBreakdown {
        if line.rounds_played == 0 {
            return RatingBreakdown {
                components: BTreeMap::new(),
                raw: self.weights.baseline_rating,
                rating: self.weights.min_rating,
            };
        }

        let components: BTreeMap<RatingComponent, f64> = components
            .iter()
            .map(|component| (*component, self.component(*component, line)))
            .collect();
        let raw = self.weights.baseline_rating + components.values().sum::<f64>();

        RatingBreakdown {
            components,
            raw,
            rating: self.clamp(raw),
        }
    }

    pub fn component(&self, component: RatingComponent, line: &StatLine) -> f64 {
        let w = self.weights;
        let rounds = line.rounds_played;
        match component {
            RatingComponent::KillValue => w
                .kill_value
                .higher_is_better(per_round(line.eco_kill_value, rounds)),
            RatingComponent::DeathValue => w
                .death_value
                .lower_is_better(per_round(-line.eco_death_value, rounds)),
            RatingComponent::Damage => w
                .damage
                .higher_is_better(per_round(f64::from(line.damage), rounds)),
            RatingComponent::Kast => w
                .kast
                .higher_is_better(per_round(f64::from(line.kast_rounds), rounds)),
            RatingComponent::Swing => w.swing.higher_is_better(per_round(line.swing, rounds)),
            RatingComponent::MultiKill => {
                let points: f64 = line
                    .multi_kills
                    .iter()
                    .zip(w.multi_kill_points)
                    .map(|(count, points)| f64::from(*count) * points)
                    .sum();
                per_round(points, rounds) * w.multi_kill_weight
            }
            RatingComponent::OpeningDuel => {
                let net = f64::from(line.opening_kills) - f64::from(line.opening_deaths);
                w.opening_duel.higher_is_better(per_round(net, rounds))
            }
            RatingComponent::Trade => {
                let trades =
                    f64::from(line.trade_kills) + w.fast_trade_bonus * f64::from(line.fast_trades);
                w.trade.higher_is_better(per_round(trades, rounds))
            }
            RatingComponent::Utility => {
                let scale = if w.utility_damage_scale > 0.0 {
                    w.utility_damage_scale
                } else {
                    1.0
                };
                let value = f64::from(line.utility_damage) / scale
                    + w.flash_second_value
                        * (line.enemy_flash_duration - line.team_flash_duration);
                w.utility.higher_is_better(per_round(value, rounds))
            }
            RatingComponent::Clutch => {
                let lost = line.clutch_rounds.saturating_sub(line.clutch_wins);
                let value = w.clutch_win_bonus * f64::from(line.clutch_wins)
                    - w.clutch_loss_penalty * f64::from(lost);
                per_round(value, rounds)
            }
        }
    }

    /// HLTV 2.0 style comparison rating: kills, survival and multi-kill
    /// rounds per round, each against its baseline. Zero rounds rate 0.
    pub fn hltv_rating(&self, line: &StatLine) -> f64 {
        let rounds = line.rounds_played;
        if rounds == 0 {
            return 0.0;
        }
        let h = &self.weights.hltv;
        let kpr = per_round(f64::from(line.kills), rounds);
        let survived = f64::from(rounds.saturating_sub(line.deaths));
        let spr = per_round(survived, rounds);
        let multi_kill_points: f64 = line
            .multi_kills
            .iter()
            .enumerate()
            .skip(1)
            .map(|(k, count)| (k * k) as f64 * f64::from(*count))
            .sum();
        let rmk = per_round(multi_kill_points, rounds);

        (kpr / h.kills_per_round
            + h.survival_weight * spr / h.survival_per_round
            + rmk / h.multi_kill_per_round)
            / h.divisor
    }

    /// Clamps into `[min_rating, max_rating]`; a non-finite sum maps to `min_rating`.
    pub fn clamp(&self, raw: f64) -> f64 {
        if !raw.is_finite() {
            return self.weights.min_rating;
        }
        raw.max(self.weights.min_rating).min(self.weights.max_rating)
    }

    /// Builds the immutable report for one player.
    pub fn finalize(&self, player: &PlayerStats) -> PlayerReport {
        let breakdown = self.compose(&player.totals);
        let side_ratings = player
            .sides
            .map(|_, line| self.compose_side(line).map(|b| b.rating));
        PlayerReport {
            id: player.id,
            name: player.name.clone(),
            rounds_played: player.totals.rounds_played,
            stats: player.totals.clone(),
            side_stats: player.sides.clone(),
            rates: player.totals.rates(),
            side_rates: player.sides.map(|_, line| line.rates()),
            rating: breakdown.rating,
            breakdown,
            side_ratings,
            pistol_rating: self.compose_side(&player.pistol).map(|b| b.rating),
            pistol_stats: player.pistol.clone(),
            hltv_rating: self.hltv_rating(&player.totals),
        }
    }
}
