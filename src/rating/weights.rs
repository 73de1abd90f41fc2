//! Rating weights and baselines. Every value is configuration; the
//! defaults are one calibration, not a canonical constant set.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Asymmetric response around a baseline: `reward` slope when the input
/// is on the good side of `baseline`, `penalty` slope otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub baseline: f64,
    pub reward: f64,
    pub penalty: f64,
}

impl Curve {
    pub const fn new(baseline: f64, reward: f64, penalty: f64) -> Self {
        Self {
            baseline,
            reward,
            penalty,
        }
    }

    /// Contribution for a stat where more is better.
    pub fn higher_is_better(&self, value: f64) -> f64 {
        let diff = value - self.baseline;
        diff * if diff >= 0.0 { self.reward } else { self.penalty }
    }

    /// Contribution for a stat where less is better.
    pub fn lower_is_better(&self, value: f64) -> f64 {
        let diff = self.baseline - value;
        diff * if diff >= 0.0 { self.reward } else { self.penalty }
    }
}

/// Population baselines for the HLTV 2.0 style comparison rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HltvBaselines {
    pub kills_per_round: f64,
    pub survival_per_round: f64,
    /// Average multi-kill points per round (1, 4, 9, 16, 25 for 1K-5K).
    pub multi_kill_per_round: f64,
    pub survival_weight: f64,
    pub divisor: f64,
}

impl Default for HltvBaselines {
    fn default() -> Self {
        Self {
            kills_per_round: 0.679,
            survival_per_round: 0.317,
            multi_kill_per_round: 1.277,
            survival_weight: 0.7,
            divisor: 2.7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingWeights {
    pub baseline_rating: f64,
    /// Eco-adjusted kill value per round.
    pub kill_value: Curve,
    /// Eco-adjusted death penalty per round (magnitude).
    pub death_value: Curve,
    /// Damage per round.
    pub damage: Curve,
    pub kast: Curve,
    /// Scaled swing per round.
    pub swing: Curve,
    /// Points per round with k kills, indexed by k.
    pub multi_kill_points: [f64; 6],
    pub multi_kill_weight: f64,
    /// Opening kills minus opening deaths, per round.
    pub opening_duel: Curve,
    /// Trade kills per round plus `fast_trade_bonus` per fast trade.
    pub trade: Curve,
    pub fast_trade_bonus: f64,
    /// Utility damage per round divided by `utility_damage_scale`, plus
    /// enemy blind seconds and minus team blind seconds per round, each
    /// scaled by `flash_second_value`.
    pub utility: Curve,
    pub utility_damage_scale: f64,
    pub flash_second_value: f64,
    pub clutch_win_bonus: f64,
    pub clutch_loss_penalty: f64,
    pub min_rating: f64,
    pub max_rating: f64,
    pub hltv: HltvBaselines,
}

impl Default for RatingWeights {
    fn default() -> Self {
        Self {
            baseline_rating: 1.0,
            kill_value: Curve::new(0.72, 0.35, 0.30),
            death_value: Curve::new(0.68, 0.08, 0.25),
            damage: Curve::new(77.0, 0.005, 0.004),
            kast: Curve::new(0.72, 0.20, 0.25),
            swing: Curve::new(0.0, 1.40, 1.40),
            multi_kill_points: [0.0, 0.0, 2.0, 6.0, 14.0, 30.0],
            multi_kill_weight: 0.015,
            opening_duel: Curve::new(0.0, 0.15, 0.15),
            trade: Curve::new(0.10, 0.20, 0.10),
            fast_trade_bonus: 0.5,
            utility: Curve::new(0.10, 0.30, 0.10),
            utility_damage_scale: 100.0,
            flash_second_value: 0.1,
            clutch_win_bonus: 0.30,
            clutch_loss_penalty: 0.05,
            min_rating: 0.20,
            max_rating: 3.00,
            hltv: HltvBaselines::default(),
        }
    }
}

impl RatingWeights {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_rating > self.max_rating {
            return Err(ConfigError::Invalid(format!(
                "min_rating {} exceeds max_rating {}",
                self.min_rating, self.max_rating
            )));
        }
        let hltv = &self.hltv;
        for (name, value) in [
            ("kills_per_round", hltv.kills_per_round),
            ("survival_per_round", hltv.survival_per_round),
            ("multi_kill_per_round", hltv.multi_kill_per_round),
            ("divisor", hltv.divisor),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "weights.hltv.{name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}
