//! Live round win-probability estimate.
//!
//! A logistic over alive-count difference, equipment difference and clock
//! pressure, with a bonus for the attacking side once the bomb is down.
//! Terminal states (elimination, defuse) resolve to 0 or 1. The clock term
//! moves continuously, so probability only jumps when alive counts or the
//! bomb state change.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::events::{PerSide, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BombState {
    NotPlanted,
    Planted,
    Defused,
}

/// Everything the estimator may look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundSnapshot {
    pub alive: PerSide<u32>,
    /// Summed equipment value of living players.
    pub equipment: PerSide<f64>,
    pub bomb: BombState,
    /// Seconds left on the active clock (round clock, or bomb timer once planted).
    pub time_remaining: f64,
    pub clock_length: f64,
}

impl RoundSnapshot {
    /// Fraction of the active clock already used, in [0, 1].
    pub fn clock_progress(&self) -> f64 {
        if self.clock_length <= 0.0 {
            return 1.0;
        }
        1.0 - (self.time_remaining / self.clock_length).clamp(0.0, 1.0)
    }
}

pub trait WinProbabilityModel {
    /// Probability in [0, 1] that `side` wins the round from `snapshot`.
    fn win_probability(&self, snapshot: &RoundSnapshot, side: Side) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WinProbabilityParams {
    /// Log-odds per player of alive advantage.
    pub alive_weight: f64,
    /// Log-odds per `equipment_scale` of equipment advantage.
    pub equipment_weight: f64,
    pub equipment_scale: f64,
    /// Log-odds for the attacking side at an even start.
    pub attack_bias: f64,
    pub plant_bonus: f64,
    /// Log-odds swing across a full clock: toward defense before the plant,
    /// toward attack after it.
    pub clock_pressure: f64,
}

impl Default for WinProbabilityParams {
    fn default() -> Self {
        Self {
            alive_weight: 0.85,
            equipment_weight: 0.4,
            equipment_scale: 5000.0,
            attack_bias: 0.0,
            plant_bonus: 0.9,
            clock_pressure: 0.8,
        }
    }
}

impl WinProbabilityParams {
    /// Alive, equipment and plant terms must never lower the advantaged side's chances.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("alive_weight", self.alive_weight),
            ("equipment_weight", self.equipment_weight),
            ("equipment_scale", self.equipment_scale),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "win_probability.{name} must be positive, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("plant_bonus", self.plant_bonus),
            ("clock_pressure", self.clock_pressure),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "win_probability.{name} must not be negative, got {value}"
                )));
            }
        }
        if !self.attack_bias.is_finite() {
            return Err(ConfigError::Invalid(
                "win_probability.attack_bias must be finite".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogisticModel {
    params: WinProbabilityParams,
}

impl LogisticModel {
    pub fn new(params: WinProbabilityParams) -> Self {
        Self { params }
    }

    fn attack_probability(&self, s: &RoundSnapshot) -> f64 {
        let attack = s.alive.attack;
        let defense = s.alive.defense;
        match s.bomb {
            BombState::Defused => return 0.0,
            _ if defense == 0 => {
                return if attack > 0 || s.bomb == BombState::Planted {
                    1.0
                } else {
                    0.0
                }
            }
            BombState::NotPlanted if attack == 0 => return 0.0,
            _ => {}
        }

        let p = &self.params;
        let scale = if p.equipment_scale > 0.0 {
            p.equipment_scale
        } else {
            1.0
        };
        let mut z = p.attack_bias
            + p.alive_weight * (f64::from(attack) - f64::from(defense))
            + p.equipment_weight * (s.equipment.attack - s.equipment.defense) / scale;

        let progress = s.clock_progress();
        if s.bomb == BombState::Planted {
            z += p.plant_bonus + p.clock_pressure * progress;
        } else {
            z -= p.clock_pressure * progress;
        }
        logistic(z)
    }
}

impl WinProbabilityModel for LogisticModel {
    fn win_probability(&self, snapshot: &RoundSnapshot, side: Side) -> f64 {
        let attack = self.attack_probability(snapshot);
        match side {
            Side::Attack => attack,
            Side::Defense => 1.0 - attack,
        }
    }
}

fn logistic(z: f64) -> f64 {
    if z.is_nan() {
        return 0.5;
    }
    1.0 / (1.0 + (-z).exp())
}
