//! Equipment-aware kill and death multipliers.
//!
//! The attacker/victim equipment ratio picks a tier from two independently
//! tuned tables. Cheap loadouts beating expensive ones are worth more, and
//! dying to a cheaper loadout costs more.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioTier {
    /// Inclusive upper bound on `attacker / victim`.
    pub max_ratio: f64,
    pub multiplier: f64,
}

const fn tier(max_ratio: f64, multiplier: f64) -> RatioTier {
    RatioTier {
        max_ratio,
        multiplier,
    }
}

/// Pistol-vs-rifle through rifle-vs-pistol.
pub const DEFAULT_KILL_TIERS: [RatioTier; 8] = [
    tier(0.25, 1.80),
    tier(0.45, 1.50),
    tier(0.70, 1.25),
    tier(0.90, 1.10),
    tier(1.10, 1.00),
    tier(1.40, 0.95),
    tier(2.50, 0.85),
    tier(f64::MAX, 0.70),
];

pub const DEFAULT_DEATH_TIERS: [RatioTier; 8] = [
    tier(0.25, 1.60),
    tier(0.45, 1.40),
    tier(0.70, 1.20),
    tier(0.90, 1.10),
    tier(1.10, 1.00),
    tier(1.40, 0.95),
    tier(2.50, 0.85),
    tier(f64::MAX, 0.70),
];

pub const MIN_EQUIPMENT_VALUE: f64 = 100.0;
pub const LOW_BUY_VALUE: f64 = 2000.0;
pub const DISADVANTAGED_RATIO: f64 = 0.70;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EcoMultipliers {
    pub kill: f64,
    pub death: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyTable {
    pub min_equipment_value: f64,
    pub kill_tiers: Vec<RatioTier>,
    pub death_tiers: Vec<RatioTier>,
    /// Loadouts worth at most this much count as a low buy.
    pub low_buy_value: f64,
    /// Attacker/victim ratio at or below which a kill counts as disadvantaged.
    pub disadvantaged_ratio: f64,
}

impl Default for EconomyTable {
    fn default() -> Self {
        Self {
            min_equipment_value: MIN_EQUIPMENT_VALUE,
            kill_tiers: DEFAULT_KILL_TIERS.to_vec(),
            death_tiers: DEFAULT_DEATH_TIERS.to_vec(),
            low_buy_value: LOW_BUY_VALUE,
            disadvantaged_ratio: DISADVANTAGED_RATIO,
        }
    }
}

impl EconomyTable {
    pub fn ratio(&self, attacker_value: f64, victim_value: f64) -> f64 {
        let floor = self.min_equipment_value.max(1.0);
        let attacker = if attacker_value.is_finite() {
            attacker_value.max(floor)
        } else {
            floor
        };
        let victim = if victim_value.is_finite() {
            victim_value.max(floor)
        } else {
            floor
        };
        attacker / victim
    }

    pub fn multipliers(&self, attacker_value: f64, victim_value: f64) -> EcoMultipliers {
        let ratio = self.ratio(attacker_value, victim_value);
        EcoMultipliers {
            kill: lookup(&self.kill_tiers, ratio),
            death: lookup(&self.death_tiers, ratio),
        }
    }

    /// Unknown (zero) loadouts are never a low buy.
    pub fn is_low_buy(&self, value: f64) -> bool {
        value > 0.0 && value <= self.low_buy_value
    }

    /// Both loadouts must be known.
    pub fn is_disadvantaged(&self, attacker_value: f64, victim_value: f64) -> bool {
        attacker_value > 0.0
            && victim_value > 0.0
            && attacker_value / victim_value <= self.disadvantaged_ratio
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, tiers) in [("kill_tiers", &self.kill_tiers), ("death_tiers", &self.death_tiers)] {
            if tiers.is_empty() {
                return Err(ConfigError::Invalid(format!("economy.{name} must not be empty")));
            }
            if tiers.windows(2).any(|pair| pair[0].max_ratio >= pair[1].max_ratio) {
                return Err(ConfigError::Invalid(format!(
                    "economy.{name} must be ordered by strictly increasing max_ratio"
                )));
            }
        }
        if !(self.low_buy_value.is_finite() && self.low_buy_value >= 0.0) {
            return Err(ConfigError::Invalid(
                "economy.low_buy_value must be a non-negative number".into(),
            ));
        }
        if !(self.disadvantaged_ratio.is_finite() && self.disadvantaged_ratio > 0.0) {
            return Err(ConfigError::Invalid(
                "economy.disadvantaged_ratio must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// First tier whose bound covers `ratio`; ratios past the last bound use the last tier.
fn lookup(tiers: &[RatioTier], ratio: f64) -> f64 {
    tiers
        .iter()
        .find(|t| ratio <= t.max_ratio)
        .or_else(|| tiers.last())
        .map(|t| t.multiplier)
        .unwrap_or(1.0)
}
