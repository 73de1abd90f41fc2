//! Immutable tuning for one replay: clock, economy tiers, trade window,
//! swing shares, probability model and rating weights.
//!
//! Every section is `#[serde(default)]`, so a file only needs the keys it
//! overrides. Build once and pass by reference into [crate::engine::MatchEngine]
//! and [crate::rating::RatingComposer].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine::economy::EconomyTable;
use crate::engine::swing::SwingSettings;
use crate::engine::trade::TradeSettings;
use crate::engine::win_probability::WinProbabilityParams;
use crate::error::ConfigError;
use crate::events::{Tick, DEFAULT_TICK_RATE};
use crate::rating::RatingWeights;

pub const DEFAULT_CONFIG_PATH: &str = "config/rating.yaml";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundClock {
    pub tick_rate: f64,
    pub round_time_seconds: f64,
    pub bomb_timer_seconds: f64,
    pub early_death_seconds: f64,
}

impl Default for RoundClock {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            round_time_seconds: 115.0,
            bomb_timer_seconds: 40.0,
            early_death_seconds: 30.0,
        }
    }
}

impl RoundClock {
    pub fn seconds_between(&self, from: Tick, to: Tick) -> f64 {
        f64::from(to.saturating_sub(from)) / self.tick_rate
    }

    pub fn seconds_to_ticks(&self, seconds: f64) -> Tick {
        (seconds * self.tick_rate).round().max(0.0) as Tick
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    pub clock: RoundClock,
    pub economy: EconomyTable,
    pub trade: TradeSettings,
    pub swing: SwingSettings,
    pub win_probability: WinProbabilityParams,
    pub weights: RatingWeights,
}

impl RatingConfig {
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `.json`, `.yaml` or `.yml` by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&raw),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&raw),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.clock.tick_rate > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "tick_rate must be positive, got {}",
                self.clock.tick_rate
            )));
        }
        if !(self.clock.round_time_seconds > 0.0 && self.clock.bomb_timer_seconds > 0.0) {
            return Err(ConfigError::Invalid(
                "round_time_seconds and bomb_timer_seconds must be positive".to_string(),
            ));
        }
        self.weights.validate()?;
        self.economy.validate()?;
        self.win_probability.validate()?;
        self.swing.validate()?;
        if self.trade.fast_trade_seconds > self.trade.window_seconds {
            return Err(ConfigError::Invalid(
                "fast_trade_seconds must not exceed window_seconds".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load config from `path`. Returns defaults if the file is missing or invalid.
pub fn load_config_or_default(path: &str) -> RatingConfig {
    if !Path::new(path).exists() {
        return RatingConfig::default();
    }
    match RatingConfig::from_path(path) {
        Ok(config) => config,
        Err(err) => {
            warn!(%path, %err, "falling back to default rating config");
            RatingConfig::default()
        }
    }
}
