//! Probability-swing attribution.
//!
//! Every kill, plant and defuse is scored as the change in the acting
//! side's win probability across the event. Kills also distribute survival
//! credit through the advantage ledger, resolve trades, and carry the
//! eco-adjusted kill and death values.

use serde::{Deserialize, Serialize};

use crate::engine::advantage::AdvantageTracker;
use crate::engine::economy::{EcoMultipliers, EconomyTable};
use crate::engine::trade::{TradeDetector, TradeMatch};
use crate::engine::win_probability::{RoundSnapshot, WinProbabilityModel};
use crate::error::ConfigError;
use crate::events::{PlayerId, Position, Side, Tick};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwingSettings {
    /// Scale applied to every probability delta before accumulation.
    pub multiplier: f64,
    /// Share of a kill's swing paid to each live advantage holder.
    pub survival_credit_share: f64,
    /// Share of a kill's swing paid to the assister.
    pub assist_share: f64,
    /// A kill made while the killer's side already had at least this win
    /// probability, or at most its complement, is an exit frag.
    pub decided_probability: f64,
}

impl Default for SwingSettings {
    fn default() -> Self {
        Self {
            multiplier: 1.0,
            survival_credit_share: 0.15,
            assist_share: 0.25,
            decided_probability: 0.95,
        }
    }
}

impl SwingSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.decided_probability > 0.5 && self.decided_probability <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "swing.decided_probability must be in (0.5, 1], got {}",
                self.decided_probability
            )));
        }
        for (name, value) in [
            ("multiplier", self.multiplier),
            ("survival_credit_share", self.survival_credit_share),
            ("assist_share", self.assist_share),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "swing.{name} must not be negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    fn is_decided(&self, probability: f64) -> bool {
        probability >= self.decided_probability || probability <= 1.0 - self.decided_probability
    }
}

/// State around one kill, captured by the round orchestrator.
#[derive(Debug, Clone)]
pub struct KillContext {
    /// Killer and side, only when the killer is an enemy of the victim.
    pub killer: Option<(PlayerId, Side)>,
    pub victim: PlayerId,
    pub victim_side: Side,
    pub assister: Option<PlayerId>,
    pub tick: Tick,
    pub before: RoundSnapshot,
    pub after: RoundSnapshot,
    pub attacker_equipment: f64,
    pub victim_equipment: f64,
    pub death_position: Option<Position>,
    /// Victim's living teammates with last known positions.
    pub teammates: Vec<(PlayerId, Option<Position>)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KillAttribution {
    pub killer_swing: f64,
    pub victim_swing: f64,
    pub assist_swing: f64,
    pub survival_credit: Vec<(PlayerId, f64)>,
    pub trade: Option<TradeMatch>,
    /// Added to the killer's eco-kill value.
    pub eco_kill: f64,
    /// Added to the victim's eco-death value; never positive.
    pub eco_death: f64,
    /// The round was already decided for the killer's side when the kill landed.
    pub exit_frag: bool,
}

pub struct SwingAttributor<'a, M: WinProbabilityModel> {
    model: &'a M,
    settings: &'a SwingSettings,
    economy: &'a EconomyTable,
}

impl<'a, M: WinProbabilityModel> SwingAttributor<'a, M> {
    pub fn new(model: &'a M, settings: &'a SwingSettings, economy: &'a EconomyTable) -> Self {
        Self {
            model,
            settings,
            economy,
        }
    }

    /// Scaled `p(after) - p(before)` for `side`.
    pub fn event_swing(&self, before: &RoundSnapshot, after: &RoundSnapshot, side: Side) -> f64 {
        let delta =
            self.model.win_probability(after, side) - self.model.win_probability(before, side);
        delta * self.settings.multiplier
    }

    /// Swing for a plant or defuse, credited to the acting side.
    pub fn objective_swing(
        &self,
        before: &RoundSnapshot,
        after: &RoundSnapshot,
        side: Side,
    ) -> f64 {
        self.event_swing(before, after, side)
    }

    /// Scores a kill and updates the round-scoped ledgers. The kill is
    /// recorded in the advantage ledger before the death it causes, and
    /// the trade check runs before the victim's own window opens.
    pub fn attribute_kill(
        &self,
        kill: KillContext,
        advantage: &mut AdvantageTracker,
        trades: &mut TradeDetector,
    ) -> KillAttribution {
        let victim_swing = self.event_swing(&kill.before, &kill.after, kill.victim_side);

        let mut attribution = KillAttribution {
            killer_swing: 0.0,
            victim_swing,
            assist_swing: 0.0,
            survival_credit: Vec::new(),
            trade: None,
            eco_kill: 0.0,
            eco_death: -1.0,
            exit_frag: false,
        };

        if let Some((killer, killer_side)) = kill.killer {
            let killer_swing = self.event_swing(&kill.before, &kill.after, killer_side);
            let EcoMultipliers {
                kill: kill_multiplier,
                death: death_multiplier,
            } = self
                .economy
                .multipliers(kill.attacker_equipment, kill.victim_equipment);

            attribution.killer_swing = killer_swing;
            attribution.exit_frag = self
                .settings
                .is_decided(self.model.win_probability(&kill.before, killer_side));
            attribution.eco_kill = kill_multiplier;
            attribution.eco_death = -death_multiplier;
            attribution.survival_credit = advantage
                .record_kill(killer, killer_side)
                .into_iter()
                .map(|player| (player, killer_swing * self.settings.survival_credit_share))
                .collect();
            attribution.trade = trades.try_trade(killer, kill.victim, kill.victim_side, kill.tick);

            if kill
                .assister
                .is_some_and(|assister| assister != killer && assister != kill.victim)
            {
                attribution.assist_swing = killer_swing * self.settings.assist_share;
            }
        }

        advantage.record_death(kill.victim, kill.victim_side);
        trades.open_window(
            kill.victim,
            kill.victim_side,
            kill.killer.map(|(killer, _)| killer),
            kill.tick,
            kill.death_position,
            kill.teammates,
        );

        attribution
    }
}
