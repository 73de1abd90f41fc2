//! Trade detection: a kill that avenges a teammate's recent death.

use serde::{Deserialize, Serialize};

use crate::config::RoundClock;
use crate::events::{PlayerId, Position, Side, Tick};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeSettings {
    pub window_seconds: f64,
    pub fast_trade_seconds: f64,
    pub proximity_units: f64,
}

impl Default for TradeSettings {
    fn default() -> Self {
        Self {
            window_seconds: 5.0,
            fast_trade_seconds: 2.0,
            proximity_units: 1200.0,
        }
    }
}

/// An untraded death waiting for an avenging kill.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeWindow {
    pub victim: PlayerId,
    pub victim_side: Side,
    pub killer: Option<PlayerId>,
    pub opened_at: Tick,
    pub expires_at: Tick,
    /// Teammates close enough to trade. `None` when the death position is
    /// unknown, in which case any teammate qualifies.
    pub eligible: Option<Vec<PlayerId>>,
}

impl TradeWindow {
    fn admits(&self, attacker: PlayerId) -> bool {
        attacker != self.victim
            && self
                .eligible
                .as_ref()
                .map_or(true, |players| players.contains(&attacker))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeMatch {
    pub traded_victim: PlayerId,
    pub original_killer: Option<PlayerId>,
    pub elapsed_ticks: Tick,
    pub fast: bool,
}

/// Death whose window closed without a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UntradedDeath {
    pub victim: PlayerId,
    pub victim_side: Side,
    pub killer: Option<PlayerId>,
}

#[derive(Debug, Clone)]
pub struct TradeDetector {
    window_ticks: Tick,
    fast_ticks: Tick,
    radius: f64,
    open: Vec<TradeWindow>,
}

impl TradeDetector {
    pub fn new(settings: &TradeSettings, clock: &RoundClock) -> Self {
        Self {
            window_ticks: clock.seconds_to_ticks(settings.window_seconds),
            fast_ticks: clock.seconds_to_ticks(settings.fast_trade_seconds),
            radius: settings.proximity_units,
            open: Vec::new(),
        }
    }

    /// Opens a window for a death. `teammates` are the victim's living
    /// teammates with their last known positions; those with no known
    /// position skip the proximity check.
    pub fn open_window<I>(
        &mut self,
        victim: PlayerId,
        victim_side: Side,
        killer: Option<PlayerId>,
        tick: Tick,
        death_position: Option<Position>,
        teammates: I,
    ) where
        I: IntoIterator<Item = (PlayerId, Option<Position>)>,
    {
        let eligible = death_position.map(|death| {
            teammates
                .into_iter()
                .filter(|(_, position)| {
                    position.map_or(true, |p| p.distance(&death) <= self.radius)
                })
                .map(|(player, _)| player)
                .collect()
        });
        self.open.push(TradeWindow {
            victim,
            victim_side,
            killer,
            opened_at: tick,
            expires_at: tick.saturating_add(self.window_ticks),
            eligible,
        });
    }

    /// Closes every window that expired before `now`.
    pub fn expire(&mut self, now: Tick) -> Vec<UntradedDeath> {
        let mut expired = Vec::new();
        self.open.retain(|window| {
            if now > window.expires_at {
                expired.push(untraded(window));
                false
            } else {
                true
            }
        });
        expired
    }

    /// Matches a kill against the open windows of the victim's enemies.
    /// A window whose death was caused by this victim wins, then the oldest.
    pub fn try_trade(
        &mut self,
        attacker: PlayerId,
        victim: PlayerId,
        victim_side: Side,
        tick: Tick,
    ) -> Option<TradeMatch> {
        let avenged_side = victim_side.opponent();
        let eligible = |w: &TradeWindow| {
            w.victim_side == avenged_side && tick <= w.expires_at && w.admits(attacker)
        };
        // Windows are pushed in tick order, so the first eligible one is the oldest.
        let index = self
            .open
            .iter()
            .position(|w| eligible(w) && w.killer == Some(victim))
            .or_else(|| self.open.iter().position(|w| eligible(w)))?;

        let window = self.open.remove(index);
        let elapsed_ticks = tick.saturating_sub(window.opened_at);
        Some(TradeMatch {
            traded_victim: window.victim,
            original_killer: window.killer,
            elapsed_ticks,
            fast: elapsed_ticks <= self.fast_ticks,
        })
    }

    /// Closes everything still open, e.g. at round end.
    pub fn close_all(&mut self) -> Vec<UntradedDeath> {
        self.open.drain(..).map(|w| untraded(&w)).collect()
    }

    pub fn reset(&mut self) {
        self.open.clear();
    }

    pub fn open_windows(&self) -> &[TradeWindow] {
        &self.open
    }
}

fn untraded(window: &TradeWindow) -> UntradedDeath {
    UntradedDeath {
        victim: window.victim,
        victim_side: window.victim_side,
        killer: window.killer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VICTIM: PlayerId = 1;
    const TRADER: PlayerId = 2;
    const KILLER: PlayerId = 10;
    const OTHER_ENEMY: PlayerId = 11;

    fn detector() -> TradeDetector {
        TradeDetector::new(&TradeSettings::default(), &RoundClock::default())
    }

    fn open_at(detector: &mut TradeDetector, tick: Tick) {
        detector.open_window(VICTIM, Side::Attack, Some(KILLER), tick, None, Vec::new());
    }

    #[test]
    fn trade_inside_window_matches_once() {
        let mut d = detector();
        open_at(&mut d, 1000);
        let first = d.try_trade(TRADER, KILLER, Side::Defense, 1200).expect("trade");
        assert_eq!(first.traded_victim, VICTIM);
        assert_eq!(first.elapsed_ticks, 200);
        assert!(!first.fast);
        assert!(d.try_trade(TRADER, OTHER_ENEMY, Side::Defense, 1210).is_none());
    }

    #[test]
    fn fast_trade_within_two_seconds() {
        let mut d = detector();
        open_at(&mut d, 1000);
        let m = d.try_trade(TRADER, KILLER, Side::Defense, 1128).expect("trade");
        assert!(m.fast);
    }

    #[test]
    fn kill_of_same_side_is_not_a_trade() {
        let mut d = detector();
        open_at(&mut d, 1000);
        assert!(d.try_trade(KILLER, TRADER, Side::Attack, 1010).is_none());
        assert_eq!(d.open_windows().len(), 1);
    }

    #[test]
    fn expired_window_is_reported_untraded() {
        let mut d = detector();
        open_at(&mut d, 1000);
        assert!(d.expire(1320).is_empty());
        let expired = d.expire(1321);
        assert_eq!(
            expired,
            vec![UntradedDeath {
                victim: VICTIM,
                victim_side: Side::Attack,
                killer: Some(KILLER)
            }]
        );
        assert!(d.try_trade(TRADER, KILLER, Side::Defense, 1321).is_none());
    }

    #[test]
    fn proximity_excludes_far_teammates() {
        let mut d = detector();
        let death = Position::new(0.0, 0.0, 0.0);
        d.open_window(
            VICTIM,
            Side::Attack,
            Some(KILLER),
            1000,
            Some(death),
            vec![
                (TRADER, Some(Position::new(3000.0, 0.0, 0.0))),
                (3, Some(Position::new(500.0, 0.0, 0.0))),
                (4, None),
            ],
        );
        assert!(d.try_trade(TRADER, KILLER, Side::Defense, 1010).is_none());
        assert!(d.try_trade(4, KILLER, Side::Defense, 1010).is_some());
    }

    #[test]
    fn prefers_window_opened_by_the_kill_victim() {
        let mut d = detector();
        d.open_window(5, Side::Attack, Some(OTHER_ENEMY), 900, None, Vec::new());
        open_at(&mut d, 1000);
        let m = d.try_trade(TRADER, KILLER, Side::Defense, 1010).expect("trade");
        assert_eq!(m.traded_victim, VICTIM);
        let m = d.try_trade(TRADER, OTHER_ENEMY, Side::Defense, 1020).expect("trade");
        assert_eq!(m.traded_victim, 5);
    }
}
