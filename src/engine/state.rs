//! Match and round state machine.
//!
//! `Pending -> RoundLive -> RoundEnded -> (RoundLive | finish)`. The engine
//! owns every accumulator for one match, applies events strictly in order,
//! and folds each finished round into the match-lifetime player records.
//! [MatchEngine::finish] consumes the engine, so a report can never be
//! produced from a match that is still being written.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{RatingConfig, RoundClock};
use crate::engine::advantage::AdvantageTracker;
use crate::engine::swing::{KillContext, SwingAttributor};
use crate::engine::trade::{TradeDetector, UntradedDeath};
use crate::engine::win_probability::{BombState, LogisticModel, RoundSnapshot, WinProbabilityModel};
use crate::error::{EngineError, FailureReason, MatchFailure};
use crate::events::{
    EventKind, FlashedPlayer, MatchEvent, PerSide, PlayerId, Position, RosterEntry, Side, Tick,
    WeaponClass,
};
use crate::model::{is_pistol_round, MatchReport, PlayerStats, RoundSummary, StatLine};
use crate::rating::RatingComposer;

pub const FULL_HEALTH: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    Pending,
    RoundLive,
    RoundEnded,
}

/// A player's live state within the current round.
#[derive(Debug, Clone)]
struct LivePlayer {
    side: Side,
    alive: bool,
    health: u32,
    equipment: f64,
    position: Option<Position>,
    traded: bool,
    clutch: bool,
    line: StatLine,
}

impl LivePlayer {
    fn new(side: Side, equipment: f64) -> Self {
        Self {
            side,
            alive: true,
            health: FULL_HEALTH,
            equipment,
            position: None,
            traded: false,
            clutch: false,
            line: StatLine::default(),
        }
    }
}

#[derive(Debug, Clone)]
struct RoundState {
    number: u32,
    start_tick: Tick,
    last_tick: Tick,
    bomb: BombState,
    plant_tick: Option<Tick>,
    kills: u32,
    clutch_assigned: PerSide<bool>,
    players: BTreeMap<PlayerId, LivePlayer>,
}

impl RoundState {
    fn new(number: u32, start_tick: Tick) -> Self {
        Self {
            number,
            start_tick,
            last_tick: start_tick,
            bomb: BombState::NotPlanted,
            plant_tick: None,
            kills: 0,
            clutch_assigned: PerSide::default(),
            players: BTreeMap::new(),
        }
    }

    /// Returns the live entry for `id`, registering the player in the
    /// match and the round on first sight.
    fn join(
        &mut self,
        registry: &mut BTreeMap<PlayerId, PlayerStats>,
        id: PlayerId,
        side: Side,
    ) -> &mut LivePlayer {
        registry.entry(id).or_insert_with(|| {
            debug!(player = id, "registering player on first reference");
            PlayerStats::new(id, String::new())
        });
        self.players
            .entry(id)
            .or_insert_with(|| LivePlayer::new(side, 0.0))
    }

    fn side_of(&self, id: PlayerId) -> Option<Side> {
        self.players.get(&id).map(|p| p.side)
    }

    fn alive(&self, side: Side) -> u32 {
        self.players
            .values()
            .filter(|p| p.side == side && p.alive)
            .count() as u32
    }

    fn snapshot(&self, clock: &RoundClock, tick: Tick) -> RoundSnapshot {
        let mut alive = PerSide::new(0u32, 0u32);
        let mut equipment = PerSide::new(0.0, 0.0);
        for player in self.players.values().filter(|p| p.alive) {
            alive[player.side] += 1;
            equipment[player.side] += player.equipment.max(0.0);
        }
        let (time_remaining, clock_length) = match (self.bomb, self.plant_tick) {
            (BombState::Planted, Some(plant)) => (
                clock.bomb_timer_seconds - clock.seconds_between(plant, tick),
                clock.bomb_timer_seconds,
            ),
            _ => (
                clock.round_time_seconds - clock.seconds_between(self.start_tick, tick),
                clock.round_time_seconds,
            ),
        };
        RoundSnapshot {
            alive,
            equipment,
            bomb: self.bomb,
            time_remaining: time_remaining.max(0.0),
            clock_length,
        }
    }

    /// Marks the sole survivor of a side as in a clutch, once per side per
    /// round, while the other side still has players alive.
    fn update_clutch(&mut self) {
        for side in Side::ALL {
            if self.clutch_assigned[side] {
                continue;
            }
            if self.alive(side) != 1 || self.alive(side.opponent()) == 0 {
                continue;
            }
            if let Some(survivor) = self
                .players
                .values_mut()
                .find(|p| p.side == side && p.alive)
            {
                survivor.clutch = true;
                self.clutch_assigned[side] = true;
            }
        }
    }
}

/// Replays one match. Generic over the win-probability estimator so
/// alternate models can be plugged in.
pub struct MatchEngine<'a, M: WinProbabilityModel = LogisticModel> {
    match_id: String,
    config: &'a RatingConfig,
    model: M,
    phase: MatchPhase,
    players: BTreeMap<PlayerId, PlayerStats>,
    round: Option<RoundState>,
    rounds: Vec<RoundSummary>,
    advantage: AdvantageTracker,
    trades: TradeDetector,
}

impl<'a> MatchEngine<'a, LogisticModel> {
    pub fn new(match_id: impl Into<String>, config: &'a RatingConfig) -> Self {
        Self::with_model(match_id, config, LogisticModel::new(config.win_probability))
    }
}

impl<'a, M: WinProbabilityModel> MatchEngine<'a, M> {
    pub fn with_model(match_id: impl Into<String>, config: &'a RatingConfig, model: M) -> Self {
        Self {
            match_id: match_id.into(),
            config,
            model,
            phase: MatchPhase::Pending,
            players: BTreeMap::new(),
            round: None,
            rounds: Vec::new(),
            advantage: AdvantageTracker::new(),
            trades: TradeDetector::new(&config.trade, &config.clock),
        }
    }

    pub fn match_id(&self) -> &str {
        &self.match_id
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerStats> {
        self.players.get(&id)
    }

    pub fn rounds(&self) -> &[RoundSummary] {
        &self.rounds
    }

    /// Applies one event. Only an ordering violation is fatal; anomalies
    /// such as unknown players or duplicate deaths are absorbed.
    pub fn process(&mut self, event: &MatchEvent) -> Result<(), EngineError> {
        let tick = event.tick;
        if let EventKind::RoundStart { roster } = &event.kind {
            if let Some(round) = &self.round {
                if tick < round.last_tick {
                    return Err(EngineError::OutOfOrder {
                        tick,
                        last_tick: round.last_tick,
                        round: round.number,
                    });
                }
            }
            self.start_round(tick, roster);
            return Ok(());
        }

        let Some(round) = self.round.as_mut() else {
            debug!(
                match_id = %self.match_id,
                event = event.name(),
                tick,
                "ignoring event outside a live round"
            );
            return Ok(());
        };
        if tick < round.last_tick {
            return Err(EngineError::OutOfOrder {
                tick,
                last_tick: round.last_tick,
                round: round.number,
            });
        }
        round.last_tick = tick;

        let expired = self.trades.expire(tick);
        self.apply_untraded(&expired);

        match &event.kind {
            EventKind::RoundStart { .. } => {}
            EventKind::RoundEnd { winner } => self.end_round(tick, *winner),
            EventKind::Kill { .. } => self.on_kill(tick, &event.kind),
            EventKind::PlayerHurt {
                victim,
                attacker,
                damage,
                utility,
                attacker_position,
                victim_position,
                ..
            } => self.on_hurt(
                *victim,
                *attacker,
                *damage,
                *utility,
                *attacker_position,
                *victim_position,
            ),
            EventKind::BombPlanted { planter } => self.on_bomb_planted(tick, *planter),
            EventKind::BombDefused { defuser } => self.on_bomb_defused(tick, *defuser),
            EventKind::FlashExplode {
                thrower,
                affected,
                team_flash,
            } => self.on_flash(*thrower, affected, *team_flash),
        }
        Ok(())
    }

    fn start_round(&mut self, tick: Tick, roster: &[RosterEntry]) {
        if let Some(abandoned) = self.round.take() {
            warn!(
                match_id = %self.match_id,
                round = abandoned.number,
                "round restarted before it ended; discarding unfinished round"
            );
        }

        let number = self.rounds.len() as u32 + 1;
        let mut round = RoundState::new(number, tick);
        for entry in roster {
            let stats = self
                .players
                .entry(entry.id)
                .or_insert_with(|| PlayerStats::new(entry.id, entry.name.clone()));
            if !entry.name.is_empty() {
                stats.name.clone_from(&entry.name);
            }
            round
                .players
                .insert(entry.id, LivePlayer::new(entry.side, entry.equipment_value));
        }
        round.update_clutch();

        self.advantage.reset();
        self.trades.reset();
        self.round = Some(round);
        self.phase = MatchPhase::RoundLive;
        debug!(match_id = %self.match_id, round = number, tick, players = roster.len(), "round live");
    }

    fn on_kill(&mut self, tick: Tick, kind: &EventKind) {
        let EventKind::Kill {
            attacker,
            victim,
            assister,
            flash_assist,
            weapon,
            victim_weapon,
            attacker_side,
            victim_side,
            attacker_equipment,
            victim_equipment,
            attacker_position,
            victim_position,
        } = kind
        else {
            return;
        };
        let (victim, victim_side) = (*victim, *victim_side);
        let clock = &self.config.clock;
        let Some(round) = self.round.as_mut() else {
            return;
        };

        let victim_entry = round.join(&mut self.players, victim, victim_side);
        if !victim_entry.alive {
            debug!(player = victim, tick, "ignoring kill of a player already dead");
            return;
        }
        if *victim_equipment > 0.0 {
            victim_entry.equipment = *victim_equipment;
        }
        if victim_position.is_some() {
            victim_entry.position = *victim_position;
        }
        let victim_side = victim_entry.side;
        let victim_value = victim_entry.equipment;

        let mut killer = None;
        let mut attacker_value = 0.0;
        if let Some(attacker) = attacker.filter(|a| *a != victim) {
            let side = attacker_side
                .or_else(|| round.side_of(attacker))
                .unwrap_or_else(|| victim_side.opponent());
            let entry = round.join(&mut self.players, attacker, side);
            if *attacker_equipment > 0.0 {
                entry.equipment = *attacker_equipment;
            }
            if attacker_position.is_some() {
                entry.position = *attacker_position;
            }
            attacker_value = entry.equipment;
            killer = Some((attacker, entry.side));
        }
        let enemy_killer = killer.filter(|(_, side)| *side != victim_side);
        if killer.is_some() && enemy_killer.is_none() {
            debug!(player = victim, tick, "team kill; no kill credit");
        }

        let before = round.snapshot(clock, tick);
        if let Some(entry) = round.players.get_mut(&victim) {
            entry.alive = false;
            entry.health = 0;
        }
        let after = round.snapshot(clock, tick);

        let teammates: Vec<(PlayerId, Option<Position>)> = round
            .players
            .iter()
            .filter(|(id, p)| **id != victim && p.side == victim_side && p.alive)
            .map(|(id, p)| (*id, p.position))
            .collect();

        let attributor =
            SwingAttributor::new(&self.model, &self.config.swing, &self.config.economy);
        let attribution = attributor.attribute_kill(
            KillContext {
                killer: enemy_killer,
                victim,
                victim_side,
                assister: *assister,
                tick,
                before,
                after,
                attacker_equipment: attacker_value,
                victim_equipment: victim_value,
                death_position: *victim_position,
                teammates,
            },
            &mut self.advantage,
            &mut self.trades,
        );

        let opening = round.kills == 0;
        round.kills += 1;
        let early = clock.seconds_between(round.start_tick, tick) <= clock.early_death_seconds;

        if let Some(entry) = round.players.get_mut(&victim) {
            let line = &mut entry.line;
            line.deaths += 1;
            line.swing += attribution.victim_swing;
            line.eco_death_value += attribution.eco_death;
            if opening {
                line.opening_deaths += 1;
            }
            if early {
                line.early_deaths += 1;
            }
            if WeaponClass::from_name(victim_weapon) == WeaponClass::Awp {
                line.awp_deaths += 1;
            }
        }

        if let Some((killer_id, _)) = enemy_killer {
            if let Some(entry) = round.players.get_mut(&killer_id) {
                let line = &mut entry.line;
                line.kills += 1;
                line.swing += attribution.killer_swing;
                line.eco_kill_value += attribution.eco_kill;
                if opening {
                    line.opening_kills += 1;
                }
                match WeaponClass::from_name(weapon) {
                    WeaponClass::Awp => line.awp_kills += 1,
                    WeaponClass::Knife => line.knife_kills += 1,
                    WeaponClass::Pistol if WeaponClass::from_name(victim_weapon).is_long_gun() => {
                        line.pistol_vs_rifle_kills += 1;
                    }
                    _ => {}
                }
                if attribution.exit_frag {
                    line.exit_frags += 1;
                }
                let economy = &self.config.economy;
                if economy.is_low_buy(attacker_value) {
                    line.low_buy_kills += 1;
                }
                if economy.is_disadvantaged(attacker_value, victim_value) {
                    line.disadvantaged_buy_kills += 1;
                }
                if let Some(trade) = attribution.trade {
                    line.trade_kills += 1;
                    if trade.fast {
                        line.fast_trades += 1;
                    }
                }
            }
        }

        if let Some(trade) = attribution.trade {
            if let Some(entry) = round.players.get_mut(&trade.traded_victim) {
                entry.traded = true;
                entry.line.traded_deaths += 1;
            }
            debug!(
                traded = trade.traded_victim,
                elapsed_ticks = trade.elapsed_ticks,
                fast = trade.fast,
                "trade"
            );
        }

        for (beneficiary, credit) in &attribution.survival_credit {
            if let Some(entry) = round.players.get_mut(beneficiary) {
                entry.line.swing += credit;
                entry.line.survival_credit += credit;
            }
        }

        if let (Some(assister), Some((killer_id, killer_side))) = (*assister, enemy_killer) {
            if assister != killer_id && assister != victim {
                let entry = round.join(&mut self.players, assister, killer_side);
                if entry.side != victim_side {
                    entry.line.assists += 1;
                    entry.line.swing += attribution.assist_swing;
                    if *flash_assist {
                        entry.line.flash_assists += 1;
                    }
                }
            }
        }

        round.update_clutch();
    }

    fn on_hurt(
        &mut self,
        victim: PlayerId,
        attacker: Option<PlayerId>,
        damage: u32,
        utility: bool,
        attacker_position: Option<Position>,
        victim_position: Option<Position>,
    ) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        let attacker_side = attacker
            .filter(|a| *a != victim)
            .and_then(|a| round.side_of(a));
        let victim_side = match (round.side_of(victim), attacker_side) {
            (Some(side), _) => side,
            (None, Some(side)) => round.join(&mut self.players, victim, side.opponent()).side,
            (None, None) => {
                self.players
                    .entry(victim)
                    .or_insert_with(|| PlayerStats::new(victim, String::new()));
                debug!(player = victim, "damage to a player with no side this round; skipped");
                return;
            }
        };

        let dealt = match round.players.get_mut(&victim) {
            Some(entry) => {
                let dealt = damage.min(entry.health);
                entry.health -= dealt;
                if victim_position.is_some() {
                    entry.position = victim_position;
                }
                dealt
            }
            None => 0,
        };

        let Some(attacker) = attacker.filter(|a| *a != victim) else {
            return;
        };
        let Some(entry) = round.players.get_mut(&attacker) else {
            self.players
                .entry(attacker)
                .or_insert_with(|| PlayerStats::new(attacker, String::new()));
            return;
        };
        if attacker_position.is_some() {
            entry.position = attacker_position;
        }
        if entry.side == victim_side {
            return;
        }
        entry.line.damage += dealt;
        if utility {
            entry.line.utility_damage += dealt;
        }
    }

    fn on_bomb_planted(&mut self, tick: Tick, planter: PlayerId) {
        let clock = &self.config.clock;
        let Some(round) = self.round.as_mut() else {
            return;
        };
        if round.bomb != BombState::NotPlanted {
            debug!(tick, "ignoring second bomb plant");
            return;
        }
        let side = round.join(&mut self.players, planter, Side::Attack).side;
        let before = round.snapshot(clock, tick);
        round.bomb = BombState::Planted;
        round.plant_tick = Some(tick);
        let after = round.snapshot(clock, tick);

        let attributor =
            SwingAttributor::new(&self.model, &self.config.swing, &self.config.economy);
        let swing = attributor.objective_swing(&before, &after, side);
        if let Some(entry) = round.players.get_mut(&planter) {
            entry.line.swing += swing;
        }
    }

    fn on_bomb_defused(&mut self, tick: Tick, defuser: PlayerId) {
        let clock = &self.config.clock;
        let Some(round) = self.round.as_mut() else {
            return;
        };
        if round.bomb != BombState::Planted {
            debug!(tick, "ignoring defuse without a planted bomb");
            return;
        }
        let side = round.join(&mut self.players, defuser, Side::Defense).side;
        let before = round.snapshot(clock, tick);
        round.bomb = BombState::Defused;
        let after = round.snapshot(clock, tick);

        let attributor =
            SwingAttributor::new(&self.model, &self.config.swing, &self.config.economy);
        let swing = attributor.objective_swing(&before, &after, side);
        if let Some(entry) = round.players.get_mut(&defuser) {
            entry.line.swing += swing;
        }
    }

    fn on_flash(&mut self, thrower: PlayerId, affected: &[FlashedPlayer], team_flash_hint: bool) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        let Some(thrower_side) = round.side_of(thrower) else {
            self.players
                .entry(thrower)
                .or_insert_with(|| PlayerStats::new(thrower, String::new()));
            debug!(player = thrower, "flash from a player with no side this round; skipped");
            return;
        };

        let mut team = (0u32, 0.0);
        let mut enemy = (0u32, 0.0);
        for flashed in affected.iter().filter(|f| f.player != thrower) {
            let same_side = round
                .side_of(flashed.player)
                .map_or(team_flash_hint, |side| side == thrower_side);
            let bucket = if same_side { &mut team } else { &mut enemy };
            bucket.0 += 1;
            bucket.1 += flashed.duration.max(0.0);
        }

        if let Some(entry) = round.players.get_mut(&thrower) {
            entry.line.team_flash_count += team.0;
            entry.line.team_flash_duration += team.1;
            entry.line.enemies_flashed += enemy.0;
            entry.line.enemy_flash_duration += enemy.1;
        }
    }

    fn apply_untraded(&mut self, deaths: &[UntradedDeath]) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        for death in deaths {
            if let Some(entry) = round.players.get_mut(&death.victim) {
                entry.line.untraded_deaths += 1;
            }
            let Some(killer) = death.killer else {
                continue;
            };
            if let Some(entry) = round.players.get_mut(&killer) {
                entry.line.trade_denials += 1;
            }
        }
    }

    fn end_round(&mut self, tick: Tick, winner: Side) {
        let open = self.trades.close_all();
        self.apply_untraded(&open);

        let Some(round) = self.round.take() else {
            return;
        };
        let pistol = is_pistol_round(round.number);
        for (id, live) in &round.players {
            let mut line = live.line.clone();
            let won = live.side == winner;
            line.rounds_played = 1;
            line.rounds_won = u32::from(won);
            let kills = line.kills.min(5) as usize;
            if kills > 0 {
                line.multi_kills[kills] += 1;
            }
            let kast = line.kills > 0 || line.assists > 0 || live.alive || live.traded;
            line.kast_rounds = u32::from(kast);
            if live.clutch {
                line.clutch_rounds = 1;
                line.clutch_wins = u32::from(won);
            }
            if line.awp_deaths > 0 && line.awp_kills == 0 {
                line.awp_deaths_no_kill = 1;
            }

            let stats = self
                .players
                .entry(*id)
                .or_insert_with(|| PlayerStats::new(*id, String::new()));
            stats.fold_round(live.side, &line);
            if pistol {
                stats.fold_pistol_round(&line);
            }
        }

        self.rounds.push(RoundSummary {
            number: round.number,
            winner,
            start_tick: round.start_tick,
            end_tick: tick,
            bomb_planted: round.plant_tick.is_some(),
            plant_tick: round.plant_tick,
            pistol_round: pistol,
            kills: round.kills,
        });
        self.advantage.reset();
        self.phase = MatchPhase::RoundEnded;
        debug!(
            match_id = %self.match_id,
            round = round.number,
            winner = winner.as_str(),
            "round folded"
        );
    }

    /// Finalizes ratings. An unfinished round is discarded, not folded.
    pub fn finish(self) -> MatchReport {
        if let Some(round) = &self.round {
            warn!(
                match_id = %self.match_id,
                round = round.number,
                "match ended mid-round; discarding unfinished round"
            );
        }

        let composer = RatingComposer::new(&self.config.weights);
        let players: BTreeMap<_, _> = self
            .players
            .values()
            .map(|player| (player.id, composer.finalize(player)))
            .collect();

        info!(
            match_id = %self.match_id,
            rounds = self.rounds.len(),
            players = players.len(),
            "match finalized"
        );

        MatchReport {
            match_id: self.match_id,
            rounds: self.rounds,
            players,
        }
    }
}

/// Replays a whole event stream. The first source error or ordering
/// violation cancels the match; no partial report is returned.
pub fn replay_match<I, E>(
    match_id: &str,
    config: &RatingConfig,
    events: I,
) -> Result<MatchReport, MatchFailure>
where
    I: IntoIterator<Item = Result<MatchEvent, E>>,
    E: Display,
{
    let mut engine = MatchEngine::new(match_id, config);
    for (event_index, event) in events.into_iter().enumerate() {
        let fail = |reason| MatchFailure {
            match_id: match_id.to_string(),
            event_index,
            reason,
        };
        let event = event.map_err(|err| fail(FailureReason::Source(err.to_string())))?;
        engine
            .process(&event)
            .map_err(|err| fail(FailureReason::Engine(err)))?;
    }
    Ok(engine.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<RosterEntry> {
        vec![
            RosterEntry {
                id: 1,
                name: "a".into(),
                side: Side::Attack,
                equipment_value: 4000.0,
            },
            RosterEntry {
                id: 2,
                name: "b".into(),
                side: Side::Defense,
                equipment_value: 4000.0,
            },
        ]
    }

    #[test]
    fn phases_follow_round_lifecycle() {
        let config = RatingConfig::default();
        let mut engine = MatchEngine::new("m", &config);
        assert_eq!(engine.phase(), MatchPhase::Pending);

        engine
            .process(&MatchEvent::new(0, EventKind::RoundStart { roster: roster() }))
            .unwrap();
        assert_eq!(engine.phase(), MatchPhase::RoundLive);

        engine
            .process(&MatchEvent::new(10, EventKind::RoundEnd { winner: Side::Defense }))
            .unwrap();
        assert_eq!(engine.phase(), MatchPhase::RoundEnded);
        assert_eq!(engine.rounds().len(), 1);
        assert_eq!(engine.player(2).unwrap().totals.rounds_won, 1);
    }

    #[test]
    fn damage_is_capped_by_remaining_health() {
        let config = RatingConfig::default();
        let mut engine = MatchEngine::new("m", &config);
        engine
            .process(&MatchEvent::new(0, EventKind::RoundStart { roster: roster() }))
            .unwrap();
        for tick in [5, 6] {
            engine
                .process(&MatchEvent::new(
                    tick,
                    EventKind::PlayerHurt {
                        victim: 2,
                        attacker: Some(1),
                        damage: 80,
                        hitgroup: "chest".into(),
                        utility: false,
                        attacker_position: None,
                        victim_position: None,
                    },
                ))
                .unwrap();
        }
        engine
            .process(&MatchEvent::new(9, EventKind::RoundEnd { winner: Side::Attack }))
            .unwrap();
        assert_eq!(engine.player(1).unwrap().totals.damage, 100);
    }

    #[test]
    fn events_before_first_round_are_ignored() {
        let config = RatingConfig::default();
        let mut engine = MatchEngine::new("m", &config);
        engine
            .process(&MatchEvent::new(3, EventKind::BombPlanted { planter: 9 }))
            .unwrap();
        assert!(engine.player(9).is_none());
        assert_eq!(engine.phase(), MatchPhase::Pending);
    }
}
