use serde::{Deserialize, Serialize};

/// Counters and value sums for one scope: a single round, one side of a
/// match, or the whole match. Round lines fold into match lines with
/// [StatLine::absorb].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatLine {
    pub rounds_played: u32,
    pub rounds_won: u32,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub flash_assists: u32,
    /// Health-capped damage to enemies.
    pub damage: u32,
    pub utility_damage: u32,
    pub opening_kills: u32,
    pub opening_deaths: u32,
    pub awp_kills: u32,
    pub knife_kills: u32,
    pub early_deaths: u32,
    /// Kills made after the round was already decided.
    pub exit_frags: u32,
    /// Deaths while holding an AWP.
    pub awp_deaths: u32,
    /// AWP deaths in a round without an AWP kill.
    pub awp_deaths_no_kill: u32,
    pub pistol_vs_rifle_kills: u32,
    /// Kills made on a low-buy loadout.
    pub low_buy_kills: u32,
    /// Kills against a clearly better-equipped victim.
    pub disadvantaged_buy_kills: u32,
    /// Rounds by kill count; index is kills in the round, 1..=5.
    pub multi_kills: [u32; 6],
    pub kast_rounds: u32,
    pub eco_kill_value: f64,
    /// Deducted death penalties; never positive.
    pub eco_death_value: f64,
    /// Scaled probability swing, survival credit included.
    pub swing: f64,
    pub survival_credit: f64,
    pub trade_kills: u32,
    pub fast_trades: u32,
    pub traded_deaths: u32,
    pub trade_denials: u32,
    pub untraded_deaths: u32,
    pub clutch_rounds: u32,
    pub clutch_wins: u32,
    pub enemies_flashed: u32,
    pub enemy_flash_duration: f64,
    pub team_flash_count: u32,
    pub team_flash_duration: f64,
}

impl StatLine {
    pub fn absorb(&mut self, other: &StatLine) {
        self.rounds_played += other.rounds_played;
        self.rounds_won += other.rounds_won;
        self.kills += other.kills;
        self.deaths += other.deaths;
        self.assists += other.assists;
        self.flash_assists += other.flash_assists;
        self.damage += other.damage;
        self.utility_damage += other.utility_damage;
        self.opening_kills += other.opening_kills;
        self.opening_deaths += other.opening_deaths;
        self.awp_kills += other.awp_kills;
        self.knife_kills += other.knife_kills;
        self.early_deaths += other.early_deaths;
        self.exit_frags += other.exit_frags;
        self.awp_deaths += other.awp_deaths;
        self.awp_deaths_no_kill += other.awp_deaths_no_kill;
        self.pistol_vs_rifle_kills += other.pistol_vs_rifle_kills;
        self.low_buy_kills += other.low_buy_kills;
        self.disadvantaged_buy_kills += other.disadvantaged_buy_kills;
        for (mine, theirs) in self.multi_kills.iter_mut().zip(other.multi_kills) {
            *mine += theirs;
        }
        self.kast_rounds += other.kast_rounds;
        self.eco_kill_value += other.eco_kill_value;
        self.eco_death_value += other.eco_death_value;
        self.swing += other.swing;
        self.survival_credit += other.survival_credit;
        self.trade_kills += other.trade_kills;
        self.fast_trades += other.fast_trades;
        self.traded_deaths += other.traded_deaths;
        self.trade_denials += other.trade_denials;
        self.untraded_deaths += other.untraded_deaths;
        self.clutch_rounds += other.clutch_rounds;
        self.clutch_wins += other.clutch_wins;
        self.enemies_flashed += other.enemies_flashed;
        self.enemy_flash_duration += other.enemy_flash_duration;
        self.team_flash_count += other.team_flash_count;
        self.team_flash_duration += other.team_flash_duration;
    }

    /// Rounds with two or more kills.
    pub fn multi_kill_rounds(&self) -> u32 {
        self.multi_kills[2..].iter().sum()
    }

    pub fn rates(&self) -> PlayerRates {
        let rounds = self.rounds_played;
        PlayerRates {
            adr: per_round(f64::from(self.damage), rounds),
            kpr: per_round(f64::from(self.kills), rounds),
            dpr: per_round(f64::from(self.deaths), rounds),
            apr: per_round(f64::from(self.assists), rounds),
            kast: per_round(f64::from(self.kast_rounds), rounds),
            swing_per_round: per_round(self.swing, rounds),
            eco_kill_per_round: per_round(self.eco_kill_value, rounds),
            eco_death_per_round: per_round(self.eco_death_value, rounds),
            opening_kills_per_round: per_round(f64::from(self.opening_kills), rounds),
            utility_damage_per_round: per_round(f64::from(self.utility_damage), rounds),
            multi_kill_rounds_per_round: per_round(f64::from(self.multi_kill_rounds()), rounds),
            clutch_win_rate: per_round(f64::from(self.clutch_wins), self.clutch_rounds),
            low_buy_kill_share: per_round(f64::from(self.low_buy_kills), self.kills),
            disadvantaged_buy_kill_share: per_round(
                f64::from(self.disadvantaged_buy_kills),
                self.kills,
            ),
        }
    }
}

/// `value / rounds`, or 0 when there are no rounds.
pub fn per_round(value: f64, rounds: u32) -> f64 {
    if rounds == 0 {
        0.0
    } else {
        value / f64::from(rounds)
    }
}

/// Per-round rates derived once all rounds are folded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRates {
    pub adr: f64,
    pub kpr: f64,
    pub dpr: f64,
    pub apr: f64,
    /// Fraction of rounds with a kill, assist, survival or trade.
    pub kast: f64,
    pub swing_per_round: f64,
    pub eco_kill_per_round: f64,
    pub eco_death_per_round: f64,
    pub opening_kills_per_round: f64,
    pub utility_damage_per_round: f64,
    pub multi_kill_rounds_per_round: f64,
    pub clutch_win_rate: f64,
    /// Fractions of all kills.
    pub low_buy_kill_share: f64,
    pub disadvantaged_buy_kill_share: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rounds_gives_zero_rates() {
        let line = StatLine {
            kills: 7,
            deaths: 3,
            damage: 900,
            swing: 1.2,
            ..StatLine::default()
        };
        assert_eq!(line.rates(), PlayerRates::default());
    }

    #[test]
    fn absorb_sums_counters_and_histogram() {
        let mut total = StatLine::default();
        let mut round = StatLine {
            rounds_played: 1,
            kills: 3,
            swing: 0.25,
            eco_death_value: -1.2,
            ..StatLine::default()
        };
        round.multi_kills[3] = 1;
        total.absorb(&round);
        total.absorb(&round);
        assert_eq!(total.rounds_played, 2);
        assert_eq!(total.kills, 6);
        assert_eq!(total.multi_kills[3], 2);
        assert_eq!(total.multi_kill_rounds(), 2);
        assert!((total.swing - 0.5).abs() < 1e-12);
        assert!((total.eco_death_value + 2.4).abs() < 1e-12);
        assert!((total.rates().kpr - 3.0).abs() < 1e-12);
    }

    #[test]
    fn buy_kill_shares_are_fractions_of_kills() {
        let line = StatLine {
            rounds_played: 10,
            kills: 8,
            low_buy_kills: 2,
            disadvantaged_buy_kills: 4,
            ..StatLine::default()
        };
        let rates = line.rates();
        assert_eq!(rates.low_buy_kill_share, 0.25);
        assert_eq!(rates.disadvantaged_buy_kill_share, 0.5);
    }
}
