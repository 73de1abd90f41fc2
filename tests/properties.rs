//! Property checks over the pure pieces of the engine.

use proptest::prelude::*;

use eco_rating::engine::{BombState, EconomyTable, LogisticModel, RoundSnapshot, WinProbabilityModel};
use eco_rating::events::{PerSide, Side};
use eco_rating::model::StatLine;
use eco_rating::rating::{RatingComposer, RatingWeights};

fn bomb_state() -> impl Strategy<Value = BombState> {
    prop_oneof![
        Just(BombState::NotPlanted),
        Just(BombState::Planted),
        Just(BombState::Defused),
    ]
}

prop_compose! {
    fn snapshot()(
        attack in 0u32..=5,
        defense in 0u32..=5,
        attack_eq in 0.0f64..40_000.0,
        defense_eq in 0.0f64..40_000.0,
        bomb in bomb_state(),
        time_remaining in 0.0f64..115.0,
    ) -> RoundSnapshot {
        RoundSnapshot {
            alive: PerSide::new(attack, defense),
            equipment: PerSide::new(attack_eq, defense_eq),
            bomb,
            time_remaining,
            clock_length: 115.0,
        }
    }
}

prop_compose! {
    fn stat_line()(
        rounds_played in 0u32..40,
        kills in 0u32..120,
        deaths in 0u32..40,
        damage in 0u32..20_000,
        kast_rounds in 0u32..40,
        eco_kill_value in 0.0f64..200.0,
        eco_death_value in -80.0f64..0.0,
        swing in -30.0f64..30.0,
        opening_kills in 0u32..40,
        trade_kills in 0u32..40,
        clutch_wins in 0u32..10,
        utility_damage in 0u32..5000,
        enemy_flash_duration in 0.0f64..300.0,
    ) -> StatLine {
        StatLine {
            rounds_played,
            kills,
            deaths,
            damage,
            kast_rounds,
            eco_kill_value,
            eco_death_value,
            swing,
            opening_kills,
            trade_kills,
            clutch_rounds: clutch_wins,
            clutch_wins,
            utility_damage,
            enemy_flash_duration,
            ..StatLine::default()
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig { max_global_rejects: 8192, ..ProptestConfig::default() })]

    #[test]
    fn win_probability_is_a_probability(s in snapshot()) {
        let model = LogisticModel::default();
        let attack = model.win_probability(&s, Side::Attack);
        let defense = model.win_probability(&s, Side::Defense);
        prop_assert!((0.0..=1.0).contains(&attack));
        prop_assert!(((attack + defense) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn extra_player_never_hurts(s in snapshot()) {
        prop_assume!(s.bomb == BombState::NotPlanted);
        prop_assume!((1..5).contains(&s.alive.attack) && s.alive.defense > 0);
        let model = LogisticModel::default();
        let mut stronger = s;
        stronger.alive.attack += 1;
        prop_assert!(
            model.win_probability(&stronger, Side::Attack) > model.win_probability(&s, Side::Attack)
        );
    }

    #[test]
    fn extra_equipment_strictly_helps(s in snapshot(), extra in 500.0f64..10_000.0) {
        prop_assume!(s.bomb == BombState::NotPlanted);
        prop_assume!(s.alive.attack > 0 && s.alive.defense > 0);
        let model = LogisticModel::default();
        let mut richer = s;
        richer.equipment.defense += extra;
        prop_assert!(
            model.win_probability(&richer, Side::Defense) > model.win_probability(&s, Side::Defense)
        );
    }

    #[test]
    fn plant_never_hurts_attack(s in snapshot()) {
        prop_assume!(s.bomb == BombState::NotPlanted && s.alive.attack > 0);
        let model = LogisticModel::default();
        let planted = RoundSnapshot {
            bomb: BombState::Planted,
            time_remaining: 40.0,
            clock_length: 40.0,
            ..s
        };
        prop_assert!(
            model.win_probability(&planted, Side::Attack) >= model.win_probability(&s, Side::Attack)
        );
    }

    #[test]
    fn eco_multipliers_are_monotonic(victim in 0.0f64..10_000.0, a in 0.0f64..10_000.0, b in 0.0f64..10_000.0) {
        let table = EconomyTable::default();
        let (cheap, rich) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(table.multipliers(cheap, victim).kill >= table.multipliers(rich, victim).kill);
        prop_assert!(table.multipliers(cheap, victim).death >= table.multipliers(rich, victim).death);
    }

    #[test]
    fn rating_stays_in_bounds(line in stat_line()) {
        let weights = RatingWeights::default();
        let composer = RatingComposer::new(&weights);
        let rating = composer.compose(&line).rating;
        prop_assert!(rating >= weights.min_rating && rating <= weights.max_rating);
        if line.rounds_played == 0 {
            prop_assert_eq!(rating, weights.min_rating);
            prop_assert!(composer.compose_side(&line).is_none());
        }
    }

    #[test]
    fn zero_rounds_yield_zero_rates(line in stat_line()) {
        let line = StatLine { rounds_played: 0, ..line };
        let rates = line.rates();
        prop_assert_eq!(rates.adr, 0.0);
        prop_assert_eq!(rates.kpr, 0.0);
        prop_assert_eq!(rates.kast, 0.0);
    }
}
