//! Parallel replay of several matches.

use eco_rating::config::RatingConfig;
use eco_rating::events::{EventKind, IngestedMatch, MatchEvent, RosterEntry, Side, DEFAULT_TICK_RATE};
use eco_rating::parallel::{rate_matches, rate_matches_sequential, WorkerPool};

fn roster() -> Vec<RosterEntry> {
    vec![
        RosterEntry {
            id: 1,
            name: "one".into(),
            side: Side::Attack,
            equipment_value: 3000.0,
        },
        RosterEntry {
            id: 2,
            name: "two".into(),
            side: Side::Defense,
            equipment_value: 3000.0,
        },
    ]
}

fn kill(tick: u32, attacker: u64, victim: u64, victim_side: Side) -> MatchEvent {
    MatchEvent::new(
        tick,
        EventKind::Kill {
            attacker: Some(attacker),
            victim,
            assister: None,
            flash_assist: false,
            weapon: "m4a1".into(),
            victim_weapon: "ak47".into(),
            attacker_side: None,
            victim_side,
            attacker_equipment: 3000.0,
            victim_equipment: 3000.0,
            attacker_position: None,
            victim_position: None,
        },
    )
}

fn good_match(id: &str, rounds: u32) -> IngestedMatch {
    let mut events = Vec::new();
    for round in 0..rounds {
        let base = round * 10_000;
        events.push(MatchEvent::new(base, EventKind::RoundStart { roster: roster() }));
        events.push(kill(base + 500, 1, 2, Side::Defense));
        events.push(MatchEvent::new(base + 600, EventKind::RoundEnd { winner: Side::Attack }));
    }
    IngestedMatch {
        match_id: id.into(),
        tick_rate: DEFAULT_TICK_RATE,
        events,
    }
}

fn broken_match(id: &str) -> IngestedMatch {
    let mut m = good_match(id, 1);
    m.events.insert(2, kill(100, 2, 1, Side::Attack));
    m
}

#[test]
fn failing_match_does_not_affect_others() {
    let config = RatingConfig::default();
    let matches = vec![
        good_match("a", 3),
        broken_match("b"),
        good_match("c", 5),
    ];
    let results = rate_matches(&matches, &config, &WorkerPool::with_workers(2));
    assert_eq!(results.len(), 3);

    let a = results[0].as_ref().expect("a rated");
    assert_eq!(a.match_id, "a");
    assert_eq!(a.rounds.len(), 3);

    let failure = results[1].as_ref().expect_err("b cancelled");
    assert_eq!(failure.match_id, "b");
    assert_eq!(failure.event_index, 2);

    let c = results[2].as_ref().expect("c rated");
    assert_eq!(c.player(1).unwrap().stats.kills, 5);
}

#[test]
fn parallel_and_sequential_agree() {
    let config = RatingConfig::default();
    let matches: Vec<_> = (1..=8).map(|n| good_match(&format!("m{n}"), n)).collect();
    let parallel = rate_matches(&matches, &config, &WorkerPool::default_workers());
    let sequential = rate_matches_sequential(&matches, &config);
    for (p, s) in parallel.iter().zip(&sequential) {
        assert_eq!(p.as_ref().ok(), s.as_ref().ok());
    }
}

#[test]
fn log_tick_rate_overrides_clock() {
    let config = RatingConfig::default();
    // At 128 ticks per second, a death 3000 ticks in is still early (23s).
    let mut fast = good_match("fast", 1);
    fast.tick_rate = 128.0;
    fast.events[1] = kill(3000, 1, 2, Side::Defense);
    fast.events[2] = MatchEvent::new(3100, EventKind::RoundEnd { winner: Side::Attack });
    let mut slow = fast.clone();
    slow.tick_rate = DEFAULT_TICK_RATE;

    let results = rate_matches_sequential(&[fast, slow], &config);
    let early = |i: usize| {
        results[i].as_ref().unwrap().player(2).unwrap().stats.early_deaths
    };
    assert_eq!(early(0), 1);
    assert_eq!(early(1), 0);
}
