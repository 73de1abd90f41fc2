//! Single-match replay throughput.
//!
//! Run with: `cargo bench --bench engine`

use std::convert::Infallible;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eco_rating::config::RatingConfig;
use eco_rating::engine::replay_match;
use eco_rating::events::{EventKind, MatchEvent, Position, RosterEntry, Side};

/// A full-length match: 24 rounds of 5v5 with damage, kills and plants,
/// deterministic so runs are comparable.
fn synthetic_match(rounds: u32) -> Vec<MatchEvent> {
    let mut events = Vec::new();
    for round in 0..rounds {
        let base = round * 8_000;
        let (attack_ids, defense_ids) = if round < 12 { (1..=5, 11..=15) } else { (11..=15, 1..=5) };
        let roster = attack_ids
            .clone()
            .map(|id| (id, Side::Attack))
            .chain(defense_ids.clone().map(|id| (id, Side::Defense)))
            .map(|(id, side)| RosterEntry {
                id,
                name: format!("player_{id}"),
                side,
                equipment_value: 800.0 + f64::from(((round * 7 + id as u32) % 5) * 1000),
            })
            .collect();
        events.push(MatchEvent::new(base, EventKind::RoundStart { roster }));

        let mut tick = base + 400;
        let mut attackers: Vec<u64> = attack_ids.collect();
        let mut defenders: Vec<u64> = defense_ids.collect();
        let mut n = round as usize;
        while !attackers.is_empty() && !defenders.is_empty() {
            n += 1;
            let attack_wins = n % 3 != 0;
            let (killer, killer_side, victim, victim_side) = if attack_wins {
                (attackers[n % attackers.len()], Side::Attack, defenders.remove(n % defenders.len()), Side::Defense)
            } else {
                (defenders[n % defenders.len()], Side::Defense, attackers.remove(n % attackers.len()), Side::Attack)
            };
            events.push(MatchEvent::new(
                tick,
                EventKind::PlayerHurt {
                    victim,
                    attacker: Some(killer),
                    damage: 27,
                    hitgroup: "chest".into(),
                    utility: n % 4 == 0,
                    attacker_position: Some(Position::new(n as f64 * 40.0, 0.0, 0.0)),
                    victim_position: Some(Position::new(n as f64 * 40.0 + 300.0, 0.0, 0.0)),
                },
            ));
            tick += 40;
            events.push(MatchEvent::new(
                tick,
                EventKind::Kill {
                    attacker: Some(killer),
                    victim,
                    assister: None,
                    flash_assist: false,
                    weapon: if n % 5 == 0 { "awp".into() } else { "ak47".into() },
                    victim_weapon: "m4a1".into(),
                    attacker_side: Some(killer_side),
                    victim_side,
                    attacker_equipment: 2700.0,
                    victim_equipment: 4700.0,
                    attacker_position: Some(Position::new(n as f64 * 40.0, 0.0, 0.0)),
                    victim_position: Some(Position::new(n as f64 * 40.0 + 300.0, 0.0, 0.0)),
                },
            ));
            tick += 150;
            if n % 4 == 1 && attack_wins {
                events.push(MatchEvent::new(tick, EventKind::BombPlanted { planter: killer }));
                tick += 10;
            }
        }
        let winner = if attackers.is_empty() { Side::Defense } else { Side::Attack };
        events.push(MatchEvent::new(tick + 64, EventKind::RoundEnd { winner }));
    }
    events
}

fn bench_replay(c: &mut Criterion) {
    let config = RatingConfig::default();
    let events = synthetic_match(24);

    let mut group = c.benchmark_group("engine");
    group.bench_function("replay_24_rounds", |b| {
        b.iter(|| {
            black_box(replay_match(
                "bench",
                &config,
                events.iter().cloned().map(Ok::<_, Infallible>),
            ))
        });
    });
    group.finish();
}

criterion_group!(benches, bench_replay);
criterion_main!(benches);
