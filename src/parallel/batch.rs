//! Parallel replay of independent matches.
//!
//! Each match gets its own engine on one worker; nothing is shared but the
//! read-only configuration. A failing match yields its own `Err` and never
//! disturbs its neighbours. Output order equals input order.

use rayon::prelude::*;
use tracing::{info, warn};

use crate::config::{RatingConfig, RoundClock};
use crate::engine::replay_match;
use crate::error::MatchFailure;
use crate::events::IngestedMatch;
use crate::model::MatchReport;
use crate::parallel::pool::WorkerPool;

fn rate_one(input: &IngestedMatch, config: &RatingConfig) -> Result<MatchReport, MatchFailure> {
    // A log recorded at another tick rate gets its own clock.
    let retimed;
    let config = if input.tick_rate > 0.0 && input.tick_rate != config.clock.tick_rate {
        retimed = RatingConfig {
            clock: RoundClock {
                tick_rate: input.tick_rate,
                ..config.clock
            },
            ..config.clone()
        };
        &retimed
    } else {
        config
    };
    let events = input
        .events
        .iter()
        .cloned()
        .map(Ok::<_, std::convert::Infallible>);
    let result = replay_match(&input.match_id, config, events);
    if let Err(failure) = &result {
        warn!(match_id = %input.match_id, error = %failure, "match cancelled");
    }
    result
}

/// Replays every match in parallel on `pool`.
pub fn rate_matches(
    matches: &[IngestedMatch],
    config: &RatingConfig,
    pool: &WorkerPool,
) -> Vec<Result<MatchReport, MatchFailure>> {
    let results: Vec<_> = pool.install(|| {
        matches
            .par_iter()
            .map(|input| rate_one(input, config))
            .collect()
    });
    let failed = results.iter().filter(|r| r.is_err()).count();
    info!(matches = matches.len(), failed, "batch replay complete");
    results
}

/// Sequential counterpart of [rate_matches], for comparison and small inputs.
pub fn rate_matches_sequential(
    matches: &[IngestedMatch],
    config: &RatingConfig,
) -> Vec<Result<MatchReport, MatchFailure>> {
    matches.iter().map(|input| rate_one(input, config)).collect()
}
