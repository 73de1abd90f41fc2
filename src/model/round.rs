use serde::{Deserialize, Serialize};

use crate::events::{Side, Tick};

pub const FIRST_HALF_PISTOL_ROUND: u32 = 1;
pub const SECOND_HALF_PISTOL_ROUND: u32 = 13;
pub const REGULATION_ROUNDS: u32 = 24;
pub const OVERTIME_LENGTH: u32 = 6;

/// Pistol rounds: 1, 13, then the first round of each overtime block (25, 31, ...).
pub fn is_pistol_round(number: u32) -> bool {
    if number == FIRST_HALF_PISTOL_ROUND || number == SECOND_HALF_PISTOL_ROUND {
        return true;
    }
    number > REGULATION_ROUNDS && (number - REGULATION_ROUNDS - 1) % OVERTIME_LENGTH == 0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub number: u32,
    pub winner: Side,
    pub start_tick: Tick,
    pub end_tick: Tick,
    pub bomb_planted: bool,
    pub plant_tick: Option<Tick>,
    pub pistol_round: bool,
    pub kills: u32,
}
