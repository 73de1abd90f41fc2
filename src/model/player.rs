use serde::{Deserialize, Serialize};

use crate::events::{PerSide, PlayerId, Side};
use crate::model::StatLine;

/// Match-lifetime record for one player. Written only by the engine that
/// owns the match; rates are derived at finalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub id: PlayerId,
    pub name: String,
    pub totals: StatLine,
    pub sides: PerSide<StatLine>,
    /// Pistol rounds only; also counted in `totals` and `sides`.
    pub pistol: StatLine,
}

impl PlayerStats {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Folds one finished round played on `side` into both the match line
    /// and that side's line.
    pub fn fold_round(&mut self, side: Side, round: &StatLine) {
        self.totals.absorb(round);
        self.sides[side].absorb(round);
    }

    pub fn fold_pistol_round(&mut self, round: &StatLine) {
        self.pistol.absorb(round);
    }
}
