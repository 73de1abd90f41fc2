//! Man-advantage ledger.
//!
//! Each kill opens a slot on the killer's side. A death on a side consumes
//! that side's oldest slot, and a dead player's own slots are dropped. When
//! a teammate converts another kill, every other live slot holder earns
//! survival credit.

use std::collections::VecDeque;

use crate::events::{PerSide, PlayerId, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvantageSlot {
    pub player: PlayerId,
    pub side: Side,
    /// Creation order within the round.
    pub order: u32,
}

#[derive(Debug, Clone, Default)]
pub struct AdvantageTracker {
    slots: PerSide<VecDeque<AdvantageSlot>>,
    next_order: u32,
}

impl AdvantageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the distinct holders of live slots on `side` (excluding the
    /// killer) in creation order, then opens a slot for the killer.
    pub fn record_kill(&mut self, killer: PlayerId, side: Side) -> Vec<PlayerId> {
        let mut beneficiaries: Vec<PlayerId> = Vec::new();
        for slot in &self.slots[side] {
            if slot.player != killer && !beneficiaries.contains(&slot.player) {
                beneficiaries.push(slot.player);
            }
        }

        self.slots[side].push_back(AdvantageSlot {
            player: killer,
            side,
            order: self.next_order,
        });
        self.next_order += 1;

        beneficiaries
    }

    pub fn record_death(&mut self, victim: PlayerId, side: Side) {
        let slots = &mut self.slots[side];
        slots.pop_front();
        slots.retain(|slot| slot.player != victim);
    }

    pub fn reset(&mut self) {
        for side in Side::ALL {
            self.slots[side].clear();
        }
        self.next_order = 0;
    }

    pub fn slots(&self, side: Side) -> impl Iterator<Item = &AdvantageSlot> {
        self.slots[side].iter()
    }

    pub fn len(&self, side: Side) -> usize {
        self.slots[side].len()
    }

    pub fn is_empty(&self) -> bool {
        Side::ALL.iter().all(|side| self.slots[*side].is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: PlayerId = 1;
    const B: PlayerId = 2;
    const C: PlayerId = 3;
    const ENEMY: PlayerId = 9;

    #[test]
    fn third_kill_credits_earlier_killers_in_order() {
        let mut tracker = AdvantageTracker::new();
        assert!(tracker.record_kill(A, Side::Attack).is_empty());
        assert_eq!(tracker.record_kill(B, Side::Attack), vec![A]);
        assert_eq!(tracker.record_kill(C, Side::Attack), vec![A, B]);
    }

    #[test]
    fn repeat_killer_is_listed_once_and_never_credits_self() {
        let mut tracker = AdvantageTracker::new();
        tracker.record_kill(A, Side::Attack);
        tracker.record_kill(A, Side::Attack);
        assert_eq!(tracker.record_kill(B, Side::Attack), vec![A]);
        assert_eq!(tracker.record_kill(A, Side::Attack), vec![B]);
    }

    #[test]
    fn death_consumes_oldest_slot_only() {
        let mut tracker = AdvantageTracker::new();
        tracker.record_kill(A, Side::Attack);
        tracker.record_kill(B, Side::Attack);
        tracker.record_death(ENEMY, Side::Attack);
        let remaining: Vec<_> = tracker.slots(Side::Attack).map(|s| s.player).collect();
        assert_eq!(remaining, vec![B]);
    }

    #[test]
    fn dying_owner_loses_all_own_slots() {
        let mut tracker = AdvantageTracker::new();
        tracker.record_kill(B, Side::Attack);
        tracker.record_kill(A, Side::Attack);
        tracker.record_kill(A, Side::Attack);
        tracker.record_kill(C, Side::Attack);
        tracker.record_death(A, Side::Attack);
        let remaining: Vec<_> = tracker.slots(Side::Attack).map(|s| s.player).collect();
        assert_eq!(remaining, vec![C]);
    }

    #[test]
    fn sides_are_independent_and_reset_clears_both() {
        let mut tracker = AdvantageTracker::new();
        tracker.record_kill(A, Side::Attack);
        tracker.record_kill(ENEMY, Side::Defense);
        tracker.record_death(B, Side::Defense);
        assert_eq!(tracker.len(Side::Attack), 1);
        assert_eq!(tracker.len(Side::Defense), 0);
        tracker.reset();
        assert!(tracker.is_empty());
    }
}
