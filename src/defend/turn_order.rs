//! Combat turn order
//!
//! Survivors and the enemy share one turn list sorted by descending speed.
//! The sort is stable, so ties keep their setup order, and the enemy is
//! appended after the survivors before sorting.

use serde::{Deserialize, Serialize};

use crate::roster::survivor::Survivor;

/// One slot in the turn list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnSlot {
    /// Index into the encounter's survivor list
    Survivor(usize),
    Enemy,
}

/// Build the turn list for one encounter
pub fn build(survivors: &[Survivor], enemy_speed: i32) -> Vec<TurnSlot> {
    let mut slots: Vec<(TurnSlot, i32)> = survivors
        .iter()
        .enumerate()
        .map(|(i, s)| (TurnSlot::Survivor(i), s.speed()))
        .collect();
    slots.push((TurnSlot::Enemy, enemy_speed));

    slots.sort_by_key(|&(_, speed)| std::cmp::Reverse(speed));
    slots.into_iter().map(|(slot, _)| slot).collect()
}
