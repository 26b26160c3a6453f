//! Weighted rolls against the terrain tables
//!
//! Spawn, resource, and item tables list only positive outcomes; any
//! probability mass they leave uncovered rolls as nothing.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::defend::enemy::EnemyKind;
use crate::items::item::ItemId;
use crate::map::terrain::Terrain;

/// Resources turned up by one scavenge action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceYield {
    pub food: u32,
    pub wood: u32,
    pub metal: u32,
    pub ammo: u32,
}

impl ResourceYield {
    pub fn is_empty(&self) -> bool {
        self.food == 0 && self.wood == 0 && self.metal == 0 && self.ammo == 0
    }
}

/// Roll the night-attack table for a campsite
///
/// `spawn_factor` scales every enemy row's probability; deployed watch
/// fires pass a factor below 1.0 to push mass toward a peaceful night.
pub fn roll_enemy<R: Rng>(terrain: Terrain, spawn_factor: f64, rng: &mut R) -> Option<EnemyKind> {
    let roll: f64 = rng.gen();
    let mut cumulative = 0.0;
    for &(prob, kind) in terrain.enemy_rates() {
        cumulative += prob * spawn_factor;
        if roll < cumulative {
            return Some(kind);
        }
    }
    None
}

/// Roll each resource row independently for one scavenge
pub fn roll_resources<R: Rng>(terrain: Terrain, rng: &mut R) -> ResourceYield {
    let rates = terrain.resource_rates();
    let mut amounts = [0u32; 4];
    for (amount, row) in amounts.iter_mut().zip(rates.iter()) {
        if row.prob > 0.0 && rng.gen::<f64>() < row.prob {
            *amount = rng.gen_range(row.min..=row.max);
        }
    }
    ResourceYield {
        food: amounts[0],
        wood: amounts[1],
        metal: amounts[2],
        ammo: amounts[3],
    }
}

/// Roll the item-find table for one scavenge
pub fn roll_item<R: Rng>(terrain: Terrain, rng: &mut R) -> Option<ItemId> {
    let roll: f64 = rng.gen();
    let mut cumulative = 0.0;
    for &(prob, id) in terrain.item_rates() {
        cumulative += prob;
        if roll < cumulative {
            return Some(id);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_ritual_site_spawn_is_certain_at_full_factor() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..200 {
            assert!(roll_enemy(Terrain::RitualSite, 1.0, &mut rng).is_some());
        }
    }

    #[test]
    fn test_zero_factor_never_spawns() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..200 {
            assert!(roll_enemy(Terrain::RitualSite, 0.0, &mut rng).is_none());
        }
    }

    #[test]
    fn test_reduced_factor_spawns_less_often() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let count = |factor: f64, rng: &mut ChaCha8Rng| {
            (0..2000)
                .filter(|_| roll_enemy(Terrain::Field, factor, rng).is_some())
                .count()
        };
        let full = count(1.0, &mut rng);
        let halved = count(0.5, &mut rng);
        assert!(halved < full);
    }

    #[test]
    fn test_obelisk_yields_no_resources() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..50 {
            assert!(roll_resources(Terrain::Obelisk, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_deep_jungle_always_has_food() {
        // Food row carries probability 1.0 there
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..100 {
            let loot = roll_resources(Terrain::DeepJungle, &mut rng);
            assert!((4..=8).contains(&loot.food));
        }
    }

    #[test]
    fn test_field_never_yields_items() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        for _ in 0..100 {
            assert!(roll_item(Terrain::Field, &mut rng).is_none());
        }
    }

    #[test]
    fn test_item_rolls_stay_in_table() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let table: Vec<ItemId> = Terrain::Facility
            .item_rates()
            .iter()
            .map(|&(_, id)| id)
            .collect();
        for _ in 0..500 {
            if let Some(id) = roll_item(Terrain::Facility, &mut rng) {
                assert!(table.contains(&id));
            }
        }
    }
}
