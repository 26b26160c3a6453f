//! Resource and item storage
//!
//! Both the base camp and each expedition carry an `Inventory`. Splitting an
//! expedition off the camp moves resources and items between the two; merging
//! on return puts everything back.

use serde::{Deserialize, Serialize};

use crate::core::error::{ObeliskError, Result};
use crate::items::item::{Item, ItemId, ItemKind, UNCRAFTABLE};

/// Stockpile of resources plus a bag of item instances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub food: u32,
    pub wood: u32,
    pub metal: u32,
    pub ammo: u32,
    pub items: Vec<Item>,
}

impl Inventory {
    /// An empty inventory; every instance gets its own item vector
    pub fn new() -> Self {
        Self {
            food: 0,
            wood: 0,
            metal: 0,
            ammo: 0,
            items: Vec::new(),
        }
    }

    pub fn with_resources(food: u32, wood: u32, metal: u32, ammo: u32) -> Self {
        Self {
            food,
            wood,
            metal,
            ammo,
            items: Vec::new(),
        }
    }

    /// Fold another inventory into this one, consuming it
    pub fn merge(&mut self, other: Inventory) {
        self.food += other.food;
        self.wood += other.wood;
        self.metal += other.metal;
        self.ammo += other.ammo;
        self.items.extend(other.items);
    }

    /// Carve out a sub-inventory, removing the claimed resources and the
    /// items at `picks` (indices into `self.items`)
    ///
    /// Fails without modifying anything if a resource would go negative or
    /// an index is out of range.
    pub fn split(
        &mut self,
        food: u32,
        wood: u32,
        metal: u32,
        ammo: u32,
        picks: &[usize],
    ) -> Result<Inventory> {
        if food > self.food {
            return Err(ObeliskError::InventoryUnderflow("food"));
        }
        if wood > self.wood {
            return Err(ObeliskError::InventoryUnderflow("wood"));
        }
        if metal > self.metal {
            return Err(ObeliskError::InventoryUnderflow("metal"));
        }
        if ammo > self.ammo {
            return Err(ObeliskError::InventoryUnderflow("ammo"));
        }
        if picks.iter().any(|&i| i >= self.items.len()) {
            return Err(ObeliskError::InventoryUnderflow("items"));
        }

        self.food -= food;
        self.wood -= wood;
        self.metal -= metal;
        self.ammo -= ammo;

        // Remove highest indices first so earlier picks stay valid
        let mut sorted: Vec<usize> = picks.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        let mut taken = Vec::new();
        for &i in sorted.iter().rev() {
            taken.push(self.items.remove(i));
        }
        taken.reverse();

        Ok(Inventory {
            food,
            wood,
            metal,
            ammo,
            items: taken,
        })
    }

    /// Deduct `cost` ammo if the pool covers it; returns whether it did
    pub fn spend_ammo(&mut self, cost: u32) -> bool {
        if self.ammo >= cost {
            self.ammo -= cost;
            true
        } else {
            false
        }
    }

    /// Whether the stockpile covers the crafting cost of `id`
    pub fn can_craft(&self, id: ItemId) -> bool {
        let (wood, metal) = id.craft_cost();
        wood != UNCRAFTABLE && wood <= self.wood && metal <= self.metal
    }

    /// Spend resources and add a freshly made item
    pub fn craft(&mut self, id: ItemId) -> Result<()> {
        let (wood, metal) = id.craft_cost();
        if wood == UNCRAFTABLE {
            return Err(ObeliskError::CannotCraft(format!(
                "{} cannot be crafted",
                id.name()
            )));
        }
        if wood > self.wood || metal > self.metal {
            return Err(ObeliskError::CannotCraft(format!(
                "{} needs {} wood and {} metal",
                id.name(),
                wood,
                metal
            )));
        }
        self.wood -= wood;
        self.metal -= metal;
        self.items.push(Item::new(id));
        Ok(())
    }

    /// Indices of usable defense items, for the night-watch deploy screen
    pub fn defense_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_defense() && item.is_fixed() && item.free)
            .map(|(i, _)| i)
            .collect()
    }

    /// Usable weapons, best damage ceiling first
    pub fn weapon_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                item.is_fixed() && matches!(item.id.kind(), ItemKind::Weapon(_))
            })
            .map(|(i, _)| i)
            .collect();
        indices.sort_by_key(|&i| {
            std::cmp::Reverse(self.items[i].weapon_profile().map_or(0, |p| p.dmg_max))
        });
        indices
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
