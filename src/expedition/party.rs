//! Expedition parties
//!
//! An expedition groups survivors with a local inventory and a position on
//! the map. Its movement range each day is bounded by the weakest member's
//! stamina; every step drains the whole party.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::config::GameConfig;
use crate::core::error::{ObeliskError, Result};
use crate::core::types::{ExpeditionId, TileCoord};
use crate::expedition::pathfinding::MovementRange;
use crate::items::inventory::Inventory;
use crate::items::item::{Item, ItemId, ItemKind, ToolEffect};
use crate::map::grid::MapGrid;
use crate::map::loot::{self, ResourceYield};
use crate::roster::survivor::Survivor;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expedition {
    pub id: ExpeditionId,
    pub position: TileCoord,
    pub survivors: Vec<Survivor>,
    pub inventory: Inventory,
}

impl Expedition {
    pub fn new(
        id: ExpeditionId,
        position: TileCoord,
        survivors: Vec<Survivor>,
        inventory: Inventory,
    ) -> Result<Self> {
        if survivors.is_empty() {
            return Err(ObeliskError::EmptyParty);
        }
        Ok(Self {
            id,
            position,
            survivors,
            inventory,
        })
    }

    /// Stamina of the weakest member; this bounds the day's travel
    pub fn min_stamina(&self) -> Result<i32> {
        self.survivors
            .iter()
            .map(|s| s.stamina)
            .min()
            .ok_or(ObeliskError::EmptyParty)
    }

    /// Tiles this party can reach today
    pub fn movement_range(&self, grid: &MapGrid) -> Result<MovementRange> {
        let budget = self.min_stamina()?.max(0) as u32;
        MovementRange::compute(grid, self.position, budget)
    }

    /// Move to `dest` along the cheapest path, draining every member by the
    /// path cost. Fails without side effects if `dest` is out of range.
    pub fn travel_to(&mut self, grid: &MapGrid, dest: TileCoord) -> Result<u32> {
        let range = self.movement_range(grid)?;
        let route = range.route_to(dest)?;

        for survivor in &mut self.survivors {
            survivor.spend_stamina(route.cost as i32);
        }
        self.position = dest;

        info!(
            expedition = self.id.0,
            to = ?dest,
            cost = route.cost,
            "expedition moved"
        );
        Ok(route.cost)
    }

    /// Scavenge the current tile: roll resources and an item find, fold
    /// them into the local inventory, and charge each member the action's
    /// stamina cost
    pub fn scavenge<R: Rng>(
        &mut self,
        grid: &MapGrid,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<(ResourceYield, Option<ItemId>)> {
        let terrain = grid.tile(self.position)?.terrain;

        let yielded = loot::roll_resources(terrain, rng);
        let found = loot::roll_item(terrain, rng);

        self.inventory.food += yielded.food;
        self.inventory.wood += yielded.wood;
        self.inventory.metal += yielded.metal;
        self.inventory.ammo += yielded.ammo;
        if let Some(id) = found {
            self.inventory.items.push(Item::new(id));
        }

        for survivor in &mut self.survivors {
            survivor.spend_stamina(config.scavenge_cost);
        }

        debug!(expedition = self.id.0, ?yielded, item = ?found, "scavenged");
        Ok((yielded, found))
    }

    /// Craft an item from the local stockpile; the crafter pays the
    /// action's stamina cost
    pub fn craft(&mut self, crafter: usize, id: ItemId, config: &GameConfig) -> Result<()> {
        let survivor = self
            .survivors
            .get_mut(crafter)
            .ok_or(ObeliskError::EmptyParty)?;
        if !survivor.is_able() {
            return Err(ObeliskError::CannotCraft(format!(
                "{} is too exhausted to craft",
                survivor.first_name()
            )));
        }
        self.inventory.craft(id)?;
        survivor.spend_stamina(config.craft_cost);
        debug!(expedition = self.id.0, item = id.name(), "crafted");
        Ok(())
    }

    /// Whether the party can pitch camp on its current tile
    ///
    /// Open terrain is always campable; elsewhere a camping kit is needed.
    pub fn can_camp(&self, grid: &MapGrid) -> Result<bool> {
        let tile = grid.tile(self.position)?;
        if tile.campable() {
            return Ok(true);
        }
        Ok(self
            .inventory
            .items
            .iter()
            .any(|i| i.id.kind() == ItemKind::Tool(ToolEffect::Camp) && i.is_fixed()))
    }

    /// Use a consumable tool on a member: first aid restores half their
    /// max stamina, antibiotics clear sickness
    pub fn use_tool(&mut self, item_idx: usize, target: usize) -> Result<()> {
        let effect = self
            .inventory
            .items
            .get(item_idx)
            .and_then(|i| match i.id.kind() {
                ItemKind::Tool(effect) => Some(effect),
                _ => None,
            })
            .ok_or_else(|| {
                ObeliskError::InvalidEncounter("not a usable tool".into())
            })?;
        let survivor = self
            .survivors
            .get_mut(target)
            .ok_or(ObeliskError::EmptyParty)?;

        match effect {
            ToolEffect::Heal => {
                let restored = (survivor.max_stamina + 1) / 2;
                survivor.stamina = (survivor.stamina + restored).min(survivor.max_stamina);
            }
            ToolEffect::Cure => survivor.sick = false,
            // Camping kits are passive; nothing to apply here
            ToolEffect::Camp => return Ok(()),
        }
        self.inventory.items.remove(item_idx);
        Ok(())
    }

    /// Split off a child expedition with the named members and a share of
    /// the inventory. Fails without side effects on a bad pick.
    pub fn split(
        &mut self,
        new_id: ExpeditionId,
        survivor_picks: &[usize],
        food: u32,
        wood: u32,
        metal: u32,
        ammo: u32,
        item_picks: &[usize],
    ) -> Result<Expedition> {
        if survivor_picks.is_empty() || survivor_picks.len() >= self.survivors.len() {
            return Err(ObeliskError::EmptyParty);
        }
        if survivor_picks.iter().any(|&i| i >= self.survivors.len()) {
            return Err(ObeliskError::EmptyParty);
        }

        let child_inv = self.inventory.split(food, wood, metal, ammo, item_picks)?;

        let mut picks: Vec<usize> = survivor_picks.to_vec();
        picks.sort_unstable();
        picks.dedup();
        let mut taken = Vec::new();
        for &i in picks.iter().rev() {
            taken.push(self.survivors.remove(i));
        }
        taken.reverse();

        Expedition::new(new_id, self.position, taken, child_inv)
    }

    /// Absorb another expedition standing on the same tile
    pub fn merge(&mut self, other: Expedition) -> Result<()> {
        if other.position != self.position {
            return Err(ObeliskError::InvalidEncounter(format!(
                "cannot merge expeditions on different tiles ({:?} vs {:?})",
                self.position, other.position
            )));
        }
        self.survivors.extend(other.survivors);
        self.inventory.merge(other.inventory);
        Ok(())
    }

    /// Members still on their feet
    pub fn able_count(&self) -> usize {
        self.survivors.iter().filter(|s| s.is_able()).count()
    }
}
