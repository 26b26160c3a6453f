//! Aggregated effects of deployed defense items
//!
//! Defense items are staged before the night begins and consumed whether or
//! not an enemy shows up. Stacked items of the same kind add their percent
//! pre-damage, stun charges, and armor bonuses; spawn deterrence multiplies.

use serde::{Deserialize, Serialize};

use crate::core::error::{ObeliskError, Result};
use crate::items::item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefenseEffects {
    /// Summed fraction of the enemy's max stamina dealt before turn one
    pub pre_damage: f32,
    /// Enemy turns to skip
    pub stun: u32,
    /// Flat armor added to every defender
    pub armor_bonus: i32,
    /// Product of spawn multipliers, applied to the enemy roll
    pub spawn_factor: f64,
}

impl DefenseEffects {
    pub fn none() -> Self {
        Self {
            pre_damage: 0.0,
            stun: 0,
            armor_bonus: 0,
            spawn_factor: 1.0,
        }
    }

    /// Aggregate the payloads of the staged items
    ///
    /// Fails if any staged item is not a usable defense item.
    pub fn from_items(items: &[Item]) -> Result<Self> {
        let mut effects = Self::none();
        for item in items {
            let payload = item.defense().ok_or_else(|| {
                ObeliskError::InvalidEncounter(format!(
                    "{} is not a defense item",
                    item.name()
                ))
            })?;
            if !item.is_fixed() {
                return Err(ObeliskError::InvalidEncounter(format!(
                    "{} is broken and cannot be deployed",
                    item.name()
                )));
            }
            effects.pre_damage += payload.pre_damage;
            effects.stun += payload.stun;
            effects.armor_bonus += payload.armor_bonus;
            effects.spawn_factor *= payload.spawn_factor;
        }
        Ok(effects)
    }
}

impl Default for DefenseEffects {
    fn default() -> Self {
        Self::none()
    }
}
