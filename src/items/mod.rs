//! Equipment and inventory
//!
//! Items are template-derived: every item instance carries an [`ItemId`]
//! naming its immutable template (damage range, armor value, crafting costs)
//! plus a small amount of mutable state (repair level, equip/free flags).

pub mod inventory;
pub mod item;

pub use inventory::Inventory;
pub use item::{
    DefensePayload, Item, ItemId, ItemKind, ToolEffect, WeaponProfile, UNARMED, UNCRAFTABLE,
};
