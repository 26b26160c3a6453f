//! Item templates and instances
//!
//! Every item names an immutable template through its [`ItemId`]; the
//! category is a closed sum type so combat and crafting code can match
//! exhaustively.

use serde::{Deserialize, Serialize};

/// Crafting-cost marker for relics that can only be found, never made
pub const UNCRAFTABLE: u32 = 99;

/// Damage and cost profile of a weapon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponProfile {
    pub dmg_min: i32,
    pub dmg_max: i32,
    /// Ammo consumed per strike (0 for melee)
    pub ammo_cost: u32,
    /// Stamina consumed per strike; > 0 marks a cursed/mystic weapon
    pub stam_cost: i32,
    /// Hit-bar ratio required for a strike to land
    pub difficulty: f32,
}

impl WeaponProfile {
    /// Cursed weapons draw on the wielder's stamina and mental stat
    pub fn is_cursed(&self) -> bool {
        self.stam_cost > 0
    }
}

/// Profile used when a survivor fights bare-handed or cannot pay a
/// weapon's ammo/stamina cost
pub const UNARMED: WeaponProfile = WeaponProfile {
    dmg_min: 1,
    dmg_max: 2,
    ammo_cost: 0,
    stam_cost: 0,
    difficulty: 0.25,
};

/// Pre-combat effect of a deployed defense item (consumed per night)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefensePayload {
    /// Fraction of the enemy's max stamina dealt before the first turn
    pub pre_damage: f32,
    /// Enemy turns skipped outright
    pub stun: u32,
    /// Flat armor added to every defender
    pub armor_bonus: i32,
    /// Multiplier on the tile's enemy-spawn mass (< 1.0 deters spawns)
    pub spawn_factor: f64,
}

/// What a tool does when used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolEffect {
    /// Lets the expedition camp on non-campable terrain
    Camp,
    /// Restores stamina outside the normal rest cycle
    Heal,
    /// Cures sickness
    Cure,
}

/// Item category with category-specific payload
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon(WeaponProfile),
    Armor { armor: i32 },
    Defense(DefensePayload),
    Tool(ToolEffect),
}

/// Every item template in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemId {
    // Weapons
    Knife,
    Spear,
    Axe,
    Machete,
    Pistol,
    Rifle,
    FlameThrower,
    MachineGun,
    // Cursed relic weapons
    Jabberwocky,
    EldritchStaff,
    InfernalSkull,
    SoulScepter,
    // Armor
    WoodenShield,
    TribalGarb,
    CFiberVest,
    BodyArmor,
    ShamanCharm,
    YuggothCloak,
    // Defenses
    PitTrap,
    Flashbang,
    Barricade,
    WatchFire,
    // Tools
    CampingKit,
    FirstAid,
    Antibiotics,
}

impl ItemId {
    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            ItemId::Knife => "Knife",
            ItemId::Spear => "Spear",
            ItemId::Axe => "Axe",
            ItemId::Machete => "Machete",
            ItemId::Pistol => "Pistol",
            ItemId::Rifle => "Rifle",
            ItemId::FlameThrower => "Flame Thrower",
            ItemId::MachineGun => "Machine Gun",
            ItemId::Jabberwocky => "Jabberwocky",
            ItemId::EldritchStaff => "Eldritch Staff",
            ItemId::InfernalSkull => "Infernal Skull",
            ItemId::SoulScepter => "Soul Scepter",
            ItemId::WoodenShield => "Wooden Shield",
            ItemId::TribalGarb => "Tribal Garb",
            ItemId::CFiberVest => "C. Fiber Vest",
            ItemId::BodyArmor => "Body Armor",
            ItemId::ShamanCharm => "Shaman Charm",
            ItemId::YuggothCloak => "Yuggoth Cloak",
            ItemId::PitTrap => "Pit Trap",
            ItemId::Flashbang => "Flashbang",
            ItemId::Barricade => "Barricade",
            ItemId::WatchFire => "Watch Fire",
            ItemId::CampingKit => "Camping Kit",
            ItemId::FirstAid => "First Aid",
            ItemId::Antibiotics => "Antibiotics",
        }
    }

    /// Crafting cost as (wood, metal); [`UNCRAFTABLE`] marks loot-only relics
    pub fn craft_cost(self) -> (u32, u32) {
        match self {
            ItemId::Knife => (0, 1),
            ItemId::Spear => (1, 1),
            ItemId::Axe => (2, 1),
            ItemId::Machete => (1, 2),
            ItemId::Pistol => (0, 2),
            ItemId::Rifle => (0, 4),
            ItemId::FlameThrower => (0, 6),
            ItemId::MachineGun => (0, 8),
            ItemId::Jabberwocky
            | ItemId::EldritchStaff
            | ItemId::InfernalSkull
            | ItemId::SoulScepter
            | ItemId::ShamanCharm
            | ItemId::YuggothCloak
            | ItemId::FirstAid
            | ItemId::Antibiotics => (UNCRAFTABLE, UNCRAFTABLE),
            ItemId::WoodenShield => (1, 0),
            ItemId::TribalGarb => (1, 1),
            ItemId::CFiberVest => (0, 4),
            ItemId::BodyArmor => (0, 8),
            ItemId::PitTrap => (2, 0),
            ItemId::Flashbang => (0, 2),
            ItemId::Barricade => (3, 1),
            ItemId::WatchFire => (2, 0),
            ItemId::CampingKit => (3, 1),
        }
    }

    /// Category and payload
    pub fn kind(self) -> ItemKind {
        let weapon = |dmg_min, dmg_max, ammo_cost, stam_cost, difficulty| {
            ItemKind::Weapon(WeaponProfile {
                dmg_min,
                dmg_max,
                ammo_cost,
                stam_cost,
                difficulty,
            })
        };

        match self {
            ItemId::Knife => weapon(2, 5, 0, 0, 0.35),
            ItemId::Spear => weapon(3, 6, 0, 0, 0.40),
            ItemId::Axe => weapon(2, 10, 0, 0, 0.50),
            ItemId::Machete => weapon(4, 7, 0, 0, 0.45),
            ItemId::Pistol => weapon(5, 8, 1, 0, 0.45),
            ItemId::Rifle => weapon(6, 12, 2, 0, 0.55),
            ItemId::FlameThrower => weapon(8, 14, 4, 0, 0.60),
            ItemId::MachineGun => weapon(6, 18, 4, 0, 0.65),
            ItemId::Jabberwocky => weapon(8, 14, 0, 0, 0.60),
            ItemId::EldritchStaff => weapon(10, 16, 0, 1, 0.65),
            ItemId::InfernalSkull => weapon(14, 20, 0, 2, 0.70),
            ItemId::SoulScepter => weapon(20, 20, 0, 4, 0.75),

            ItemId::WoodenShield => ItemKind::Armor { armor: 1 },
            ItemId::TribalGarb => ItemKind::Armor { armor: 2 },
            ItemId::CFiberVest => ItemKind::Armor { armor: 3 },
            ItemId::BodyArmor => ItemKind::Armor { armor: 4 },
            ItemId::ShamanCharm => ItemKind::Armor { armor: 5 },
            ItemId::YuggothCloak => ItemKind::Armor { armor: 10 },

            ItemId::PitTrap => ItemKind::Defense(DefensePayload {
                pre_damage: 0.15,
                stun: 0,
                armor_bonus: 0,
                spawn_factor: 1.0,
            }),
            ItemId::Flashbang => ItemKind::Defense(DefensePayload {
                pre_damage: 0.0,
                stun: 1,
                armor_bonus: 0,
                spawn_factor: 1.0,
            }),
            ItemId::Barricade => ItemKind::Defense(DefensePayload {
                pre_damage: 0.0,
                stun: 0,
                armor_bonus: 2,
                spawn_factor: 1.0,
            }),
            ItemId::WatchFire => ItemKind::Defense(DefensePayload {
                pre_damage: 0.0,
                stun: 0,
                armor_bonus: 0,
                spawn_factor: 0.5,
            }),

            ItemId::CampingKit => ItemKind::Tool(ToolEffect::Camp),
            ItemId::FirstAid => ItemKind::Tool(ToolEffect::Heal),
            ItemId::Antibiotics => ItemKind::Tool(ToolEffect::Cure),
        }
    }
}

/// An item instance held by an inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Repair level; 100 means usable
    pub fixed: u8,
    pub equipped: bool,
    /// Available for tasking (not reserved by a pending action)
    pub free: bool,
}

impl Item {
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            fixed: 100,
            equipped: false,
            free: true,
        }
    }

    /// Broken items spawn from some loot rolls and must be repaired first
    pub fn broken(id: ItemId, fixed: u8) -> Self {
        Self {
            id,
            fixed,
            equipped: false,
            free: true,
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed == 100
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn weapon_profile(&self) -> Option<WeaponProfile> {
        match self.id.kind() {
            ItemKind::Weapon(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn armor_value(&self) -> i32 {
        match self.id.kind() {
            ItemKind::Armor { armor } => armor,
            _ => 0,
        }
    }

    pub fn defense(&self) -> Option<DefensePayload> {
        match self.id.kind() {
            ItemKind::Defense(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn is_defense(&self) -> bool {
        matches!(self.id.kind(), ItemKind::Defense(_))
    }
}
