//! Terrain kinds and their data tables
//!
//! Each terrain carries a movement cost, a camp flag, and three weighted
//! tables: which enemy may attack a camp there at night, what resources a
//! scavenge can turn up, and which items. Table rows list only the positive
//! outcomes; the remaining probability mass means "nothing".

use serde::{Deserialize, Serialize};

use crate::defend::enemy::EnemyKind;
use crate::items::item::ItemId;

/// One resource row: chance to find any, then a uniform quantity range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceRate {
    pub prob: f64,
    pub min: u32,
    pub max: u32,
}

const fn rate(prob: f64, min: u32, max: u32) -> ResourceRate {
    ResourceRate { prob, min, max }
}

const NOTHING: ResourceRate = rate(0.0, 0, 0);

/// Scavenge rates in fixed order: food, wood, metal, ammo
pub type ResourceRates = [ResourceRate; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Field,
    Jungle,
    DeepJungle,
    Mountain,
    Cave,
    Swamp,
    Wreckage,
    Facility,
    RitualSite,
    Obelisk,
}

impl Terrain {
    pub fn name(self) -> &'static str {
        match self {
            Terrain::Field => "Field",
            Terrain::Jungle => "Jungle",
            Terrain::DeepJungle => "Deep Jungle",
            Terrain::Mountain => "Mountain",
            Terrain::Cave => "Cave",
            Terrain::Swamp => "Swamp",
            Terrain::Wreckage => "Wreckage",
            Terrain::Facility => "Facility",
            Terrain::RitualSite => "Ritual Site",
            Terrain::Obelisk => "Obelisk",
        }
    }

    /// Stamina drained from every party member when stepping onto this tile
    pub fn move_cost(self) -> u32 {
        match self {
            Terrain::DeepJungle | Terrain::Mountain => 2,
            Terrain::Swamp => 3,
            _ => 1,
        }
    }

    /// Whether an expedition can pitch camp here without a camping kit
    pub fn campable(self) -> bool {
        matches!(
            self,
            Terrain::Field | Terrain::Jungle | Terrain::DeepJungle | Terrain::Mountain
        )
    }

    /// Night-attack spawn table; rows that do not sum to 1.0 leave the
    /// remainder as a peaceful night
    pub fn enemy_rates(self) -> &'static [(f64, EnemyKind)] {
        use EnemyKind::*;
        match self {
            Terrain::Field => &[(0.40, WolfPack), (0.20, BeeSwarm), (0.10, Panther)],
            Terrain::Jungle => &[
                (0.20, WolfPack),
                (0.20, BeeSwarm),
                (0.10, Panther),
                (0.10, Gorilla),
                (0.20, Native),
            ],
            Terrain::DeepJungle => &[
                (0.22, Panther),
                (0.22, Gorilla),
                (0.20, Raptor),
                (0.20, Native),
                (0.10, Cultist),
                (0.01, Apparition),
            ],
            Terrain::Mountain => &[
                (0.30, WolfPack),
                (0.10, BeeSwarm),
                (0.20, Native),
                (0.30, Giant),
            ],
            Terrain::Cave => &[(0.20, Anaconda), (0.20, Native), (0.20, Giant)],
            Terrain::Swamp => &[
                (0.40, Anaconda),
                (0.20, Mudman),
                (0.20, Native),
                (0.10, DeepOne),
            ],
            Terrain::Wreckage => &[(0.40, WolfPack), (0.20, Native), (0.20, Apparition)],
            Terrain::Facility => &[
                (0.30, Native),
                (0.25, Cultist),
                (0.20, Apparition),
                (0.05, DimShambler),
            ],
            Terrain::RitualSite => &[
                (0.30, Cultist),
                (0.35, Apparition),
                (0.30, DimShambler),
                (0.05, TheUnspeakable),
            ],
            Terrain::Obelisk => &[(0.05, DimShambler), (0.01, TheUnspeakable)],
        }
    }

    /// Scavenge yields as food, wood, metal, ammo rows
    pub fn resource_rates(self) -> ResourceRates {
        match self {
            Terrain::Field => [rate(0.80, 1, 4), rate(0.20, 1, 2), NOTHING, NOTHING],
            Terrain::Jungle => [
                rate(0.90, 2, 6),
                rate(0.50, 2, 4),
                NOTHING,
                rate(0.05, 1, 2),
            ],
            Terrain::DeepJungle => [
                rate(1.00, 4, 8),
                rate(0.80, 4, 6),
                NOTHING,
                rate(0.05, 1, 2),
            ],
            Terrain::Mountain => [
                rate(0.50, 1, 4),
                rate(0.30, 1, 2),
                rate(0.10, 1, 2),
                NOTHING,
            ],
            Terrain::Cave => [
                rate(0.50, 2, 4),
                NOTHING,
                rate(0.10, 2, 3),
                rate(0.10, 2, 4),
            ],
            Terrain::Swamp => [
                rate(0.20, 1, 2),
                rate(0.10, 1, 2),
                NOTHING,
                rate(0.10, 1, 2),
            ],
            Terrain::Wreckage => [
                rate(0.80, 2, 6),
                NOTHING,
                rate(0.50, 1, 2),
                rate(0.20, 2, 6),
            ],
            Terrain::Facility => [
                rate(0.04, 1, 3),
                NOTHING,
                rate(0.30, 2, 4),
                rate(0.25, 2, 4),
            ],
            Terrain::RitualSite | Terrain::Obelisk => [NOTHING; 4],
        }
    }

    /// Item-find table; remainder probability finds nothing
    pub fn item_rates(self) -> &'static [(f64, ItemId)] {
        use ItemId::*;
        match self {
            Terrain::Field | Terrain::Obelisk => &[],
            Terrain::Jungle => &[(0.05, Pistol), (0.10, Knife), (0.10, Spear)],
            Terrain::DeepJungle => &[
                (0.04, Pistol),
                (0.01, Rifle),
                (0.10, Knife),
                (0.10, Spear),
                (0.05, Axe),
                (0.05, Machete),
            ],
            Terrain::Mountain => &[
                (0.10, CampingKit),
                (0.05, FirstAid),
                (0.05, Antibiotics),
                (0.05, Pistol),
            ],
            Terrain::Cave => &[
                (0.20, CampingKit),
                (0.10, FirstAid),
                (0.10, Antibiotics),
                (0.10, Pistol),
                (0.05, Rifle),
                (0.01, CFiberVest),
            ],
            Terrain::Swamp => &[
                (0.10, Pistol),
                (0.07, Rifle),
                (0.01, Jabberwocky),
                (0.01, EldritchStaff),
                (0.01, ShamanCharm),
            ],
            Terrain::Wreckage => &[
                (0.30, CampingKit),
                (0.15, FirstAid),
                (0.10, Antibiotics),
                (0.24, Pistol),
                (0.09, Rifle),
                (0.01, FlameThrower),
                (0.01, CFiberVest),
            ],
            Terrain::Facility => &[
                (0.25, CampingKit),
                (0.40, FirstAid),
                (0.20, Antibiotics),
                (0.15, Pistol),
                (0.06, Rifle),
                (0.01, FlameThrower),
                (0.01, MachineGun),
                (0.01, CFiberVest),
                (0.01, BodyArmor),
            ],
            Terrain::RitualSite => &[
                (0.02, EldritchStaff),
                (0.01, InfernalSkull),
                (0.005, SoulScepter),
                (0.01, ShamanCharm),
                (0.005, YuggothCloak),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Terrain; 10] = [
        Terrain::Field,
        Terrain::Jungle,
        Terrain::DeepJungle,
        Terrain::Mountain,
        Terrain::Cave,
        Terrain::Swamp,
        Terrain::Wreckage,
        Terrain::Facility,
        Terrain::RitualSite,
        Terrain::Obelisk,
    ];

    #[test]
    fn test_move_costs() {
        assert_eq!(Terrain::Field.move_cost(), 1);
        assert_eq!(Terrain::Mountain.move_cost(), 2);
        assert_eq!(Terrain::Swamp.move_cost(), 3);
    }

    #[test]
    fn test_enemy_tables_never_exceed_unit_mass() {
        for terrain in ALL {
            let total: f64 = terrain.enemy_rates().iter().map(|(p, _)| p).sum();
            assert!(
                total <= 1.0 + 1e-9,
                "{} enemy mass {}",
                terrain.name(),
                total
            );
        }
    }

    #[test]
    fn test_ritual_site_always_hostile() {
        let total: f64 = Terrain::RitualSite.enemy_rates().iter().map(|(p, _)| p).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_resource_rows_well_formed() {
        for terrain in ALL {
            for row in terrain.resource_rates() {
                assert!((0.0..=1.0).contains(&row.prob));
                assert!(row.min <= row.max);
            }
        }
    }

    #[test]
    fn test_only_open_terrain_is_campable() {
        assert!(Terrain::Field.campable());
        assert!(Terrain::Mountain.campable());
        assert!(!Terrain::Cave.campable());
        assert!(!Terrain::Obelisk.campable());
    }
}
