//! Night-attack enemies
//!
//! Enemies are stat blocks, not agents: each night at most one enemy spawns
//! and fights until it or the defenders drop. Which kind appears depends on
//! the campsite's terrain.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Every enemy kind, roughly ordered by threat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    BeeSwarm,
    WolfPack,
    Panther,
    Gorilla,
    Raptor,
    Native,
    Cultist,
    Apparition,
    Giant,
    Anaconda,
    Mudman,
    DeepOne,
    DimShambler,
    TheUnspeakable,
}

/// Immutable stat block for an enemy kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub max_stamina: i32,
    pub armor: i32,
    pub dmg_min: i32,
    pub dmg_max: i32,
    /// Drives both turn-order placement and hit-bar speed
    pub speed: i32,
}

impl EnemyKind {
    pub fn name(self) -> &'static str {
        match self {
            EnemyKind::BeeSwarm => "Bee Swarm",
            EnemyKind::WolfPack => "Wolf Pack",
            EnemyKind::Panther => "Panther",
            EnemyKind::Gorilla => "Gorilla",
            EnemyKind::Raptor => "Raptor",
            EnemyKind::Native => "Native",
            EnemyKind::Cultist => "Cultist",
            EnemyKind::Apparition => "Apparition",
            EnemyKind::Giant => "Giant",
            EnemyKind::Anaconda => "Anaconda",
            EnemyKind::Mudman => "Mudman",
            EnemyKind::DeepOne => "Deep One",
            EnemyKind::DimShambler => "Dim. Shambler",
            EnemyKind::TheUnspeakable => "The Unspeakable",
        }
    }

    pub fn stats(self) -> EnemyStats {
        let (max_stamina, armor, dmg_min, dmg_max, speed) = match self {
            EnemyKind::BeeSwarm => (4, 0, 1, 3, 3),
            EnemyKind::WolfPack => (8, 0, 2, 4, 2),
            EnemyKind::Panther => (12, 0, 3, 6, 4),
            EnemyKind::Gorilla => (16, 1, 4, 8, 1),
            EnemyKind::Raptor => (14, 1, 2, 10, 5),
            EnemyKind::Native => (10, 0, 1, 5, 2),
            EnemyKind::Cultist => (10, 1, 2, 8, 2),
            EnemyKind::Apparition => (18, 2, 4, 12, 4),
            EnemyKind::Giant => (20, 1, 4, 10, 0),
            EnemyKind::Anaconda => (12, 0, 6, 8, 3),
            EnemyKind::Mudman => (16, 3, 3, 9, 0),
            EnemyKind::DeepOne => (20, 2, 4, 16, 2),
            EnemyKind::DimShambler => (20, 4, 8, 14, 5),
            EnemyKind::TheUnspeakable => (40, 10, 12, 20, 3),
        };
        EnemyStats {
            max_stamina,
            armor,
            dmg_min,
            dmg_max,
            speed,
        }
    }
}

/// A live enemy in a night encounter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub stamina: i32,
}

impl Enemy {
    pub fn spawn(kind: EnemyKind) -> Self {
        Self {
            kind,
            stamina: kind.stats().max_stamina,
        }
    }

    pub fn stats(&self) -> EnemyStats {
        self.kind.stats()
    }

    pub fn is_alive(&self) -> bool {
        self.stamina > 0
    }

    /// Apply damage, clamping stamina at zero
    pub fn take_damage(&mut self, amount: i32) {
        self.stamina = (self.stamina - amount.max(0)).max(0);
    }

    /// Roll this enemy's raw damage for one attack
    pub fn roll_damage<R: Rng>(&self, rng: &mut R) -> i32 {
        let stats = self.stats();
        rng.gen_range(stats.dmg_min..=stats.dmg_max)
    }
}
