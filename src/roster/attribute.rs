//! Survivor attributes and jobs
//!
//! Attributes grant fractional bonuses to stats or actions. At most one job
//! per survivor; relations between attributes are an explicit enum rather
//! than an overloaded equality test, so "same attribute twice", "two jobs",
//! and "unrelated" are distinct answers.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Professions; each unlocks one special case in combat or camp actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Job {
    /// Better healing actions at camp
    Doctor,
    /// Better repair and crafting throughput
    Engineer,
    /// Boosts the whole expedition's exploring and scavenging
    Leader,
    /// Pays half ammo cost (minimum 1) on ranged weapons
    Soldier,
    /// Pays half stamina cost (minimum 1) on cursed weapons
    Mystic,
}

/// Every attribute kind in the roll table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttrKind {
    Athletic,
    Brilliant,
    Vigorous,
    Agile,
    Resourceful,
    Efficient,
    Experienced,
    /// Granted automatically to survivors under 20, never rolled
    Youthful,
    Doctor,
    Engineer,
    Leader,
    Soldier,
    Mystic,
}

/// How two attributes relate when rolling a survivor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrRelation {
    /// Identical kind; a survivor never holds a duplicate
    Same,
    /// Mutually exclusive, e.g. two professions
    Opposite,
    /// May coexist
    Unrelated,
}

/// Summed fractional bonuses from a survivor's attributes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttrBonuses {
    pub physical: f32,
    pub mental: f32,
    pub heal: f32,
    pub cure: f32,
    pub explore: f32,
    pub scavenge: f32,
    /// Extra day actions
    pub day: i32,
}

impl AttrBonuses {
    pub fn add(&mut self, other: &AttrBonuses) {
        self.physical += other.physical;
        self.mental += other.mental;
        self.heal += other.heal;
        self.cure += other.cure;
        self.explore += other.explore;
        self.scavenge += other.scavenge;
        self.day += other.day;
    }
}

/// One attribute instance held by a survivor
///
/// Bonuses are materialized at construction because Experienced scales with
/// the survivor's age at roll time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub kind: AttrKind,
    pub bonuses: AttrBonuses,
}

/// Roll table: (probability, kind). Probabilities sum to 1.0, so a roll
/// always produces an attribute; the chance of rolling at all is gated
/// upstream by the per-slot attribute probability.
const ROLL_TABLE: [(f64, AttrKind); 12] = [
    (0.14, AttrKind::Athletic),
    (0.14, AttrKind::Brilliant),
    (0.14, AttrKind::Vigorous),
    (0.14, AttrKind::Agile),
    (0.14, AttrKind::Resourceful),
    (0.14, AttrKind::Efficient),
    (0.06, AttrKind::Experienced),
    (0.02, AttrKind::Doctor),
    (0.02, AttrKind::Engineer),
    (0.02, AttrKind::Leader),
    (0.02, AttrKind::Soldier),
    (0.02, AttrKind::Mystic),
];

impl Attribute {
    /// Materialize an attribute for a survivor of the given age
    pub fn new(kind: AttrKind, age: u32) -> Self {
        let mut b = AttrBonuses::default();
        match kind {
            AttrKind::Athletic => b.physical = 0.20,
            AttrKind::Brilliant => b.mental = 0.20,
            AttrKind::Vigorous => b.heal = 0.20,
            AttrKind::Agile => b.explore = 0.25,
            AttrKind::Resourceful => b.scavenge = 0.50,
            AttrKind::Efficient => b.day = 1,
            AttrKind::Experienced => {
                let scale = age.saturating_sub(30) as f32 * 0.02;
                b.physical = scale;
                b.mental = scale;
                b.explore = 0.25;
                b.scavenge = 0.20;
                b.day = 1;
            }
            AttrKind::Youthful => {
                b.heal = 0.20;
                b.cure = 0.20;
                b.explore = 0.50;
            }
            AttrKind::Doctor => b.mental = 0.10,
            AttrKind::Engineer => {
                b.mental = 0.10;
                b.day = 1;
            }
            AttrKind::Leader => {
                b.explore = 0.50;
                b.scavenge = 0.20;
            }
            AttrKind::Soldier => b.physical = 0.20,
            AttrKind::Mystic => b.mental = 0.20,
        }
        Self { kind, bonuses: b }
    }

    /// Roll a random attribute from the table
    pub fn roll<R: Rng>(age: u32, rng: &mut R) -> Self {
        let roll: f64 = rng.gen();
        let mut cumulative = 0.0;
        for &(prob, kind) in &ROLL_TABLE {
            cumulative += prob;
            if roll < cumulative {
                return Self::new(kind, age);
            }
        }
        // Floating-point residue only; the table covers the full unit range
        Self::new(AttrKind::Mystic, age)
    }

    pub fn job(&self) -> Option<Job> {
        match self.kind {
            AttrKind::Doctor => Some(Job::Doctor),
            AttrKind::Engineer => Some(Job::Engineer),
            AttrKind::Leader => Some(Job::Leader),
            AttrKind::Soldier => Some(Job::Soldier),
            AttrKind::Mystic => Some(Job::Mystic),
            _ => None,
        }
    }

    /// Relation used to reject conflicting rolls
    pub fn relation(&self, other: &Attribute) -> AttrRelation {
        if self.kind == other.kind {
            AttrRelation::Same
        } else if self.job().is_some() && other.job().is_some() {
            AttrRelation::Opposite
        } else {
            AttrRelation::Unrelated
        }
    }

    pub fn conflicts_with(&self, other: &Attribute) -> bool {
        self.relation(other) != AttrRelation::Unrelated
    }
}
