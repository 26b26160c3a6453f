//! Survivor units
//!
//! Stats are rolled from age-banded tables: the young are spry but fragile,
//! stamina peaks in the thirties, and mental acuity keeps climbing with age.
//! Stat bonuses follow the usual half-above-ten rule.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::config::GameConfig;
use crate::items::item::Item;
use crate::roster::attribute::{AttrBonuses, AttrKind, Attribute, Job};
use crate::roster::names::NamePool;

// Stat ranges per decade of age; row index is age / 10. Row 0 is unused
// because survivors spawn at age 10 or older.
const STAM_TABLE: [[i32; 2]; 6] = [[5, 10], [10, 15], [15, 20], [12, 17], [8, 13], [5, 10]];
const PHYS_TABLE: [[i32; 2]; 6] = [[4, 10], [8, 16], [10, 20], [10, 16], [8, 14], [6, 12]];
const MENT_TABLE: [[i32; 2]; 6] = [[4, 10], [6, 12], [8, 14], [10, 16], [12, 18], [14, 20]];
const HEAL_TABLE: [f32; 6] = [0.90, 0.80, 0.70, 0.60, 0.50, 0.40];
const CURE_TABLE: [f32; 6] = [0.75, 0.75, 0.60, 0.40, 0.30, 0.20];

/// Number of attribute slots rolled per survivor
const ATTRIBUTE_SLOTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survivor {
    pub name: String,
    pub age: u32,
    pub max_stamina: i32,
    pub stamina: i32,
    pub physical: i32,
    pub mental: i32,
    /// Fraction of max stamina recovered by a fed night's rest
    pub heal_rate: f32,
    /// Chance per night to shake off sickness
    pub cure_prob: f32,
    pub attributes: Vec<Attribute>,
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
    /// Available for tasking
    pub free: bool,
    pub sick: bool,
}

impl Survivor {
    /// Roll a fresh survivor, drawing a unique name from the pool
    pub fn roll<R: Rng>(pool: &mut NamePool, attribute_prob: f64, rng: &mut R) -> Self {
        let age: u32 = rng.gen_range(10..=59);
        let band = (age / 10) as usize;

        let max_stamina = rng.gen_range(STAM_TABLE[band][0]..=STAM_TABLE[band][1]);
        let physical = rng.gen_range(PHYS_TABLE[band][0]..=PHYS_TABLE[band][1]);
        let mental = rng.gen_range(MENT_TABLE[band][0]..=MENT_TABLE[band][1]);

        let mut attributes: Vec<Attribute> = Vec::new();
        for slot in 0..ATTRIBUTE_SLOTS {
            if slot == 0 && age < 20 {
                attributes.push(Attribute::new(AttrKind::Youthful, age));
            } else if rng.gen::<f64>() < attribute_prob {
                let mut attr = Attribute::roll(age, rng);
                while attributes.iter().any(|a| a.conflicts_with(&attr)) {
                    attr = Attribute::roll(age, rng);
                }
                attributes.push(attr);
            }
        }

        let survivor = Self {
            name: pool.draw(rng).to_string(),
            age,
            max_stamina,
            stamina: max_stamina,
            physical,
            mental,
            heal_rate: HEAL_TABLE[band],
            cure_prob: CURE_TABLE[band],
            attributes,
            weapon: None,
            armor: None,
            free: true,
            sick: false,
        };
        debug!(
            name = %survivor.name,
            age,
            stamina = max_stamina,
            "survivor rolled"
        );
        survivor
    }

    /// First name, used in combat messages
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    pub fn physical_bonus(&self) -> i32 {
        (self.physical - 10).div_euclid(2)
    }

    pub fn mental_bonus(&self) -> i32 {
        (self.mental - 10).div_euclid(2)
    }

    /// Turn-order key for night combat
    pub fn speed(&self) -> i32 {
        self.physical_bonus() + self.mental_bonus()
    }

    /// At most one job per survivor, enforced at roll time
    pub fn job(&self) -> Option<Job> {
        self.attributes.iter().find_map(|a| a.job())
    }

    /// Summed fractional bonuses from all attributes
    pub fn bonuses(&self) -> AttrBonuses {
        let mut total = AttrBonuses::default();
        for attr in &self.attributes {
            total.add(&attr.bonuses);
        }
        total
    }

    /// Armor from equipment; flat bonuses from deployed defenses are added
    /// by the encounter, not here
    pub fn armor_value(&self) -> i32 {
        self.armor.as_ref().map_or(0, |a| a.armor_value())
    }

    /// Down at zero stamina; downed survivors skip their combat turns
    pub fn is_able(&self) -> bool {
        self.stamina > 0
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.stamina = (self.stamina - amount.max(0)).max(0);
    }

    /// Spend stamina on an action; never drops below zero
    pub fn spend_stamina(&mut self, cost: i32) {
        self.stamina = (self.stamina - cost.max(0)).max(0);
    }

    /// Overnight recovery. Fed survivors heal a fraction of max stamina,
    /// slowed while sick; unfed survivors starve instead.
    pub fn rest(&mut self, fed: bool, config: &GameConfig) {
        if fed {
            let mut rate = self.heal_rate * (1.0 + self.bonuses().heal);
            if self.sick {
                rate *= config.sick_heal_mult;
            }
            let recovered = (self.max_stamina as f32 * rate).ceil() as i32;
            self.stamina = (self.stamina + recovered).min(self.max_stamina);
        } else {
            let lost = (self.max_stamina as f32 * config.starve_rate).floor() as i32;
            self.take_damage(lost.max(1));
        }
    }

    /// Nightly roll to shake off sickness
    pub fn try_cure<R: Rng>(&mut self, rng: &mut R) {
        if self.sick {
            let chance = self.cure_prob * (1.0 + self.bonuses().cure);
            if rng.gen::<f32>() < chance {
                self.sick = false;
            }
        }
    }
}
