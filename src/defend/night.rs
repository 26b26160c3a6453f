//! Night orchestration
//!
//! Staging a night watch pulls defenders, defense items, and the ammo pool
//! out of the expedition, rolls the campsite's attack table, and either
//! hands back an encounter to drive or reports a peaceful night. Committing
//! the night returns the living, drops the fallen and the consumed defense
//! items, feeds and rests everyone who is still standing, and runs cure
//! rolls for the sick.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::config::GameConfig;
use crate::core::error::{ObeliskError, Result};
use crate::defend::defense::DefenseEffects;
use crate::defend::encounter::{Encounter, Phase};
use crate::defend::enemy::{Enemy, EnemyKind};
use crate::expedition::party::Expedition;
use crate::map::grid::MapGrid;
use crate::map::loot;
use crate::roster::survivor::Survivor;

/// How the night ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NightOutcome {
    /// No enemy spawned
    Peaceful,
    Victory,
    Defeat,
}

/// Summary handed back to the caller after commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NightReport {
    pub outcome: NightOutcome,
    pub enemy: Option<EnemyKind>,
    /// Names of survivors lost in the fight
    pub fallen: Vec<String>,
    pub defenses_consumed: usize,
    pub ammo_remaining: u32,
}

/// A staged night: either a pending encounter or a quiet camp
pub struct Night {
    enemy_kind: Option<EnemyKind>,
    encounter: Option<Encounter>,
    /// Defenders held aside on a peaceful night
    idle_watch: Vec<Survivor>,
    idle_ammo: u32,
    defenses_consumed: usize,
}

impl Night {
    /// Stage the night watch
    ///
    /// `defender_picks` and `defense_picks` index into the expedition's
    /// survivors and inventory items. Defenders and the whole ammo pool
    /// move into the encounter; staged defense items are consumed whether
    /// or not anything attacks.
    pub fn begin<R: Rng>(
        expedition: &mut Expedition,
        grid: &MapGrid,
        defender_picks: &[usize],
        defense_picks: &[usize],
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<Night> {
        if defender_picks.is_empty() {
            return Err(ObeliskError::EmptyParty);
        }
        if defender_picks.len() > config.defender_limit {
            return Err(ObeliskError::InvalidEncounter(format!(
                "at most {} defenders per night",
                config.defender_limit
            )));
        }
        if defense_picks.len() > config.defense_limit {
            return Err(ObeliskError::InvalidEncounter(format!(
                "at most {} defense items per night",
                config.defense_limit
            )));
        }
        if defender_picks.iter().any(|&i| i >= expedition.survivors.len()) {
            return Err(ObeliskError::InvalidEncounter(
                "defender index out of range".into(),
            ));
        }
        if defense_picks.iter().any(|&i| i >= expedition.inventory.items.len()) {
            return Err(ObeliskError::InvalidEncounter(
                "defense item index out of range".into(),
            ));
        }

        // Pull staged defense items out of the inventory; they are spent
        // from this point on
        let mut item_picks: Vec<usize> = defense_picks.to_vec();
        item_picks.sort_unstable();
        item_picks.dedup();
        let mut staged = Vec::new();
        for &i in item_picks.iter().rev() {
            staged.push(expedition.inventory.items.remove(i));
        }
        let effects = DefenseEffects::from_items(&staged)?;

        // Pull the defenders out of the roster
        let mut picks: Vec<usize> = defender_picks.to_vec();
        picks.sort_unstable();
        picks.dedup();
        let mut defenders = Vec::new();
        for &i in picks.iter().rev() {
            defenders.push(expedition.survivors.remove(i));
        }
        defenders.reverse();

        let ammo = expedition.inventory.ammo;
        expedition.inventory.ammo = 0;

        let terrain = grid.tile(expedition.position)?.terrain;
        let enemy_kind = loot::roll_enemy(terrain, effects.spawn_factor, rng);

        match enemy_kind {
            None => {
                info!(terrain = terrain.name(), "a peaceful night");
                Ok(Night {
                    enemy_kind: None,
                    encounter: None,
                    idle_watch: defenders,
                    idle_ammo: ammo,
                    defenses_consumed: staged.len(),
                })
            }
            Some(kind) => {
                let encounter = Encounter::new(
                    defenders,
                    Enemy::spawn(kind),
                    effects,
                    ammo,
                    config.clone(),
                )?;
                Ok(Night {
                    enemy_kind: Some(kind),
                    encounter: Some(encounter),
                    idle_watch: Vec::new(),
                    idle_ammo: 0,
                    defenses_consumed: staged.len(),
                })
            }
        }
    }

    pub fn is_peaceful(&self) -> bool {
        self.encounter.is_none()
    }

    pub fn encounter_mut(&mut self) -> Option<&mut Encounter> {
        self.encounter.as_mut()
    }

    /// Fold the night's results back into the expedition
    ///
    /// The encounter must have reached a terminal phase. Fallen defenders
    /// are dropped from the roster, leftover ammo returns to the pool, and
    /// everyone still standing eats (if the food holds out), rests, and
    /// rolls to shake off sickness.
    pub fn commit<R: Rng>(
        self,
        expedition: &mut Expedition,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<NightReport> {
        let (watch, ammo, outcome) = match self.encounter {
            None => (self.idle_watch, self.idle_ammo, NightOutcome::Peaceful),
            Some(encounter) => {
                let (watch, ammo, phase) = encounter.into_parts();
                let outcome = match phase {
                    Phase::Win => NightOutcome::Victory,
                    Phase::Lose => NightOutcome::Defeat,
                    _ => {
                        return Err(ObeliskError::InvalidEncounter(
                            "encounter committed before reaching a terminal phase".into(),
                        ))
                    }
                };
                (watch, ammo, outcome)
            }
        };

        let mut fallen = Vec::new();
        for survivor in watch {
            if survivor.is_able() {
                expedition.survivors.push(survivor);
            } else {
                fallen.push(survivor.name);
            }
        }
        expedition.inventory.ammo += ammo;

        // Overnight upkeep for everyone still on the roster
        for survivor in &mut expedition.survivors {
            let fed = expedition.inventory.food > 0;
            if fed {
                expedition.inventory.food -= 1;
            }
            survivor.rest(fed, config);
            survivor.try_cure(rng);
        }

        let report = NightReport {
            outcome,
            enemy: self.enemy_kind,
            fallen,
            defenses_consumed: self.defenses_consumed,
            ammo_remaining: expedition.inventory.ammo,
        };
        info!(?report.outcome, fallen = report.fallen.len(), "night committed");
        Ok(report)
    }
}
