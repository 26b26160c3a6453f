//! Night-defense encounter state machine
//!
//! Phases run `Start -> [Defense] -> {Enemy <-> Player} -> {Win | Lose}`.
//! The Defense phase only occurs when deployed traps carry pre-damage, and
//! the terminal phases are absorbing. All transitions are driven by an
//! explicit advance call from the caller's input loop; stamina-bar and
//! timing-bar animations are modeled as a tick counter that latches further
//! advances until it runs out.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::config::GameConfig;
use crate::core::error::{ObeliskError, Result};
use crate::defend::attack::{self, HitBar};
use crate::defend::defense::DefenseEffects;
use crate::defend::enemy::Enemy;
use crate::defend::turn_order::{self, TurnSlot};
use crate::roster::survivor::Survivor;

/// Combat phases; the single canonical definition for the whole crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Start,
    Defense,
    Enemy,
    Player,
    Win,
    Lose,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Win | Phase::Lose)
    }
}

/// What the caller's input maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Acknowledge and move on (start, defense, enemy, terminal phases)
    Confirm,
    /// Commit the timing-bar strike (player phase)
    Strike,
}

/// In-flight animation; further advances are ignored until it completes
#[derive(Debug, Clone, Copy)]
struct Animation {
    remaining: u32,
    /// Phase to enter on completion; None for the terminal animation
    next: Option<Phase>,
}

pub struct Encounter {
    config: GameConfig,
    survivors: Vec<Survivor>,
    enemy: Enemy,
    /// Shared ammo pool for the night watch
    ammo: u32,
    effects: DefenseEffects,
    turn_order: Vec<TurnSlot>,
    turn_idx: usize,
    phase: Phase,
    hit_bar: HitBar,
    animation: Option<Animation>,
    messages: Vec<String>,
    last_damage: i32,
}

impl Encounter {
    pub fn new(
        survivors: Vec<Survivor>,
        enemy: Enemy,
        effects: DefenseEffects,
        ammo: u32,
        config: GameConfig,
    ) -> Result<Self> {
        if survivors.is_empty() {
            return Err(ObeliskError::InvalidEncounter(
                "no defenders assigned".into(),
            ));
        }
        if !survivors.iter().any(|s| s.is_able()) {
            return Err(ObeliskError::InvalidEncounter(
                "all defenders are already down".into(),
            ));
        }
        if !enemy.is_alive() {
            return Err(ObeliskError::InvalidEncounter(format!(
                "{} is already dead",
                enemy.kind.name()
            )));
        }

        let enemy_speed = enemy.stats().speed;
        let turn_order = turn_order::build(&survivors, enemy_speed);
        let hit_bar = HitBar::new(enemy_speed, &config);

        let mut encounter = Self {
            config,
            survivors,
            enemy,
            ammo,
            effects,
            turn_order,
            turn_idx: 0,
            phase: Phase::Start,
            hit_bar,
            animation: None,
            messages: Vec::new(),
            last_damage: 0,
        };
        // The first slot may already be a downed survivor
        if !encounter.slot_is_living(encounter.turn_order[0]) {
            encounter.step_turn_index();
        }
        info!(
            enemy = encounter.enemy.kind.name(),
            defenders = encounter.survivors.len(),
            "night encounter begins"
        );
        Ok(encounter)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn survivors(&self) -> &[Survivor] {
        &self.survivors
    }

    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    pub fn hit_bar_ratio(&self) -> f32 {
        self.hit_bar.ratio()
    }

    /// Damage applied by the most recent strike, for rendering
    pub fn last_damage(&self) -> i32 {
        self.last_damage
    }

    pub fn current_slot(&self) -> TurnSlot {
        self.turn_order[self.turn_idx]
    }

    pub fn animation_active(&self) -> bool {
        self.animation.is_some()
    }

    /// Drain accumulated display messages
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    /// Tear down a finished encounter, yielding the defenders and the
    /// remaining ammo pool
    pub fn into_parts(self) -> (Vec<Survivor>, u32, Phase) {
        (self.survivors, self.ammo, self.phase)
    }

    /// Advance one frame: run down any active animation, otherwise swing
    /// the timing bar during the player phase
    pub fn tick(&mut self) {
        if let Some(anim) = self.animation.as_mut() {
            anim.remaining = anim.remaining.saturating_sub(1);
            if anim.remaining == 0 {
                let next = self.animation.take().and_then(|a| a.next);
                if let Some(phase) = next {
                    self.set_phase(phase);
                }
            }
            return;
        }
        if self.phase == Phase::Player {
            self.hit_bar.tick();
        }
    }

    /// Drive the state machine one step. Returns true once the encounter
    /// is finished and may be committed. Ignored while an animation is
    /// in flight.
    pub fn advance<R: Rng>(&mut self, trigger: Trigger, rng: &mut R) -> bool {
        if self.animation.is_some() {
            return false;
        }

        match self.phase {
            Phase::Start => {
                let next = if self.effects.pre_damage > 0.0 {
                    Phase::Defense
                } else {
                    self.current_slot_phase()
                };
                self.set_phase(next);
                false
            }
            Phase::Defense => {
                self.apply_defense();
                false
            }
            Phase::Enemy => {
                self.enemy_turn(rng);
                false
            }
            Phase::Player => {
                if trigger == Trigger::Strike {
                    self.player_strike(rng);
                }
                false
            }
            Phase::Win | Phase::Lose => true,
        }
    }

    fn slot_is_living(&self, slot: TurnSlot) -> bool {
        match slot {
            TurnSlot::Survivor(i) => self.survivors[i].is_able(),
            TurnSlot::Enemy => self.enemy.is_alive(),
        }
    }

    /// Wrap the turn index to the next living combatant
    fn step_turn_index(&mut self) {
        for _ in 0..self.turn_order.len() {
            self.turn_idx = (self.turn_idx + 1) % self.turn_order.len();
            if self.slot_is_living(self.current_slot()) {
                return;
            }
        }
    }

    fn current_slot_phase(&self) -> Phase {
        match self.current_slot() {
            TurnSlot::Enemy => Phase::Enemy,
            TurnSlot::Survivor(_) => Phase::Player,
        }
    }

    /// End the current combatant's turn and pick the phase for the next
    fn next_turn_phase(&mut self) -> Phase {
        self.step_turn_index();
        self.current_slot_phase()
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!(?phase, "combat phase");
        self.phase = phase;
        match phase {
            Phase::Player => self.hit_bar.reset(),
            Phase::Win | Phase::Lose => {
                self.animation = Some(Animation {
                    remaining: self.config.terminal_anim_ticks,
                    next: None,
                });
            }
            _ => {}
        }
    }

    /// Apply damage with a stamina-bar animation, or jump straight to the
    /// next phase when there is nothing to animate
    fn finish_strike(&mut self, damage: i32, next: Phase) {
        self.last_damage = damage;
        if damage > 0 {
            self.animation = Some(Animation {
                remaining: damage as u32 * self.config.damage_anim_ticks,
                next: Some(next),
            });
        } else {
            self.set_phase(next);
        }
    }

    fn apply_defense(&mut self) {
        let damage =
            (self.effects.pre_damage * self.enemy.stats().max_stamina as f32).floor() as i32;
        self.enemy.take_damage(damage);
        self.messages.push(format!(
            "The traps tear into the {} for {} damage!",
            self.enemy.kind.name(),
            damage
        ));

        let next = if !self.enemy.is_alive() {
            Phase::Win
        } else {
            self.current_slot_phase()
        };
        self.finish_strike(damage, next);
    }

    fn enemy_turn<R: Rng>(&mut self, rng: &mut R) {
        if self.effects.stun > 0 {
            self.effects.stun -= 1;
            self.messages
                .push(format!("The {} is stunned!", self.enemy.kind.name()));
            let next = self.next_turn_phase();
            self.set_phase(next);
            return;
        }

        let living: Vec<usize> = self
            .survivors
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_able())
            .map(|(i, _)| i)
            .collect();
        if living.is_empty() {
            self.set_phase(Phase::Lose);
            return;
        }

        let target = living[rng.gen_range(0..living.len())];
        let armor = self.survivors[target].armor_value();
        let damage = attack::enemy_strike(&self.enemy, armor, self.effects.armor_bonus, rng);
        self.survivors[target].take_damage(damage);

        let name = self.survivors[target].first_name().to_string();
        if damage == 0 {
            self.messages
                .push(format!("{} shrugs off the attack!", name));
        } else {
            self.messages.push(format!(
                "The {} hits {} for {} damage!",
                self.enemy.kind.name(),
                name,
                damage
            ));
        }

        let next = if self.survivors.iter().all(|s| !s.is_able()) {
            Phase::Lose
        } else {
            self.next_turn_phase()
        };
        self.finish_strike(damage, next);
    }

    fn player_strike<R: Rng>(&mut self, rng: &mut R) {
        let TurnSlot::Survivor(idx) = self.current_slot() else {
            return;
        };

        let outcome = attack::resolve_strike(
            &self.survivors[idx],
            self.ammo,
            self.hit_bar.ratio(),
            self.enemy.stats().armor,
            &self.config,
            rng,
        );

        self.ammo -= outcome.ammo_spent;
        self.survivors[idx].spend_stamina(outcome.stamina_spent);
        self.enemy.take_damage(outcome.damage);

        let name = self.survivors[idx].first_name().to_string();
        if outcome.no_ammo {
            self.messages.push(format!("No ammo! {} fights bare-handed!", name));
        }
        if outcome.no_stamina {
            self.messages
                .push(format!("Too exhausted! {} fights bare-handed!", name));
        }
        if !outcome.hit {
            self.messages.push(format!("{} misses!", name));
        } else if outcome.crit {
            self.messages.push(format!(
                "Critical hit! {} deals {} damage!",
                name, outcome.damage
            ));
        } else {
            self.messages.push(format!(
                "{} hits the {} for {} damage!",
                name,
                self.enemy.kind.name(),
                outcome.damage
            ));
        }

        let next = if !self.enemy.is_alive() {
            Phase::Win
        } else {
            self.next_turn_phase()
        };
        self.finish_strike(outcome.damage, next);
    }
}
