//! Strike resolution and the timing bar
//!
//! A player attack is resolved at the instant the strike is triggered: the
//! timing-bar ratio decides hit, miss, or critical, and ammo or stamina
//! shortfalls downgrade the attack to bare hands instead of aborting the
//! turn.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::defend::enemy::Enemy;
use crate::items::item::{WeaponProfile, UNARMED};
use crate::roster::attribute::Job;
use crate::roster::survivor::Survivor;

/// Oscillating timing bar for player strikes
///
/// The ratio swings 0.0 -> 1.0 -> 0.0 and is clamped to exactly 1.0 at the
/// top, so a perfectly timed strike can land a critical. Faster enemies make
/// the bar swing faster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitBar {
    ratio: f32,
    rising: bool,
    step: f32,
}

impl HitBar {
    pub fn new(enemy_speed: i32, config: &GameConfig) -> Self {
        Self {
            ratio: 0.0,
            rising: true,
            step: config.hit_bar_base_step
                + config.hit_bar_speed_step * enemy_speed.max(0) as f32,
        }
    }

    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    /// Advance one frame
    pub fn tick(&mut self) {
        if self.rising {
            self.ratio += self.step;
            if self.ratio >= 1.0 {
                self.ratio = 1.0;
                self.rising = false;
            }
        } else {
            self.ratio -= self.step;
            if self.ratio <= 0.0 {
                self.ratio = 0.0;
                self.rising = true;
            }
        }
    }

    /// Restart the swing for the next player turn
    pub fn reset(&mut self) {
        self.ratio = 0.0;
        self.rising = true;
    }
}

/// Result of one triggered player strike
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrikeOutcome {
    pub hit: bool,
    pub crit: bool,
    /// Final damage after bonus and enemy armor, floored at zero
    pub damage: i32,
    /// Ammo shortfall forced the unarmed fallback
    pub no_ammo: bool,
    /// Stamina shortfall forced the unarmed fallback
    pub no_stamina: bool,
    pub ammo_spent: u32,
    /// Self-damage paid for a cursed weapon
    pub stamina_spent: i32,
}

/// Ammo cost after the Soldier discount
pub fn ammo_cost_for(profile: &WeaponProfile, job: Option<Job>) -> u32 {
    if profile.ammo_cost > 0 && job == Some(Job::Soldier) {
        (profile.ammo_cost / 2).max(1)
    } else {
        profile.ammo_cost
    }
}

/// Stamina cost after the Mystic discount
pub fn stamina_cost_for(profile: &WeaponProfile, job: Option<Job>) -> i32 {
    if profile.stam_cost > 0 && job == Some(Job::Mystic) {
        (profile.stam_cost / 2).max(1)
    } else {
        profile.stam_cost
    }
}

/// Resolve a player strike at the given timing ratio
///
/// Costs are paid only when they can be covered; a shortfall downgrades to
/// the unarmed profile with the matching flag set and consumes nothing.
/// A covered cost is spent even if the strike then misses.
pub fn resolve_strike<R: Rng>(
    survivor: &Survivor,
    ammo_pool: u32,
    bar_ratio: f32,
    enemy_armor: i32,
    config: &GameConfig,
    rng: &mut R,
) -> StrikeOutcome {
    let job = survivor.job();
    let mut profile = survivor
        .weapon
        .as_ref()
        .and_then(|w| w.weapon_profile())
        .unwrap_or(UNARMED);

    let mut no_ammo = false;
    let mut no_stamina = false;
    let mut ammo_spent = 0;
    let mut stamina_spent = 0;

    let ammo_cost = ammo_cost_for(&profile, job);
    if ammo_cost > 0 {
        if ammo_pool < ammo_cost {
            no_ammo = true;
            profile = UNARMED;
        } else {
            ammo_spent = ammo_cost;
        }
    }

    let stam_cost = stamina_cost_for(&profile, job);
    if stam_cost > 0 {
        // The wielder must stay on their feet after paying
        if survivor.stamina <= stam_cost {
            no_stamina = true;
            profile = UNARMED;
        } else {
            stamina_spent = stam_cost;
        }
    }

    let threshold =
        profile.difficulty - config.mental_threshold_step * survivor.mental_bonus() as f32;
    let hit = bar_ratio >= threshold;
    let crit = hit && bar_ratio >= config.crit_threshold;

    let damage = if hit {
        let roll = if crit {
            profile.dmg_max
        } else {
            rng.gen_range(profile.dmg_min..=profile.dmg_max)
        };
        let bonus = if profile.is_cursed() {
            survivor.mental_bonus()
        } else {
            survivor.physical_bonus()
        };
        (roll + bonus - enemy_armor).max(0)
    } else {
        0
    };

    StrikeOutcome {
        hit,
        crit,
        damage,
        no_ammo,
        no_stamina,
        ammo_spent,
        stamina_spent,
    }
}

/// Enemy damage against a target, floored at zero
pub fn enemy_strike<R: Rng>(
    enemy: &Enemy,
    target_armor: i32,
    defense_armor: i32,
    rng: &mut R,
) -> i32 {
    (enemy.roll_damage(rng) - target_armor - defense_armor).max(0)
}

/// Average damage for UI previews, floored at one
pub fn average_damage(survivor: &Survivor) -> i32 {
    let profile = survivor
        .weapon
        .as_ref()
        .and_then(|w| w.weapon_profile())
        .unwrap_or(UNARMED);
    let bonus = if profile.is_cursed() {
        survivor.mental_bonus()
    } else {
        survivor.physical_bonus()
    };
    ((profile.dmg_min + profile.dmg_max) / 2 + bonus).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defend::enemy::EnemyKind;
    use crate::items::item::{Item, ItemId};
    use crate::roster::attribute::{AttrKind, Attribute};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fighter(physical: i32, mental: i32, stamina: i32) -> Survivor {
        Survivor {
            name: "Rin Harlow".into(),
            age: 30,
            max_stamina: stamina.max(1),
            stamina,
            physical,
            mental,
            heal_rate: 0.6,
            cure_prob: 0.4,
            attributes: Vec::new(),
            weapon: None,
            armor: None,
            free: true,
            sick: false,
        }
    }

    #[test]
    fn test_hit_bar_reaches_exactly_one() {
        let config = GameConfig::default();
        let mut bar = HitBar::new(3, &config);
        let mut seen_top = false;
        for _ in 0..200 {
            bar.tick();
            if bar.ratio() == 1.0 {
                seen_top = true;
            }
            assert!((0.0..=1.0).contains(&bar.ratio()));
        }
        assert!(seen_top);
    }

    #[test]
    fn test_faster_enemy_speeds_up_bar() {
        let config = GameConfig::default();
        let mut slow = HitBar::new(0, &config);
        let mut fast = HitBar::new(5, &config);
        slow.tick();
        fast.tick();
        assert!(fast.ratio() > slow.ratio());
    }

    #[test]
    fn test_critical_uses_max_damage() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(51);
        let mut s = fighter(10, 10, 10);
        s.weapon = Some(Item::new(ItemId::Pistol));

        let outcome = resolve_strike(&s, 10, 1.0, 0, &config, &mut rng);
        assert!(outcome.crit);
        // Pistol max 8, zero bonuses, zero armor
        assert_eq!(outcome.damage, 8);
        assert_eq!(outcome.ammo_spent, 1);
    }

    #[test]
    fn test_miss_below_threshold() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(52);
        let mut s = fighter(10, 10, 10);
        s.weapon = Some(Item::new(ItemId::Axe));

        // Axe difficulty 0.5, neutral mental bonus
        let outcome = resolve_strike(&s, 0, 0.3, 0, &config, &mut rng);
        assert!(!outcome.hit);
        assert_eq!(outcome.damage, 0);
    }

    #[test]
    fn test_mental_bonus_lowers_threshold() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(53);
        // Mental 18 gives +4 bonus, lowering an 0.5 threshold to 0.42
        let mut s = fighter(10, 18, 10);
        s.weapon = Some(Item::new(ItemId::Axe));

        let outcome = resolve_strike(&s, 0, 0.45, 0, &config, &mut rng);
        assert!(outcome.hit);
    }

    #[test]
    fn test_no_ammo_falls_back_unarmed_without_spending() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(54);
        let mut s = fighter(10, 10, 10);
        s.weapon = Some(Item::new(ItemId::Rifle));

        // Rifle needs 2 ammo, pool has 1
        let outcome = resolve_strike(&s, 1, 1.0, 0, &config, &mut rng);
        assert!(outcome.no_ammo);
        assert_eq!(outcome.ammo_spent, 0);
        // Unarmed max damage on a critical
        assert_eq!(outcome.damage, UNARMED.dmg_max);
    }

    #[test]
    fn test_soldier_halves_ammo_cost() {
        let mut s = fighter(10, 10, 10);
        s.attributes.push(Attribute::new(AttrKind::Soldier, 30));
        s.weapon = Some(Item::new(ItemId::MachineGun));

        let profile = s.weapon.as_ref().unwrap().weapon_profile().unwrap();
        assert_eq!(ammo_cost_for(&profile, s.job()), 2);

        // Minimum stays at one
        s.weapon = Some(Item::new(ItemId::Pistol));
        let profile = s.weapon.as_ref().unwrap().weapon_profile().unwrap();
        assert_eq!(ammo_cost_for(&profile, s.job()), 1);
    }

    #[test]
    fn test_mystic_halves_stamina_cost() {
        let mut s = fighter(10, 16, 10);
        s.attributes.push(Attribute::new(AttrKind::Mystic, 30));
        s.weapon = Some(Item::new(ItemId::SoulScepter));

        let profile = s.weapon.as_ref().unwrap().weapon_profile().unwrap();
        assert_eq!(stamina_cost_for(&profile, s.job()), 2);

        s.weapon = Some(Item::new(ItemId::EldritchStaff));
        let profile = s.weapon.as_ref().unwrap().weapon_profile().unwrap();
        assert_eq!(stamina_cost_for(&profile, s.job()), 1);
    }

    #[test]
    fn test_cursed_weapon_costs_stamina_and_uses_mental() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(55);
        let mut s = fighter(10, 16, 10);
        s.weapon = Some(Item::new(ItemId::InfernalSkull));

        let outcome = resolve_strike(&s, 0, 1.0, 0, &config, &mut rng);
        assert_eq!(outcome.stamina_spent, 2);
        // Skull max 20 plus mental bonus 3
        assert_eq!(outcome.damage, 23);
    }

    #[test]
    fn test_stamina_shortfall_falls_back_unarmed() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(56);
        let mut s = fighter(10, 16, 2);
        s.weapon = Some(Item::new(ItemId::SoulScepter));

        // Paying 4 stamina would drop the wielder to or below zero
        let outcome = resolve_strike(&s, 0, 1.0, 0, &config, &mut rng);
        assert!(outcome.no_stamina);
        assert_eq!(outcome.stamina_spent, 0);
        assert_eq!(outcome.damage, UNARMED.dmg_max);
    }

    #[test]
    fn test_enemy_damage_floor() {
        let mut rng = ChaCha8Rng::seed_from_u64(57);
        let enemy = Enemy::spawn(EnemyKind::BeeSwarm);
        for _ in 0..50 {
            assert_eq!(enemy_strike(&enemy, 50, 10, &mut rng), 0);
        }
    }

    #[test]
    fn test_average_damage_preview() {
        let mut s = fighter(14, 10, 10);
        s.weapon = Some(Item::new(ItemId::Spear));
        // (3 + 6) / 2 + 2
        assert_eq!(average_damage(&s), 6);

        let weak = fighter(4, 4, 10);
        // Unarmed (1 + 2) / 2 + (-3) floors at 1
        assert_eq!(average_damage(&weak), 1);
    }
}
