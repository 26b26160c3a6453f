//! Night defense integration tests
//!
//! Drives full nights through the public API: staging, the combat state
//! machine, and commit bookkeeping.

use obelisk::core::config::GameConfig;
use obelisk::core::types::{ExpeditionId, TileCoord};
use obelisk::defend::defense::DefenseEffects;
use obelisk::defend::encounter::{Encounter, Phase, Trigger};
use obelisk::defend::enemy::{Enemy, EnemyKind};
use obelisk::defend::night::{Night, NightOutcome};
use obelisk::defend::turn_order::TurnSlot;
use obelisk::expedition::party::Expedition;
use obelisk::items::inventory::Inventory;
use obelisk::items::item::{Item, ItemId};
use obelisk::map::grid::MapGrid;
use obelisk::map::terrain::Terrain;
use obelisk::roster::survivor::Survivor;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn survivor(name: &str, physical: i32, mental: i32, stamina: i32) -> Survivor {
    Survivor {
        name: name.into(),
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

/// Drive an encounter to its terminal phase, always striking at the top of
/// the timing bar
fn autoplay(encounter: &mut Encounter, rng: &mut ChaCha8Rng) {
    for _ in 0..500_000 {
        if encounter.animation_active() {
            encounter.tick();
            continue;
        }
        let trigger = match encounter.phase() {
            Phase::Player => {
                encounter.tick();
                if encounter.hit_bar_ratio() < 1.0 {
                    continue;
                }
                Trigger::Strike
            }
            _ => Trigger::Confirm,
        };
        if encounter.advance(trigger, rng) {
            return;
        }
    }
    panic!("encounter never finished");
}

#[test]
fn test_turn_order_follows_descending_speed() {
    let config = GameConfig::default();
    // Speeds 3, 1, 1 against a wolf pack at speed 2
    let squad = vec![
        survivor("Fast Fiona", 16, 10, 10),
        survivor("Mid Mara", 12, 10, 10),
        survivor("Mid Milo", 12, 10, 10),
    ];
    let encounter = Encounter::new(
        squad,
        Enemy::spawn(EnemyKind::WolfPack),
        DefenseEffects::none(),
        0,
        config,
    )
    .unwrap();

    // Fastest survivor leads, enemy slots in on speed, ties keep order
    assert_eq!(encounter.current_slot(), TurnSlot::Survivor(0));
}

#[test]
fn test_armored_defender_blunts_enemy_damage() {
    let config = GameConfig::default();
    let mut tank = survivor("Tank Tessa", 10, 10, 30);
    tank.max_stamina = 30;
    tank.armor = Some(Item::new(ItemId::YuggothCloak));

    // Wolf pack deals 2-4; cloak armor 10 floors every hit at zero
    let mut rng = ChaCha8Rng::seed_from_u64(81);
    let mut encounter = Encounter::new(
        vec![tank],
        Enemy::spawn(EnemyKind::WolfPack),
        DefenseEffects::none(),
        0,
        config,
    )
    .unwrap();

    encounter.advance(Trigger::Confirm, &mut rng);
    // Run several full rounds; the tank must never take damage
    for _ in 0..20 {
        match encounter.phase() {
            Phase::Enemy => {
                encounter.advance(Trigger::Confirm, &mut rng);
            }
            Phase::Player => {
                // Deliberately miss by striking at the bottom of the bar
                encounter.advance(Trigger::Strike, &mut rng);
            }
            _ => break,
        }
        while encounter.animation_active() {
            encounter.tick();
        }
    }
    assert_eq!(encounter.survivors()[0].stamina, 30);
}

#[test]
fn test_barricade_bonus_stacks_with_worn_armor() {
    let config = GameConfig::default();
    let mut defender = survivor("Walled Wes", 10, 10, 30);
    defender.max_stamina = 30;
    defender.armor = Some(Item::new(ItemId::TribalGarb));

    // Garb 2 plus barricade 2 absorbs the wolf pack's 2-4 damage
    let effects =
        DefenseEffects::from_items(&[Item::new(ItemId::Barricade)]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(82);
    let mut encounter = Encounter::new(
        vec![defender],
        Enemy::spawn(EnemyKind::WolfPack),
        effects,
        0,
        config,
    )
    .unwrap();

    encounter.advance(Trigger::Confirm, &mut rng);
    for _ in 0..20 {
        match encounter.phase() {
            Phase::Enemy => {
                encounter.advance(Trigger::Confirm, &mut rng);
            }
            Phase::Player => {
                encounter.advance(Trigger::Strike, &mut rng);
            }
            _ => break,
        }
        while encounter.animation_active() {
            encounter.tick();
        }
    }
    assert_eq!(encounter.survivors()[0].stamina, 30);
}

#[test]
fn test_ammo_pool_is_shared_between_defenders() {
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(83);
    let mut first = survivor("Gun Gwen", 14, 10, 20);
    first.max_stamina = 20;
    first.weapon = Some(Item::new(ItemId::Rifle));
    let mut second = survivor("Gun Gabe", 12, 10, 20);
    second.max_stamina = 20;
    second.weapon = Some(Item::new(ItemId::Rifle));

    // Pool of 3 covers exactly one rifle shot (cost 2); the second shooter
    // falls back to bare hands
    let mut encounter = Encounter::new(
        vec![first, second],
        Enemy::spawn(EnemyKind::Giant),
        DefenseEffects::none(),
        3,
        config,
    )
    .unwrap();

    encounter.advance(Trigger::Confirm, &mut rng);
    assert_eq!(encounter.phase(), Phase::Player);

    // First shooter fires at full bar
    loop {
        encounter.tick();
        if encounter.hit_bar_ratio() == 1.0 {
            break;
        }
    }
    encounter.advance(Trigger::Strike, &mut rng);
    assert_eq!(encounter.ammo(), 1);
    while encounter.animation_active() {
        encounter.tick();
    }
    assert_eq!(encounter.phase(), Phase::Player);

    // Second shooter cannot cover the cost and keeps the pool intact
    loop {
        encounter.tick();
        if encounter.hit_bar_ratio() == 1.0 {
            break;
        }
    }
    encounter.advance(Trigger::Strike, &mut rng);
    assert_eq!(encounter.ammo(), 1);
    let messages = encounter.take_messages().join(" ");
    assert!(messages.contains("No ammo!"), "messages: {}", messages);
}

#[test]
fn test_ritual_site_night_runs_to_completion() {
    let grid = MapGrid::filled(4, Terrain::RitualSite);
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(84);

    let mut squad = vec![
        survivor("Ada First", 16, 14, 24),
        survivor("Ben Backup", 14, 12, 20),
        survivor("Cal Third", 12, 12, 18),
    ];
    for s in &mut squad {
        s.max_stamina = s.stamina;
    }
    squad[0].weapon = Some(Item::new(ItemId::MachineGun));
    squad[1].weapon = Some(Item::new(ItemId::Rifle));

    let mut inventory = Inventory::with_resources(10, 5, 5, 20);
    inventory.items.push(Item::new(ItemId::PitTrap));
    inventory.items.push(Item::new(ItemId::Flashbang));
    let mut expedition = Expedition::new(
        ExpeditionId(1),
        TileCoord::new(1, 1),
        squad,
        inventory,
    )
    .unwrap();

    let defenses = expedition.inventory.defense_indices();
    let mut night = Night::begin(
        &mut expedition,
        &grid,
        &[0, 1, 2],
        &defenses,
        &config,
        &mut rng,
    )
    .unwrap();
    assert!(!night.is_peaceful());

    autoplay(night.encounter_mut().unwrap(), &mut rng);
    let report = night.commit(&mut expedition, &config, &mut rng).unwrap();

    assert!(report.enemy.is_some());
    assert_eq!(report.defenses_consumed, 2);
    match report.outcome {
        NightOutcome::Victory => {
            assert_eq!(expedition.survivors.len() + report.fallen.len(), 3)
        }
        NightOutcome::Defeat => assert!(!report.fallen.is_empty()),
        NightOutcome::Peaceful => panic!("ritual sites always spawn"),
    }
    // Defense items never return to the inventory
    assert!(expedition.inventory.defense_indices().is_empty());
}

#[test]
fn test_many_seeds_never_wedge_the_state_machine() {
    let grid = MapGrid::filled(4, Terrain::DeepJungle);
    let config = GameConfig::default();

    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut squad = vec![
            survivor("Ada First", 14, 12, 20),
            survivor("Ben Backup", 12, 12, 16),
        ];
        for s in &mut squad {
            s.max_stamina = s.stamina;
        }
        squad[0].weapon = Some(Item::new(ItemId::Machete));

        let mut expedition = Expedition::new(
            ExpeditionId(seed as u32),
            TileCoord::new(2, 2),
            squad,
            Inventory::with_resources(10, 0, 0, 8),
        )
        .unwrap();

        let mut night =
            Night::begin(&mut expedition, &grid, &[0, 1], &[], &config, &mut rng).unwrap();
        if let Some(encounter) = night.encounter_mut() {
            autoplay(encounter, &mut rng);
        }
        let report = night.commit(&mut expedition, &config, &mut rng).unwrap();
        assert_eq!(expedition.survivors.len() + report.fallen.len(), 2);
    }
}
