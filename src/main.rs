//! Obelisk - Entry Point
//!
//! Headless demo driver for the game core. It generates an island, rolls a
//! party of survivors, walks them toward interesting terrain, and plays one
//! auto-piloted night defense, printing the resulting report as JSON.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use obelisk::core::config::GameConfig;
use obelisk::core::error::Result;
use obelisk::core::types::{ExpeditionId, TileCoord};
use obelisk::defend::encounter::{Phase, Trigger};
use obelisk::defend::night::Night;
use obelisk::expedition::party::Expedition;
use obelisk::items::inventory::Inventory;
use obelisk::items::item::{Item, ItemId};
use obelisk::map::generation::{self, GenerationSettings};
use obelisk::roster::names::NamePool;
use obelisk::roster::survivor::Survivor;

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("obelisk=debug")
        .init();

    tracing::info!("Obelisk starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let config = GameConfig::default();
    let mut grid = generation::generate(&GenerationSettings::default(), &mut rng);

    // Roll the starting party
    let mut pool = NamePool::new();
    let survivors: Vec<Survivor> = (0..4)
        .map(|_| Survivor::roll(&mut pool, config.attribute_prob, &mut rng))
        .collect();

    println!("\n=== OBELISK ===");
    println!("Survivors washed ashore (seed {}):", seed);
    for s in &survivors {
        println!(
            "  {:<20} age {:>2}  stam {:>2}  phys {:>2}  ment {:>2}",
            s.name, s.age, s.max_stamina, s.physical, s.mental
        );
    }

    let mut inventory = Inventory::with_resources(12, 4, 4, 8);
    inventory.items.push(Item::new(ItemId::Pistol));
    inventory.items.push(Item::new(ItemId::PitTrap));

    let mut expedition = Expedition::new(
        ExpeditionId(0),
        TileCoord::new(grid.size() / 2, grid.size() / 2),
        survivors,
        inventory,
    )?;

    // Arm the strongest member and walk to the edge of today's range
    if let Some(weapon_idx) = expedition.inventory.weapon_indices().first().copied() {
        let weapon = expedition.inventory.items.remove(weapon_idx);
        expedition.survivors[0].weapon = Some(weapon);
    }

    let range = expedition.movement_range(&grid)?;
    grid.highlight(range.reachable());
    println!(
        "\n{} tiles in reach today.",
        grid.iter().filter(|t| t.highlighted).count()
    );
    if let Some(dest) = range
        .reachable()
        .max_by_key(|&c| range.cost_to(c).unwrap_or(0))
    {
        let cost = expedition.travel_to(&grid, dest)?;
        println!("The expedition marches to {:?} ({} stamina spent).", dest, cost);
        grid.reveal_around(dest)?;
    }
    grid.clear_highlights();

    let (loot, item) = expedition.scavenge(&grid, &config, &mut rng)?;
    println!(
        "Scavenged: {} food, {} wood, {} metal, {} ammo{}",
        loot.food,
        loot.wood,
        loot.metal,
        loot.ammo,
        item.map(|i| format!(", found a {}", i.name()))
            .unwrap_or_default()
    );

    // Night falls: everyone able stands watch, traps go out
    let defenders: Vec<usize> = (0..expedition.survivors.len().min(config.defender_limit))
        .collect();
    let defenses = expedition.inventory.defense_indices();
    let mut night = Night::begin(
        &mut expedition,
        &grid,
        &defenders,
        &defenses,
        &config,
        &mut rng,
    )?;

    if let Some(encounter) = night.encounter_mut() {
        println!("\nSomething stirs in the dark: {}", encounter.enemy().kind.name());

        // Auto-pilot: confirm every prompt, strike at the top of the bar
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
            let done = encounter.advance(trigger, &mut rng);
            for message in encounter.take_messages() {
                println!("  {}", message);
            }
            if done {
                break;
            }
        }
    } else {
        println!("\nThe night passes quietly.");
    }

    let report = night.commit(&mut expedition, &config, &mut rng)?;
    println!("\nNight report:");
    println!("{}", serde_json::to_string_pretty(&report)?);

    tracing::info!("demo complete");
    Ok(())
}
