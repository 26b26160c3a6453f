//! Procedural island generation
//!
//! The map starts as open field. Special terrain is grown outward from
//! random seeds: each growth layer spreads through a BFS frontier whose
//! conversion probability starts at 1.0 and decays per ring, so regions
//! come out blobby with ragged edges. Layered growth (cave cores inside
//! mountains, deep jungle inside jungle) runs the layers over the same
//! frontier in order. Wreckage and ritual sites are scattered as single
//! tiles, and exactly one obelisk tile is placed last.

use ahash::AHashSet;
use rand::Rng;
use tracing::debug;

use crate::core::types::TileCoord;
use crate::map::grid::MapGrid;
use crate::map::terrain::Terrain;

/// Region counts and growth decay rates
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub size: u32,
    pub num_mountain: u32,
    pub num_swamp: u32,
    pub num_jungle: u32,
    pub num_facility: u32,
    pub num_wreckage: u32,
    pub num_ritual_site: u32,
    pub mountain_rate: f64,
    pub cave_rate: f64,
    pub swamp_rate: f64,
    pub jungle_rate: f64,
    pub deep_jungle_rate: f64,
    pub facility_rate: f64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            size: 32,
            num_mountain: 4,
            num_swamp: 2,
            num_jungle: 4,
            num_facility: 1,
            num_wreckage: 5,
            num_ritual_site: 4,
            mountain_rate: 0.2,
            cave_rate: 0.4,
            swamp_rate: 0.3,
            jungle_rate: 0.2,
            deep_jungle_rate: 0.3,
            facility_rate: 0.2,
        }
    }
}

/// Generate a full island map
pub fn generate<R: Rng>(settings: &GenerationSettings, rng: &mut R) -> MapGrid {
    let mut grid = MapGrid::filled(settings.size, Terrain::Field);

    for _ in 0..settings.num_mountain {
        grow_region(
            &mut grid,
            &[
                (Terrain::Cave, settings.cave_rate),
                (Terrain::Mountain, settings.mountain_rate),
            ],
            rng,
        );
    }

    for _ in 0..settings.num_swamp {
        grow_region(&mut grid, &[(Terrain::Swamp, settings.swamp_rate)], rng);
    }

    for _ in 0..settings.num_jungle {
        grow_region(
            &mut grid,
            &[
                (Terrain::DeepJungle, settings.deep_jungle_rate),
                (Terrain::Jungle, settings.jungle_rate),
            ],
            rng,
        );
    }

    for _ in 0..settings.num_facility {
        grow_region(
            &mut grid,
            &[(Terrain::Facility, settings.facility_rate)],
            rng,
        );
    }

    let mut placed: AHashSet<TileCoord> = AHashSet::new();
    scatter(&mut grid, Terrain::Wreckage, settings.num_wreckage, &mut placed, rng);
    scatter(
        &mut grid,
        Terrain::RitualSite,
        settings.num_ritual_site,
        &mut placed,
        rng,
    );
    scatter(&mut grid, Terrain::Obelisk, 1, &mut placed, rng);

    debug!(
        size = settings.size,
        obelisks = grid.count_terrain(Terrain::Obelisk),
        "map generated"
    );

    grid
}

fn random_coord<R: Rng>(size: u32, rng: &mut R) -> TileCoord {
    TileCoord::new(rng.gen_range(0..size), rng.gen_range(0..size))
}

/// Grow a layered region from a random seed
///
/// `layers` lists (terrain, decay) pairs from innermost outward. Each layer
/// restarts the conversion probability at 1.0 and subtracts its decay per
/// frontier ring; the frontier carries over between layers so the outer
/// terrain wraps the inner one.
fn grow_region<R: Rng>(grid: &mut MapGrid, layers: &[(Terrain, f64)], rng: &mut R) {
    let seed = random_coord(grid.size(), rng);
    // set_terrain only fails out of bounds, which random_coord rules out
    let _ = grid.set_terrain(seed, layers[0].0);

    let mut visited: AHashSet<TileCoord> = AHashSet::new();
    let mut frontier = vec![seed];

    for &(terrain, decay) in layers {
        let mut prob = 1.0f64;

        loop {
            let mut next_frontier = Vec::new();

            for &coord in &frontier {
                for neighbor in grid.neighbors4(coord) {
                    if rng.gen::<f64>() < prob && !visited.contains(&neighbor) {
                        let _ = grid.set_terrain(neighbor, terrain);
                        next_frontier.push(neighbor);
                    }
                }
                visited.insert(coord);
            }

            if next_frontier.is_empty() {
                break;
            }
            frontier = next_frontier;
            prob -= decay;
        }
    }
}

/// Place `count` single tiles of `terrain`, never on top of a previous
/// scatter placement
fn scatter<R: Rng>(
    grid: &mut MapGrid,
    terrain: Terrain,
    count: u32,
    placed: &mut AHashSet<TileCoord>,
    rng: &mut R,
) {
    for _ in 0..count {
        let mut coord = random_coord(grid.size(), rng);
        while placed.contains(&coord) {
            coord = random_coord(grid.size(), rng);
        }
        let _ = grid.set_terrain(coord, terrain);
        placed.insert(coord);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generated_map_has_required_regions() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let grid = generate(&GenerationSettings::default(), &mut rng);

        assert!(grid.count_terrain(Terrain::Mountain) > 0);
        assert!(grid.count_terrain(Terrain::Swamp) > 0);
        assert!(grid.count_terrain(Terrain::Jungle) > 0);
        assert!(grid.count_terrain(Terrain::Facility) > 0);
        assert!(grid.count_terrain(Terrain::Field) > 0);
    }

    #[test]
    fn test_exactly_one_obelisk() {
        for seed in 0..10 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let grid = generate(&GenerationSettings::default(), &mut rng);
            assert_eq!(grid.count_terrain(Terrain::Obelisk), 1, "seed {}", seed);
        }
    }

    #[test]
    fn test_scatter_counts() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut grid = MapGrid::filled(16, Terrain::Field);
        let mut placed = AHashSet::new();
        scatter(&mut grid, Terrain::Wreckage, 5, &mut placed, &mut rng);
        assert_eq!(grid.count_terrain(Terrain::Wreckage), 5);
    }

    #[test]
    fn test_same_seed_same_map() {
        let settings = GenerationSettings::default();
        let a = generate(&settings, &mut ChaCha8Rng::seed_from_u64(9));
        let b = generate(&settings, &mut ChaCha8Rng::seed_from_u64(9));
        for (ta, tb) in a.iter().zip(b.iter()) {
            assert_eq!(ta.terrain, tb.terrain);
        }
    }
}
