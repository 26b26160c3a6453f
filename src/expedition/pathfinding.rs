//! Stamina-bounded movement range and shortest paths
//!
//! Movement range is computed with Dijkstra relaxation run in frontier
//! supersteps. Stepping onto a tile costs that tile's move cost, and a tile
//! is reachable only while the cumulative cost stays strictly below the
//! party's stamina budget. Each admitted tile remembers its predecessor on
//! the cheapest known path, so routes fall out of a simple backwalk.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::{ObeliskError, Result};
use crate::core::types::TileCoord;
use crate::map::grid::MapGrid;

/// Cheapest known approach to a reachable tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEntry {
    /// Previous tile on the cheapest path; the origin has no predecessor
    pub predecessor: Option<TileCoord>,
    pub cost: u32,
}

/// A reconstructed shortest route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Tiles to step through in order, excluding the origin
    pub tiles: Vec<TileCoord>,
    pub cost: u32,
}

/// All tiles reachable within a stamina budget, with path predecessors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementRange {
    origin: TileCoord,
    entries: AHashMap<TileCoord, PathEntry>,
}

impl MovementRange {
    /// Explore outward from `origin` until the budget is exhausted
    ///
    /// The origin is always reachable at cost zero, even on a zero budget.
    pub fn compute(grid: &MapGrid, origin: TileCoord, budget: u32) -> Result<Self> {
        if !grid.in_bounds(origin) {
            return Err(ObeliskError::OutOfBounds(origin));
        }

        let mut entries: AHashMap<TileCoord, PathEntry> = AHashMap::new();
        entries.insert(
            origin,
            PathEntry {
                predecessor: None,
                cost: 0,
            },
        );

        let mut frontier = vec![origin];

        while !frontier.is_empty() {
            let mut next_frontier = Vec::new();

            for &coord in &frontier {
                let here_cost = entries[&coord].cost;

                for neighbor in grid.neighbors4(coord) {
                    // neighbors4 only yields in-bounds coordinates
                    let step = grid.tile(neighbor)?.move_cost();
                    let next_cost = here_cost + step;
                    if next_cost >= budget {
                        continue;
                    }

                    let better = match entries.get(&neighbor) {
                        None => true,
                        Some(entry) => next_cost < entry.cost,
                    };
                    if better {
                        entries.insert(
                            neighbor,
                            PathEntry {
                                predecessor: Some(coord),
                                cost: next_cost,
                            },
                        );
                        next_frontier.push(neighbor);
                    }
                }
            }

            frontier = next_frontier;
        }

        Ok(Self { origin, entries })
    }

    pub fn origin(&self) -> TileCoord {
        self.origin
    }

    pub fn contains(&self, coord: TileCoord) -> bool {
        self.entries.contains_key(&coord)
    }

    /// Cheapest cost to reach `coord`, if reachable
    pub fn cost_to(&self, coord: TileCoord) -> Option<u32> {
        self.entries.get(&coord).map(|e| e.cost)
    }

    /// All reachable coordinates, origin included
    pub fn reachable(&self) -> impl Iterator<Item = TileCoord> + '_ {
        self.entries.keys().copied()
    }

    /// Walk predecessors back from `dest` and reverse into a route
    pub fn route_to(&self, dest: TileCoord) -> Result<Route> {
        let dest_entry = self
            .entries
            .get(&dest)
            .ok_or(ObeliskError::UnreachableDestination(dest))?;

        let mut tiles = Vec::new();
        let mut cursor = dest;
        while cursor != self.origin {
            tiles.push(cursor);
            // Every non-origin entry has a predecessor inside the range
            cursor = self.entries[&cursor]
                .predecessor
                .ok_or(ObeliskError::UnreachableDestination(dest))?;
        }
        tiles.reverse();

        Ok(Route {
            tiles,
            cost: dest_entry.cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::terrain::Terrain;

    fn field_grid(size: u32) -> MapGrid {
        MapGrid::filled(size, Terrain::Field)
    }

    #[test]
    fn test_zero_budget_reaches_only_origin() {
        let grid = field_grid(5);
        let origin = TileCoord::new(2, 2);
        let range = MovementRange::compute(&grid, origin, 0).unwrap();
        assert_eq!(range.reachable().count(), 1);
        assert_eq!(range.cost_to(origin), Some(0));
    }

    #[test]
    fn test_budget_boundary_is_strict() {
        let grid = field_grid(5);
        let origin = TileCoord::new(0, 0);
        // Budget 2 on unit-cost tiles admits cost 1 but not cost 2
        let range = MovementRange::compute(&grid, origin, 2).unwrap();
        assert!(range.contains(TileCoord::new(1, 0)));
        assert!(!range.contains(TileCoord::new(2, 0)));
        assert!(!range.contains(TileCoord::new(1, 1)));
    }

    #[test]
    fn test_expensive_terrain_shrinks_range() {
        let mut grid = field_grid(5);
        for y in 0..5 {
            grid.set_terrain(TileCoord::new(2, y), Terrain::Swamp).unwrap();
        }
        let range = MovementRange::compute(&grid, TileCoord::new(0, 2), 4).unwrap();
        // Reaching the swamp column costs 2 + 3
        assert!(!range.contains(TileCoord::new(2, 2)));
        assert!(range.contains(TileCoord::new(1, 0)));
    }

    #[test]
    fn test_cheaper_rediscovery_overwrites() {
        // (1,1) is first reached through the swamp at cost 4, then
        // rediscovered through the field column at cost 2
        let mut grid = field_grid(4);
        grid.set_terrain(TileCoord::new(1, 0), Terrain::Swamp).unwrap();
        let range = MovementRange::compute(&grid, TileCoord::new(0, 0), 10).unwrap();

        assert_eq!(range.cost_to(TileCoord::new(1, 1)), Some(2));
        let route = range.route_to(TileCoord::new(1, 1)).unwrap();
        assert_eq!(route.tiles, vec![TileCoord::new(0, 1), TileCoord::new(1, 1)]);
    }

    #[test]
    fn test_route_excludes_origin_and_matches_cost() {
        let grid = field_grid(5);
        let origin = TileCoord::new(0, 0);
        let range = MovementRange::compute(&grid, origin, 10).unwrap();
        let dest = TileCoord::new(3, 0);
        let route = range.route_to(dest).unwrap();
        assert_eq!(route.cost, 3);
        assert_eq!(route.tiles.len(), 3);
        assert_eq!(*route.tiles.last().unwrap(), dest);
        assert!(!route.tiles.contains(&origin));
    }

    #[test]
    fn test_route_steps_are_adjacent() {
        let mut grid = field_grid(6);
        grid.set_terrain(TileCoord::new(2, 2), Terrain::Swamp).unwrap();
        let origin = TileCoord::new(0, 0);
        let range = MovementRange::compute(&grid, origin, 12).unwrap();
        let route = range.route_to(TileCoord::new(4, 3)).unwrap();

        let mut prev = origin;
        for &step in &route.tiles {
            assert_eq!(prev.distance(&step), 1);
            prev = step;
        }
    }

    #[test]
    fn test_unreachable_destination_errors() {
        let grid = field_grid(5);
        let range = MovementRange::compute(&grid, TileCoord::new(0, 0), 2).unwrap();
        let err = range.route_to(TileCoord::new(4, 4)).unwrap_err();
        assert!(matches!(err, ObeliskError::UnreachableDestination(_)));
    }

    #[test]
    fn test_out_of_bounds_origin_errors() {
        let grid = field_grid(3);
        assert!(MovementRange::compute(&grid, TileCoord::new(9, 0), 5).is_err());
    }
}
