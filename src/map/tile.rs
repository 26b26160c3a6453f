//! A single map tile

use serde::{Deserialize, Serialize};

use crate::core::types::TileCoord;
use crate::map::terrain::Terrain;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub terrain: Terrain,
    pub coord: TileCoord,
    /// Uncovered by an expedition passing within sight
    pub revealed: bool,
    /// Marked as reachable for the current move selection
    pub highlighted: bool,
    /// Set while an expedition is camped here
    pub has_camp: bool,
}

impl Tile {
    pub fn new(terrain: Terrain, coord: TileCoord) -> Self {
        Self {
            terrain,
            coord,
            revealed: false,
            highlighted: false,
            has_camp: false,
        }
    }

    pub fn move_cost(&self) -> u32 {
        self.terrain.move_cost()
    }

    pub fn campable(&self) -> bool {
        self.terrain.campable()
    }
}
