//! Square tile grid with 4-connected adjacency

use serde::{Deserialize, Serialize};

use crate::core::error::{ObeliskError, Result};
use crate::core::types::TileCoord;
use crate::map::terrain::Terrain;
use crate::map::tile::Tile;

/// Row-major square grid of tiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapGrid {
    size: u32,
    tiles: Vec<Tile>,
}

impl MapGrid {
    /// A uniform grid of the given terrain
    pub fn filled(size: u32, terrain: Terrain) -> Self {
        let mut tiles = Vec::with_capacity((size * size) as usize);
        for y in 0..size {
            for x in 0..size {
                tiles.push(Tile::new(terrain, TileCoord::new(x, y)));
            }
        }
        Self { size, tiles }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn in_bounds(&self, coord: TileCoord) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    fn index(&self, coord: TileCoord) -> usize {
        (coord.y * self.size + coord.x) as usize
    }

    pub fn tile(&self, coord: TileCoord) -> Result<&Tile> {
        if !self.in_bounds(coord) {
            return Err(ObeliskError::OutOfBounds(coord));
        }
        Ok(&self.tiles[self.index(coord)])
    }

    pub fn tile_mut(&mut self, coord: TileCoord) -> Result<&mut Tile> {
        if !self.in_bounds(coord) {
            return Err(ObeliskError::OutOfBounds(coord));
        }
        let idx = self.index(coord);
        Ok(&mut self.tiles[idx])
    }

    /// Replace the terrain at `coord`, resetting the tile's mutable state
    pub fn set_terrain(&mut self, coord: TileCoord, terrain: Terrain) -> Result<()> {
        let tile = self.tile_mut(coord)?;
        *tile = Tile::new(terrain, coord);
        Ok(())
    }

    /// In-bounds orthogonal neighbors in N, E, S, W order
    pub fn neighbors4(&self, coord: TileCoord) -> Vec<TileCoord> {
        let mut out = Vec::with_capacity(4);
        if coord.y > 0 {
            out.push(TileCoord::new(coord.x, coord.y - 1));
        }
        if coord.x + 1 < self.size {
            out.push(TileCoord::new(coord.x + 1, coord.y));
        }
        if coord.y + 1 < self.size {
            out.push(TileCoord::new(coord.x, coord.y + 1));
        }
        if coord.x > 0 {
            out.push(TileCoord::new(coord.x - 1, coord.y));
        }
        out
    }

    /// Mark the given coordinates as move targets; out-of-bounds
    /// coordinates are ignored
    pub fn highlight<I: IntoIterator<Item = TileCoord>>(&mut self, coords: I) {
        for coord in coords {
            if self.in_bounds(coord) {
                let idx = self.index(coord);
                self.tiles[idx].highlighted = true;
            }
        }
    }

    pub fn clear_highlights(&mut self) {
        for tile in &mut self.tiles {
            tile.highlighted = false;
        }
    }

    /// Uncover a tile and its orthogonal neighbors
    pub fn reveal_around(&mut self, coord: TileCoord) -> Result<()> {
        self.tile_mut(coord)?.revealed = true;
        for neighbor in self.neighbors4(coord) {
            let idx = self.index(neighbor);
            self.tiles[idx].revealed = true;
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Count tiles of a given terrain, mostly for generation checks
    pub fn count_terrain(&self, terrain: Terrain) -> usize {
        self.tiles.iter().filter(|t| t.terrain == terrain).count()
    }
}
