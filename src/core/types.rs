//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Game tick counter (one tick = one frame-clock step)
pub type Tick = u64;

/// Position of a tile on the map grid.
///
/// Tile identity is positional: no two tiles share a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
}

impl TileCoord {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another coordinate
    pub fn distance(&self, other: &Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Unique identifier for expeditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpeditionId(pub u32);

impl ExpeditionId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}
