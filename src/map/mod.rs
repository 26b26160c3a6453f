//! Island map: terrain data, the tile grid, procedural generation, and
//! scavenging rolls

pub mod generation;
pub mod grid;
pub mod loot;
pub mod terrain;
pub mod tile;

pub use generation::{generate, GenerationSettings};
pub use grid::MapGrid;
pub use loot::{roll_enemy, roll_item, roll_resources, ResourceYield};
pub use terrain::Terrain;
pub use tile::Tile;
