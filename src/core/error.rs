use thiserror::Error;

use crate::core::types::TileCoord;

#[derive(Error, Debug)]
pub enum ObeliskError {
    #[error("Expedition has no survivors")]
    EmptyParty,

    #[error("Destination {0:?} is outside the computed movement range")]
    UnreachableDestination(TileCoord),

    #[error("Invalid encounter: {0}")]
    InvalidEncounter(String),

    #[error("Inventory underflow splitting {0}")]
    InventoryUnderflow(&'static str),

    #[error("Cannot craft item: {0}")]
    CannotCraft(String),

    #[error("Tile {0:?} is outside the map")]
    OutOfBounds(TileCoord),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ObeliskError>;
