//! Expeditions: parties of survivors moving over the map

pub mod party;
pub mod pathfinding;

pub use party::Expedition;
pub use pathfinding::{MovementRange, PathEntry, Route};
