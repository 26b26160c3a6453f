//! Obelisk: a turn-based survival game core
//!
//! Survivors stranded on a procedurally generated island form expeditions,
//! scavenge terrain for resources and equipment, and defend their camp at
//! night against whatever the local spawn tables throw at them. This crate
//! is the headless game core: map generation, stamina-bounded pathfinding,
//! survivor rolling, crafting, and the night-defense combat resolver. A UI
//! layer drives it by polling state and calling the explicit tick/advance
//! entry points.

pub mod core;
pub mod defend;
pub mod expedition;
pub mod items;
pub mod map;
pub mod roster;

pub use crate::core::config::GameConfig;
pub use crate::core::error::{ObeliskError, Result};
pub use crate::core::types::{ExpeditionId, TileCoord};
