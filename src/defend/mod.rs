//! Night defense: enemies, deployed defenses, and the turn-based combat
//! resolver

pub mod attack;
pub mod defense;
pub mod encounter;
pub mod enemy;
pub mod night;
pub mod turn_order;

pub use attack::{average_damage, HitBar, StrikeOutcome};
pub use defense::DefenseEffects;
pub use encounter::{Encounter, Phase, Trigger};
pub use enemy::{Enemy, EnemyKind, EnemyStats};
pub use night::{Night, NightOutcome, NightReport};
pub use turn_order::TurnSlot;
