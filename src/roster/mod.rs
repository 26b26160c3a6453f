//! Survivors: stat rolling, attributes, and the name pool

pub mod attribute;
pub mod names;
pub mod survivor;

pub use attribute::{AttrBonuses, AttrKind, AttrRelation, Attribute, Job};
pub use names::NamePool;
pub use survivor::Survivor;
