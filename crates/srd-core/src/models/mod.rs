//! # Upstream Data Models
//!
//! serde shapes of the upstream payloads the tools reshape. Every struct
//! tolerates missing fields (they take their default) and drops fields it
//! does not name, so upstream additions never break decoding.

mod character;
mod class;
mod monster;
mod reference;
mod resource;
mod spell;

pub use character::{AbilityScore, Alignment, Background, BackgroundFeature};
pub use class::{Class, ClassLevel};
pub use monster::{ActionStep, ArmorClass, Monster, MonsterAction, MonsterDc, MonsterProficiency};
pub use reference::{ListResponse, ResourceRef, SpellRef};
pub use resource::{EquipmentCategory, Resource};
pub use spell::{AreaOfEffect, Spell, SpellDamage, SpellDc};
