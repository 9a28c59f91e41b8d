//! Spell detail as served by `GET /spells/{index}`.

use super::ResourceRef;
use serde::{Deserialize, Serialize};
use serde_json::Map;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spell {
    pub index: String,
    pub name: String,
    pub desc: Vec<String>,
    pub higher_level: Vec<String>,
    pub range: String,
    pub components: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    pub ritual: bool,
    pub duration: String,
    pub concentration: bool,
    pub casting_time: String,
    pub level: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<SpellDamage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heal_at_slot_level: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dc: Option<SpellDc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_of_effect: Option<AreaOfEffect>,
    pub school: ResourceRef,
    pub classes: Vec<ResourceRef>,
    pub subclasses: Vec<ResourceRef>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Damage scaling. Keys are slot levels or character levels as strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellDamage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_type: Option<ResourceRef>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub damage_at_slot_level: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub damage_at_character_level: Map<String, Value>,
}

/// Saving throw a target makes against the spell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellDc {
    pub dc_type: ResourceRef,
    pub dc_success: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaOfEffect {
    #[serde(rename = "type")]
    pub kind: String,
    pub size: u32,
}
