//! Character classes and their per-level progression.

use super::ResourceRef;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `GET /classes/{index}`.
///
/// Choice blocks (proficiency and equipment options, multiclassing
/// prerequisites) have several upstream shapes and pass through as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Class {
    pub index: String,
    pub name: String,
    pub hit_die: u8,
    pub proficiency_choices: Value,
    pub proficiencies: Vec<ResourceRef>,
    pub saving_throws: Vec<ResourceRef>,
    pub starting_equipment: Value,
    pub starting_equipment_options: Value,
    pub class_levels: String,
    pub multi_classing: Value,
    pub subclasses: Vec<ResourceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spellcasting: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spells: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// `GET /classes/{index}/levels/{level}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassLevel {
    pub level: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ability_score_bonuses: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prof_bonus: Option<u8>,
    pub features: Vec<ResourceRef>,
    /// Cantrips known, spells known and slots per spell level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spellcasting: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_specific: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<ResourceRef>,
    pub index: String,
    pub url: String,
}
