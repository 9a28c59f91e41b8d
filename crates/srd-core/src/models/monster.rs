//! Monster stat block as served by `GET /monsters/{index}`.

use super::ResourceRef;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Monster {
    pub index: String,
    pub name: String,
    pub size: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    pub alignment: String,
    pub armor_class: Vec<ArmorClass>,
    pub hit_points: u32,
    pub hit_dice: String,
    pub hit_points_roll: String,
    /// Movement modes (`walk`, `fly`, `swim`, ...). `hover` is a boolean.
    pub speed: Map<String, Value>,
    pub strength: u8,
    pub dexterity: u8,
    pub constitution: u8,
    pub intelligence: u8,
    pub wisdom: u8,
    pub charisma: u8,
    pub proficiencies: Vec<MonsterProficiency>,
    pub damage_vulnerabilities: Vec<String>,
    pub damage_resistances: Vec<String>,
    pub damage_immunities: Vec<String>,
    pub condition_immunities: Vec<ResourceRef>,
    pub senses: Map<String, Value>,
    pub languages: String,
    pub challenge_rating: f64,
    pub proficiency_bonus: u8,
    pub xp: u32,
    pub special_abilities: Vec<MonsterAction>,
    pub actions: Vec<MonsterAction>,
    pub legendary_actions: Vec<MonsterAction>,
    pub reactions: Vec<MonsterAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmorClass {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterProficiency {
    pub value: i32,
    pub proficiency: ResourceRef,
}

/// An action, special ability, legendary action or reaction.
///
/// `damage` entries are either plain damage rolls or upstream choice objects,
/// so they are kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterAction {
    pub name: String,
    pub desc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack_bonus: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dc: Option<MonsterDc>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub damage: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiattack_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ActionStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterDc {
    pub dc_type: ResourceRef,
    pub dc_value: u8,
    pub success_type: String,
}

/// One step of a multiattack. `count` is a number or a dice string upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionStep {
    pub action_name: String,
    pub count: Value,
    #[serde(rename = "type")]
    pub kind: String,
}
