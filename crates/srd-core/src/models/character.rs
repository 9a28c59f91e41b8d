//! Character-building categories with a stable upstream shape.

use super::ResourceRef;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `GET /ability-scores/{index}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityScore {
    pub index: String,
    pub name: String,
    pub full_name: String,
    pub desc: Vec<String>,
    pub skills: Vec<ResourceRef>,
    pub url: String,
}

/// `GET /alignments/{index}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alignment {
    pub index: String,
    pub name: String,
    pub abbreviation: String,
    pub desc: String,
    pub url: String,
}

/// `GET /backgrounds/{index}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Background {
    pub index: String,
    pub name: String,
    pub starting_proficiencies: Vec<ResourceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_options: Option<Value>,
    pub starting_equipment: Value,
    pub starting_equipment_options: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<BackgroundFeature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personality_traits: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ideals: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonds: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flaws: Option<Value>,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundFeature {
    pub name: String,
    pub desc: Vec<String>,
}
