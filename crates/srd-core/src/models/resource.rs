//! Categories without a dedicated model.

use super::ResourceRef;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Detail for any category without its own model. Identity fields are typed,
/// everything else is passed through verbatim in upstream order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub index: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// `GET /equipment-categories/{index}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentCategory {
    pub index: String,
    pub name: String,
    pub equipment: Vec<ResourceRef>,
    pub url: String,
}
