//! # Tool Response Envelopes
//!
//! Every tool replies with one JSON text block. This module owns the shapes of
//! those blocks so the server only decides *which* envelope to fill.

use crate::category::Category;
use crate::error::Result;
use crate::models::{
    ArmorClass, ListResponse, Monster, MonsterAction, MonsterProficiency, ResourceRef, Spell,
};
use serde::Serialize;
use serde_json::{Map, Value};

/// Serialize an envelope to compact JSON text.
pub fn to_json_text<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

// =============================================================================
// PER-CATEGORY LOOKUP
// =============================================================================

/// Outcome of a per-category tool: the whole list, or one entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<L, D> {
    List(ListResponse<L>),
    Entry(D),
}

impl<L: Serialize, D: Serialize> Lookup<L, D> {
    /// Render as `{"count", "results"}` or `{"<entry_key>": entry}`.
    pub fn render(&self, category: Category) -> Result<String> {
        match self {
            Self::List(list) => to_json_text(&ListEnvelope {
                count: list.results.len(),
                results: &list.results,
            }),
            Self::Entry(entry) => {
                let mut envelope = Map::new();
                envelope.insert(
                    category.entry_key().to_string(),
                    serde_json::to_value(entry)?,
                );
                to_json_text(&envelope)
            }
        }
    }
}

#[derive(Serialize)]
struct ListEnvelope<'a, L> {
    count: usize,
    results: &'a [L],
}

// =============================================================================
// AUXILIARY TOOL ENVELOPES
// =============================================================================

/// One category advertised by the API root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryEntry {
    pub category: String,
    pub url: String,
    /// `None` for categories this gateway has no description for.
    pub description: Option<&'static str>,
}

/// Reply of `list_resources`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryListing {
    pub count: usize,
    pub categories: Vec<CategoryEntry>,
}

impl CategoryListing {
    /// Build from the API root map (category path → URL), in map order.
    pub fn from_root<'a, I>(root: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let categories: Vec<CategoryEntry> = root
            .into_iter()
            .map(|(path, url)| CategoryEntry {
                category: path.clone(),
                url: url.clone(),
                description: path.parse::<Category>().ok().map(Category::description),
            })
            .collect();
        Self {
            count: categories.len(),
            categories,
        }
    }
}

/// Reply of `list_category_items`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryItems {
    pub category: Category,
    pub count: usize,
    pub results: Vec<ResourceRef>,
}

/// Reply of `list_names_in_category`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryNames {
    pub category: Category,
    pub names: Vec<String>,
}

impl CategoryNames {
    #[must_use]
    pub fn new(category: Category, list: &ListResponse<ResourceRef>) -> Self {
        Self {
            category,
            names: list.results.iter().map(|r| r.name.clone()).collect(),
        }
    }
}

/// Reply of `get_class_features`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassFeatures {
    pub class_index: String,
    pub count: usize,
    pub features: Vec<ResourceRef>,
}

/// Reply of `get_monster_actions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonsterActions {
    pub monster_index: String,
    pub actions: Vec<MonsterAction>,
}

/// Reply of `spell_slots_table`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpellSlots {
    pub class_index: String,
    pub level: u8,
    pub spell_slots: Map<String, Value>,
}

/// Reply of `spells_by_school`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchoolSpells<S> {
    pub school_index: String,
    pub count: usize,
    pub spells: Vec<S>,
}

/// Reply of `monster_by_cr`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatedMonsters {
    pub cr: String,
    pub count: usize,
    pub monsters: Vec<ResourceRef>,
}

/// Reply of `equipment_by_type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentByType {
    pub equipment_type: String,
    pub count: usize,
    pub items: Vec<ResourceRef>,
}

// =============================================================================
// SUMMARIES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbilityBlock {
    pub strength: u8,
    pub dexterity: u8,
    pub constitution: u8,
    pub intelligence: u8,
    pub wisdom: u8,
    pub charisma: u8,
}

/// Condensed stat block for `summarize_monster`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonsterSummary {
    pub name: String,
    pub size: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub alignment: String,
    pub armor_class: Vec<ArmorClass>,
    pub hit_points: u32,
    pub hit_dice: String,
    pub challenge_rating: f64,
    pub xp: u32,
    pub speed: Map<String, Value>,
    pub abilities: AbilityBlock,
    pub proficiencies: Vec<MonsterProficiency>,
    pub senses: Map<String, Value>,
    pub languages: String,
    pub special_abilities: Vec<MonsterAction>,
    pub actions: Vec<MonsterAction>,
    pub legendary_actions: Vec<MonsterAction>,
}

impl From<&Monster> for MonsterSummary {
    fn from(m: &Monster) -> Self {
        Self {
            name: m.name.clone(),
            size: m.size.clone(),
            kind: m.kind.clone(),
            alignment: m.alignment.clone(),
            armor_class: m.armor_class.clone(),
            hit_points: m.hit_points,
            hit_dice: m.hit_dice.clone(),
            challenge_rating: m.challenge_rating,
            xp: m.xp,
            speed: m.speed.clone(),
            abilities: AbilityBlock {
                strength: m.strength,
                dexterity: m.dexterity,
                constitution: m.constitution,
                intelligence: m.intelligence,
                wisdom: m.wisdom,
                charisma: m.charisma,
            },
            proficiencies: m.proficiencies.clone(),
            senses: m.senses.clone(),
            languages: m.languages.clone(),
            special_abilities: m.special_abilities.clone(),
            actions: m.actions.clone(),
            legendary_actions: m.legendary_actions.clone(),
        }
    }
}

/// Condensed spell card for `summarize_spell`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpellSummary {
    pub name: String,
    pub level: u8,
    pub school: String,
    pub casting_time: String,
    pub range: String,
    pub components: Vec<String>,
    pub duration: String,
    pub concentration: bool,
    pub ritual: bool,
    pub desc: Vec<String>,
    pub higher_level: Vec<String>,
}

impl From<&Spell> for SpellSummary {
    fn from(s: &Spell) -> Self {
        Self {
            name: s.name.clone(),
            level: s.level,
            school: s.school.name.clone(),
            casting_time: s.casting_time.clone(),
            range: s.range.clone(),
            components: s.components.clone(),
            duration: s.duration.clone(),
            concentration: s.concentration,
            ritual: s.ritual,
            desc: s.desc.clone(),
            higher_level: s.higher_level.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::models::{AbilityScore, SpellRef};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn skill(index: &str) -> ResourceRef {
        ResourceRef {
            index: index.into(),
            name: index.into(),
            url: format!("/api/skills/{index}"),
        }
    }

    #[test]
    fn list_lookup_renders_count_and_results() {
        let lookup: Lookup<SpellRef, Spell> = Lookup::List(ListResponse::new(vec![SpellRef {
            index: "fireball".into(),
            name: "Fireball".into(),
            level: Some(3),
            url: "/api/spells/fireball".into(),
        }]));
        let text = lookup.render(Category::Spells).unwrap();
        assert_eq!(
            text,
            r#"{"count":1,"results":[{"index":"fireball","name":"Fireball","level":3,"url":"/api/spells/fireball"}]}"#
        );
    }

    #[test]
    fn empty_list_still_reports_count() {
        let lookup: Lookup<ResourceRef, Value> = Lookup::List(ListResponse::default());
        assert_eq!(
            lookup.render(Category::Feats).unwrap(),
            r#"{"count":0,"results":[]}"#
        );
    }

    #[test]
    fn list_count_follows_results_not_upstream_count() {
        let list = ListResponse {
            count: 99,
            results: vec![skill("athletics")],
        };
        let lookup: Lookup<ResourceRef, Value> = Lookup::List(list);
        let value: Value = serde_json::from_str(&lookup.render(Category::Skills).unwrap()).unwrap();
        assert_eq!(value["count"], 1);
    }

    #[test]
    fn entry_lookup_uses_entry_key() {
        let score = AbilityScore {
            index: "str".into(),
            name: "STR".into(),
            full_name: "Strength".into(),
            desc: vec![],
            skills: vec![skill("athletics")],
            url: "/api/ability-scores/str".into(),
        };
        let lookup: Lookup<ResourceRef, AbilityScore> = Lookup::Entry(score);
        let value: Value =
            serde_json::from_str(&lookup.render(Category::AbilityScores).unwrap()).unwrap();
        assert_eq!(value["ability_score"]["full_name"], "Strength");
        assert!(value.get("count").is_none());
    }

    #[test]
    fn category_listing_describes_known_categories() {
        let mut root = BTreeMap::new();
        root.insert("spells".to_string(), "/api/spells".to_string());
        root.insert("2024-rules".to_string(), "/api/2024-rules".to_string());

        let listing = CategoryListing::from_root(&root);
        assert_eq!(listing.count, 2);
        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["categories"][0]["category"], "2024-rules");
        assert_eq!(value["categories"][0]["description"], Value::Null);
        assert_eq!(
            value["categories"][1]["description"],
            "Magic spells with effects, components, and descriptions"
        );
    }

    #[test]
    fn category_names_collects_names() {
        let list = ListResponse::new(vec![skill("athletics"), skill("stealth")]);
        let names = CategoryNames::new(Category::Skills, &list);
        assert_eq!(
            serde_json::to_value(&names).unwrap(),
            json!({"category": "skills", "names": ["athletics", "stealth"]})
        );
    }

    #[test]
    fn monster_summary_groups_abilities() {
        let monster = Monster {
            name: "Goblin".into(),
            size: "Small".into(),
            kind: "humanoid".into(),
            armor_class: vec![ArmorClass {
                kind: "natural".into(),
                value: 15,
                desc: Some("leather armor, shield".into()),
            }],
            hit_points: 7,
            strength: 8,
            dexterity: 14,
            challenge_rating: 0.25,
            xp: 50,
            ..Monster::default()
        };
        let summary = MonsterSummary::from(&monster);
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["type"], "humanoid");
        assert_eq!(
            value["armor_class"],
            json!([{"type": "natural", "value": 15, "desc": "leather armor, shield"}])
        );
        assert_eq!(value["abilities"]["dexterity"], 14);
        assert_eq!(value["challenge_rating"], 0.25);
    }

    #[test]
    fn spell_summary_flattens_school() {
        let spell = Spell {
            name: "Fireball".into(),
            level: 3,
            school: ResourceRef {
                index: "evocation".into(),
                name: "Evocation".into(),
                url: "/api/magic-schools/evocation".into(),
            },
            components: vec!["V".into(), "S".into(), "M".into()],
            ..Spell::default()
        };
        let summary = SpellSummary::from(&spell);
        assert_eq!(summary.school, "Evocation");
        assert_eq!(summary.components.len(), 3);
    }
}
