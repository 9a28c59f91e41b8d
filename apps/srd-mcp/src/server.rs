//! # SRD MCP Server
//!
//! Implements `ServerHandler` with one lookup tool per upstream category plus
//! a set of auxiliary tools (summaries, random picks, filtered lists) that
//! proxy to the 5e SRD HTTP API.
//!
//! Every failure is returned to the caller as an error tool result whose text
//! reads `"<context>: <cause>"`; the protocol layer never sees it. Handlers
//! take their arguments as a raw JSON object and decode them in the body, so
//! a malformed argument is a tool failure too. The advertised schema still
//! comes from the typed parameter struct.

use crate::client::{ClientError, SrdClient};
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{common::schema_for_type, tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, JsonObject, ServerCapabilities, ServerInfo, Tool, ToolAnnotations,
    },
    schemars, tool, tool_handler, tool_router,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use srd_core::models::{
    AbilityScore, Alignment, Background, Class, ClassLevel, EquipmentCategory, ListResponse,
    Monster, Resource, ResourceRef, Spell, SpellRef,
};
use srd_core::output::{
    CategoryItems, CategoryListing, CategoryNames, ClassFeatures, EquipmentByType, Lookup,
    MonsterActions, MonsterSummary, RatedMonsters, SchoolSpells, SpellSlots, SpellSummary,
    to_json_text,
};
use srd_core::{
    Category, ListFilter, MonsterFilter, SpellFilter, SrdError, flatten_input_schema,
    format_challenge_rating, to_index,
};
use std::sync::Arc;
use thiserror::Error;

/// Highest character level a class table covers.
const MAX_CLASS_LEVEL: u8 = 20;

// =============================================================================
// MCP SERVER
// =============================================================================

/// MCP server that bridges to the 5e SRD HTTP API.
#[derive(Clone)]
pub struct SrdMcp {
    client: SrdClient,
    tool_router: ToolRouter<Self>,
}

/// Failure inside a tool body, before it is rendered as an error result.
#[derive(Debug, Error)]
enum ToolError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Domain(#[from] SrdError),
    #[error("{0}")]
    Missing(String),
}

type ToolOutcome = Result<String, ToolError>;

// =============================================================================
// TOOL PARAMETER STRUCTS
// =============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NameParams {
    /// Name or index of the entry to retrieve. Omit to list every entry.
    #[schemars(description = "Name or index of the entry to retrieve (e.g. 'Magic Missile' or 'magic-missile'). Omit to list every entry.")]
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SpellParams {
    /// The name of the spell to retrieve.
    #[schemars(description = "The name of the spell to retrieve. Omit to list spells.")]
    #[serde(default)]
    pub name: Option<String>,
    /// The level of the spell.
    #[schemars(description = "The level of the spell (0 for cantrips)")]
    #[serde(default)]
    pub level: Option<u8>,
    /// The school of magic the spell belongs to.
    #[schemars(description = "The school of magic the spell belongs to (e.g. 'evocation')")]
    #[serde(default)]
    pub school: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MonsterParams {
    /// The index of the monster to retrieve.
    #[schemars(description = "The name or index of the monster to retrieve. Omit to list monsters.")]
    #[serde(default)]
    pub name: Option<String>,
    /// The challenge rating(s) to filter on.
    #[schemars(description = "The challenge rating(s) to filter on (e.g. [0.25, 1, 10])")]
    #[serde(default)]
    pub challenge_rating: Vec<f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CategoryParams {
    #[schemars(description = "The API category (e.g. 'spells', 'monsters', 'equipment')")]
    pub category: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ResourceIndexParams {
    #[schemars(description = "The API category the item belongs to (e.g. 'spells', 'monsters', 'equipment')")]
    pub category: String,
    #[schemars(description = "The unique identifier of the item (e.g. 'fireball', 'adult-red-dragon')")]
    pub index: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ClassIndexParams {
    #[schemars(description = "The class index, e.g. 'wizard', 'fighter'")]
    pub class_index: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MonsterIndexParams {
    #[schemars(description = "The monster index, e.g. 'adult-red-dragon'")]
    pub monster_index: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SpellIndexParams {
    #[schemars(description = "The spell index, e.g. 'fireball'")]
    pub spell_index: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SpellSlotsParams {
    #[schemars(description = "The class index, e.g. 'wizard', 'cleric'")]
    pub class_index: String,
    #[schemars(description = "The class level (1-20)")]
    pub level: u8,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SchoolParams {
    #[schemars(description = "The school index, e.g. 'evocation', 'illusion'")]
    pub school_index: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ChallengeRatingParams {
    #[schemars(description = "The challenge rating (e.g. 0.25, 1, 5, 10)")]
    pub cr: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EquipmentTypeParams {
    #[schemars(description = "The equipment category index, e.g. 'weapon', 'armor', 'tools'")]
    pub equipment_type: String,
}

// =============================================================================
// PER-CATEGORY TOOLS
// =============================================================================

#[tool_router]
impl SrdMcp {
    /// Build the server and rewrite every tool's advertised schema.
    pub fn new(client: SrdClient) -> Self {
        let mut tool_router = Self::tool_router();
        for route in tool_router.map.values_mut() {
            let schema = flatten_input_schema(&route.attr.input_schema);
            let properties: Vec<&String> = schema
                .get("properties")
                .and_then(Value::as_object)
                .map(|p| p.keys().collect())
                .unwrap_or_default();
            tracing::info!(tool = %route.attr.name, ?properties, "Registered tool");

            route.attr.annotations = Some(ToolAnnotations {
                read_only_hint: Some(true),
                open_world_hint: Some(true),
                ..Default::default()
            });
            route.attr.input_schema = Arc::new(schema);
        }
        Self {
            client,
            tool_router,
        }
    }

    #[tool(
        name = "ability-scores",
        description = "Fetches information about D&D 5e ability scores (e.g. 'str', 'dex').",
        input_schema = schema_for_type::<NameParams>()
    )]
    pub async fn ability_scores(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.named::<ResourceRef, AbilityScore>(Category::AbilityScores, params.0).await
    }

    #[tool(
        name = "alignments",
        description = "Fetches information about D&D 5e alignments (e.g. 'chaotic-good').",
        input_schema = schema_for_type::<NameParams>()
    )]
    pub async fn alignments(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.named::<ResourceRef, Alignment>(Category::Alignments, params.0).await
    }

    #[tool(
        name = "backgrounds",
        description = "Fetches information about D&D 5e character backgrounds (e.g. 'acolyte').",
        input_schema = schema_for_type::<NameParams>()
    )]
    pub async fn backgrounds(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.named::<ResourceRef, Background>(Category::Backgrounds, params.0).await
    }

    #[tool(
        name = "classes",
        description = "Fetches information about D&D 5e classes (e.g. 'barbarian').",
        input_schema = schema_for_type::<NameParams>()
    )]
    pub async fn classes(&self, params: Parameters<JsonObject>) -> Result<CallToolResult, McpError> {
        self.named::<ResourceRef, Class>(Category::Classes, params.0).await
    }

    #[tool(
        name = "conditions",
        description = "Fetches information about D&D 5e conditions (e.g. 'blinded', 'stunned').",
        input_schema = schema_for_type::<NameParams>()
    )]
    pub async fn conditions(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.generic(Category::Conditions, params.0).await
    }

    #[tool(
        name = "damage-types",
        description = "Fetches information about D&D 5e damage types.",
        input_schema = schema_for_type::<NameParams>()
    )]
    pub async fn damage_types(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.generic(Category::DamageTypes, params.0).await
    }

    #[tool(
        name = "equipment",
        description = "Fetches information about D&D 5e equipment: weapons, armor and gear.",
        input_schema = schema_for_type::<NameParams>()
    )]
    pub async fn equipment(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.generic(Category::Equipment, params.0).await
    }

    #[tool(
        name = "equipment-categories",
        description = "Fetches information about D&D 5e equipment categories and their items.",
        input_schema = schema_for_type::<NameParams>()
    )]
    pub async fn equipment_categories(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.named::<ResourceRef, EquipmentCategory>(Category::EquipmentCategories, params.0).await
    }

    #[tool(
        name = "feats",
        description = "Fetches information about D&D 5e feats.",
        input_schema = schema_for_type::<NameParams>()
    )]
    pub async fn feats(&self, params: Parameters<JsonObject>) -> Result<CallToolResult, McpError> {
        self.generic(Category::Feats, params.0).await
    }

    #[tool(
        name = "features",
        description = "Fetches information about D&D 5e class and racial features.",
        input_schema = schema_for_type::<NameParams>()
    )]
    pub async fn features(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.generic(Category::Features, params.0).await
    }

    #[tool(
        name = "languages",
        description = "Fetches information about D&D 5e languages.",
        input_schema = schema_for_type::<NameParams>()
    )]
    pub async fn languages(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.generic(Category::Languages, params.0).await
    }

    #[tool(
        name = "magic-items",
        description = "Fetches information about D&D 5e magic items.",
        input_schema = schema_for_type::<NameParams>()
    )]
    pub async fn magic_items(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.generic(Category::MagicItems, params.0).await
    }

    #[tool(
        name = "magic-schools",
        description = "Fetches information about D&D 5e schools of magic.",
        input_schema = schema_for_type::<NameParams>()
    )]
    pub async fn magic_schools(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.generic(Category::MagicSchools, params.0).await
    }

    #[tool(
        name = "monsters",
        description = "Fetches information about D&D 5e monsters, optionally filtered by challenge rating.",
        input_schema = schema_for_type::<MonsterParams>()
    )]
    pub async fn monsters(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let MonsterParams {
            name,
            challenge_rating,
        } = match decode(params.0) {
            Ok(params) => params,
            Err(rejected) => return Ok(rejected),
        };
        let query = MonsterFilter { challenge_rating }.query_string();
        self.lookup::<ResourceRef, Monster>(Category::Monsters, name, query)
            .await
    }

    #[tool(
        name = "proficiencies",
        description = "Fetches information about D&D 5e proficiencies.",
        input_schema = schema_for_type::<NameParams>()
    )]
    pub async fn proficiencies(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.generic(Category::Proficiencies, params.0).await
    }

    #[tool(
        name = "races",
        description = "Fetches information about D&D 5e races.",
        input_schema = schema_for_type::<NameParams>()
    )]
    pub async fn races(&self, params: Parameters<JsonObject>) -> Result<CallToolResult, McpError> {
        self.generic(Category::Races, params.0).await
    }

    #[tool(
        name = "rule-sections",
        description = "Fetches sections of the D&D 5e rules.",
        input_schema = schema_for_type::<NameParams>()
    )]
    pub async fn rule_sections(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.generic(Category::RuleSections, params.0).await
    }

    #[tool(
        name = "rules",
        description = "Fetches the D&D 5e game rules.",
        input_schema = schema_for_type::<NameParams>()
    )]
    pub async fn rules(&self, params: Parameters<JsonObject>) -> Result<CallToolResult, McpError> {
        self.generic(Category::Rules, params.0).await
    }

    #[tool(
        name = "skills",
        description = "Fetches information about D&D 5e skills.",
        input_schema = schema_for_type::<NameParams>()
    )]
    pub async fn skills(&self, params: Parameters<JsonObject>) -> Result<CallToolResult, McpError> {
        self.generic(Category::Skills, params.0).await
    }

    #[tool(
        name = "spells",
        description = "Fetches information about D&D 5e spells, optionally filtered by level and school.",
        input_schema = schema_for_type::<SpellParams>()
    )]
    pub async fn spells(&self, params: Parameters<JsonObject>) -> Result<CallToolResult, McpError> {
        let SpellParams {
            name,
            level,
            school,
        } = match decode(params.0) {
            Ok(params) => params,
            Err(rejected) => return Ok(rejected),
        };
        let query = SpellFilter { level, school }.query_string();
        self.lookup::<SpellRef, Spell>(Category::Spells, name, query)
            .await
    }

    #[tool(
        name = "subclasses",
        description = "Fetches information about D&D 5e subclasses.",
        input_schema = schema_for_type::<NameParams>()
    )]
    pub async fn subclasses(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.generic(Category::Subclasses, params.0).await
    }

    #[tool(
        name = "subraces",
        description = "Fetches information about D&D 5e subraces.",
        input_schema = schema_for_type::<NameParams>()
    )]
    pub async fn subraces(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.generic(Category::Subraces, params.0).await
    }

    #[tool(
        name = "traits",
        description = "Fetches information about D&D 5e racial traits.",
        input_schema = schema_for_type::<NameParams>()
    )]
    pub async fn traits(&self, params: Parameters<JsonObject>) -> Result<CallToolResult, McpError> {
        self.generic(Category::Traits, params.0).await
    }

    #[tool(
        name = "weapon-properties",
        description = "Fetches information about D&D 5e weapon properties.",
        input_schema = schema_for_type::<NameParams>()
    )]
    pub async fn weapon_properties(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.generic(Category::WeaponProperties, params.0).await
    }

    // =========================================================================
    // AUXILIARY TOOLS
    // =========================================================================

    #[tool(description = "List all available D&D 5e API resource categories (API root).")]
    pub async fn list_resources(&self) -> Result<CallToolResult, McpError> {
        let outcome = async {
            let root = self.client.root().await?;
            Ok::<_, ToolError>(to_json_text(&CategoryListing::from_root(&root))?)
        }
        .await;
        respond(outcome, || "Failed to list resources".to_string())
    }

    #[tool(
        description = "List all items in a D&D 5e API category (e.g. spells, monsters, equipment).",
        input_schema = schema_for_type::<CategoryParams>()
    )]
    pub async fn list_category_items(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let CategoryParams { category: raw } = match decode(params.0) {
            Ok(params) => params,
            Err(rejected) => return Ok(rejected),
        };
        let outcome = async {
            let category: Category = raw.parse()?;
            let list = self.client.list::<ResourceRef>(category, "").await?;
            Ok::<_, ToolError>(to_json_text(&CategoryItems {
                category,
                count: list.results.len(),
                results: list.results,
            })?)
        }
        .await;
        respond(outcome, || format!("Failed to list category '{raw}'"))
    }

    #[tool(
        description = "List all names in a D&D 5e API category (e.g. all monster names, spell names).",
        input_schema = schema_for_type::<CategoryParams>()
    )]
    pub async fn list_names_in_category(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let CategoryParams { category: raw } = match decode(params.0) {
            Ok(params) => params,
            Err(rejected) => return Ok(rejected),
        };
        let outcome = async {
            let category: Category = raw.parse()?;
            let list = self.client.list::<ResourceRef>(category, "").await?;
            if list.is_empty() {
                return Err(ToolError::Missing(format!(
                    "No items found in category: {category}"
                )));
            }
            Ok::<_, ToolError>(to_json_text(&CategoryNames::new(category, &list))?)
        }
        .await;
        respond(outcome, || format!("Failed to list names in '{raw}'"))
    }

    #[tool(
        description = "Get a specific D&D 5e resource by category and index (e.g. a spell, monster, or item).",
        input_schema = schema_for_type::<ResourceIndexParams>()
    )]
    pub async fn get_resource_by_index(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let ResourceIndexParams { category, index } = match decode(params.0) {
            Ok(params) => params,
            Err(rejected) => return Ok(rejected),
        };
        let index = to_index(&index);
        let outcome = async {
            let parsed: Category = category.parse()?;
            let value: Value = self.client.fetch(parsed, &index).await?;
            Ok::<_, ToolError>(to_json_text(&value)?)
        }
        .await;
        respond(outcome, || format!("Failed to fetch {category}/{index}"))
    }

    #[tool(
        description = "Get all features for a D&D 5e class (by class index).",
        input_schema = schema_for_type::<ClassIndexParams>()
    )]
    pub async fn get_class_features(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let ClassIndexParams { class_index } = match decode(params.0) {
            Ok(params) => params,
            Err(rejected) => return Ok(rejected),
        };
        let class_index = to_index(&class_index);
        let outcome = async {
            let list: ListResponse<ResourceRef> = self
                .client
                .get(
                    &[Category::Classes.path(), class_index.as_str(), "features"],
                    "",
                )
                .await?;
            Ok::<_, ToolError>(to_json_text(&ClassFeatures {
                class_index: class_index.clone(),
                count: list.results.len(),
                features: list.results,
            })?)
        }
        .await;
        respond(outcome, || {
            format!("Failed to fetch features for class '{class_index}'")
        })
    }

    #[tool(
        description = "Get all actions for a D&D 5e monster (by monster index).",
        input_schema = schema_for_type::<MonsterIndexParams>()
    )]
    pub async fn get_monster_actions(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let MonsterIndexParams { monster_index } = match decode(params.0) {
            Ok(params) => params,
            Err(rejected) => return Ok(rejected),
        };
        let monster_index = to_index(&monster_index);
        let outcome = async {
            let monster: Monster = self.client.fetch(Category::Monsters, &monster_index).await?;
            Ok::<_, ToolError>(to_json_text(&MonsterActions {
                monster_index: monster_index.clone(),
                actions: monster.actions,
            })?)
        }
        .await;
        respond(outcome, || {
            format!("Failed to fetch actions for monster '{monster_index}'")
        })
    }

    #[tool(
        description = "Get a concise stat block summary for a D&D 5e monster (by monster index).",
        input_schema = schema_for_type::<MonsterIndexParams>()
    )]
    pub async fn summarize_monster(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let MonsterIndexParams { monster_index } = match decode(params.0) {
            Ok(params) => params,
            Err(rejected) => return Ok(rejected),
        };
        let monster_index = to_index(&monster_index);
        let outcome = async {
            let monster: Monster = self.client.fetch(Category::Monsters, &monster_index).await?;
            Ok::<_, ToolError>(to_json_text(&MonsterSummary::from(&monster))?)
        }
        .await;
        respond(outcome, || {
            format!("Failed to summarize monster '{monster_index}'")
        })
    }

    #[tool(
        description = "Get a concise summary for a D&D 5e spell (by spell index).",
        input_schema = schema_for_type::<SpellIndexParams>()
    )]
    pub async fn summarize_spell(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let SpellIndexParams { spell_index } = match decode(params.0) {
            Ok(params) => params,
            Err(rejected) => return Ok(rejected),
        };
        let spell_index = to_index(&spell_index);
        let outcome = async {
            let spell: Spell = self.client.fetch(Category::Spells, &spell_index).await?;
            Ok::<_, ToolError>(to_json_text(&SpellSummary::from(&spell))?)
        }
        .await;
        respond(outcome, || format!("Failed to summarize spell '{spell_index}'"))
    }

    #[tool(
        description = "Return the spell slots table for a given class and level.",
        input_schema = schema_for_type::<SpellSlotsParams>()
    )]
    pub async fn spell_slots_table(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let SpellSlotsParams { class_index, level } = match decode(params.0) {
            Ok(params) => params,
            Err(rejected) => return Ok(rejected),
        };
        let class_index = to_index(&class_index);
        let outcome = async {
            if !(1..=MAX_CLASS_LEVEL).contains(&level) {
                return Err(ToolError::Domain(SrdError::InvalidArgument(format!(
                    "level must be between 1 and {MAX_CLASS_LEVEL}, got {level}"
                ))));
            }
            let level_segment = level.to_string();
            let class_level: ClassLevel = self
                .client
                .get(
                    &[
                        Category::Classes.path(),
                        class_index.as_str(),
                        "levels",
                        level_segment.as_str(),
                    ],
                    "",
                )
                .await?;
            let spell_slots = class_level
                .spellcasting
                .filter(|slots| !slots.is_empty())
                .ok_or_else(|| {
                    ToolError::Missing(format!(
                        "spellcasting not found for class {class_index} at level {level}"
                    ))
                })?;
            Ok::<_, ToolError>(to_json_text(&SpellSlots {
                class_index: class_index.clone(),
                level,
                spell_slots,
            })?)
        }
        .await;
        respond(outcome, || {
            format!("Failed to fetch spell slots for '{class_index}'")
        })
    }

    #[tool(description = "Get a random monster from the D&D 5e API.")]
    pub async fn random_monster(&self) -> Result<CallToolResult, McpError> {
        let outcome = self.random::<Monster>(Category::Monsters).await;
        respond(outcome, || "Failed to pick a random monster".to_string())
    }

    #[tool(description = "Get a random spell from the D&D 5e API.")]
    pub async fn random_spell(&self) -> Result<CallToolResult, McpError> {
        let outcome = self.random::<Spell>(Category::Spells).await;
        respond(outcome, || "Failed to pick a random spell".to_string())
    }

    #[tool(
        description = "List all spells from a specific school of magic.",
        input_schema = schema_for_type::<SchoolParams>()
    )]
    pub async fn spells_by_school(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let SchoolParams { school_index } = match decode(params.0) {
            Ok(params) => params,
            Err(rejected) => return Ok(rejected),
        };
        let school_index = to_index(&school_index);
        let outcome = async {
            let query = SpellFilter {
                level: None,
                school: Some(school_index.clone()),
            }
            .query_string();
            let list = self.client.list::<SpellRef>(Category::Spells, &query).await?;
            Ok::<_, ToolError>(to_json_text(&SchoolSpells {
                school_index: school_index.clone(),
                count: list.results.len(),
                spells: list.results,
            })?)
        }
        .await;
        respond(outcome, || {
            format!("Failed to list spells of school '{school_index}'")
        })
    }

    #[tool(
        description = "List all monsters of a given challenge rating (CR).",
        input_schema = schema_for_type::<ChallengeRatingParams>()
    )]
    pub async fn monster_by_cr(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let ChallengeRatingParams { cr } = match decode(params.0) {
            Ok(params) => params,
            Err(rejected) => return Ok(rejected),
        };
        let rendered = format_challenge_rating(cr);
        let outcome = async {
            if !cr.is_finite() || cr < 0.0 {
                return Err(ToolError::Domain(SrdError::InvalidArgument(format!(
                    "challenge rating must be a non-negative number, got {rendered}"
                ))));
            }
            let query = MonsterFilter {
                challenge_rating: vec![cr],
            }
            .query_string();
            let list = self
                .client
                .list::<ResourceRef>(Category::Monsters, &query)
                .await?;
            Ok::<_, ToolError>(to_json_text(&RatedMonsters {
                cr: rendered.clone(),
                count: list.results.len(),
                monsters: list.results,
            })?)
        }
        .await;
        respond(outcome, || format!("Failed to list monsters of CR {rendered}"))
    }

    #[tool(
        description = "List all equipment of a specific type (e.g. weapon, armor, tools).",
        input_schema = schema_for_type::<EquipmentTypeParams>()
    )]
    pub async fn equipment_by_type(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let EquipmentTypeParams { equipment_type } = match decode(params.0) {
            Ok(params) => params,
            Err(rejected) => return Ok(rejected),
        };
        let equipment_type = to_index(&equipment_type);
        let outcome = async {
            let category: EquipmentCategory = self
                .client
                .fetch(Category::EquipmentCategories, &equipment_type)
                .await?;
            Ok::<_, ToolError>(to_json_text(&EquipmentByType {
                equipment_type: equipment_type.clone(),
                count: category.equipment.len(),
                items: category.equipment,
            })?)
        }
        .await;
        respond(outcome, || {
            format!("Failed to list equipment of type '{equipment_type}'")
        })
    }
}

// =============================================================================
// SHARED TOOL BODIES
// =============================================================================

impl SrdMcp {
    /// Every registered tool, sorted by name, as advertised to clients.
    pub fn tools(&self) -> Vec<Tool> {
        let mut tools = self.tool_router.list_all();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    /// Fetch one entry when `name` is non-blank, else the filtered list.
    async fn lookup<L, D>(
        &self,
        category: Category,
        name: Option<String>,
        query: String,
    ) -> Result<CallToolResult, McpError>
    where
        L: DeserializeOwned + Serialize,
        D: DeserializeOwned + Serialize,
    {
        let name = name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        let outcome = async {
            let lookup: Lookup<L, D> = match name.as_deref() {
                Some(name) => Lookup::Entry(self.client.fetch_by_name(category, name).await?),
                None => Lookup::List(self.client.list(category, &query).await?),
            };
            Ok::<_, ToolError>(lookup.render(category)?)
        }
        .await;
        respond(outcome, || match &name {
            Some(name) => format!("Failed to fetch {} '{name}'", category.entry_key()),
            None => format!("Failed to list {category}"),
        })
    }

    /// Categories whose only argument is an optional `name`.
    async fn named<L, D>(
        &self,
        category: Category,
        args: JsonObject,
    ) -> Result<CallToolResult, McpError>
    where
        L: DeserializeOwned + Serialize,
        D: DeserializeOwned + Serialize,
    {
        match decode::<NameParams>(args) {
            Ok(NameParams { name }) => self.lookup::<L, D>(category, name, String::new()).await,
            Err(rejected) => Ok(rejected),
        }
    }

    /// Categories without a dedicated model or filter.
    async fn generic(
        &self,
        category: Category,
        args: JsonObject,
    ) -> Result<CallToolResult, McpError> {
        self.named::<ResourceRef, Resource>(category, args).await
    }

    /// List the category, pick one entry, fetch its detail.
    async fn random<D>(&self, category: Category) -> ToolOutcome
    where
        D: DeserializeOwned + Serialize,
    {
        let list = self.client.list::<ResourceRef>(category, "").await?;
        let picked = list
            .choose(&mut rand::thread_rng())
            .map(|entry| entry.index.clone())
            .ok_or_else(|| ToolError::Missing(format!("no entries in {category}")))?;
        let detail: D = self.client.fetch(category, &picked).await?;
        Ok(Lookup::<ResourceRef, D>::Entry(detail).render(category)?)
    }
}

/// Decode raw tool arguments into a parameter struct. A missing, mistyped or
/// out-of-range argument becomes an error result.
fn decode<T: DeserializeOwned>(args: JsonObject) -> Result<T, CallToolResult> {
    serde_json::from_value(Value::Object(args)).map_err(|e| {
        let cause = SrdError::InvalidArgument(e.to_string());
        failure(format!("Rejected tool arguments: {cause}"))
    })
}

/// Wrap a tool body's outcome as a text result; failures become error results.
fn respond(
    outcome: ToolOutcome,
    context: impl FnOnce() -> String,
) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(e) => Ok(failure(format!("{}: {e}", context()))),
    }
}

fn failure(message: String) -> CallToolResult {
    tracing::warn!(%message, "Tool call failed");
    CallToolResult::error(vec![Content::text(message)])
}

// =============================================================================
// SERVER HANDLER
// =============================================================================

#[tool_handler]
impl ServerHandler for SrdMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "D&D 5e System Reference Document server. Each category tool (spells, \
                 monsters, classes, ...) lists its entries, or fetches one when given a \
                 name. Auxiliary tools summarize entries, pick random ones and filter \
                 lists by school, challenge rating or equipment type."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
