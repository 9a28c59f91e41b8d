//! # Category Catalogue
//!
//! Every resource family the upstream API serves lives under one path segment
//! below the API root (`/spells`, `/monsters`, ...). `Category` is the closed
//! set of those segments. Each category is also exposed as one MCP tool whose
//! name is the path segment.

use crate::error::SrdError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// CATEGORY
// =============================================================================

/// An upstream resource category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    AbilityScores,
    Alignments,
    Backgrounds,
    Classes,
    Conditions,
    DamageTypes,
    Equipment,
    EquipmentCategories,
    Feats,
    Features,
    Languages,
    MagicItems,
    MagicSchools,
    Monsters,
    Proficiencies,
    Races,
    RuleSections,
    Rules,
    Skills,
    Spells,
    Subclasses,
    Subraces,
    Traits,
    WeaponProperties,
}

impl Category {
    /// All categories, in path order.
    pub const ALL: [Category; 24] = [
        Self::AbilityScores,
        Self::Alignments,
        Self::Backgrounds,
        Self::Classes,
        Self::Conditions,
        Self::DamageTypes,
        Self::Equipment,
        Self::EquipmentCategories,
        Self::Feats,
        Self::Features,
        Self::Languages,
        Self::MagicItems,
        Self::MagicSchools,
        Self::Monsters,
        Self::Proficiencies,
        Self::Races,
        Self::RuleSections,
        Self::Rules,
        Self::Skills,
        Self::Spells,
        Self::Subclasses,
        Self::Subraces,
        Self::Traits,
        Self::WeaponProperties,
    ];

    /// The URL path segment under the API root. Doubles as the tool name.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::AbilityScores => "ability-scores",
            Self::Alignments => "alignments",
            Self::Backgrounds => "backgrounds",
            Self::Classes => "classes",
            Self::Conditions => "conditions",
            Self::DamageTypes => "damage-types",
            Self::Equipment => "equipment",
            Self::EquipmentCategories => "equipment-categories",
            Self::Feats => "feats",
            Self::Features => "features",
            Self::Languages => "languages",
            Self::MagicItems => "magic-items",
            Self::MagicSchools => "magic-schools",
            Self::Monsters => "monsters",
            Self::Proficiencies => "proficiencies",
            Self::Races => "races",
            Self::RuleSections => "rule-sections",
            Self::Rules => "rules",
            Self::Skills => "skills",
            Self::Spells => "spells",
            Self::Subclasses => "subclasses",
            Self::Subraces => "subraces",
            Self::Traits => "traits",
            Self::WeaponProperties => "weapon-properties",
        }
    }

    /// JSON key used when a tool replies with a single entry.
    #[must_use]
    pub const fn entry_key(self) -> &'static str {
        match self {
            Self::AbilityScores => "ability_score",
            Self::Alignments => "alignment",
            Self::Backgrounds => "background",
            Self::Classes => "class",
            Self::Conditions => "condition",
            Self::DamageTypes => "damage_type",
            Self::Equipment => "equipment",
            Self::EquipmentCategories => "equipment_category",
            Self::Feats => "feat",
            Self::Features => "feature",
            Self::Languages => "language",
            Self::MagicItems => "magic_item",
            Self::MagicSchools => "magic_school",
            Self::Monsters => "monster",
            Self::Proficiencies => "proficiency",
            Self::Races => "race",
            Self::RuleSections => "rule_section",
            Self::Rules => "rule",
            Self::Skills => "skill",
            Self::Spells => "spell",
            Self::Subclasses => "subclass",
            Self::Subraces => "subrace",
            Self::Traits => "trait",
            Self::WeaponProperties => "weapon_property",
        }
    }

    /// What the category contains, in one line.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AbilityScores => {
                "The six abilities that describe a character's physical and mental characteristics"
            }
            Self::Alignments => "The moral and ethical attitudes and behaviors of creatures",
            Self::Backgrounds => "Character backgrounds and their features",
            Self::Classes => "Character classes with features, proficiencies, and subclasses",
            Self::Conditions => "Status conditions that affect creatures",
            Self::DamageTypes => "Types of damage that can be dealt",
            Self::Equipment => "Items, weapons, armor, and gear for adventuring",
            Self::EquipmentCategories => "Categories of equipment",
            Self::Feats => "Special abilities and features",
            Self::Features => "Class and racial features",
            Self::Languages => "Languages spoken throughout the multiverse",
            Self::MagicItems => "Magical equipment with special properties",
            Self::MagicSchools => "Schools of magic specialization",
            Self::Monsters => "Creatures and foes",
            Self::Proficiencies => "Skills and tools characters can be proficient with",
            Self::Races => "Character races and their traits",
            Self::RuleSections => "Sections of the game rules",
            Self::Rules => "Game rules",
            Self::Skills => "Character skills tied to ability scores",
            Self::Spells => "Magic spells with effects, components, and descriptions",
            Self::Subclasses => "Specializations within character classes",
            Self::Subraces => "Variants of character races",
            Self::Traits => "Racial traits",
            Self::WeaponProperties => "Special properties of weapons",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

impl FromStr for Category {
    type Err = SrdError;

    /// Accepts the path segment in any case, with `_` in place of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|category| category.path() == normalized)
            .ok_or_else(|| SrdError::UnknownCategory(s.to_string()))
    }
}
