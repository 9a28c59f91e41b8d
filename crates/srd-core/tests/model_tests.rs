//! # Upstream Payload Tests
//!
//! Decodes trimmed copies of real API responses and checks the envelopes
//! built from them.

#![allow(clippy::unwrap_used, clippy::panic, clippy::float_cmp)]

use serde_json::{Value, json};
use srd_core::Category;
use srd_core::models::{
    AbilityScore, ClassLevel, ListResponse, Monster, Resource, ResourceRef, Spell, SpellRef,
};
use srd_core::output::{Lookup, MonsterSummary, SpellSummary};

// =============================================================================
// FIXTURES
// =============================================================================

fn fireball() -> Value {
    json!({
        "index": "fireball",
        "name": "Fireball",
        "desc": ["A bright streak flashes from your pointing finger."],
        "higher_level": ["The damage increases by 1d6 for each slot level above 3rd."],
        "range": "150 feet",
        "components": ["V", "S", "M"],
        "material": "A tiny ball of bat guano and sulfur.",
        "ritual": false,
        "duration": "Instantaneous",
        "concentration": false,
        "casting_time": "1 action",
        "level": 3,
        "damage": {
            "damage_type": {"index": "fire", "name": "Fire", "url": "/api/damage-types/fire"},
            "damage_at_slot_level": {"3": "8d6", "4": "9d6"}
        },
        "dc": {
            "dc_type": {"index": "dex", "name": "DEX", "url": "/api/ability-scores/dex"},
            "dc_success": "half"
        },
        "area_of_effect": {"type": "sphere", "size": 20},
        "school": {"index": "evocation", "name": "Evocation", "url": "/api/magic-schools/evocation"},
        "classes": [{"index": "wizard", "name": "Wizard", "url": "/api/classes/wizard"}],
        "subclasses": [],
        "url": "/api/spells/fireball",
        "updated_at": "2024-01-01T00:00:00.000Z"
    })
}

fn goblin() -> Value {
    json!({
        "index": "goblin",
        "name": "Goblin",
        "size": "Small",
        "type": "humanoid",
        "subtype": "goblinoid",
        "alignment": "neutral evil",
        "armor_class": [{"type": "armor", "value": 15}],
        "hit_points": 7,
        "hit_dice": "2d6",
        "hit_points_roll": "2d6",
        "speed": {"walk": "30 ft."},
        "strength": 8,
        "dexterity": 14,
        "constitution": 10,
        "intelligence": 10,
        "wisdom": 8,
        "charisma": 8,
        "proficiencies": [{
            "value": 6,
            "proficiency": {"index": "skill-stealth", "name": "Skill: Stealth", "url": "/api/proficiencies/skill-stealth"}
        }],
        "damage_vulnerabilities": [],
        "damage_resistances": [],
        "damage_immunities": [],
        "condition_immunities": [],
        "senses": {"darkvision": "60 ft.", "passive_perception": 9},
        "languages": "Common, Goblin",
        "challenge_rating": 0.25,
        "proficiency_bonus": 2,
        "xp": 50,
        "special_abilities": [{
            "name": "Nimble Escape",
            "desc": "The goblin can take the Disengage or Hide action as a bonus action."
        }],
        "actions": [{
            "name": "Scimitar",
            "desc": "Melee Weapon Attack: +4 to hit.",
            "attack_bonus": 4,
            "damage": [{
                "damage_type": {"index": "slashing", "name": "Slashing", "url": "/api/damage-types/slashing"},
                "damage_dice": "1d6+2"
            }]
        }],
        "url": "/api/monsters/goblin"
    })
}

// =============================================================================
// DECODING
// =============================================================================

#[test]
fn spell_detail_decodes() {
    let spell: Spell = serde_json::from_value(fireball()).unwrap();
    assert_eq!(spell.level, 3);
    assert_eq!(spell.school.index, "evocation");
    assert_eq!(spell.area_of_effect.as_ref().unwrap().kind, "sphere");
    let damage = spell.damage.as_ref().unwrap();
    assert_eq!(damage.damage_at_slot_level["4"], "9d6");
    assert!(damage.damage_at_character_level.is_empty());
}

#[test]
fn monster_detail_decodes() {
    let monster: Monster = serde_json::from_value(goblin()).unwrap();
    assert_eq!(monster.kind, "humanoid");
    assert_eq!(monster.challenge_rating, 0.25);
    assert_eq!(monster.armor_class[0].value, 15);
    assert_eq!(monster.actions[0].attack_bonus, Some(4));
    assert!(monster.legendary_actions.is_empty());
    assert!(monster.reactions.is_empty());
}

#[test]
fn sparse_payloads_fall_back_to_defaults() {
    let monster: Monster = serde_json::from_value(json!({"index": "blob", "name": "Blob"})).unwrap();
    assert_eq!(monster.hit_points, 0);
    assert!(monster.actions.is_empty());

    let spell: Spell = serde_json::from_value(json!({"name": "Light", "level": 0})).unwrap();
    assert_eq!(spell.level, 0);
    assert!(spell.damage.is_none());
}

#[test]
fn ability_score_decodes() {
    let score: AbilityScore = serde_json::from_value(json!({
        "index": "str",
        "name": "STR",
        "full_name": "Strength",
        "desc": ["Strength measures bodily power."],
        "skills": [{"index": "athletics", "name": "Athletics", "url": "/api/skills/athletics"}],
        "url": "/api/ability-scores/str"
    }))
    .unwrap();
    assert_eq!(score.full_name, "Strength");
    assert_eq!(score.skills.len(), 1);
}

#[test]
fn class_level_keeps_spellcasting_table() {
    let level: ClassLevel = serde_json::from_value(json!({
        "level": 5,
        "prof_bonus": 3,
        "features": [],
        "spellcasting": {
            "cantrips_known": 4,
            "spell_slots_level_1": 4,
            "spell_slots_level_2": 3,
            "spell_slots_level_3": 2
        },
        "class": {"index": "wizard", "name": "Wizard", "url": "/api/classes/wizard"},
        "index": "wizard-5",
        "url": "/api/classes/wizard/levels/5"
    }))
    .unwrap();
    let slots = level.spellcasting.unwrap();
    assert_eq!(slots["spell_slots_level_3"], 2);
    assert_eq!(slots.keys().next().map(String::as_str), Some("cantrips_known"));
}

#[test]
fn generic_resource_passes_unknown_fields_through() {
    let payload = json!({
        "index": "blinded",
        "name": "Blinded",
        "desc": ["A blinded creature can't see."],
        "url": "/api/conditions/blinded"
    });
    let resource: Resource = serde_json::from_value(payload.clone()).unwrap();
    assert_eq!(resource.fields["desc"][0], "A blinded creature can't see.");
    assert_eq!(serde_json::to_value(&resource).unwrap(), payload);
}

#[test]
fn spell_list_entries_carry_levels() {
    let list: ListResponse<SpellRef> = serde_json::from_value(json!({
        "count": 2,
        "results": [
            {"index": "acid-splash", "name": "Acid Splash", "level": 0, "url": "/api/spells/acid-splash"},
            {"index": "fireball", "name": "Fireball", "level": 3, "url": "/api/spells/fireball"}
        ]
    }))
    .unwrap();
    assert_eq!(list.count, 2);
    assert_eq!(list.results[0].level, Some(0));
}

#[test]
fn list_without_results_is_empty() {
    let list: ListResponse<ResourceRef> = serde_json::from_value(json!({"count": 0})).unwrap();
    assert!(list.is_empty());
}

// =============================================================================
// ENVELOPES
// =============================================================================

#[test]
fn spell_entry_envelope_uses_singular_key() {
    let spell: Spell = serde_json::from_value(fireball()).unwrap();
    let text = Lookup::<SpellRef, Spell>::Entry(spell)
        .render(Category::Spells)
        .unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["spell"]["name"], "Fireball");
    assert_eq!(value["spell"]["area_of_effect"]["type"], "sphere");
}

#[test]
fn list_envelope_recounts_results() {
    let list = ListResponse {
        count: 99,
        results: vec![ResourceRef {
            index: "str".into(),
            name: "STR".into(),
            url: "/api/ability-scores/str".into(),
        }],
    };
    let text = Lookup::<ResourceRef, AbilityScore>::List(list)
        .render(Category::AbilityScores)
        .unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["count"], 1);
}

#[test]
fn monster_summary_condenses_stat_block() {
    let monster: Monster = serde_json::from_value(goblin()).unwrap();
    let summary = serde_json::to_value(MonsterSummary::from(&monster)).unwrap();
    assert_eq!(summary["type"], "humanoid");
    assert_eq!(summary["armor_class"], json!([{"type": "armor", "value": 15}]));
    assert_eq!(summary["abilities"]["dexterity"], 14);
    assert_eq!(summary["challenge_rating"], 0.25);
    assert_eq!(summary["special_abilities"][0]["name"], "Nimble Escape");
    assert!(summary.get("reactions").is_none());
}

#[test]
fn spell_summary_names_the_school() {
    let spell: Spell = serde_json::from_value(fireball()).unwrap();
    let summary = serde_json::to_value(SpellSummary::from(&spell)).unwrap();
    assert_eq!(summary["school"], "Evocation");
    assert_eq!(summary["components"], json!(["V", "S", "M"]));
    assert!(summary.get("damage").is_none());
}
