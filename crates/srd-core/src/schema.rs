//! # Parameter Schema Reflection
//!
//! Derives the input schema a tool advertises from the shape of its parameter
//! struct.
//!
//! The struct's shape comes from `#[derive(JsonSchema)]`; this module walks
//! that description and emits the flat subset MCP clients handle reliably:
//!
//! | Rust field                 | Advertised property                              |
//! |----------------------------|--------------------------------------------------|
//! | `String`, string enum      | `{"type": "string"}` (+ `enum`)                  |
//! | any integer or float       | `{"type": "number"}`                             |
//! | `bool`                     | `{"type": "boolean"}`                            |
//! | nested struct              | `{"type": "object", "properties": {...}}`        |
//! | `Vec` of a primitive       | `{"type": "array", "items": {"type": ...}}`      |
//!
//! `Option<T>` advertises `T` and is never required. References into the
//! schema's definitions are inlined. A field is only advertised when it
//! carries a description (its doc comment or `#[schemars(description)]`);
//! fields of unsupported kinds are skipped with a warning.

use schemars::JsonSchema;
use serde_json::{Map, Value, json};

/// Guards against self-referential definitions.
const MAX_DEPTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl Kind {
    fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "integer" | "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            "object" => Some(Self::Object),
            "array" => Some(Self::Array),
            _ => None,
        }
    }

    const fn type_name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }

    const fn is_primitive(self) -> bool {
        matches!(self, Self::String | Self::Number | Self::Boolean)
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Advertised input schema of the parameter struct `T`.
pub fn input_schema_for<T: JsonSchema>() -> Map<String, Value> {
    let schema = schemars::schema_for!(T);
    match serde_json::to_value(&schema) {
        Ok(Value::Object(root)) => flatten_input_schema(&root),
        _ => empty_object_schema(),
    }
}

/// Flatten a JSON Schema document describing a parameter struct.
///
/// Always returns an object schema; `required` is present only when at least
/// one advertised field is required.
pub fn flatten_input_schema(root: &Map<String, Value>) -> Map<String, Value> {
    let defs = collect_definitions(root);
    let node = Value::Object(root.clone());
    let resolved = resolve(&node, &defs, 0);

    let (properties, required) = object_properties(resolved, &defs, 0);
    let mut schema = empty_object_schema();
    schema.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".to_string(), json!(required));
    }
    schema
}

// =============================================================================
// WALKER
// =============================================================================

fn empty_object_schema() -> Map<String, Value> {
    let mut schema = Map::new();
    schema.insert("type".to_string(), json!("object"));
    schema.insert("properties".to_string(), json!({}));
    schema
}

/// Definitions live under `$defs` (2020-12) or `definitions` (draft-07).
fn collect_definitions(root: &Map<String, Value>) -> Map<String, Value> {
    let mut defs = Map::new();
    for key in ["definitions", "$defs"] {
        if let Some(Value::Object(found)) = root.get(key) {
            defs.extend(found.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
    }
    defs
}

fn is_null_schema(node: &Value) -> bool {
    node.get("type").and_then(Value::as_str) == Some("null")
}

/// Follow `$ref`s and unwrap single-branch (or nullable) combinators.
fn resolve<'a>(node: &'a Value, defs: &'a Map<String, Value>, depth: usize) -> &'a Value {
    if depth > MAX_DEPTH {
        return node;
    }
    if let Some(reference) = node.get("$ref").and_then(Value::as_str)
        && let Some(target) = reference.rsplit('/').next().and_then(|name| defs.get(name))
    {
        return resolve(target, defs, depth + 1);
    }
    for key in ["allOf", "anyOf", "oneOf"] {
        if let Some(branches) = node.get(key).and_then(Value::as_array) {
            let mut non_null = branches.iter().filter(|b| !is_null_schema(b));
            if let (Some(only), None) = (non_null.next(), non_null.next()) {
                return resolve(only, defs, depth + 1);
            }
        }
    }
    node
}

/// Every constant of a string enum, in either `enum` or `oneOf`/`const` form.
fn string_enum(node: &Value) -> Option<Vec<Value>> {
    if let Some(values) = node.get("enum").and_then(Value::as_array) {
        let strings: Vec<Value> = values.iter().filter(|v| v.is_string()).cloned().collect();
        return (!strings.is_empty()).then_some(strings);
    }
    let branches = node
        .get("oneOf")
        .or_else(|| node.get("anyOf"))
        .and_then(Value::as_array)?;
    let consts: Option<Vec<Value>> = branches
        .iter()
        .map(|b| b.get("const").filter(|c| c.is_string()).cloned())
        .collect();
    consts.filter(|c| !c.is_empty())
}

fn kind_of(node: &Value) -> Option<Kind> {
    match node.get("type") {
        Some(Value::String(name)) => Kind::from_type_name(name),
        Some(Value::Array(names)) => names
            .iter()
            .filter_map(Value::as_str)
            .find(|name| *name != "null")
            .and_then(Kind::from_type_name),
        _ if string_enum(node).is_some() => Some(Kind::String),
        _ if node.get("properties").is_some() => Some(Kind::Object),
        _ => None,
    }
}

/// Only the field's own description opts it in; a documented type does not.
fn description_of(field: &Value) -> Option<String> {
    field
        .get("description")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

/// Advertised properties of an object node plus the names that stay required.
fn object_properties(
    node: &Value,
    defs: &Map<String, Value>,
    depth: usize,
) -> (Map<String, Value>, Vec<String>) {
    let mut properties = Map::new();
    let Some(fields) = node.get("properties").and_then(Value::as_object) else {
        return (properties, Vec::new());
    };

    for (name, field) in fields {
        if let Some(property) = field_property(name, field, defs, depth) {
            properties.insert(name.clone(), Value::Object(property));
        }
    }

    let required = node
        .get("required")
        .and_then(Value::as_array)
        .map(|names| {
            names
                .iter()
                .filter_map(Value::as_str)
                .filter(|name| properties.contains_key(*name))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    (properties, required)
}

fn field_property(
    name: &str,
    field: &Value,
    defs: &Map<String, Value>,
    depth: usize,
) -> Option<Map<String, Value>> {
    let resolved = resolve(field, defs, depth);
    let Some(description) = description_of(field) else {
        tracing::warn!(field = name, "Skipping parameter without a description");
        return None;
    };
    let Some(kind) = kind_of(resolved) else {
        tracing::warn!(field = name, "Skipping parameter of unsupported type");
        return None;
    };

    let mut property = Map::new();
    property.insert("type".to_string(), json!(kind.type_name()));
    property.insert("description".to_string(), json!(description));

    match kind {
        Kind::String => {
            if let Some(values) = string_enum(resolved) {
                property.insert("enum".to_string(), Value::Array(values));
            }
        }
        Kind::Number | Kind::Boolean => {}
        Kind::Object => {
            if resolved.get("properties").is_none() || depth >= MAX_DEPTH {
                tracing::warn!(field = name, "Skipping map-typed parameter");
                return None;
            }
            let (nested, _) = object_properties(resolved, defs, depth + 1);
            property.insert("properties".to_string(), Value::Object(nested));
        }
        Kind::Array => {
            let item_kind = resolved
                .get("items")
                .map(|items| resolve(items, defs, depth + 1))
                .and_then(kind_of)
                .filter(|k| k.is_primitive());
            let Some(item_kind) = item_kind else {
                tracing::warn!(field = name, "Skipping array parameter with unsupported items");
                return None;
            };
            property.insert("items".to_string(), json!({ "type": item_kind.type_name() }));
        }
    }
    Some(property)
}
