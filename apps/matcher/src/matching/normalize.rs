//! Normalizer — turns loosely shaped attribute/requirement input into canonical records.
//!
//! Never fails. Fields with the wrong type or an unrecognized value fall back
//! to their defaults; entries without a usable name are dropped.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::warn;

use crate::models::profile::{
    Attribute, AttributeInput, AttributeRecord, Category, Level, Priority, Requirement,
    RequirementInput, RequirementRecord,
};
use crate::taxonomy::Taxonomy;

pub const DEFAULT_ATTRIBUTE_SUBCATEGORY: &str = "programming";
pub const DEFAULT_REQUIREMENT_SUBCATEGORY: &str = "general";
pub const DEFAULT_WEIGHT: f64 = 1.0;

const NAME_KEYS: &[&str] = &["name", "skill", "tag"];

// ────────────────────────────────────────────────────────────────────────────
// Input decoding
// ────────────────────────────────────────────────────────────────────────────

impl From<Value> for AttributeInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(name) => AttributeInput::Name(name),
            Value::Object(obj) => AttributeInput::Full(AttributeRecord {
                name: str_field(&obj, NAME_KEYS),
                category: str_field(&obj, &["category"]).map(|c| Category::parse(&c)),
                subcategory: str_field(&obj, &["subcategory", "sub_category", "subCategory"]),
                level: str_field(&obj, &["level", "proficiency"]).and_then(|raw| {
                    let level = Level::parse(&raw);
                    if level.is_none() {
                        warn!(level = %raw, "unrecognized level, using default");
                    }
                    level
                }),
                verified: bool_field(&obj, &["verified"]),
                weight: f64_field(&obj, &["weight"]),
                source: str_field(&obj, &["source"]),
                added_at: datetime_field(&obj, &["added_at", "addedAt"]),
            }),
            other => {
                warn!(value = %other, "unrecognized attribute shape, ignoring");
                AttributeInput::Full(AttributeRecord::default())
            }
        }
    }
}

impl From<Value> for RequirementInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(name) => RequirementInput::Name(name),
            Value::Object(obj) => RequirementInput::Full(RequirementRecord {
                name: str_field(&obj, NAME_KEYS),
                category: str_field(&obj, &["category"]).map(|c| Category::parse(&c)),
                subcategory: str_field(&obj, &["subcategory", "sub_category", "subCategory"]),
                priority: str_field(&obj, &["priority"]).and_then(|raw| {
                    let priority = Priority::parse(&raw);
                    if priority.is_none() {
                        warn!(priority = %raw, "unrecognized priority, using default");
                    }
                    priority
                }),
                required: bool_field(&obj, &["required", "is_required", "isRequired"]),
                weight: f64_field(&obj, &["weight"]),
            }),
            other => {
                warn!(value = %other, "unrecognized requirement shape, ignoring");
                RequirementInput::Full(RequirementRecord::default())
            }
        }
    }
}

fn field<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| obj.get(*k)).filter(|v| !v.is_null())
}

fn str_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    match field(obj, keys)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn bool_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<bool> {
    match field(obj, keys)? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        Value::Number(n) => n.as_i64().map(|i| i != 0),
        _ => None,
    }
}

fn f64_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    match field(obj, keys)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn datetime_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<DateTime<Utc>> {
    match field(obj, keys)? {
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Canonicalization
// ────────────────────────────────────────────────────────────────────────────

pub fn normalize_attributes(inputs: &[AttributeInput], taxonomy: &Taxonomy) -> Vec<Attribute> {
    inputs
        .iter()
        .filter_map(|input| normalize_attribute(input, taxonomy))
        .collect()
}

pub fn normalize_requirements(
    inputs: &[RequirementInput],
    taxonomy: &Taxonomy,
) -> Vec<Requirement> {
    inputs
        .iter()
        .filter_map(|input| normalize_requirement(input, taxonomy))
        .collect()
}

pub fn normalize_attribute(input: &AttributeInput, taxonomy: &Taxonomy) -> Option<Attribute> {
    let record = match input {
        AttributeInput::Name(name) => AttributeRecord {
            name: Some(name.clone()),
            ..AttributeRecord::default()
        },
        AttributeInput::Full(record) => record.clone(),
    };

    let name = usable_name(record.name.as_deref(), "attribute")?;
    Some(Attribute {
        category: record
            .category
            .unwrap_or_else(|| taxonomy.categorize(&name)),
        subcategory: subcategory_key(record.subcategory.as_deref(), DEFAULT_ATTRIBUTE_SUBCATEGORY),
        level: record.level.unwrap_or_default(),
        verified: record.verified.unwrap_or(false),
        weight: sanitize_weight(record.weight),
        source: record.source,
        added_at: record.added_at,
        name,
    })
}

pub fn normalize_requirement(input: &RequirementInput, taxonomy: &Taxonomy) -> Option<Requirement> {
    let record = match input {
        RequirementInput::Name(name) => RequirementRecord {
            name: Some(name.clone()),
            ..RequirementRecord::default()
        },
        RequirementInput::Full(record) => record.clone(),
    };

    let name = usable_name(record.name.as_deref(), "requirement")?;
    Some(Requirement {
        category: record
            .category
            .unwrap_or_else(|| taxonomy.categorize(&name)),
        subcategory: subcategory_key(
            record.subcategory.as_deref(),
            DEFAULT_REQUIREMENT_SUBCATEGORY,
        ),
        priority: record.priority.unwrap_or_default(),
        required: record.required.unwrap_or(false),
        weight: sanitize_weight(record.weight),
        name,
    })
}

fn usable_name(raw: Option<&str>, kind: &str) -> Option<String> {
    let name = raw.map(str::trim).unwrap_or("");
    if name.is_empty() {
        warn!(kind, "dropping entry without a name");
        return None;
    }
    Some(name.to_string())
}

/// Lower-cased, snake_case subcategory key; `default` when blank.
fn subcategory_key(raw: Option<&str>, default: &str) -> String {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_lowercase().replace([' ', '-'], "_"),
        _ => default.to_string(),
    }
}

fn sanitize_weight(weight: Option<f64>) -> f64 {
    match weight {
        Some(w) if w.is_finite() && w >= 0.0 => w,
        Some(w) => {
            warn!(weight = w, "invalid weight, using default");
            DEFAULT_WEIGHT
        }
        None => DEFAULT_WEIGHT,
    }
}
