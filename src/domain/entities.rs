//! Domain entities: the prompt data document and its typed views

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::error::DomainError;

pub const PROMPT_PARTS_KEY: &str = "promptParts";
pub const TEMPLATES_KEY: &str = "templates";
pub const AGENTS_KEY: &str = "agents";
pub const PROMPT_HISTORY_KEY: &str = "promptHistory";

/// Prompt part categories, in skeleton order.
pub const PROMPT_PART_CATEGORIES: [&str; 4] = ["persona", "goal", "context", "tone"];

/// Top-level prompt data document.
///
/// Held as an order-preserving JSON object: keys come back out in the order
/// they were read, numbers keep their exact source text, and keys this crate
/// knows nothing about are carried along untouched. Typed views (`templates()`, `agents()`) are extracted on demand.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    /// The fixed empty document written by `save`.
    pub fn skeleton() -> Self {
        let parts: Map<String, Value> = PROMPT_PART_CATEGORIES
            .iter()
            .map(|category| (category.to_string(), Value::Array(Vec::new())))
            .collect();

        let mut fields = Map::new();
        fields.insert(PROMPT_PARTS_KEY.into(), Value::Object(parts));
        fields.insert(TEMPLATES_KEY.into(), Value::Array(Vec::new()));
        fields.insert(AGENTS_KEY.into(), Value::Array(Vec::new()));
        fields.insert(PROMPT_HISTORY_KEY.into(), Value::Array(Vec::new()));
        Self { fields }
    }

    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Templates in document order. A missing or blank section is empty.
    pub fn templates(&self) -> Result<Vec<Template>, DomainError> {
        self.records(TEMPLATES_KEY)
    }

    /// Agents in document order. A missing or blank section is empty.
    pub fn agents(&self) -> Result<Vec<Agent>, DomainError> {
        self.records(AGENTS_KEY)
    }

    /// Number of entries in an array section; missing or blank counts as 0.
    pub fn section_len(&self, key: &str) -> Result<usize, DomainError> {
        self.section(key).map(<[Value]>::len)
    }

    /// Entry count per prompt part category, in document order.
    ///
    /// A missing or blank `promptParts` reports the standard categories with 0 entries.
    pub fn prompt_part_counts(&self) -> Result<Vec<(String, usize)>, DomainError> {
        let parts = match self.fields.get(PROMPT_PARTS_KEY) {
            None => {
                return Ok(PROMPT_PART_CATEGORIES
                    .iter()
                    .map(|category| (category.to_string(), 0))
                    .collect())
            }
            Some(Value::Object(parts)) if !parts.is_empty() => parts,
            Some(value) if is_blank(value) => {
                return Ok(PROMPT_PART_CATEGORIES
                    .iter()
                    .map(|category| (category.to_string(), 0))
                    .collect())
            }
            Some(other) => {
                return Err(DomainError::InvalidShape {
                    key: PROMPT_PARTS_KEY.to_string(),
                    expected: "object",
                    found: value_kind(other),
                })
            }
        };

        parts
            .iter()
            .map(|(category, entries)| match entries {
                Value::Array(items) => Ok((category.clone(), items.len())),
                blank if is_blank(blank) => Ok((category.clone(), 0)),
                other => Err(DomainError::InvalidShape {
                    key: format!("{}.{}", PROMPT_PARTS_KEY, category),
                    expected: "array",
                    found: value_kind(other),
                }),
            })
            .collect()
    }

    fn section(&self, key: &str) -> Result<&[Value], DomainError> {
        match self.fields.get(key) {
            Some(Value::Array(items)) => Ok(items.as_slice()),
            None => Ok(&[][..]),
            Some(blank) if is_blank(blank) => Ok(&[][..]),
            Some(other) => Err(DomainError::InvalidShape {
                key: key.to_string(),
                expected: "array",
                found: value_kind(other),
            }),
        }
    }

    fn records<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, DomainError> {
        self.section(key)?
            .iter()
            .enumerate()
            .map(|(index, item)| {
                if !item.is_object() {
                    return Err(DomainError::InvalidShape {
                        key: format!("{}[{}]", key, index),
                        expected: "object",
                        found: value_kind(item),
                    });
                }
                serde_json::from_value(item.clone()).map_err(|e| DomainError::InvalidRecord {
                    key: format!("{}[{}]", key, index),
                    message: e.to_string(),
                })
            })
            .collect()
    }
}

/// A reusable prompt template.
///
/// Only `id` and `name` are interpreted; everything else (`persona`, `goal`,
/// `context`, `tone`, ...) is kept as-is in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Template {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An agent definition, optionally linked to a template.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Agent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(
        rename = "templateId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub template_id: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Agent {
    /// Linked template id; an empty string means "not linked".
    pub fn linked_template(&self) -> Option<&Value> {
        match &self.template_id {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(id) => Some(id),
        }
    }
}

/// Display adapter for an optional record field.
///
/// Strings print bare, other values as compact JSON (`true`, `["a","b"]`),
/// absent fields as `None`.
pub struct FieldValue<'a>(pub Option<&'a Value>);

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None | Some(Value::Null) => f.write_str("None"),
            Some(Value::String(s)) => f.write_str(s),
            Some(other) => write!(f, "{}", other),
        }
    }
}

/// `null`, `false`, zero, and empty strings, arrays or objects.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
