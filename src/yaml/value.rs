//! The in-memory value model.
//!
//! Documents are trees of [`Value`] nodes. Mappings are string-keyed from the
//! moment a document is parsed: any non-string YAML key is normalized to its
//! textual form at the parse boundary, so every mapping in the tree is
//! directly JSON-encodable and directly usable as a template context.

use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};

use super::error::Error;

/// A YAML/JSON value.
///
/// Integer and float scalars are kept distinct; mapping entries preserve
/// insertion order for output stability.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Value>),
    Mapping(IndexMap<String, Value>),
}

impl Value {
    /// The type name reported by `WrongType` errors and diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "str",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "struct",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut IndexMap<String, Value>> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Parse a standalone YAML fragment into a `Value`.
    ///
    /// Unlike document parsing, the root may be any kind of value; this backs
    /// `set --type yaml`.
    pub fn from_yaml_str(text: &str) -> Result<Value, Error> {
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        let raw: serde_yaml::Value = serde_yaml::from_str(text)?;
        Ok(Value::from_yaml(raw))
    }

    /// Parse a standalone JSON fragment into a `Value`.
    pub fn from_json_str(text: &str) -> Result<Value, Error> {
        let raw: serde_json::Value = serde_json::from_str(text)?;
        Ok(Value::from_json(raw))
    }

    /// Convert a decoded `serde_yaml` value, normalizing mapping keys to
    /// strings. YAML tags are dropped; only the tagged value is kept.
    pub fn from_yaml(raw: serde_yaml::Value) -> Value {
        match raw {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(b) => Value::Bool(b),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::Null
                }
            }
            serde_yaml::Value::String(s) => Value::String(s),
            serde_yaml::Value::Sequence(seq) => {
                Value::Sequence(seq.into_iter().map(Value::from_yaml).collect())
            }
            serde_yaml::Value::Mapping(map) => {
                let mut result = IndexMap::with_capacity(map.len());
                for (key, value) in map {
                    result.insert(normalize_key(key), Value::from_yaml(value));
                }
                Value::Mapping(result)
            }
            serde_yaml::Value::Tagged(tagged) => Value::from_yaml(tagged.value),
        }
    }

    /// Convert a decoded `serde_json` value.
    pub fn from_json(raw: serde_json::Value) -> Value {
        match raw {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::Null
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(seq) => {
                Value::Sequence(seq.into_iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(map) => {
                let mut result = IndexMap::with_capacity(map.len());
                for (key, value) in map {
                    result.insert(key, Value::from_json(value));
                }
                Value::Mapping(result)
            }
        }
    }

    /// Rewrite the value as a JSON-compatible structure.
    ///
    /// Keys are already strings at parse time, so this is a plain structural
    /// conversion; non-finite floats become JSON null.
    pub fn to_json_compatible(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::Number((*i).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Sequence(seq) => {
                serde_json::Value::Array(seq.iter().map(Value::to_json_compatible).collect())
            }
            Value::Mapping(map) => {
                let mut result = serde_json::Map::with_capacity(map.len());
                for (key, value) in map {
                    result.insert(key.clone(), value.to_json_compatible());
                }
                serde_json::Value::Object(result)
            }
        }
    }
}

/// Normalize a YAML mapping key to its string form.
fn normalize_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Tagged(tagged) => normalize_key(tagged.value),
        // Container keys have no natural string form; fall back to their
        // trimmed YAML text.
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(seq) => seq.serialize(serializer),
            Value::Mapping(map) => map.serialize(serializer),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
