//! The YAML document: parsing, key-path operations and text output.

use indexmap::IndexMap;

use super::error::Error;
use super::path::split_key;
use super::value::Value;

/// A parsed YAML document, rooted at a string-keyed mapping.
///
/// An empty document is an empty mapping, never an absent root. All key-path
/// operations walk segments left to right; read-side operations (get,
/// contains, delete) treat a wrong-shaped intermediate as "not found" so
/// they never fail on heterogeneous data, while set treats it as a hard
/// conflict so it never silently overwrites a scalar with a container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YamlDoc {
    data: IndexMap<String, Value>,
}

impl YamlDoc {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from raw bytes.
    ///
    /// Empty (or explicitly null) input yields an empty document. Input
    /// whose top-level value is a scalar, a sequence or a multi-document
    /// stream fails with [`Error::Parse`]: path operations only make sense
    /// over a mapping root, so the shape is enforced eagerly.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| Error::Parse(format!("input is not valid UTF-8: {}", e)))?;
        Self::from_str(text)
    }

    /// Parse a document from text. See [`YamlDoc::from_bytes`].
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Result<Self, Error> {
        if text.trim().is_empty() {
            return Ok(Self::new());
        }
        let raw: serde_yaml::Value = serde_yaml::from_str(text)?;
        match Value::from_yaml(raw) {
            Value::Mapping(data) => Ok(Self { data }),
            Value::Null => Ok(Self::new()),
            other => Err(Error::Parse(format!(
                "top-level YAML value must be a mapping, found {}",
                other.type_name()
            ))),
        }
    }

    /// The underlying mapping.
    pub fn data(&self) -> &IndexMap<String, Value> {
        &self.data
    }

    /// Replace the underlying mapping.
    pub fn set_data(&mut self, data: IndexMap<String, Value>) {
        self.data = data;
    }

    /// Get the value at a key path.
    ///
    /// Absence is not an error: a missing key, or an intermediate segment
    /// that is not a mapping, yields `None`.
    pub fn get(&self, key: &str) -> Result<Option<&Value>, Error> {
        let segments = split_key(key)?;
        let Some((last, parents)) = segments.split_last() else {
            return Err(Error::EmptyKey);
        };

        let mut current = &self.data;
        for segment in parents {
            match current.get(*segment) {
                Some(Value::Mapping(map)) => current = map,
                _ => return Ok(None),
            }
        }
        Ok(current.get(*last))
    }

    /// Check whether a key path is present.
    pub fn contains(&self, key: &str) -> Result<bool, Error> {
        Ok(self.get(key)?.is_some())
    }

    /// Get the string value at a key path.
    ///
    /// A missing key reports `WrongType` with an actual kind of `NoneType`.
    pub fn get_str(&self, key: &str) -> Result<&str, Error> {
        let value = self.get(key)?;
        match value {
            Some(Value::String(s)) => Ok(s),
            _ => Err(wrong_type("str", value)),
        }
    }

    /// Get the integer value at a key path.
    pub fn get_i64(&self, key: &str) -> Result<i64, Error> {
        let value = self.get(key)?;
        match value {
            Some(Value::Int(i)) => Ok(*i),
            _ => Err(wrong_type("int", value)),
        }
    }

    /// Get the boolean value at a key path.
    pub fn get_bool(&self, key: &str) -> Result<bool, Error> {
        let value = self.get(key)?;
        match value {
            Some(Value::Bool(b)) => Ok(*b),
            _ => Err(wrong_type("bool", value)),
        }
    }

    /// Set the value at a key path, overwriting any previous value.
    ///
    /// Missing intermediate segments are autovivified as empty mappings; an
    /// explicit null counts as missing. An intermediate segment holding a
    /// scalar or sequence fails with [`Error::NotAContainer`] naming the
    /// partial path where the conflict occurred.
    pub fn set(&mut self, key: &str, value: Value) -> Result<bool, Error> {
        let segments = split_key(key)?;
        let Some((last, parents)) = segments.split_last() else {
            return Err(Error::EmptyKey);
        };

        let mut current = &mut self.data;
        let mut traversed: Vec<&str> = Vec::with_capacity(parents.len());
        for segment in parents {
            traversed.push(segment);
            let slot = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Mapping(IndexMap::new()));
            if slot.is_null() {
                *slot = Value::Mapping(IndexMap::new());
            }
            match slot {
                Value::Mapping(map) => current = map,
                _ => {
                    return Err(Error::NotAContainer {
                        path: traversed.join("."),
                    })
                }
            }
        }
        current.insert(last.to_string(), value);
        Ok(true)
    }

    /// Delete the value at a key path.
    ///
    /// Returns whether a value was actually removed; a missing or
    /// wrong-shaped path is `false`, never an error.
    pub fn delete(&mut self, key: &str) -> Result<bool, Error> {
        let segments = split_key(key)?;
        let Some((last, parents)) = segments.split_last() else {
            return Err(Error::EmptyKey);
        };

        let mut current = &mut self.data;
        for segment in parents {
            match current.get_mut(*segment) {
                Some(Value::Mapping(map)) => current = map,
                _ => return Ok(false),
            }
        }
        Ok(current.shift_remove(*last).is_some())
    }

    /// The document as a JSON-compatible value (every mapping key a string).
    pub fn to_json_compatible(&self) -> serde_json::Value {
        Value::Mapping(self.data.clone()).to_json_compatible()
    }

    /// The document as YAML text, 2-space indent, trailing newline trimmed.
    pub fn text(&self) -> Result<String, Error> {
        let text = serde_yaml::to_string(&self.data)
            .map_err(|e| Error::Base(format!("yaml encoding failed: {}", e)))?;
        Ok(text.trim_end().to_string())
    }

    /// The document as YAML bytes, newline-terminated.
    pub fn bytes(&self) -> Result<Vec<u8>, Error> {
        let mut text = self.text()?;
        text.push('\n');
        Ok(text.into_bytes())
    }
}

fn wrong_type(expected: &'static str, actual: Option<&Value>) -> Error {
    Error::WrongType {
        expected,
        actual: actual.map_or("NoneType", Value::type_name),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
