//! Serialization dispatch and raw output for values.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::Error;
use super::value::Value;

/// Output format for serialized values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "yaml" => Ok(Format::Yaml),
            "json" => Ok(Format::Json),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Format::Yaml => write!(f, "yaml"),
            Format::Json => write!(f, "json"),
        }
    }
}

/// Serialize a value in the requested format.
///
/// YAML output uses a fixed 2-space indent with the trailing newline
/// trimmed; `pretty` only affects JSON.
pub fn marshal<T: Serialize>(value: &T, format: Format, pretty: bool) -> Result<String, Error> {
    // Encoding failures are not parse errors; report them as such.
    match format {
        Format::Yaml => {
            let text = serde_yaml::to_string(value)
                .map_err(|e| Error::Base(format!("yaml encoding failed: {}", e)))?;
            Ok(text.trim_end().to_string())
        }
        Format::Json => {
            let result = if pretty {
                serde_json::to_string_pretty(value)
            } else {
                serde_json::to_string(value)
            };
            result.map_err(|e| Error::Base(format!("json encoding failed: {}", e)))
        }
    }
}

/// Render a value as a bare string: scalars unquoted (null is empty),
/// containers as YAML.
pub fn raw(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => {
            if f.is_nan() {
                ".nan".to_string()
            } else if f.is_infinite() {
                if f.is_sign_positive() {
                    ".inf".to_string()
                } else {
                    "-.inf".to_string()
                }
            } else {
                f.to_string()
            }
        }
        Value::String(s) => s.clone(),
        Value::Sequence(_) | Value::Mapping(_) => {
            marshal(value, Format::Yaml, false).unwrap_or_default()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn test_format_from_str() {
        assert_eq!("yaml".parse::<Format>().unwrap(), Format::Yaml);
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
    }

    #[test]
    fn test_format_from_str_unsupported() {
        let err = "toml".parse::<Format>().unwrap_err();
        match err {
            Error::UnsupportedFormat(name) => assert_eq!(name, "toml"),
            other => panic!("expected UnsupportedFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_marshal_yaml_trims_trailing_newline() {
        let value = Value::from("hello");
        assert_eq!(marshal(&value, Format::Yaml, false).unwrap(), "hello");
    }

    #[test]
    fn test_marshal_json_compact_and_pretty() {
        let mut map = IndexMap::new();
        map.insert("a".to_string(), Value::from(1));
        let value = Value::Mapping(map);
        assert_eq!(
            marshal(&value, Format::Json, false).unwrap(),
            r#"{"a":1}"#
        );
        let pretty = marshal(&value, Format::Json, true).unwrap();
        assert!(pretty.contains("\n"));
        assert!(pretty.contains("\"a\": 1"));
    }

    #[test]
    fn test_raw_scalars() {
        assert_eq!(raw(&Value::Null), "");
        assert_eq!(raw(&Value::Bool(true)), "true");
        assert_eq!(raw(&Value::Int(-3)), "-3");
        assert_eq!(raw(&Value::Float(2.5)), "2.5");
        assert_eq!(raw(&Value::from("plain text")), "plain text");
    }

    #[test]
    fn test_raw_special_floats() {
        assert_eq!(raw(&Value::Float(f64::NAN)), ".nan");
        assert_eq!(raw(&Value::Float(f64::INFINITY)), ".inf");
        assert_eq!(raw(&Value::Float(f64::NEG_INFINITY)), "-.inf");
    }

    #[test]
    fn test_marshal_encode_failure_is_not_a_parse_error() {
        use serde::ser::{Error as _, Serializer};

        struct Failing;

        impl Serialize for Failing {
            fn serialize<S: Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
                Err(S::Error::custom("boom"))
            }
        }

        for format in [Format::Yaml, Format::Json] {
            let err = marshal(&Failing, format, false).unwrap_err();
            assert!(matches!(err, Error::Base(_)), "format {}", format);
            assert!(err.to_string().contains("boom"));
        }
    }

    #[test]
    fn test_raw_container_is_yaml() {
        let value = Value::Sequence(vec![Value::from(1), Value::from(2)]);
        assert_eq!(raw(&value), "- 1\n- 2");
    }
}
