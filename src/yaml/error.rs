//! Error types for YAML document operations.

use std::io;

/// Error type for YAML document operations.
///
/// "Key not found" is deliberately not represented here: absence during
/// get/contains/delete is a normal boolean outcome, not an error.
#[derive(Debug)]
pub enum Error {
    /// Input bytes are not a well-formed mapping-rooted YAML document
    Parse(String),
    /// An empty key path was supplied
    EmptyKey,
    /// During set, an intermediate path segment holds a scalar or sequence
    NotAContainer { path: String },
    /// A typed accessor was used on a value of another kind
    WrongType {
        expected: &'static str,
        actual: &'static str,
    },
    /// An unknown serialization format was requested
    UnsupportedFormat(String),
    /// I/O error
    Io(String),
    /// Generic error
    Base(String),
}

impl std::error::Error for Error {}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Parse(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Parse(e.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<String> for Error {
    fn from(e: String) -> Self {
        Error::Base(e)
    }
}

impl From<&str> for Error {
    fn from(e: &str) -> Self {
        Error::Base(e.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "{}", e),
            Error::EmptyKey => write!(f, "empty key specified"),
            Error::NotAContainer { path } => {
                write!(f, "key '{}' is not a map container", path)
            }
            Error::WrongType { expected, actual } => {
                write!(f, "expected type '{}' but got '{}'", expected, actual)
            }
            Error::UnsupportedFormat(format) => {
                write!(f, "unsupported format '{}'", format)
            }
            Error::Io(e) => write!(f, "{}", e),
            Error::Base(e) => write!(f, "{}", e),
        }
    }
}
