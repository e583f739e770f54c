//! YAML document engine.
//!
//! The core of the tool: an in-memory document tree addressed by dotted key
//! paths.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for document operations
//! - [`value`]: The `Value` sum type and JSON-compatibility conversions
//! - [`path`]: Key-path splitting
//! - [`doc`]: The document itself - parse, get/set/delete/contains, output
//! - [`serialize`]: Format dispatch (YAML/JSON) and raw scalar rendering

mod doc;
mod error;
mod path;
mod serialize;
mod value;

pub use doc::YamlDoc;
pub use error::Error;
pub use serialize::{marshal, raw, Format};
pub use value::Value;
