mod def;
pub mod log;
mod source;

include!(concat!(env!("OUT_DIR"), "/rustc_version.rs"));

use std::fs;

use clap::Parser;

use crate::yaml::{self, Error, Format, Value, YamlDoc};
use source::{read_input, YamlSource};

impl From<Error> for String {
    fn from(e: Error) -> Self {
        e.to_string()
    }
}

pub fn run() -> Result<(), String> {
    let cli = def::Args::parse();

    // Split log strings upon comma, trim them and flatten all in
    // `logs`, remove empty values
    let logs = cli.log.unwrap_or_default();
    let logs = logs
        .iter()
        .flat_map(|entry| entry.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<&str>>();

    log::setup(cli.verbose, logs, cli.log_time)?;

    if cli.color && cli.no_color {
        return Err("Cannot use both --color and --no-color".to_string());
    }
    if cli.color {
        colored::control::set_override(true);
    }
    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.version {
        println!("version: {}", env!("CARGO_PKG_VERSION"));
        println!("Rust: {}", RUSTC_VERSION);
        return Ok(());
    }

    let source = YamlSource::new(cli.file);

    match &cli.action {
        Some(def::Actions::Get {
            key,
            output,
            pretty,
        }) => {
            let doc = source.load()?;
            let Some(value) = doc.get(key)? else {
                // Absence is not an error: print nothing, exit 0.
                return Ok(());
            };
            match output {
                None => {
                    // Only null prints nothing; a present-but-empty string
                    // still yields its (empty) line.
                    if !value.is_null() {
                        println!("{}", yaml::raw(value));
                    }
                }
                Some(name) => {
                    let format: Format = name.parse::<Format>()?;
                    println!("{}", yaml::marshal(value, format, *pretty)?);
                }
            }
        }
        Some(def::Actions::Set {
            key,
            value,
            value_type,
            input,
            stdin,
        }) => {
            let value_sources =
                [value.is_some(), input.is_some(), *stdin].into_iter().filter(|b| *b).count();
            if value_sources == 0 {
                return Err(
                    "Must specify the value to set via the VALUE argument, --input or --stdin"
                        .to_string(),
                );
            }
            if value_sources > 1 {
                return Err("Must select only one source of the value to set".to_string());
            }
            if *stdin && source.is_pipe() {
                return Err("Cannot use stdin for both the YAML and the value to set".to_string());
            }

            let mut doc = source.load()?;
            let text = match value {
                Some(text) => text.clone(),
                None => {
                    let bytes = if *stdin {
                        read_input(None)?
                    } else {
                        read_input(input.as_deref())?
                    };
                    String::from_utf8(bytes)
                        .map_err(|e| format!("value is not valid UTF-8: {}", e))?
                }
            };

            let value_set = doc.set(key, parse_typed_value(&text, value_type)?)?;
            if value_set {
                source.save(&doc)?;
            }
            if !source.is_pipe() {
                println!("{}", value_set);
            }
        }
        Some(def::Actions::Delete { key }) => {
            let mut doc = source.load()?;
            let deleted = doc.delete(key)?;
            if deleted {
                source.save(&doc)?;
            }
            if !source.is_pipe() {
                println!("{}", deleted);
            } else if !deleted {
                // Nothing changed, still emit the document for the pipe.
                println!("{}", doc.text()?);
            }
        }
        Some(def::Actions::Contains { key }) => {
            let doc = source.load()?;
            println!("{}", doc.contains(key)?);
        }
        Some(def::Actions::Validate { details }) => match source.load() {
            Ok(_) => println!("true"),
            Err(err @ Error::Parse(_)) => {
                if *details {
                    println!("{}", err);
                } else {
                    println!("false");
                }
            }
            Err(other) => return Err(other.to_string()),
        },
        Some(def::Actions::ToJson { pretty, output }) => {
            let doc = source.load()?;
            let mut text = yaml::marshal(&doc.to_json_compatible(), Format::Json, *pretty)?;
            match output {
                Some(path) => {
                    text.push('\n');
                    fs::write(path, text)
                        .map_err(|e| format!("Problem writing to '{}': {}", path.display(), e))?;
                }
                None => println!("{}", text),
            }
        }
        Some(def::Actions::FromJson { input }) => {
            let bytes = read_input(input.as_deref())?;
            let text = String::from_utf8(bytes)
                .map_err(|e| format!("input is not valid UTF-8: {}", e))?;
            let doc = match Value::from_json_str(&text)? {
                Value::Mapping(map) => {
                    let mut doc = YamlDoc::new();
                    doc.set_data(map);
                    doc
                }
                Value::Sequence(_) => {
                    return Err("Input JSON is a JSON array and not map-based content".to_string())
                }
                _ => return Err("Input JSON does not contain map-based content".to_string()),
            };
            source.save(&doc)?;
        }
        Some(def::Actions::Expand {
            template,
            text,
            output,
        }) => {
            if text.is_none() && template.is_empty() {
                return Err("One of --template or --text is required".to_string());
            }
            if text.is_some() && !template.is_empty() {
                return Err("Only one of --template or --text must be specified".to_string());
            }

            let mut registry = handlebars::Handlebars::new();
            match output.as_str() {
                "text" => registry.register_escape_fn(handlebars::no_escape),
                "html" => {}
                other => {
                    return Err(format!(
                        "Invalid output format '{}'. Valid values are: text, html",
                        other
                    ))
                }
            }

            let doc = source.load()?;
            let data = doc.to_json_compatible();

            match text {
                Some(tmpl) => {
                    let expanded =
                        registry.render_template(tmpl, &data).map_err(|e| e.to_string())?;
                    print!("{}", expanded);
                }
                None => {
                    for path in template {
                        let tmpl = fs::read_to_string(path).map_err(|e| {
                            format!("Template file '{}': {}", path.display(), e)
                        })?;
                        let expanded = registry
                            .render_template(&tmpl, &data)
                            .map_err(|e| e.to_string())?;
                        print!("{}", expanded);
                    }
                }
            }
        }
        None => {
            return Err("Missing action".to_string());
        }
    }
    Ok(())
}

/// Interpret the raw value text for `set` according to its declared type.
fn parse_typed_value(text: &str, value_type: &str) -> Result<Value, Error> {
    match value_type {
        "string" => Ok(Value::String(text.to_string())),
        "int" => {
            let trimmed = text.trim();
            trimmed
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|e| Error::Base(format!("invalid int value '{}': {}", trimmed, e)))
        }
        "bool" => match text.trim() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            other => Err(Error::Base(format!("invalid bool value '{}'", other))),
        },
        "yaml" => Value::from_yaml_str(text),
        "json" => Value::from_json_str(text),
        other => Err(Error::Base(format!(
            "Invalid value type '{}'. Valid values are: string, int, bool, yaml, json",
            other
        ))),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
