use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Perform simple get/set/delete operations on YAML files or stdin
#[derive(Parser)]
#[command(author, about, long_about = None, disable_version_flag(true))]
pub struct Args {
    /// The yaml file to read/write. If not specified it reads from stdin
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// force color mode (defaults to check tty)
    #[arg(long)]
    pub color: bool,

    /// force no-color mode (defaults to check tty)
    #[arg(long)]
    pub no_color: bool,

    /// display version and quit
    #[arg(short = 'V', long = "version")]
    pub version: bool,

    /// prepend time to each log line
    #[arg(long)]
    pub log_time: bool,

    /// Turn general verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configure component wise logging
    #[arg(long, short, action = clap::ArgAction::Append)]
    pub log: Option<Vec<String>>,

    #[command(subcommand)]
    pub action: Option<Actions>,
}

#[derive(Subcommand)]
pub enum Actions {
    /// Read the value at a key path
    #[clap(visible_alias = "g")]
    Get {
        /// The key path to read, e.g. first.second.third
        #[clap(name = "KEY")]
        key: String,

        /// Output format for the value (yaml, json)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Set the value at a key path
    #[clap(visible_alias = "s")]
    Set {
        /// The key path to write
        #[clap(name = "KEY")]
        key: String,

        /// The value to set (omit when using --input or --stdin)
        #[clap(name = "VALUE")]
        value: Option<String>,

        /// How to interpret the value (string, int, bool, yaml, json)
        #[arg(short = 't', long = "type", default_value = "string")]
        value_type: String,

        /// Read the value to set from a file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Read the value to set from stdin
        #[arg(long)]
        stdin: bool,
    },

    /// Delete the value at a key path
    #[clap(visible_aliases = ["del", "rm"])]
    Delete {
        /// The key path to delete
        #[clap(name = "KEY")]
        key: String,
    },

    /// Check whether a key path is present, printing 'true' or 'false'
    #[clap(visible_alias = "has")]
    Contains {
        /// The key path to check
        #[clap(name = "KEY")]
        key: String,
    },

    /// Validate the yaml syntax, printing 'true' or 'false'
    #[clap(visible_alias = "v")]
    Validate {
        /// Print the parse diagnostic instead of 'false'
        #[arg(short, long)]
        details: bool,
    },

    /// Convert the YAML document to JSON
    #[clap(name = "to-json", visible_alias = "tojson")]
    ToJson {
        /// Pretty format the json output
        #[arg(short, long)]
        pretty: bool,

        /// Write the JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a JSON document to YAML
    #[clap(name = "from-json", visible_alias = "fromjson")]
    FromJson {
        /// The JSON file to convert. If not specified it reads from stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Expand templates using the YAML document as the data context
    #[clap(visible_alias = "e")]
    Expand {
        /// Template file(s) to expand, in order
        #[arg(short, long = "template", action = clap::ArgAction::Append)]
        template: Vec<PathBuf>,

        /// Inline template text to expand
        #[arg(long)]
        text: Option<String>,

        /// Template output mode (text, html)
        #[arg(short, long, default_value = "text")]
        output: String,
    },
}
