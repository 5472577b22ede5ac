//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Track Harness - compose tracking providers and fire events through them
#[derive(Parser, Debug)]
#[command(name = "track-harness")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Fire events through the innermost provider of a chain
    ///
    /// Every delivered event is printed to stdout as one JSON line.
    ///
    /// Examples:
    ///   track-harness fire chain.toml
    ///   track-harness fire chain.toml -e datepicker.open -f who=me
    Fire {
        /// Provider chain file (TOML, or JSON with a .json extension)
        chain: PathBuf,

        /// Event to fire (repeatable)
        #[arg(short, long = "event", default_value = "generic.click")]
        events: Vec<String>,

        /// Call-site field as key=value (repeatable)
        #[arg(short, long = "field", value_parser = parse_key_val)]
        fields: Vec<(String, String)>,

        /// Call-site option as key=value (repeatable)
        #[arg(short, long = "option", value_parser = parse_key_val)]
        options: Vec<(String, String)>,
    },

    /// Print the resolved configuration of a chain as JSON
    Show {
        /// Provider chain file (TOML, or JSON with a .json extension)
        chain: PathBuf,

        /// Print every level of the chain, not only the innermost
        #[arg(long)]
        all: bool,
    },
}

/// Parse a `key=value` pair.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
