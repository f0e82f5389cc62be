//! CLI argument definitions using clap
//!
//! Commands:
//! - suifeatures dynamic-lookup [--member NAME]...
//! - suifeatures key-path [--field age|name] [--desc]
//! - suifeatures opaque-shape
//! - suifeatures capitalized [--name NAME]
//! - suifeatures sort --field NAME [--desc]   (JSON array on stdin)

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// suifeatures - field references, stable sorting, and feature showcases
#[derive(Parser, Debug)]
#[command(name = "suifeatures")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file (defaults apply when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up members of a record by name
    DynamicLookup {
        /// Member to look up (repeatable)
        #[arg(long = "member", default_values_t = vec![String::from("name"), String::from("age")])]
        members: Vec<String>,
    },

    /// Sort the configured people by a field reference
    KeyPath {
        /// Field to sort by
        #[arg(long, default_value = "age")]
        field: String,

        /// Sort descending instead of the configured direction
        #[arg(long)]
        desc: bool,
    },

    /// Build the default shape and describe it
    OpaqueShape,

    /// Assign a name through the upper-casing setter
    Capitalized {
        /// Name to assign
        #[arg(long, default_value = "alice")]
        name: String,
    },

    /// Sort a JSON array of objects read from stdin
    Sort {
        /// Field to sort by
        #[arg(long)]
        field: String,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },
}

impl Command {
    /// Name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Command::DynamicLookup { .. } => "dynamic-lookup",
            Command::KeyPath { .. } => "key-path",
            Command::OpaqueShape => "opaque-shape",
            Command::Capitalized { .. } => "capitalized",
            Command::Sort { .. } => "sort",
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
