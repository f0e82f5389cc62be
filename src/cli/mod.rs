//! CLI module
//!
//! The presentation layer: each subcommand drives one showcase and prints
//! its result as a single JSON line.
//! - dynamic-lookup: member lookup on a dynamic record
//! - key-path: sort people by a field reference
//! - opaque-shape: describe a shape through its abstract interface
//! - capitalized: assign through an upper-casing setter
//! - sort: sort JSON objects from stdin by a named field

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    capitalized, dynamic_lookup, execute, key_path, opaque_shape, resolve_direction, run,
    run_command, sort_records,
};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, read_request_from, write_error, write_response, write_response_to};
