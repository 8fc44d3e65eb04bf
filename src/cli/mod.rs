//! CLI module for neodb
//!
//! Provides command-line interface for:
//! - inspect: Print one NEO, optionally with its approaches
//! - query: Filter approaches and print them or write them to a file
//! - interactive: Line-by-line session over a dataset loaded once

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, InspectArgs, QueryArgs, ShellCommand, ShellLine};
pub use commands::{
    inspect, interactive, load_dataset, query, resolve_config, run, run_cli, run_command,
    run_line, Config, ShellFlow, NO_MATCH,
};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_lines, split_line, SourceStamp};
