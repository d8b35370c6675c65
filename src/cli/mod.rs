//! CLI module for geoschool
//!
//! Provides command-line interface for:
//! - init: create the data directory layout
//! - serve: run the HTTP API
//! - add: validate and store one school read from stdin
//! - rank: print stored schools ranked by distance

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{add, init, rank_schools, run, run_command, serve};
pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_response;
