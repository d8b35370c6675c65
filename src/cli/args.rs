//! CLI argument definitions using clap
//!
//! Commands:
//! - geoschool init [--config <path>]
//! - geoschool serve [--config <path>] [--port <port>]
//! - geoschool add [--config <path>]
//! - geoschool rank [--config <path>] [--latitude <lat>] [--longitude <lon>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// geoschool - register schools and rank them by distance
#[derive(Parser, Debug)]
#[command(name = "geoschool")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the data directory layout
    Init {
        /// Path to configuration file (default: ./geoschool.json if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Run the HTTP server
    Serve {
        /// Path to configuration file (default: ./geoschool.json if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overriding the configuration file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Read one school as JSON from stdin, validate and store it
    Add {
        /// Path to configuration file (default: ./geoschool.json if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print all stored schools ranked by distance
    Rank {
        /// Path to configuration file (default: ./geoschool.json if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Reference latitude (default: configured fallback)
        #[arg(long, allow_negative_numbers = true)]
        latitude: Option<String>,

        /// Reference longitude (default: configured fallback)
        #[arg(long, allow_negative_numbers = true)]
        longitude: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
