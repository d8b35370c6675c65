//! CLI command implementations

use std::path::Path;

use serde_json::json;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_response};
use crate::http_server::HttpServer;
use crate::proximity::rank;
use crate::storage::{FileStore, STORE_FILE_NAME};
use crate::validation::{reference_or, validate};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&Config::resolve(config.as_deref())?),
        Command::Serve { config, port } => serve(Config::resolve(config.as_deref())?, port),
        Command::Add { config } => add(&Config::resolve(config.as_deref())?),
        Command::Rank {
            config,
            latitude,
            longitude,
        } => rank_schools(
            &Config::resolve(config.as_deref())?,
            latitude.as_deref(),
            longitude.as_deref(),
        ),
    }
}

fn is_initialized(data_dir: &Path) -> bool {
    data_dir.join("data").join(STORE_FILE_NAME).exists()
}

/// Create `<data_dir>/data/schools.dat`
pub fn init(config: &Config) -> CliResult<()> {
    let data_dir = config.require_data_path("init")?;

    if is_initialized(data_dir) {
        return Err(CliError::already_initialized());
    }

    let store = FileStore::open(data_dir)?;
    write_response(&json!({
        "initialized": true,
        "path": store.path().display().to_string(),
    }))
}

/// Run the HTTP server until Ctrl-C
pub fn serve(mut config: Config, port: Option<u16>) -> CliResult<()> {
    if let Some(port) = port {
        config.http.port = port;
    }

    let store = config.open_store()?;
    let server = HttpServer::new(config.http, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Validate one school from stdin and store it
pub fn add(config: &Config) -> CliResult<()> {
    config.require_data_path("add")?;
    let store = config.open_store()?;

    let candidate = read_request()?;
    let school = validate(&candidate)?;
    let id = store.insert(school)?;

    write_response(&json!({ "schoolId": id }))
}

/// Print every stored school ranked from the given or fallback reference
pub fn rank_schools(
    config: &Config,
    latitude: Option<&str>,
    longitude: Option<&str>,
) -> CliResult<()> {
    let reference = reference_or(latitude, longitude, config.http.fallback)?;
    let store = config.open_store()?;
    let schools = store.all()?;

    write_response(&rank(&schools, reference))
}
