use doctor_match::config::{LoggingSettings, Settings};
use doctor_match::models::BatchRequest;
use doctor_match::services::BatchRunner;
use std::io::{Error, ErrorKind};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialise tracing; `LOG_LEVEL` and `LOG_FORMAT` override the config file
fn init_logging(logging: &LoggingSettings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // DOCMATCH_CONFIG points at an explicit config file
    let loaded = match std::env::var("DOCMATCH_CONFIG") {
        Ok(path) => Settings::load_from(path),
        Err(_) => Settings::load(),
    };

    init_logging(
        &loaded
            .as_ref()
            .map(|s| s.logging.clone())
            .unwrap_or_default(),
    );

    let settings = loaded.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        Error::new(ErrorKind::InvalidInput, e)
    })?;

    info!("Configuration loaded successfully");

    let input_path = std::env::args()
        .nth(1)
        .or_else(|| settings.input.path.clone())
        .ok_or_else(|| {
            error!("No batch file given on the command line or in input.path");
            Error::new(ErrorKind::InvalidInput, "missing batch file path")
        })?;

    let raw = std::fs::read_to_string(&input_path).map_err(|e| {
        error!("Failed to read {}: {}", input_path, e);
        e
    })?;

    let request: BatchRequest = serde_json::from_str(&raw).map_err(|e| {
        error!("Invalid batch file {}: {}", input_path, e);
        Error::new(ErrorKind::InvalidData, e)
    })?;

    info!(
        "Loaded {} cases and {} departments from {}",
        request.cases.len(),
        request.directory.departments.len(),
        input_path
    );

    let runner = BatchRunner::from_settings(&settings.matching);
    let report = runner.run(&request);

    let output = serde_json::to_string_pretty(&report)
        .map_err(|e| Error::new(ErrorKind::Other, e))?;
    println!("{}", output);

    Ok(())
}
