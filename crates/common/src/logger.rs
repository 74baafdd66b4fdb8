use crate::error::RagProbeError;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Initialize the logging system.
///
/// Console output always; a plain-text file log under `log_dir` when given.
/// `RUST_LOG` takes precedence over `log_level`.
pub fn init(log_dir: Option<&Path>, log_level: &str) -> Result<(), RagProbeError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(env_filter.clone());

    let file_layer = match log_dir {
        Some(dir) => {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    RagProbeError::config(format!(
                        "Failed to create log directory {}: {}",
                        dir.display(),
                        e
                    ))
                })?;
            }
            let log_file_path = dir.join("ragprobe.log");
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_file_path)
                .map_err(|e| {
                    RagProbeError::config(format!(
                        "Failed to open log file {}: {}",
                        log_file_path.display(),
                        e
                    ))
                })?;
            Some(
                fmt::layer()
                    .with_writer(log_file)
                    .with_target(true)
                    .with_ansi(false) // no ANSI color codes in files
                    .with_filter(env_filter),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized: level={}", log_level);

    Ok(())
}

/// Parse string to tracing Level
pub fn parse_log_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to INFO", level);
            Level::INFO
        }
    }
}
