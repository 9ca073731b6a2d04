use std::path::Path;

use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::JsonFields;
use tracing_subscriber::prelude::*;

use crate::config;

/// Open the JSON log file inside `data_dir`, creating the directory if needed.
fn open_log_file(data_dir: &Path) -> anyhow::Result<RollingFileAppender> {
    std::fs::create_dir_all(data_dir).inspect_err(|e| {
        eprintln!("Failed to create data directory: {}", e);
    })?;

    let log_file = RollingFileAppender::builder()
        .filename_prefix(config::log_file_name())
        .build(data_dir)
        .inspect_err(|e| {
            eprintln!(
                "Failed to open log file {:?}: {}",
                data_dir.join(config::log_file_name()),
                e
            );
        })?;

    Ok(log_file)
}

pub fn init() -> anyhow::Result<()> {
    let log_file = open_log_file(&config::data_dir())?;

    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(log_file)
        .fmt_fields(JsonFields::default());

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // Use RUST_LOG if set, otherwise default to INFO
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()?;

    Ok(())
}
