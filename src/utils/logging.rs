use env_logger::{Builder, Target};
use log::{Level, LevelFilter, SetLoggerError};
use std::env;
use std::io::Write;

use crate::error::AppError;

fn parse_level(value: &str) -> LevelFilter {
    match value.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

pub fn init_logging() -> Result<(), SetLoggerError> {
    let log_level = parse_level(&env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()));

    let mut builder = Builder::from_default_env();

    builder.format(|buf, record| {
        let timestamp = buf.timestamp();
        let target = record.target();

        match record.level() {
            Level::Info => writeln!(buf, "{} [INFO] [{}]: {}", timestamp, target, record.args()),
            level => {
                let file = record.file().unwrap_or("unknown");
                let line = record.line().unwrap_or(0);
                writeln!(
                    buf,
                    "{} [{}] [{}:{}] {}: {}",
                    timestamp,
                    level,
                    file,
                    line,
                    target,
                    record.args()
                )
            }
        }
    });

    // The renderer stack is chatty at info
    if env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string()) == "production" {
        builder.filter_module("wgpu_core", LevelFilter::Warn);
        builder.filter_module("wgpu_hal", LevelFilter::Warn);
        builder.filter_module("naga", LevelFilter::Warn);
        builder.filter_module("iced_wgpu", LevelFilter::Warn);
        builder.filter_module("cosmic_text", LevelFilter::Warn);
    }

    builder.filter_level(log_level).target(Target::Stdout).try_init()
}

pub fn log_transition(from: &str, to: &str) {
    log::info!("[Navigator] {} -> {}", from, to);
}

pub fn log_resource_failure(name: &str, error: &AppError) {
    log::warn!("[Assets] Could not load {}: {}", name, error);
}
