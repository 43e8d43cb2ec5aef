pub use crate::error_classifier::LogLevel;
use std::env;
use tracing_subscriber::EnvFilter;

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    let threshold = get_rust_log_level();
    should_log(event_level, threshold)
}

/// Filter for the stderr logger. Without `RUST_LOG` only info and above pass.
pub fn stderr_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Routes `log` records to stderr for one-shot commands.
///
/// The TUI draws on the terminal, so it never installs a logger.
pub fn init_stderr_logger() {
    let rust_log = env::var("RUST_LOG").ok();
    let result = tracing_subscriber::fmt()
        .with_env_filter(stderr_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if let Err(e) = result {
        eprintln!("Failed to install logger: {}", e);
    }
}
