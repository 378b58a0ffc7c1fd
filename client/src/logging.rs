//! # Logging Initialization
//!
//! `tracing` subscriber setup for binaries built on this crate.
//!
//! | Variable | Default | Effect |
//! |----------|---------|--------|
//! | `RUST_LOG` | `client=info,warn` | `EnvFilter` directives |
//! | `LOG_FORMAT` | `text` | `json` switches the console layer to JSON lines |
//! | `LOG_DIR` | unset | Adds a daily-rotated file layer in this directory |
//!
//! Console output goes to stderr so stdout stays free for program output.

use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use crate::core::error::{AppError, Result};

pub const DEFAULT_FILTER: &str = "client=info,warn";

/// File name prefix for the rotated log; the appender adds the date.
pub const LOG_FILE_NAME: &str = "wallet-client.log";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directives
    pub filter: String,
    pub format: LogFormat,
    /// Directory for the rotated log file, if file logging is on
    pub log_dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::Text,
            log_dir: None,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(lib_utils::get_env_opt)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_FILTER.to_string()),
            format: lookup("LOG_FORMAT").map(|v| LogFormat::parse(&v)).unwrap_or_default(),
            log_dir: lookup("LOG_DIR").map(PathBuf::from),
        }
    }
}

/// Install the global subscriber.
///
/// Keep the returned guard alive for the life of the program; dropping it
/// flushes and stops the file writer. `None` when file logging is off.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|e| {
        eprintln!("Warning: invalid log filter {:?} ({}), using {}", config.filter, e, DEFAULT_FILTER);
        EnvFilter::new(DEFAULT_FILTER)
    });

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    let console = fmt::layer().with_writer(std::io::stderr).with_target(true);
    layers.push(match config.format {
        LogFormat::Json => console.json().boxed(),
        LogFormat::Text => console.boxed(),
    });

    let mut guard = None;
    if let Some(dir) = &config.log_dir {
        fs::create_dir_all(dir)?;
        let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
        let (writer, file_guard) = tracing_appender::non_blocking(appender);
        layers.push(
            fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .boxed(),
        );
        guard = Some(file_guard);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to initialise logging: {}", e)))?;

    tracing::info!(
        filter = %config.filter,
        format = ?config.format,
        log_dir = ?config.log_dir,
        "Logging initialized"
    );

    Ok(guard)
}
