//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use clap::ValueEnum;

use crate::config::constants::DEFAULT_DKIM_CONCURRENCY;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
///
/// This affects log lines only; the report printed to stdout is always
/// human-readable.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use mail_auth_check::Config;
///
/// let config = Config {
///     domain: "example.com".to_string(),
///     strict: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Domain whose authentication posture is checked. The value is used as
    /// given: no punycode handling, no trailing-dot normalization.
    pub domain: String,

    /// DKIM selector labels to probe instead of the built-in guess-list.
    /// `None` means the built-in list.
    pub selectors: Option<Vec<String>>,

    /// Maximum concurrent DKIM selector lookups (1 = sequential sweep).
    pub dkim_concurrency: usize,

    /// Treat DNS resolution failures as fatal errors instead of degrading
    /// them to "no records".
    pub strict: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Config {
    /// Creates a configuration for the given domain with all other settings
    /// at their defaults.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Default::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: String::new(),
            selectors: None,
            dkim_concurrency: DEFAULT_DKIM_CONCURRENCY,
            strict: false,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}
