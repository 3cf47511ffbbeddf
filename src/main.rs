//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mail_auth_check` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use mail_auth_check::config::DEFAULT_DKIM_CONCURRENCY;
use mail_auth_check::initialization::init_logger_with;
use mail_auth_check::{run_check, Config, LogFormat, LogLevel};

/// Reports a domain's SPF, DMARC, and DKIM posture from DNS TXT records.
#[derive(Debug, Parser)]
#[command(name = "mail_auth_check", version)]
struct Cli {
    /// Domain to check, e.g. example.com
    domain: String,

    /// DKIM selector to probe instead of the built-in list (repeatable)
    #[arg(long = "selector", value_name = "SELECTOR")]
    selectors: Vec<String>,

    /// Maximum concurrent DKIM selector lookups (1 = sequential)
    #[arg(long, default_value_t = DEFAULT_DKIM_CONCURRENCY)]
    dkim_concurrency: usize,

    /// Fail on DNS resolution errors instead of reporting "no records"
    #[arg(long)]
    strict: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let selectors = if cli.selectors.is_empty() {
            None
        } else {
            Some(cli.selectors)
        };
        Config {
            domain: cli.domain,
            selectors,
            dkim_concurrency: cli.dkim_concurrency,
            strict: cli.strict,
            log_level: cli.log_level,
            log_format: cli.log_format,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config: Config = Cli::parse().into();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the checks using the library
    match run_check(config).await {
        Ok(report) => {
            println!("{}", report);
            Ok(())
        }
        Err(e) => {
            eprintln!("mail_auth_check error: {:#}", e);
            process::exit(1);
        }
    }
}
