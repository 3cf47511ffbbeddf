//! Process initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger (plain or JSON format)
//! - DNS resolver
//!
//! Initialization functions return proper error types where setup can fail.

mod logger;
mod resolver;

use log::SetLoggerError;
use thiserror::Error;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger error: {0}")]
    LoggerError(#[from] SetLoggerError),
}
