//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (selector guess-list, DNS timeouts)
//! - CLI option types and the library [`Config`] struct

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
