//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};

/// Initializes the DNS resolver used for all TXT lookups.
///
/// Creates a resolver with the default upstream configuration and aggressive
/// timeouts, so a slow or unresponsive nameserver fails a query quickly
/// instead of stalling the whole run. A full run issues one TXT query per
/// check plus one per probed DKIM selector.
pub fn init_resolver() -> TokioAsyncResolver {
    // Configure DNS resolver with timeouts
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_ATTEMPTS; // Reduce retry attempts to fail faster
                                  // Set ndots to 0 to prevent search domain appending
    opts.ndots = 0;

    // Use default resolver configuration with explicit timeouts so all
    // queries share the same timeout behavior
    TokioAsyncResolver::tokio(ResolverConfig::default(), opts)
}
