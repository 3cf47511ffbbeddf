//! Configuration constants.
//!
//! This module defines the constants used throughout the application: the
//! built-in DKIM selector guess-list, DNS resolver tuning, and the default
//! concurrency of the selector sweep.

// DKIM probing
/// Built-in DKIM selector guess-list.
///
/// These are selector labels commonly published by popular mail providers
/// (Google Workspace, Microsoft 365, HubSpot, Constant Contact, Sailthru,
/// Mailgun, ...). Probing `<selector>._domainkey.<domain>` for each label is a
/// guess, not a discovery mechanism: a domain using any selector outside this
/// list will produce no DKIM finding. The list can be replaced per run with
/// `--selector`.
pub const DEFAULT_DKIM_SELECTORS: &[&str] = &[
    "default", "selector1", "selector2", "google", "smtp", "mail", "m1", "k1", "k2", "k3", "hs1",
    "dkim1024", "ctct1", "k", "s1", "200608", "sailthru", "mg", "dkim",
];

/// Default number of DKIM selector lookups in flight at once.
///
/// A value of 1 makes the sweep strictly sequential. Results are reported in
/// selector-list order regardless of this setting.
pub const DEFAULT_DKIM_CONCURRENCY: usize = 8;

// Network operation timeouts
/// DNS query timeout in seconds.
///
/// Most TXT queries complete in well under a second; 3s provides a buffer
/// while failing fast on unresponsive DNS servers. With up to 21 lookups per
/// run the worst case stays bounded.
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Number of attempts per DNS query (no application-level retries beyond the
/// resolver's own).
pub const DNS_ATTEMPTS: usize = 2;
