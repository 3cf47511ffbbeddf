//! DNS TXT lookups.
//!
//! Everything the checks need from DNS goes through the [`TxtResolver`]
//! trait so tests can swap the real resolver for an in-memory one. The
//! production implementation is [`HickoryResolver`], a thin wrapper around
//! `hickory-resolver`'s async resolver.
//!
//! A name that publishes no TXT records (including NXDOMAIN) is not an
//! error: lookups return an empty record set for it. [`DnsError`] covers
//! only genuine resolution failures such as timeouts and SERVFAIL.

mod lookup;
mod mock;

pub use lookup::{HickoryResolver, TxtResolver};
pub use mock::MockResolver;

use thiserror::Error;

/// Resolution failures that are distinct from "this name has no records".
#[derive(Error, Debug)]
pub enum DnsError {
    /// The query did not complete within the resolver's timeout.
    #[error("TXT query for {0} timed out")]
    Timeout(String),

    /// Any other resolution failure (SERVFAIL, refused, network error).
    #[error("TXT query for {0} failed: {1}")]
    Lookup(String, String),
}
