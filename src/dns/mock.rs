//! In-memory resolver for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::dns::{DnsError, TxtResolver};

/// [`TxtResolver`] that serves records from memory.
///
/// Names with no configured records resolve to an empty set, matching how
/// [`HickoryResolver`](crate::dns::HickoryResolver) treats NXDOMAIN. Use
/// [`set_failure`](MockResolver::set_failure) or
/// [`set_timeout`](MockResolver::set_timeout) to make a name fail instead.
#[derive(Clone, Default)]
pub struct MockResolver {
    records: Arc<Mutex<HashMap<String, Vec<String>>>>,
    failures: Arc<Mutex<Vec<String>>>,
    timeouts: Arc<Mutex<Vec<String>>>,
}

impl MockResolver {
    /// Creates an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes TXT records at `name`, replacing any existing ones.
    pub fn add_txt(&self, name: &str, records: Vec<String>) {
        self.records
            .lock()
            .unwrap()
            .insert(name.to_string(), records);
    }

    /// Makes lookups for `name` fail with [`DnsError::Lookup`].
    pub fn set_failure(&self, name: &str) {
        self.failures.lock().unwrap().push(name.to_string());
    }

    /// Makes lookups for `name` fail with [`DnsError::Timeout`].
    pub fn set_timeout(&self, name: &str) {
        self.timeouts.lock().unwrap().push(name.to_string());
    }
}

impl TxtResolver for MockResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DnsError> {
        if self.timeouts.lock().unwrap().iter().any(|n| n == name) {
            return Err(DnsError::Timeout(name.to_string()));
        }
        if self.failures.lock().unwrap().iter().any(|n| n == name) {
            return Err(DnsError::Lookup(name.to_string(), "SERVFAIL".to_string()));
        }
        let records = self.records.lock().unwrap();
        Ok(records.get(name).cloned().unwrap_or_default())
    }
}
