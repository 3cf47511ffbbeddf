//! TXT lookup trait and the hickory-backed implementation.

use std::future::Future;

use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;
use log::debug;

use crate::dns::DnsError;

/// Source of TXT records for a DNS name.
///
/// Implementations must treat "no records" (including NXDOMAIN) as an empty
/// result set, reserving [`DnsError`] for genuine resolution failures.
pub trait TxtResolver: Send + Sync {
    /// Returns the TXT records published at `name`, one string per record.
    ///
    /// Records split into multiple character-strings on the wire are joined
    /// back into a single string, and enclosing quotes are stripped.
    fn lookup_txt(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<String>, DnsError>> + Send;
}

/// [`TxtResolver`] backed by a `hickory-resolver` async resolver.
pub struct HickoryResolver {
    resolver: TokioAsyncResolver,
}

impl HickoryResolver {
    /// Wraps an already-configured resolver.
    pub fn new(resolver: TokioAsyncResolver) -> Self {
        Self { resolver }
    }
}

impl TxtResolver for HickoryResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DnsError> {
        match self.resolver.lookup(name, RecordType::TXT).await {
            Ok(lookup) => {
                let records: Vec<String> = lookup
                    .iter()
                    .filter_map(|rdata| {
                        if let RData::TXT(txt_data) = rdata {
                            // Long TXT records arrive split into multiple
                            // character-strings; join them back together
                            Some(
                                txt_data
                                    .iter()
                                    .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                                    .collect::<Vec<String>>()
                                    .join(""),
                            )
                        } else {
                            None
                        }
                    })
                    .map(|record| strip_enclosing_quotes(&record).to_string())
                    .collect();
                debug!("Found {} TXT record(s) for {}", records.len(), name);
                Ok(records)
            }
            Err(e) => match e.kind() {
                // hickory reports every negative response as NoRecordsFound,
                // carrying the server's response code. Only NXDOMAIN and an
                // empty NoError answer mean the name publishes nothing;
                // SERVFAIL and friends are real failures.
                ResolveErrorKind::NoRecordsFound { response_code, .. }
                    if matches!(response_code, ResponseCode::NXDomain | ResponseCode::NoError) =>
                {
                    debug!("No TXT records found for {}", name);
                    Ok(Vec::new())
                }
                ResolveErrorKind::NoRecordsFound { response_code, .. } => Err(DnsError::Lookup(
                    name.to_string(),
                    format!("server responded {}", response_code),
                )),
                ResolveErrorKind::Timeout => Err(DnsError::Timeout(name.to_string())),
                _ => Err(DnsError::Lookup(name.to_string(), e.to_string())),
            },
        }
    }
}

/// Strips quotes some resolvers leave around TXT record payloads.
pub(crate) fn strip_enclosing_quotes(record: &str) -> &str {
    record.trim_matches('"')
}
