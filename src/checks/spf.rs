//! SPF record check.

use crate::checks::txt_records;
use crate::dns::{DnsError, TxtResolver};

/// SPF records start with this prefix. Matching on `v=spf` rather than
/// `v=spf1` admits any version digit.
const SPF_PREFIX: &str = "v=spf";

/// Returns the first TXT record on `domain` that starts with `v=spf`.
///
/// The match is exact on the record as published: no trimming, no case
/// folding. `V=SPF1 -all` does not count as an SPF record.
///
/// # Errors
///
/// In strict mode, resolution failures surface as [`DnsError`]. In lenient
/// mode they are logged and read as "no record".
pub async fn check_spf<R: TxtResolver>(
    domain: &str,
    resolver: &R,
    strict: bool,
) -> Result<Option<String>, DnsError> {
    let records = txt_records(domain, resolver, strict).await?;
    Ok(records.into_iter().find(|r| r.starts_with(SPF_PREFIX)))
}
