//! DMARC record check.

use crate::checks::txt_records;
use crate::dns::{DnsError, TxtResolver};

/// DMARC records declare themselves with this exact version tag.
const DMARC_PREFIX: &str = "v=DMARC1";

/// Returns the first TXT record at `_dmarc.<domain>` that starts with
/// `v=DMARC1`.
///
/// Only the dedicated `_dmarc` subdomain is queried; a DMARC-looking record
/// on the domain apex is ignored. The prefix match is case-sensitive, as the
/// version tag is specified in upper case.
///
/// # Errors
///
/// In strict mode, resolution failures surface as [`DnsError`]. In lenient
/// mode they are logged and read as "no record".
pub async fn check_dmarc<R: TxtResolver>(
    domain: &str,
    resolver: &R,
    strict: bool,
) -> Result<Option<String>, DnsError> {
    let name = format!("_dmarc.{}", domain);
    let records = txt_records(&name, resolver, strict).await?;
    Ok(records.into_iter().find(|r| r.starts_with(DMARC_PREFIX)))
}
