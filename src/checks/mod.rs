//! SPF, DMARC, and DKIM record checks.
//!
//! Each check issues TXT lookups through a [`TxtResolver`] and filters the
//! answers by record-type prefix. The checks are independent of one another;
//! a missing SPF record says nothing about DMARC or DKIM.

mod dkim;
mod dmarc;
mod spf;

pub use dkim::{sweep_dkim_selectors, DkimSweepOptions};
pub use dmarc::check_dmarc;
pub use spf::check_spf;

use log::warn;

use crate::dns::{DnsError, TxtResolver};

/// Fetches TXT records for `name`, applying the failure policy.
///
/// In lenient mode a resolution failure degrades to an empty record set with
/// a warning, so an unreachable resolver reads the same as a name that
/// publishes nothing. In strict mode the failure propagates to the caller.
pub(crate) async fn txt_records<R: TxtResolver>(
    name: &str,
    resolver: &R,
    strict: bool,
) -> Result<Vec<String>, DnsError> {
    match resolver.lookup_txt(name).await {
        Ok(records) => Ok(records),
        Err(e) if strict => Err(e),
        Err(e) => {
            warn!("Treating failed lookup as no records: {}", e);
            Ok(Vec::new())
        }
    }
}
