//! DKIM selector sweep.
//!
//! DKIM keys live at `<selector>._domainkey.<domain>`, and DNS has no way to
//! enumerate selectors. The sweep probes a guess-list of selectors commonly
//! used by mail providers, so an empty result means "none of the probed
//! selectors answered", not "the domain has no DKIM keys".

use futures::stream::{self, StreamExt, TryStreamExt};

use crate::checks::txt_records;
use crate::config::{DEFAULT_DKIM_CONCURRENCY, DEFAULT_DKIM_SELECTORS};
use crate::dns::{DnsError, TxtResolver};

/// DKIM key records declare themselves with this exact version tag.
const DKIM_PREFIX: &str = "v=DKIM1";

/// Options for [`sweep_dkim_selectors`].
#[derive(Debug, Clone)]
pub struct DkimSweepOptions {
    /// Selector labels to probe, in reporting order.
    pub selectors: Vec<String>,
    /// Maximum lookups in flight at once. Clamped to at least 1.
    pub concurrency: usize,
    /// Propagate resolution failures instead of skipping the selector.
    pub strict: bool,
}

impl Default for DkimSweepOptions {
    fn default() -> Self {
        Self {
            selectors: DEFAULT_DKIM_SELECTORS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            concurrency: DEFAULT_DKIM_CONCURRENCY,
            strict: false,
        }
    }
}

/// Probes `<selector>._domainkey.<domain>` for every selector in the list
/// and collects the first `v=DKIM1` record each one publishes.
///
/// Selectors that publish nothing, or only non-DKIM TXT records, are left
/// out of the result. Lookups run concurrently up to the configured limit,
/// but results always come back in selector-list order.
///
/// # Errors
///
/// In strict mode, the first resolution failure aborts the sweep with a
/// [`DnsError`]. In lenient mode failing selectors are logged and skipped.
pub async fn sweep_dkim_selectors<R: TxtResolver>(
    domain: &str,
    resolver: &R,
    options: &DkimSweepOptions,
) -> Result<Vec<(String, String)>, DnsError> {
    let concurrency = options.concurrency.max(1);
    let strict = options.strict;

    let probes: Vec<Option<(String, String)>> = stream::iter(options.selectors.iter())
        .map(|selector| async move {
            let name = format!("{}._domainkey.{}", selector, domain);
            let records = txt_records(&name, resolver, strict).await?;
            Ok::<_, DnsError>(
                records
                    .into_iter()
                    .find(|r| r.starts_with(DKIM_PREFIX))
                    .map(|record| (selector.clone(), record)),
            )
        })
        .buffered(concurrency)
        .try_collect()
        .await?;

    Ok(probes.into_iter().flatten().collect())
}
