//! Report assembly and rendering.
//!
//! [`AuthReport`] keeps the raw findings as typed fields; the sentinel
//! phrases for missing records only exist in the rendered output.

use std::fmt;

/// Rendered when the domain publishes no SPF record.
pub const NO_SPF_RECORD: &str = "No SPF record found.";

/// Rendered when `_dmarc.<domain>` publishes no DMARC record.
pub const NO_DMARC_RECORD: &str = "No DMARC record found.";

/// Rendered when none of the probed selectors published a DKIM record.
pub const NO_DKIM_RECORDS: &str = "No DKIM records found for known selectors.";

/// Email-authentication findings for a single domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthReport {
    /// The domain the checks ran against, as given on the command line.
    pub domain: String,
    /// First TXT record on the domain starting with `v=spf`, if any.
    pub spf: Option<String>,
    /// First TXT record at `_dmarc.<domain>` starting with `v=DMARC1`, if any.
    pub dmarc: Option<String>,
    /// `(selector, record)` pairs for every probed selector that published a
    /// `v=DKIM1` record, in selector-list order.
    pub dkim: Vec<(String, String)>,
}

impl fmt::Display for AuthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Checking authentication for domain: {}", self.domain)?;
        writeln!(f)?;

        writeln!(f, "SPF:")?;
        writeln!(f, "{}", self.spf.as_deref().unwrap_or(NO_SPF_RECORD))?;
        writeln!(f)?;

        writeln!(f, "DMARC:")?;
        writeln!(f, "{}", self.dmarc.as_deref().unwrap_or(NO_DMARC_RECORD))?;
        writeln!(f)?;

        writeln!(f, "DKIM:")?;
        if self.dkim.is_empty() {
            write!(f, "{}", NO_DKIM_RECORDS)?;
        } else {
            for (i, (selector, record)) in self.dkim.iter().enumerate() {
                if i + 1 < self.dkim.len() {
                    writeln!(f, "Selector '{}': {}", selector, record)?;
                } else {
                    write!(f, "Selector '{}': {}", selector, record)?;
                }
            }
        }
        Ok(())
    }
}
