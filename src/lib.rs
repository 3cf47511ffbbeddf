//! mail_auth_check library: email-authentication posture checks over DNS
//!
//! This library queries a domain's DNS TXT records and reports its email
//! authentication posture: the SPF policy on the domain, the DMARC policy at
//! `_dmarc.<domain>`, and DKIM keys found by probing a list of selectors
//! commonly used by mail providers.
//!
//! # Example
//!
//! ```no_run
//! use mail_auth_check::{run_check, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = run_check(Config::new("example.com")).await?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod checks;
pub mod config;
pub mod dns;
pub mod initialization;
pub mod report;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use report::AuthReport;
pub use run::{run_check, run_check_with};

// Internal run module (contains the main check logic)
mod run {
    use anyhow::{Context, Result};
    use log::{debug, info};

    use crate::checks::{check_dmarc, check_spf, sweep_dkim_selectors, DkimSweepOptions};
    use crate::config::Config;
    use crate::dns::{HickoryResolver, TxtResolver};
    use crate::initialization::init_resolver;
    use crate::report::AuthReport;

    /// Runs the SPF, DMARC, and DKIM checks with the provided configuration.
    ///
    /// This is the main entry point for the library. It builds a DNS resolver
    /// with the default upstream configuration and runs all three checks
    /// against it.
    ///
    /// # Errors
    ///
    /// With `config.strict` set, the first DNS resolution failure aborts the
    /// run. Without it, resolution failures are logged and read as missing
    /// records, so the only remaining failure modes are internal ones.
    pub async fn run_check(config: Config) -> Result<AuthReport> {
        let resolver = HickoryResolver::new(init_resolver());
        run_check_with(&resolver, config).await
    }

    /// Runs the checks against a caller-supplied resolver.
    ///
    /// Useful for tests, or for callers that want to point the checks at a
    /// specific DNS server rather than the system default.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`run_check`].
    pub async fn run_check_with<R: TxtResolver>(
        resolver: &R,
        config: Config,
    ) -> Result<AuthReport> {
        info!("Checking authentication records for {}", config.domain);

        let spf = check_spf(&config.domain, resolver, config.strict)
            .await
            .context("SPF check failed")?;
        debug!("SPF record: {}", spf.as_deref().unwrap_or("none"));

        let dmarc = check_dmarc(&config.domain, resolver, config.strict)
            .await
            .context("DMARC check failed")?;
        debug!("DMARC record: {}", dmarc.as_deref().unwrap_or("none"));

        let mut options = DkimSweepOptions {
            concurrency: config.dkim_concurrency,
            strict: config.strict,
            ..Default::default()
        };
        if let Some(selectors) = &config.selectors {
            options.selectors = selectors.clone();
        }
        let dkim = sweep_dkim_selectors(&config.domain, resolver, &options)
            .await
            .context("DKIM selector sweep failed")?;
        debug!("DKIM selectors with records: {}", dkim.len());

        Ok(AuthReport {
            domain: config.domain,
            spf,
            dmarc,
            dkim,
        })
    }
}
