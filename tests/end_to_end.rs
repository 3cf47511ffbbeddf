//! Integration tests for run_check_with
//!
//! These tests verify the full check pipeline against an in-memory resolver:
//! - Section ordering and sentinel phrases in the rendered report
//! - Per-check name construction (apex, _dmarc, selector._domainkey)
//! - Lenient vs strict handling of resolution failures
//! - Selector overrides flowing from Config into the DKIM sweep

use mail_auth_check::dns::MockResolver;
use mail_auth_check::report::{NO_DKIM_RECORDS, NO_DMARC_RECORD, NO_SPF_RECORD};
use mail_auth_check::{run_check_with, Config};

/// Helper function to create a Config for testing
fn test_config(domain: &str) -> Config {
    Config::new(domain)
}

#[tokio::test]
async fn reports_all_sentinels_for_a_silent_domain() {
    let resolver = MockResolver::new();

    let report = run_check_with(&resolver, test_config("quiet.example"))
        .await
        .expect("lenient run should not fail");

    let rendered = report.to_string();
    assert!(rendered.starts_with("Checking authentication for domain: quiet.example"));
    assert!(rendered.contains(NO_SPF_RECORD));
    assert!(rendered.contains(NO_DMARC_RECORD));
    assert!(rendered.contains(NO_DKIM_RECORDS));
}

#[tokio::test]
async fn report_sections_appear_in_fixed_order() {
    let resolver = MockResolver::new();

    let report = run_check_with(&resolver, test_config("quiet.example"))
        .await
        .expect("lenient run should not fail");

    let rendered = report.to_string();
    let spf = rendered.find(NO_SPF_RECORD).expect("SPF sentinel missing");
    let dmarc = rendered
        .find(NO_DMARC_RECORD)
        .expect("DMARC sentinel missing");
    let dkim = rendered
        .find(NO_DKIM_RECORDS)
        .expect("DKIM sentinel missing");
    assert!(spf < dmarc, "SPF section should precede DMARC");
    assert!(dmarc < dkim, "DMARC section should precede DKIM");
}

#[tokio::test]
async fn reports_records_from_their_dedicated_names() {
    let resolver = MockResolver::new();
    resolver.add_txt(
        "example.com",
        vec![
            "google-site-verification=token".to_string(),
            "v=spf1 include:_spf.google.com ~all".to_string(),
        ],
    );
    resolver.add_txt(
        "_dmarc.example.com",
        vec!["v=DMARC1; p=reject; rua=mailto:dmarc@example.com".to_string()],
    );
    resolver.add_txt(
        "google._domainkey.example.com",
        vec!["v=DKIM1; k=rsa; p=MIGfMA0GCSq".to_string()],
    );

    let report = run_check_with(&resolver, test_config("example.com"))
        .await
        .expect("lenient run should not fail");

    assert_eq!(
        report.spf.as_deref(),
        Some("v=spf1 include:_spf.google.com ~all")
    );
    assert_eq!(
        report.dmarc.as_deref(),
        Some("v=DMARC1; p=reject; rua=mailto:dmarc@example.com")
    );
    assert_eq!(
        report.dkim,
        vec![(
            "google".to_string(),
            "v=DKIM1; k=rsa; p=MIGfMA0GCSq".to_string()
        )]
    );

    let rendered = report.to_string();
    assert!(rendered.contains("Selector 'google': v=DKIM1; k=rsa; p=MIGfMA0GCSq"));
    assert!(!rendered.contains(NO_SPF_RECORD));
    assert!(!rendered.contains(NO_DMARC_RECORD));
    assert!(!rendered.contains(NO_DKIM_RECORDS));
}

/// A DMARC-looking record on the apex must not satisfy the DMARC check,
/// and an SPF record on _dmarc must not satisfy the SPF check.
#[tokio::test]
async fn records_on_the_wrong_name_do_not_count() {
    let resolver = MockResolver::new();
    resolver.add_txt("example.com", vec!["v=DMARC1; p=none".to_string()]);
    resolver.add_txt("_dmarc.example.com", vec!["v=spf1 -all".to_string()]);

    let report = run_check_with(&resolver, test_config("example.com"))
        .await
        .expect("lenient run should not fail");

    assert_eq!(report.spf, None);
    assert_eq!(report.dmarc, None);
}

#[tokio::test]
async fn lenient_run_survives_resolution_failures() {
    let resolver = MockResolver::new();
    resolver.set_failure("example.com");
    resolver.set_timeout("_dmarc.example.com");
    resolver.set_failure("default._domainkey.example.com");

    let report = run_check_with(&resolver, test_config("example.com"))
        .await
        .expect("failures should degrade to missing records");

    assert_eq!(report.spf, None);
    assert_eq!(report.dmarc, None);
    assert!(report.dkim.is_empty());
}

#[tokio::test]
async fn strict_run_fails_on_resolution_failure() {
    let resolver = MockResolver::new();
    resolver.set_failure("example.com");

    let mut config = test_config("example.com");
    config.strict = true;

    let err = run_check_with(&resolver, config)
        .await
        .expect_err("strict run should surface the failure");
    assert!(err.to_string().contains("SPF check failed"));
}

#[tokio::test]
async fn strict_run_fails_on_dkim_selector_failure() {
    let resolver = MockResolver::new();
    resolver.add_txt("example.com", vec!["v=spf1 -all".to_string()]);
    resolver.add_txt("_dmarc.example.com", vec!["v=DMARC1; p=none".to_string()]);
    resolver.set_timeout("k1._domainkey.example.com");

    let mut config = test_config("example.com");
    config.strict = true;

    let err = run_check_with(&resolver, config)
        .await
        .expect_err("strict run should surface the sweep failure");
    assert!(err.to_string().contains("DKIM selector sweep failed"));
}

#[tokio::test]
async fn config_selectors_override_the_builtin_list() {
    let resolver = MockResolver::new();
    // Published under a built-in selector, but the override list skips it
    resolver.add_txt(
        "google._domainkey.example.com",
        vec!["v=DKIM1; p=googlekey".to_string()],
    );
    resolver.add_txt(
        "scph0620._domainkey.example.com",
        vec!["v=DKIM1; p=customkey".to_string()],
    );

    let mut config = test_config("example.com");
    config.selectors = Some(vec!["scph0620".to_string()]);

    let report = run_check_with(&resolver, config)
        .await
        .expect("lenient run should not fail");

    assert_eq!(
        report.dkim,
        vec![("scph0620".to_string(), "v=DKIM1; p=customkey".to_string())]
    );
}

#[tokio::test]
async fn dkim_results_follow_selector_list_order() {
    let resolver = MockResolver::new();
    resolver.add_txt(
        "dkim._domainkey.example.com",
        vec!["v=DKIM1; p=last".to_string()],
    );
    resolver.add_txt(
        "default._domainkey.example.com",
        vec!["v=DKIM1; p=first".to_string()],
    );
    resolver.add_txt(
        "smtp._domainkey.example.com",
        vec!["v=DKIM1; p=middle".to_string()],
    );

    // Sequential and wide sweeps must agree on ordering
    for concurrency in [1, 32] {
        let mut config = test_config("example.com");
        config.dkim_concurrency = concurrency;

        let report = run_check_with(&resolver, config)
            .await
            .expect("lenient run should not fail");
        let selectors: Vec<&str> = report.dkim.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(
            selectors,
            vec!["default", "smtp", "dkim"],
            "sweep with concurrency {} should report in list order",
            concurrency
        );
    }
}

#[tokio::test]
async fn report_domain_matches_config_domain() {
    let resolver = MockResolver::new();

    let report = run_check_with(&resolver, test_config("Sub.Example.COM"))
        .await
        .expect("lenient run should not fail");

    // The domain is reported exactly as given, with no normalization
    assert_eq!(report.domain, "Sub.Example.COM");
}
