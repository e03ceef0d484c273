use super::fixtures;
use crate::report::{extract_report, parse_report, save_combined_text, ExtractedReport};
use std::fs;

#[test]
fn test_sample_report_parsing() {
    let html = fixtures::load_html_fixture("sample_report");
    let report = parse_report(&html).unwrap();

    // Document order within each section, regardless of interleaving
    assert_eq!(
        report.passed,
        vec![
            "SCN-1: Login flow",
            "SCN-2: Checkout flow",
            "Logout without scenario id"
        ]
    );
    assert_eq!(
        report.warning,
        vec!["SCN-3: Search results", "SCN-4: Profile photo upload"]
    );
    assert_eq!(report.skipped, 1);
}

#[test]
fn test_missing_test_name_contributes_no_line() {
    let html = r#"
    <html>
    <body>
        <div class="test pass"><span class="test-time">10:00</span></div>
        <div class="test warning"><span class="description">slow</span></div>
    </body>
    </html>
    "#;

    let report = parse_report(html).unwrap();
    assert!(report.passed.is_empty());
    assert!(report.warning.is_empty());
    assert_eq!(report.skipped, 2);
    assert_eq!(
        report.combined_text(),
        "PASSED TEST CASES:\n\nWARNING TEST CASES:\n"
    );
}

#[test]
fn test_requires_both_classes() {
    let html = r#"
    <html>
    <body>
        <div class="pass"><span class="test-name">SCN-1: only pass</span></div>
        <div class="test"><span class="test-name">SCN-2: only test</span></div>
        <div class="test fail"><span class="test-name">SCN-3: failed</span></div>
        <div class="warning test"><span class="test-name">SCN-4: warned</span></div>
    </body>
    </html>
    "#;

    let report = parse_report(html).unwrap();
    assert!(report.passed.is_empty());
    assert_eq!(report.warning, vec!["SCN-4: warned"]);
}

#[test]
fn test_duplicates_are_kept() {
    let html = r#"
    <html>
    <body>
        <div class="test pass"><span class="test-name">SCN-1: retry</span></div>
        <div class="test pass"><span class="test-name">SCN-1: retry</span></div>
    </body>
    </html>
    "#;

    let report = parse_report(html).unwrap();
    assert_eq!(report.passed, vec!["SCN-1: retry", "SCN-1: retry"]);
}

#[test]
fn test_combined_text_layout() {
    let report = ExtractedReport {
        passed: vec!["SCN-1: Login flow".to_string(), "SCN-2: Checkout".to_string()],
        warning: vec!["SCN-3: Search".to_string()],
        skipped: 0,
    };

    assert_eq!(
        report.combined_text(),
        "PASSED TEST CASES:\nSCN-1: Login flow\nSCN-2: Checkout\n\nWARNING TEST CASES:\nSCN-3: Search\n"
    );
}

#[test]
fn test_save_combined_text_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("combined.txt");
    fs::write(&path, "stale content from a previous run\n".repeat(10)).unwrap();

    let report = ExtractedReport {
        passed: vec!["SCN-1: Login flow".to_string()],
        warning: Vec::new(),
        skipped: 0,
    };
    save_combined_text(&report, &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), report.combined_text());
}

#[test]
fn test_extract_report_from_file() {
    let report = extract_report(fixtures::fixture_path("sample_report")).unwrap();
    assert_eq!(report.passed.len(), 3);
    assert_eq!(report.warning.len(), 2);
}

#[test]
fn test_missing_report_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = extract_report(dir.path().join("missing.html"));
    assert!(result.is_err());
    assert!(result
        .err()
        .unwrap()
        .to_string()
        .contains("Failed to read HTML report"));
}

#[test]
fn test_non_utf8_report_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.html");
    fs::write(&path, b"<html><body>caf\xe9</body></html>").unwrap();

    assert!(extract_report(&path).is_err());
}

#[test]
fn test_test_name_whitespace_normalization() {
    let html = "<html><body>\
        <div class=\"test pass\"><span class=\"test-name\">SCN-1:&nbsp;&nbsp;Login\t\n flow</span></div>\
        <div class=\"test pass\"><span class=\"test-name\">SCN-2:\u{2003}Em\u{200B}space</span></div>\
        </body></html>";

    let report = parse_report(html).unwrap();
    assert_eq!(
        report.passed,
        vec!["SCN-1: Login flow", "SCN-2:\u{2003}Emspace"]
    );
}
