use anyhow::{Context, Result};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const PASSED_HEADER: &str = "PASSED TEST CASES:";
pub const WARNING_HEADER: &str = "WARNING TEST CASES:";

const PASSED_SELECTOR: &str = ".test.pass";
const WARNING_SELECTOR: &str = ".test.warning";
const TEST_NAME_SELECTOR: &str = ".test-name";

/// Test names pulled out of an HTML report, in document order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ExtractedReport {
    pub passed: Vec<String>,
    pub warning: Vec<String>,
    /// Matched test elements that had no `.test-name` descendant.
    pub skipped: usize,
}

impl ExtractedReport {
    /// Renders the two-section text that the ticket formatter reads back.
    pub fn combined_text(&self) -> String {
        let mut combined = String::new();

        combined.push_str(PASSED_HEADER);
        combined.push('\n');
        for name in &self.passed {
            combined.push_str(name);
            combined.push('\n');
        }

        combined.push('\n');
        combined.push_str(WARNING_HEADER);
        combined.push('\n');
        for name in &self.warning {
            combined.push_str(name);
            combined.push('\n');
        }

        combined
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow::anyhow!("Invalid selector {}: {:?}", css, e))
}

fn is_collapsible_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0C' | '\r' | '\u{A0}')
}

// Rendered text: ASCII whitespace and `&nbsp;` runs collapse to one space.
// Zero-width characters are dropped.
fn element_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split(is_collapsible_space)
        .filter(|word| !word.is_empty())
        .map(|word| word.replace(['\u{200B}', '\u{AD}'], ""))
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn extract_test_names(
    document: &Html,
    test_selector: &Selector,
    name_selector: &Selector,
) -> (Vec<String>, usize) {
    let mut names = Vec::new();
    let mut skipped = 0;

    for test in document.select(test_selector) {
        match test.select(name_selector).next() {
            Some(name_element) => names.push(element_text(name_element)),
            None => skipped += 1,
        }
    }

    (names, skipped)
}

pub fn parse_report(html: &str) -> Result<ExtractedReport> {
    let document = Html::parse_document(html);

    let name_selector = selector(TEST_NAME_SELECTOR)?;
    let (passed, skipped_passed) =
        extract_test_names(&document, &selector(PASSED_SELECTOR)?, &name_selector);
    let (warning, skipped_warning) =
        extract_test_names(&document, &selector(WARNING_SELECTOR)?, &name_selector);

    let skipped = skipped_passed + skipped_warning;
    if skipped > 0 {
        log::debug!("{} test elements had no test name", skipped);
    }

    Ok(ExtractedReport {
        passed,
        warning,
        skipped,
    })
}

pub fn extract_report<P: AsRef<Path>>(path: P) -> Result<ExtractedReport> {
    let path = path.as_ref();
    let html = fs::read_to_string(path)
        .with_context(|| format!("Failed to read HTML report: {}", path.display()))?;
    parse_report(&html)
}

pub fn save_combined_text<P: AsRef<Path>>(report: &ExtractedReport, path: P) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, report.combined_text())
        .with_context(|| format!("Failed to write combined output: {}", path.display()))
}
