use std::fs;
use std::path::{Path, PathBuf};

pub fn fixture_path(fixture_name: &str) -> PathBuf {
    Path::new("src/tests/fixtures").join(format!("{}.html", fixture_name))
}

pub fn workbook_fixture_path(file_name: &str) -> PathBuf {
    Path::new("src/tests/fixtures").join(file_name)
}

/// Load test HTML fixture by name
pub fn load_html_fixture(fixture_name: &str) -> String {
    fs::read_to_string(fixture_path(fixture_name))
        .unwrap_or_else(|_| panic!("Failed to load test fixture: {}", fixture_name))
}
