use std::path::{Path, PathBuf};

pub const DEFAULT_COMBINED_OUTPUT: &str = "combined_test_cases.txt";

/// Input and output locations for one run of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub report_path: PathBuf,
    pub scenario_map_path: PathBuf,
    /// Intermediate two-section text file, overwritten on every run
    pub combined_output_path: PathBuf,
    /// Leading sheet rows to ignore, e.g. 1 for a header row
    pub skip_rows: usize,
    pub summary_path: Option<PathBuf>,
}

impl PipelineConfig {
    pub fn new<R: AsRef<Path>, S: AsRef<Path>>(report_path: R, scenario_map_path: S) -> Self {
        PipelineConfig {
            report_path: report_path.as_ref().to_path_buf(),
            scenario_map_path: scenario_map_path.as_ref().to_path_buf(),
            combined_output_path: PathBuf::from(DEFAULT_COMBINED_OUTPUT),
            skip_rows: 0,
            summary_path: None,
        }
    }

    pub fn with_combined_output<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.combined_output_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = skip_rows;
        self
    }

    pub fn with_summary<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.summary_path = Some(path.as_ref().to_path_buf());
        self
    }
}
