use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::PipelineConfig;
use crate::report::{extract_report, save_combined_text, ExtractedReport};
use crate::scenario_map::load_scenario_map;
use crate::tickets::{format_tickets_file, TicketsOutcome, TicketsSummary};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RunSummary {
    pub passed: usize,
    pub warning: usize,
    pub skipped_elements: usize,
    #[serde(flatten)]
    pub tickets: TicketsSummary,
}

impl RunSummary {
    pub fn new(report: &ExtractedReport, outcome: &TicketsOutcome) -> Self {
        RunSummary {
            passed: report.passed.len(),
            warning: report.warning.len(),
            skipped_elements: report.skipped,
            tickets: outcome.summary(),
        }
    }
}

pub fn save_summary<P: AsRef<Path>>(summary: &RunSummary, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(summary).context("Failed to serialize run summary")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write summary file: {}", path.display()))
}

/// Extracts the report, persists the combined text, then formats it against the scenario map.
pub fn run(config: &PipelineConfig) -> Result<TicketsOutcome> {
    log::info!("Reading report {}", config.report_path.display());
    let report = extract_report(&config.report_path)?;
    save_combined_text(&report, &config.combined_output_path)?;
    log::info!(
        "Passed and warning test cases extracted and saved to {}",
        config.combined_output_path.display()
    );

    let scenario_map = load_scenario_map(&config.scenario_map_path, config.skip_rows)
        .with_context(|| {
            format!(
                "Failed to load scenario map: {}",
                config.scenario_map_path.display()
            )
        })?;
    log::info!("Loaded {} scenarios", scenario_map.len());

    let outcome = format_tickets_file(&config.combined_output_path, &scenario_map)?;

    let unknown = outcome.unknown_scenarios();
    if !unknown.is_empty() {
        log::warn!(
            "{} lines named a scenario missing from the map: {}",
            unknown.len(),
            unknown.join(", ")
        );
    }
    log::info!(
        "{} lines matched, {} skipped",
        outcome.matched_count(),
        outcome.skipped_count()
    );

    if let Some(summary_path) = &config.summary_path {
        save_summary(&RunSummary::new(&report, &outcome), summary_path)?;
        log::info!("Summary saved to {}", summary_path.display());
    }

    Ok(outcome)
}
