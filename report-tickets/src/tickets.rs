use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::report::{PASSED_HEADER, WARNING_HEADER};
use crate::scenario_map::ScenarioMap;

/// What the formatter did with one line of the combined text.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Matched {
        scenario_id: String,
        test_case_ids: Vec<String>,
    },
    Header,
    NoColon,
    UnknownScenario(String),
}

impl LineOutcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, LineOutcome::Matched { .. })
    }

    pub fn test_case_ids(&self) -> &[String] {
        match self {
            LineOutcome::Matched { test_case_ids, .. } => test_case_ids,
            _ => &[],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TicketsSummary {
    pub matched_lines: usize,
    pub skipped_lines: usize,
    pub unknown_scenarios: Vec<String>,
    pub test_case_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TicketsOutcome {
    lines: Vec<LineOutcome>,
}

impl TicketsOutcome {
    pub fn lines(&self) -> &[LineOutcome] {
        &self.lines
    }

    pub fn test_case_ids(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .flat_map(LineOutcome::test_case_ids)
            .map(String::as_str)
    }

    /// The paste-ready string, e.g. `"TC-1","TC-2"`.
    pub fn tickets(&self) -> String {
        self.test_case_ids()
            .map(|id| format!("\"{}\"", id))
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn matched_count(&self) -> usize {
        self.lines.iter().filter(|line| line.is_matched()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.lines.len() - self.matched_count()
    }

    pub fn unknown_scenarios(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                LineOutcome::UnknownScenario(id) => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn summary(&self) -> TicketsSummary {
        TicketsSummary {
            matched_lines: self.matched_count(),
            skipped_lines: self.skipped_count(),
            unknown_scenarios: self
                .unknown_scenarios()
                .into_iter()
                .map(str::to_string)
                .collect(),
            test_case_ids: self.test_case_ids().map(str::to_string).collect(),
        }
    }
}

pub fn classify_line(line: &str, map: &ScenarioMap) -> LineOutcome {
    if line == PASSED_HEADER || line == WARNING_HEADER {
        return LineOutcome::Header;
    }

    let scenario_id = match line.split_once(':') {
        Some((scenario_id, _)) => scenario_id,
        None => return LineOutcome::NoColon,
    };

    match map.get(scenario_id) {
        Some(ids) => LineOutcome::Matched {
            scenario_id: scenario_id.to_string(),
            test_case_ids: ids.to_vec(),
        },
        None => LineOutcome::UnknownScenario(scenario_id.to_string()),
    }
}

pub fn format_tickets(text: &str, map: &ScenarioMap) -> TicketsOutcome {
    let lines = text
        .lines()
        .map(|line| {
            let outcome = classify_line(line, map);
            if !outcome.is_matched() {
                log::debug!("Skipping line {:?}: {:?}", line, outcome);
            }
            outcome
        })
        .collect();

    TicketsOutcome { lines }
}

pub fn format_tickets_file<P: AsRef<Path>>(path: P, map: &ScenarioMap) -> Result<TicketsOutcome> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read combined output: {}", path.display()))?;
    Ok(format_tickets(&text, map))
}
