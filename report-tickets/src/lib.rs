pub mod config;
pub mod pipeline;
pub mod report;
pub mod scenario_map;
pub mod tickets;

#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::config::PipelineConfig;
pub use crate::pipeline::{run, RunSummary};
pub use crate::report::{extract_report, parse_report, save_combined_text, ExtractedReport};
pub use crate::scenario_map::{load_scenario_map, ScenarioMap, ScenarioMapError, WorkbookKind};
pub use crate::tickets::{format_tickets, format_tickets_file, LineOutcome, TicketsOutcome};
