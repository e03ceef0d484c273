use anyhow::Result;
use clap::Parser;
use report_tickets::config::DEFAULT_COMBINED_OUTPUT;
use report_tickets::PipelineConfig;

/// Turn an HTML test report into a ticket-ready list of test case ids
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// HTML test report
    report_file: String,

    /// Spreadsheet mapping scenarios to test cases (.xls or .xlsx)
    scenario_map_file: String,

    /// Where to write the extracted passed/warning test names
    #[arg(long, default_value = DEFAULT_COMBINED_OUTPUT)]
    combined_output: String,

    /// Number of leading spreadsheet rows to ignore
    #[arg(long, default_value_t = 0)]
    skip_rows: usize,

    /// Write a JSON summary of matched and skipped lines
    #[arg(long)]
    summary_json: Option<String>,
}

/// Prints the tickets string as the only line on stdout.
///
/// The "Test Case IDs in Tickets Format:" heading and all progress messages go to the
/// log on stderr, so stdout can be piped straight into a clipboard or a file.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = PipelineConfig::new(&cli.report_file, &cli.scenario_map_file)
        .with_combined_output(&cli.combined_output)
        .with_skip_rows(cli.skip_rows);
    if let Some(summary_path) = &cli.summary_json {
        config = config.with_summary(summary_path);
    }

    let outcome = report_tickets::run(&config)?;

    log::info!("Test Case IDs in Tickets Format:");
    println!("{}", outcome.tickets());

    Ok(())
}
