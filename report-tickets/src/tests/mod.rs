use anyhow::Result;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

pub mod fixtures;
pub mod report_tests;

/// A spreadsheet cell to write into a generated workbook
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
}

/// Helper to write a first sheet with the given `(row, column, cell)` values
pub fn write_workbook(dir: &Path, file_name: &str, cells: &[(u32, u16, Cell)]) -> Result<PathBuf> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (row, column, cell) in cells {
        match cell {
            Cell::Text(text) => worksheet.write_string(*row, *column, *text)?,
            Cell::Number(number) => worksheet.write_number(*row, *column, *number)?,
        };
    }

    let path = dir.join(file_name);
    workbook.save(&path)?;
    Ok(path)
}

/// Scenario rows laid out as the loader expects: ids in column C, scenario in column D
pub fn write_scenario_workbook(dir: &Path, rows: &[(&str, &str)]) -> Result<PathBuf> {
    let cells: Vec<(u32, u16, Cell)> = rows
        .iter()
        .enumerate()
        .flat_map(|(row, (scenario_id, test_case_ids))| {
            vec![
                (row as u32, 2, Cell::Text(*test_case_ids)),
                (row as u32, 3, Cell::Text(*scenario_id)),
            ]
        })
        .collect();
    write_workbook(dir, "scenarios.xlsx", &cells)
}
