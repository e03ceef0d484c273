use calamine::{open_workbook, Data, DataType, Range, Reader, Sheets, Xls, Xlsx};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Column holding the comma-joined test case ids.
pub const TEST_CASE_IDS_COLUMN: u32 = 2;
/// Column holding the scenario id.
pub const SCENARIO_ID_COLUMN: u32 = 3;

#[derive(Debug, Error)]
pub enum ScenarioMapError {
    #[error("The specified file is not an Excel file: {}", .0.display())]
    NotAnExcelFile(PathBuf),

    #[error("Workbook has no sheets: {}", .0.display())]
    NoSheets(PathBuf),

    #[error("Missing cell {column}{row}")]
    MissingCell { row: u32, column: String },

    #[error("Cell {column}{row} is not text: {found}")]
    NotText {
        row: u32,
        column: String,
        found: String,
    },

    #[error(transparent)]
    Workbook(#[from] calamine::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbookKind {
    /// Legacy BIFF `.xls`
    Xls,
    /// Zipped XML `.xlsx`
    Xlsx,
}

impl WorkbookKind {
    pub fn from_path(path: &Path) -> Result<WorkbookKind, ScenarioMapError> {
        // Suffixes are matched exactly, so `.XLSX` is rejected
        let name = path.to_string_lossy();
        if name.ends_with(".xls") {
            Ok(WorkbookKind::Xls)
        } else if name.ends_with(".xlsx") {
            Ok(WorkbookKind::Xlsx)
        } else {
            Err(ScenarioMapError::NotAnExcelFile(path.to_path_buf()))
        }
    }
}

/// Scenario id to the ordered test case ids it covers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioMap {
    entries: HashMap<String, Vec<String>>,
}

impl ScenarioMap {
    pub fn new() -> ScenarioMap {
        ScenarioMap::default()
    }

    /// Splits `test_case_ids` on commas and stores the trimmed ids.
    /// A later insert for the same scenario replaces the earlier one.
    pub fn insert(&mut self, scenario_id: impl Into<String>, test_case_ids: &str) {
        self.entries
            .insert(scenario_id.into(), split_test_case_ids(test_case_ids));
    }

    pub fn get(&self, scenario_id: &str) -> Option<&[String]> {
        self.entries.get(scenario_id).map(|ids| ids.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: AsRef<str>> FromIterator<(K, V)> for ScenarioMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ScenarioMap::new();
        for (scenario_id, test_case_ids) in iter {
            map.insert(scenario_id, test_case_ids.as_ref());
        }
        map
    }
}

/// Splits on commas and trims each id. Blank ids between commas are kept;
/// empty pieces after the last id are not.
pub fn split_test_case_ids(test_case_ids: &str) -> Vec<String> {
    let mut pieces: Vec<&str> = test_case_ids.split(',').collect();
    if pieces.len() > 1 {
        while pieces.last().map_or(false, |piece| piece.is_empty()) {
            pieces.pop();
        }
    }

    pieces
        .into_iter()
        .map(|piece| piece.trim().to_string())
        .collect()
}

fn column_letter(column: u32) -> String {
    let mut letters = Vec::new();
    let mut n = column + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

fn text_cell(range: &Range<Data>, row: u32, column: u32) -> Result<&str, ScenarioMapError> {
    // Errors report spreadsheet coordinates (1-based rows, lettered columns)
    match range.get_value((row, column)) {
        Some(Data::String(text)) => Ok(text.as_str()),
        Some(data) if !data.is_empty() => Err(ScenarioMapError::NotText {
            row: row + 1,
            column: column_letter(column),
            found: format!("{:?}", data),
        }),
        _ => Err(ScenarioMapError::MissingCell {
            row: row + 1,
            column: column_letter(column),
        }),
    }
}

fn open_first_sheet(path: &Path) -> Result<Range<Data>, ScenarioMapError> {
    let mut workbook: Sheets<BufReader<File>> = match WorkbookKind::from_path(path)? {
        WorkbookKind::Xls => {
            Sheets::Xls(open_workbook::<Xls<_>, _>(path).map_err(calamine::Error::Xls)?)
        }
        WorkbookKind::Xlsx => {
            Sheets::Xlsx(open_workbook::<Xlsx<_>, _>(path).map_err(calamine::Error::Xlsx)?)
        }
    };

    match workbook.worksheet_range_at(0) {
        Some(range) => Ok(range?),
        None => Err(ScenarioMapError::NoSheets(path.to_path_buf())),
    }
}

/// Builds the map from the rows of a sheet, starting `skip_rows` rows below its first row.
pub fn scenario_map_from_range(
    range: &Range<Data>,
    skip_rows: usize,
) -> Result<ScenarioMap, ScenarioMapError> {
    let mut map = ScenarioMap::new();

    let first_row = match range.start() {
        Some((row, _)) => row,
        None => return Ok(map),
    };

    for (offset, cells) in range.rows().enumerate().skip(skip_rows) {
        if cells.iter().all(|cell| cell.is_empty()) {
            continue;
        }

        let row = first_row + offset as u32;
        let scenario_id = text_cell(range, row, SCENARIO_ID_COLUMN)?;
        let test_case_ids = text_cell(range, row, TEST_CASE_IDS_COLUMN)?;

        if map.get(scenario_id).is_some() {
            log::debug!("Scenario {} redefined on row {}", scenario_id, row + 1);
        }
        map.insert(scenario_id, test_case_ids);
    }

    Ok(map)
}

pub fn load_scenario_map<P: AsRef<Path>>(
    path: P,
    skip_rows: usize,
) -> Result<ScenarioMap, ScenarioMapError> {
    let range = open_first_sheet(path.as_ref())?;
    scenario_map_from_range(&range, skip_rows)
}
