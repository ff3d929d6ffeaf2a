use crate::error::{ProcessingError, Result};
use crate::models::{Cell, Dataset, Record};
use crate::utils::constants::INPUT_DELIMITER;
use calamine::{open_workbook_auto, Data, DataType, Reader};
use chrono::NaiveDateTime;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Rendering of spreadsheet date cells
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Loads CSV and spreadsheet files into all-text datasets
pub struct DatasetReader {
    delimiter: u8,
}

impl DatasetReader {
    pub fn new() -> Self {
        Self {
            delimiter: INPUT_DELIMITER,
        }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read a `.csv`, `.xlsx` or `.xls` file, dispatching on its extension
    pub fn read(&self, path: &Path) -> Result<Dataset> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let dataset = match extension.as_str() {
            "csv" => self.read_csv(path)?,
            "xlsx" | "xls" => self.read_spreadsheet(path)?,
            _ => {
                return Err(ProcessingError::UnsupportedExtension(format!(
                    "'.{}' ({})",
                    extension,
                    path.display()
                )))
            }
        };

        debug!(
            "Loaded {} rows x {} columns from {}",
            dataset.len(),
            dataset.columns().len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Read a UTF-8 CSV file; a leading byte-order mark is skipped
    pub fn read_csv(&self, path: &Path) -> Result<Dataset> {
        let bytes = fs::read(path)?;
        let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(&bytes);
        if had_errors {
            return Err(ProcessingError::InvalidFormat(format!(
                "{} is not valid UTF-8",
                path.display()
            )));
        }

        self.parse_csv(&text)
    }

    /// Parse delimited text whose first line is the header
    pub fn parse_csv(&self, text: &str) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let columns: Vec<String> = dedupe_columns(
            reader
                .headers()?
                .iter()
                .enumerate()
                .map(|(i, name)| column_name(name, i))
                .collect(),
        );

        if columns.is_empty() {
            return Err(ProcessingError::InvalidFormat(
                "No columns to parse from file".to_string(),
            ));
        }

        let width = columns.len();
        let mut records = Vec::new();

        for result in reader.records() {
            let row = result?;
            if row.len() > width {
                let line = row.position().map_or(0, |p| p.line());
                return Err(ProcessingError::InvalidFormat(format!(
                    "Expected {} fields in line {}, saw {}",
                    width,
                    line,
                    row.len()
                )));
            }

            let mut cells: Vec<Cell> = row.iter().map(Cell::from_raw).collect();
            cells.resize(width, Cell::Empty);
            records.push(Record::new(cells));
        }

        Ok(Dataset::new(columns, records))
    }

    /// Read the first worksheet of a spreadsheet, rendering every cell as text
    pub fn read_spreadsheet(&self, path: &Path) -> Result<Dataset> {
        let mut workbook = open_workbook_auto(path)?;
        let range = workbook.worksheet_range_at(0).ok_or_else(|| {
            ProcessingError::InvalidFormat(format!("{} has no worksheets", path.display()))
        })??;

        let mut rows = range.rows();
        let columns: Vec<String> = match rows.next() {
            Some(header) => dedupe_columns(
                header
                    .iter()
                    .enumerate()
                    .map(|(i, cell)| column_name(&text_cell(cell).to_string(), i))
                    .collect(),
            ),
            None => {
                return Err(ProcessingError::InvalidFormat(
                    "No columns to parse from file".to_string(),
                ))
            }
        };

        let width = columns.len();
        let records = rows
            .map(|row| {
                let mut cells: Vec<Cell> = row.iter().take(width).map(text_cell).collect();
                cells.resize(width, Cell::Empty);
                Record::new(cells)
            })
            .collect();

        Ok(Dataset::new(columns, records))
    }
}

impl Default for DatasetReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Blank headers get a positional name
fn column_name(raw: &str, index: usize) -> String {
    if raw.trim().is_empty() {
        format!("Unnamed: {}", index)
    } else {
        raw.to_string()
    }
}

/// Repeated names get a `.N` suffix (`comuna`, `comuna.1`, ...) so no column
/// is shadowed by an earlier one with the same name
fn dedupe_columns(columns: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(columns.len());
    let mut counts: HashMap<String, usize> = HashMap::new();

    columns
        .into_iter()
        .map(|name| {
            let mut unique = name.clone();
            while seen.contains(&unique) {
                let count = counts.entry(name.clone()).or_insert(0);
                *count += 1;
                unique = format!("{}.{}", name, count);
            }
            seen.insert(unique.clone());
            unique
        })
        .collect()
}

/// Render a spreadsheet value as a text cell
fn text_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::from_raw(s),
        Data::Int(i) => Cell::Text(i.to_string()),
        Data::Float(f) => Cell::Text(float_text(*f)),
        Data::Bool(b) => Cell::Text(if *b { "True" } else { "False" }.to_string()),
        Data::DateTime(dt) => Cell::Text(
            data.as_datetime()
                .map(datetime_text)
                .unwrap_or_else(|| float_text(dt.as_f64())),
        ),
        Data::DateTimeIso(s) => {
            Cell::Text(data.as_datetime().map(datetime_text).unwrap_or_else(|| s.clone()))
        }
        Data::DurationIso(s) => Cell::from_raw(s),
    }
}

fn datetime_text(value: NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

/// Integral floats lose their fractional part, as spreadsheet integers do
fn float_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
