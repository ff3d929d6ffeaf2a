use crate::error::Result;
use crate::models::{Dataset, SummaryRow};
use crate::utils::constants::{OUTPUT_DELIMITER, UTF8_BOM};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes UTF-8 CSV files prefixed with a byte-order mark, so spreadsheet
/// applications pick up the encoding.
pub struct CsvWriter {
    delimiter: u8,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self {
            delimiter: OUTPUT_DELIMITER,
        }
    }

    fn open(&self, path: &Path) -> Result<csv::Writer<BufWriter<File>>> {
        let mut file = BufWriter::new(File::create(path)?);
        file.write_all(UTF8_BOM)?;

        Ok(csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(file))
    }

    /// Header row followed by one line per record; empty cells stay blank
    pub fn write_dataset(&self, dataset: &Dataset, path: &Path) -> Result<()> {
        let mut writer = self.open(path)?;

        writer.write_record(dataset.columns())?;
        for record in dataset.records() {
            writer.write_record(record.cells().iter().map(|cell| cell.to_string()))?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Serialize rows through serde; the header comes from the field names
    pub fn write_rows<T: Serialize>(&self, rows: &[T], path: &Path) -> Result<()> {
        let mut writer = self.open(path)?;

        for row in rows {
            writer.serialize(row)?;
        }

        writer.flush()?;
        Ok(())
    }

    pub fn write_summary(&self, rows: &[SummaryRow], path: &Path) -> Result<()> {
        self.write_rows(rows, path)
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}
