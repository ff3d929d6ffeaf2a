use crate::error::{ProcessingError, Result};
use crate::models::{Cell, Dataset};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// Writes a dataset to a single-sheet `.xlsx` workbook
pub struct XlsxWriter {
    sheet_name: String,
}

impl XlsxWriter {
    pub fn new() -> Self {
        Self {
            sheet_name: "Sheet1".to_string(),
        }
    }

    pub fn with_sheet_name(sheet_name: &str) -> Self {
        Self {
            sheet_name: sheet_name.to_string(),
        }
    }

    pub fn write_dataset(&self, dataset: &Dataset, path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let sheet = workbook.add_worksheet();
        sheet.set_name(&self.sheet_name)?;

        for (col, name) in dataset.columns().iter().enumerate() {
            sheet.write_string_with_format(0, column_number(col)?, name, &header_format)?;
        }

        for (i, record) in dataset.records().iter().enumerate() {
            let row = u32::try_from(i + 1).map_err(|_| {
                ProcessingError::InvalidFormat(format!("Row {} does not fit in a worksheet", i + 1))
            })?;

            for (col, cell) in record.cells().iter().enumerate() {
                let col = column_number(col)?;
                match cell {
                    Cell::Text(text) => {
                        sheet.write_string(row, col, text)?;
                    }
                    Cell::Number(value) => {
                        sheet.write_number(row, col, *value)?;
                    }
                    Cell::Empty => {}
                }
            }
        }

        workbook.save(path)?;
        Ok(())
    }
}

impl Default for XlsxWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn column_number(index: usize) -> Result<u16> {
    u16::try_from(index).map_err(|_| {
        ProcessingError::InvalidFormat(format!("Column {} does not fit in a worksheet", index))
    })
}
