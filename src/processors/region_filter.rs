use crate::error::{ProcessingError, Result};
use crate::models::{Cell, Dataset};
use crate::processors::normalizer::{normalize_columns, reorder_output_columns};
use crate::utils::constants::{NUMERIC_COMMA_COLUMNS, REGION_COLUMN};
use crate::utils::filename::region_suffix;

/// Keeps the rows of one region and converts its comma-decimal columns
pub struct RegionFilter {
    region: String,
    target_key: String,
}

impl RegionFilter {
    pub fn new(region: &str) -> Self {
        Self {
            region: region.to_string(),
            target_key: region.trim().to_lowercase(),
        }
    }

    /// Suffix used for output file names
    pub fn output_suffix(&self) -> String {
        region_suffix(&self.region)
    }

    /// Does `cell` hold the target region (trimmed, case-insensitive)?
    pub fn matches(&self, cell: &Cell) -> bool {
        cell.normalized_key() == self.target_key
    }

    /// Normalize, filter and coerce a loaded dataset.
    ///
    /// `source` only names the file in error messages.
    pub fn apply(&self, dataset: Dataset, source: &str) -> Result<Dataset> {
        let mut dataset = normalize_columns(dataset);

        let region_index =
            dataset
                .column_index(REGION_COLUMN)
                .ok_or_else(|| ProcessingError::MissingColumn {
                    file: source.to_string(),
                    column: REGION_COLUMN.to_string(),
                })?;

        dataset.retain_records(|record| {
            record
                .get(region_index)
                .is_some_and(|cell| self.matches(cell))
        });

        for column in NUMERIC_COMMA_COLUMNS {
            if let Some(index) = dataset.column_index(column) {
                dataset.map_column(index, Cell::coerce_locale_number);
            }
        }

        Ok(reorder_output_columns(&dataset))
    }
}
