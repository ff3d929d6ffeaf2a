use crate::error::Result;
use crate::models::{BatchSummary, Dataset, FileOutcome, SummaryEntry, SummaryRow};
use crate::processors::RegionFilter;
use crate::readers::DatasetReader;
use crate::utils::constants::SUMMARY_FILE;
use crate::utils::filename::output_base_name;
use crate::utils::progress::ProgressReporter;
use crate::writers::{CsvWriter, XlsxWriter};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Runs the region filter over a list of input files, one at a time.
///
/// Failures are isolated per file: they are logged, recorded in the
/// summary, and the batch moves on to the next file.
pub struct BatchProcessor {
    reader: DatasetReader,
    filter: RegionFilter,
    output_dir: PathBuf,
    out_prefix: String,
}

impl BatchProcessor {
    pub fn new(region: &str, output_dir: &Path) -> Self {
        Self {
            reader: DatasetReader::new(),
            filter: RegionFilter::new(region),
            output_dir: output_dir.to_path_buf(),
            out_prefix: String::new(),
        }
    }

    pub fn with_out_prefix(mut self, out_prefix: &str) -> Self {
        self.out_prefix = out_prefix.to_string();
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(SUMMARY_FILE)
    }

    /// Process every input and collect one summary entry per file
    pub fn process_all(
        &self,
        inputs: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Result<BatchSummary> {
        fs::create_dir_all(&self.output_dir)?;

        let mut summary = BatchSummary::new();
        for path in inputs {
            if let Some(p) = progress {
                p.set_message(&format!("Filtering {}", file_name(path)));
            }

            summary.push(self.process_file(path));

            if let Some(p) = progress {
                p.increment(1);
            }
        }

        if let Some(p) = progress {
            p.finish_with_message(&format!("Filtered {} files", inputs.len()));
        }

        Ok(summary)
    }

    /// Load, filter and save one file. Never fails; errors end up in the entry.
    pub fn process_file(&self, path: &Path) -> SummaryEntry {
        let name = file_name(path);

        let dataset = match self.reader.read(path) {
            Ok(dataset) => dataset,
            Err(e) => {
                error!("Skipping {} (read error): {}", name, e);
                return SummaryEntry::read_failed(name, e.to_string());
            }
        };
        let rows_in = dataset.len();

        let filtered = match self.filter.apply(dataset, &name) {
            Ok(filtered) => filtered,
            Err(e) => {
                error!("Skipping {} (processing error): {}", name, e);
                return SummaryEntry::process_failed(name, rows_in, e.to_string());
            }
        };
        let rows_out = filtered.len();

        let base_name = output_base_name(path, &self.out_prefix, &self.filter.output_suffix());
        let outcome = match self.save(&filtered, &base_name) {
            Ok(()) => {
                info!("{}: kept {} of {} rows", name, rows_out, rows_in);
                FileOutcome::Ok
            }
            Err(e) => {
                error!("Error saving {}: {}", base_name, e);
                FileOutcome::SaveFailed(e.to_string())
            }
        };

        SummaryEntry::completed(name, rows_in, rows_out, outcome)
    }

    fn save(&self, dataset: &Dataset, base_name: &str) -> Result<()> {
        let csv_path = self.output_dir.join(format!("{}.csv", base_name));
        let xlsx_path = self.output_dir.join(format!("{}.xlsx", base_name));

        CsvWriter::new().write_dataset(dataset, &csv_path)?;
        XlsxWriter::new().write_dataset(dataset, &xlsx_path)?;
        Ok(())
    }

    /// Write the aggregate report and return its path
    pub fn write_summary(&self, summary: &BatchSummary) -> Result<PathBuf> {
        let rows: Vec<SummaryRow> = summary.entries.iter().map(SummaryEntry::to_row).collect();
        let path = self.summary_path();

        CsvWriter::new().write_summary(&rows, &path)?;
        Ok(path)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
