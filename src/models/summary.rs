use crate::utils::constants::{
    STATUS_OK, STATUS_PROCESS_ERROR, STATUS_READ_ERROR, STATUS_SAVE_ERROR,
};
use serde::Serialize;
use std::fmt;

/// How processing of one input file ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Ok,
    ReadFailed(String),
    ProcessFailed(String),
    SaveFailed(String),
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, FileOutcome::Ok)
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOutcome::Ok => write!(f, "{}", STATUS_OK),
            FileOutcome::ReadFailed(msg) => write!(f, "{}: {}", STATUS_READ_ERROR, msg),
            FileOutcome::ProcessFailed(msg) => write!(f, "{}: {}", STATUS_PROCESS_ERROR, msg),
            FileOutcome::SaveFailed(msg) => write!(f, "{}: {}", STATUS_SAVE_ERROR, msg),
        }
    }
}

/// Summary line for one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub file_name: String,
    pub rows_in: Option<usize>,
    pub rows_out: Option<usize>,
    pub outcome: FileOutcome,
}

impl SummaryEntry {
    pub fn read_failed(file_name: String, message: String) -> Self {
        Self {
            file_name,
            rows_in: None,
            rows_out: None,
            outcome: FileOutcome::ReadFailed(message),
        }
    }

    pub fn process_failed(file_name: String, rows_in: usize, message: String) -> Self {
        Self {
            file_name,
            rows_in: Some(rows_in),
            rows_out: None,
            outcome: FileOutcome::ProcessFailed(message),
        }
    }

    pub fn completed(file_name: String, rows_in: usize, rows_out: usize, outcome: FileOutcome) -> Self {
        Self {
            file_name,
            rows_in: Some(rows_in),
            rows_out: Some(rows_out),
            outcome,
        }
    }

    pub fn to_row(&self) -> SummaryRow {
        SummaryRow {
            file_name: self.file_name.clone(),
            rows_in: self.rows_in,
            rows_out: self.rows_out,
            status: self.outcome.to_string(),
        }
    }
}

/// CSV shape of a summary line
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    #[serde(rename = "archivo")]
    pub file_name: String,
    #[serde(rename = "filas_entrada")]
    pub rows_in: Option<usize>,
    #[serde(rename = "filas_RM")]
    pub rows_out: Option<usize>,
    #[serde(rename = "estado")]
    pub status: String,
}

/// All summary entries of one filter run
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub entries: Vec<SummaryEntry>,
}

impl BatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: SummaryEntry) {
        self.entries.push(entry);
    }

    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.entries.len() - self.succeeded()
    }

    pub fn total_rows_in(&self) -> usize {
        self.entries.iter().filter_map(|e| e.rows_in).sum()
    }

    pub fn total_rows_out(&self) -> usize {
        self.entries.iter().filter_map(|e| e.rows_out).sum()
    }

    pub fn generate_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Region Filter Summary ===\n");
        summary.push_str(&format!("Files processed: {}\n", self.entries.len()));
        summary.push_str(&format!("Succeeded: {}\n", self.succeeded()));
        summary.push_str(&format!("Failed: {}\n", self.failed()));
        summary.push_str(&format!(
            "Rows kept: {} of {}\n",
            self.total_rows_out(),
            self.total_rows_in()
        ));

        let failures: Vec<&SummaryEntry> =
            self.entries.iter().filter(|e| !e.outcome.is_ok()).collect();
        if !failures.is_empty() {
            summary.push_str("\nFailures:\n");
            for (i, entry) in failures.iter().enumerate() {
                summary.push_str(&format!("  {}. {}: {}\n", i + 1, entry.file_name, entry.outcome));
            }
        }

        summary
    }
}
