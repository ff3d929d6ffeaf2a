use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet read error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Spreadsheet write error: {0}")]
    SpreadsheetWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),

    #[error("File {file} has no '{column}' column")]
    MissingColumn { file: String, column: String },

    #[error("Input directory does not exist: {}", .0.display())]
    InputDirMissing(PathBuf),

    #[error("No 'ruea-efp-*-ckan.(csv|xlsx)' files found in {}", .0.display())]
    NoInputFiles(PathBuf),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}
