pub mod dataset;
pub mod summary;

pub use dataset::{Cell, Dataset, Record};
pub use summary::{BatchSummary, FileOutcome, SummaryEntry, SummaryRow};
