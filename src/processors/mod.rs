pub mod batch_processor;
pub mod normalizer;
pub mod region_filter;

pub use batch_processor::BatchProcessor;
pub use normalizer::{normalize_columns, reorder_output_columns};
pub use region_filter::RegionFilter;
