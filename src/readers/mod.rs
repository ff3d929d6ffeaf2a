pub mod dataset_reader;
pub mod discovery;

pub use dataset_reader::DatasetReader;
pub use discovery::discover_inputs;
