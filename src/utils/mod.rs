pub mod constants;
pub mod filename;
pub mod locale;
pub mod logging;
pub mod progress;

pub use constants::*;
pub use filename::{is_input_file_name, output_base_name, region_suffix};
pub use locale::{format_float, parse_locale_float};
pub use logging::init_logging;
pub use progress::ProgressReporter;
