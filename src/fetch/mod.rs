pub mod downloader;
pub mod links;

pub use downloader::{FetchReport, Fetcher};
pub use links::{extract_links, file_name_for, is_downloadable};
