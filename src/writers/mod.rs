pub mod csv_writer;
pub mod xlsx_writer;

pub use csv_writer::CsvWriter;
pub use xlsx_writer::XlsxWriter;
