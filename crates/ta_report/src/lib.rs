pub mod csv_report;
pub mod memory;

pub use csv_report::{write_records, CsvReport};
pub use memory::MemoryReport;

pub mod prelude {
    pub use super::{CsvReport, MemoryReport};
    pub use ta_core::{ReportRecord, ReportSink, Result, Error};
}

