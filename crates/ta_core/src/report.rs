use crate::types::ReportRecord;
use crate::Result;

pub trait ReportSink {
    /// Where the report ends up, for logging
    fn destination(&self) -> String;

    /// Write every record, in order, replacing any previous report
    fn write_report(&self, records: &[ReportRecord]) -> Result<()>;
}
