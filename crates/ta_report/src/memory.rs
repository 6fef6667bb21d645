use std::sync::Mutex;

use ta_core::{Error, ReportRecord, ReportSink, Result};

/// Keeps the last written report in memory.
#[derive(Debug, Default)]
pub struct MemoryReport {
    records: Mutex<Vec<ReportRecord>>,
}

impl MemoryReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<ReportRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

impl ReportSink for MemoryReport {
    fn destination(&self) -> String {
        "memory".to_string()
    }

    fn write_report(&self, records: &[ReportRecord]) -> Result<()> {
        let mut stored = self
            .records
            .lock()
            .map_err(|_| Error::Report("memory report lock poisoned".to_string()))?;
        *stored = records.to_vec();
        Ok(())
    }
}
