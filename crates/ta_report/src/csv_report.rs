use std::fs::Permissions;
use std::io::Write;
use std::path::{Path, PathBuf};

use ta_core::{Error, ReportRecord, ReportSink, Result};
use tempfile::NamedTempFile;
use tracing::debug;

/// Write the header row followed by one row per record.
pub fn write_records<W: Write>(writer: W, records: &[ReportRecord]) -> Result<()> {
    // Headers are written by hand so an empty report still has them.
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    out.write_record(ReportRecord::HEADERS)?;
    for record in records {
        out.serialize(record)?;
    }
    out.flush()?;
    Ok(())
}

/// CSV report on disk. The file is replaced atomically, never left half written.
#[derive(Debug, Clone)]
pub struct CsvReport {
    path: PathBuf,
}

impl CsvReport {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Mode the finished report gets: the replaced report's, or 0644 for a new one.
    fn target_permissions(&self) -> Option<Permissions> {
        if let Ok(metadata) = std::fs::metadata(&self.path) {
            return Some(metadata.permissions());
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            Some(Permissions::from_mode(0o644))
        }
        #[cfg(not(unix))]
        {
            None
        }
    }
}

impl ReportSink for CsvReport {
    fn destination(&self) -> String {
        self.path.display().to_string()
    }

    fn write_report(&self, records: &[ReportRecord]) -> Result<()> {
        let mut staging = NamedTempFile::new_in(self.directory())?;
        debug!("Staging report in {}", staging.path().display());
        write_records(staging.as_file_mut(), records)?;
        // Staging files are created owner-only.
        if let Some(permissions) = self.target_permissions() {
            staging.as_file().set_permissions(permissions)?;
        }
        staging.as_file().sync_all()?;
        staging.persist(&self.path).map_err(|e| {
            Error::Report(format!("cannot move report to {}: {}", self.destination(), e.error))
        })?;
        Ok(())
    }
}
