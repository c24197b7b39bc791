use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use csv::WriterBuilder;

use crate::billing::types::OutputRow;

/// Fixed header written once when the store is created
pub const STORE_HEADER: [&str; 5] = [
    "Service Code",
    "Usage Type",
    "Operation",
    "Rate Code",
    "Description",
];

/// Append-only CSV store for extracted rate codes.
///
/// The file is created with the header iff it does not already exist; the
/// check is filesystem presence only, never content validation. Rows are
/// never updated or deduplicated, so re-running an extraction appends
/// duplicates.
pub struct RateCodeStore {
    path: PathBuf,
}

impl RateCodeStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_exists(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(STORE_HEADER)?;
        writer.flush()?;
        Ok(())
    }

    /// Append one row. Every call is a full open/append/flush cycle; there is
    /// no batching.
    pub fn append(&self, row: &OutputRow) -> Result<(), Box<dyn std::error::Error>> {
        self.ensure_exists()?;

        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record([
            &row.service_code,
            &row.usage_type,
            &row.operation,
            &row.rate_code,
            &row.description,
        ])?;
        writer.flush()?;
        Ok(())
    }
}
