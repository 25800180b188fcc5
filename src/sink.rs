//! Dataset output
//!
//! Records are written as CSV with a header row, even when there are no
//! records to write.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::models::PackingRecord;
use crate::{PackGenError, Result};

/// Destination for finished records
pub trait RecordSink {
    fn write_records(&mut self, records: &[PackingRecord]) -> Result<()>;
}

pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvSink<File> {
    /// Create (or truncate) a CSV file at `path`
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            PackGenError::output(format!("cannot create {}: {e}", path.display()))
        })?;
        Ok(Self::new(file))
    }
}

impl<W: Write> CsvSink<W> {
    pub fn new(inner: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(inner);
        Self { writer }
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| PackGenError::output(e.to_string()))
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_records(&mut self, records: &[PackingRecord]) -> Result<()> {
        self.writer.write_record(PackingRecord::HEADERS)?;
        for record in records {
            self.writer.serialize(record)?;
        }
        self.writer.flush()?;

        info!("Wrote {} records", records.len());
        Ok(())
    }
}
