use crate::flatten::types::Row;
use anyhow::{Context, Result};
use csv::Writer;
use std::io::Write;
use std::path::Path;

/// Appends output rows to a single CSV destination.
///
/// The writer owns the output for the whole run: acquired once, handed every
/// row in turn, flushed at the end. No header row is ever written, and rows
/// are appended as they arrive so arbitrarily large inputs stream through.
pub struct RowWriter<W: Write> {
    inner: Writer<W>,
}

impl RowWriter<std::fs::File> {
    /// Create the output file, truncating anything left by a previous run.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let inner = Writer::from_path(&path).with_context(|| {
            format!("failed to create output file: {}", path.as_ref().display())
        })?;
        Ok(RowWriter { inner })
    }
}

impl<W: Write> RowWriter<W> {
    /// Wrap any writer, useful for in-memory output.
    pub fn from_writer(writer: W) -> Self {
        RowWriter {
            inner: Writer::from_writer(writer),
        }
    }

    /// Append one row as a single CSV record.
    pub fn write_row(&mut self, row: &Row) -> Result<()> {
        self.inner
            .write_record(row.csv_fields())
            .context("failed to write output row")
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush().context("failed to flush output")
    }
}
