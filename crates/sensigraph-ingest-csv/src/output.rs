//! JSON Lines output for bulk indexing.

use crate::error::IngestError;
use sensigraph_model::EdgeRecord;
use std::io::Write;

/// One edge document per line.
pub struct JsonLinesWriter<W: Write> {
    inner: W,
    written: u64,
}

impl<W: Write> JsonLinesWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    pub fn write(&mut self, edge: &EdgeRecord) -> Result<(), IngestError> {
        serde_json::to_writer(&mut self.inner, edge)
            .map_err(|e| IngestError::Output(e.into()))?;
        self.inner.write_all(b"\n").map_err(IngestError::Output)?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn flush(&mut self) -> Result<(), IngestError> {
        self.inner.flush().map_err(IngestError::Output)
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
