//! Lazy single-pass ingestion.
//!
//! `EdgeStream` validates the header when it is opened, then yields one edge
//! per data row on demand. Skipped rows are counted and logged; the first
//! fatal error is yielded once and the stream ends. Each stream owns its
//! `RunContext`, so record-ID uniqueness is scoped to one input.

use crate::builder::{RecordBuilder, RowOutcome};
use crate::dedup::Deduplicator;
use crate::error::IngestError;
use crate::header::{validate_header, EXPECTED_COLUMNS};
use crate::output::JsonLinesWriter;
use sensigraph_model::EdgeRecord;
use serde::Serialize;
use std::io::{BufReader, Read, Write};
use std::iter::FusedIterator;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub rows_read: u64,
    pub emitted: u64,
    pub skipped: u64,
    pub duplicates: u64,
}

/// Per-input state: the duplicate table and counters.
#[derive(Debug, Default)]
pub struct RunContext {
    source: String,
    dedup: Deduplicator,
    stats: RunStats,
}

impl RunContext {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn stats(&self) -> RunStats {
        RunStats {
            duplicates: self.dedup.duplicates(),
            ..self.stats
        }
    }
}

pub struct EdgeStream<'b, R: Read> {
    records: csv::StringRecordsIntoIter<R>,
    builder: &'b RecordBuilder,
    context: RunContext,
    done: bool,
}

impl<'b, R: Read> EdgeStream<'b, R> {
    /// Open a stream over `reader`. Fails before any row is read if the
    /// header does not match.
    pub fn new(
        reader: R,
        builder: &'b RecordBuilder,
        source: impl Into<String>,
    ) -> Result<Self, IngestError> {
        let source = source.into();
        let mut records = csv::ReaderBuilder::new()
            .delimiter(builder.config().delimiter_byte()?)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader)
            .into_records();

        let header = records.next().transpose()?.unwrap_or_default();
        validate_header(&EXPECTED_COLUMNS, &header.iter().collect::<Vec<_>>())?;
        tracing::debug!(source = %source, "header validated");

        Ok(Self {
            records,
            builder,
            context: RunContext::new(source),
            done: false,
        })
    }

    pub fn stats(&self) -> RunStats {
        self.context.stats()
    }

    pub fn into_context(self) -> RunContext {
        self.context
    }
}

impl<R: Read> Iterator for EdgeStream<'_, R> {
    type Item = Result<EdgeRecord, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let record = match self.records.next() {
                Some(Ok(record)) => record,
                Some(Err(err)) => {
                    self.done = true;
                    return Some(Err(err.into()));
                }
                None => {
                    self.done = true;
                    return None;
                }
            };

            let stats = &mut self.context.stats;
            stats.rows_read += 1;
            // header is line 1
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(stats.rows_read + 1);

            match self.builder.build(line, &record) {
                Ok(RowOutcome::Edge(mut edge)) => {
                    edge.id = self.context.dedup.assign(std::mem::take(&mut edge.id), line);
                    self.context.stats.emitted += 1;
                    return Some(Ok(edge));
                }
                Ok(RowOutcome::Skipped(reason)) => {
                    self.context.stats.skipped += 1;
                    tracing::info!(
                        source = %self.context.source,
                        row = line,
                        raw = reason.raw(),
                        %reason,
                        "skipping row"
                    );
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<R: Read> FusedIterator for EdgeStream<'_, R> {}

/// Stream every edge of `reader` into `out`.
pub fn ingest_reader<R: Read, W: Write>(
    reader: R,
    source: &str,
    builder: &RecordBuilder,
    out: &mut JsonLinesWriter<W>,
) -> Result<RunStats, IngestError> {
    let mut stream = EdgeStream::new(reader, builder, source)?;
    for edge in stream.by_ref() {
        out.write(&edge?)?;
    }
    let stats = stream.stats();
    tracing::info!(
        source,
        rows = stats.rows_read,
        emitted = stats.emitted,
        skipped = stats.skipped,
        duplicates = stats.duplicates,
        "finished input"
    );
    Ok(stats)
}

pub fn ingest_path<W: Write>(
    path: &Path,
    builder: &RecordBuilder,
    out: &mut JsonLinesWriter<W>,
) -> Result<RunStats, IngestError> {
    let file = std::fs::File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ingest_reader(
        BufReader::new(file),
        &path.display().to_string(),
        builder,
        out,
    )
}
