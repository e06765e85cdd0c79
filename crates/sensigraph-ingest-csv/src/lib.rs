//! Tabular ingestion for Sensigraph
//!
//! Turns delimited gene–drug association tables into normalized edge
//! documents:
//!
//! 1. `header`: one-shot positional check of the header row (fatal on mismatch)
//! 2. `builder`: row → edge record (identifier normalization, vocabulary
//!    lookups, numeric coercion)
//! 3. `dedup`: composite record IDs, suffixed on collision
//! 4. `pipeline`: lazy, single-pass `EdgeStream` over a reader, one
//!    `RunContext` per file
//! 5. `output`: JSON Lines for the bulk-indexing consumer
//!
//! Rows whose subject or object identifier cannot be normalized are skipped
//! and logged. Header mismatches, unknown vocabulary codes and numeric
//! coercion failures abort the run.

pub mod builder;
pub mod config;
pub mod dedup;
pub mod error;
pub mod header;
pub mod output;
pub mod pipeline;
pub mod resolve;

pub use builder::{RecordBuilder, RowOutcome, SkipReason};
pub use config::IngestConfig;
pub use dedup::{compose_record_id, Deduplicator};
pub use error::IngestError;
pub use header::{validate_header, ColumnCheck, HeaderMismatch, EXPECTED_COLUMNS};
pub use output::JsonLinesWriter;
pub use pipeline::{ingest_path, ingest_reader, EdgeStream, RunContext, RunStats};
pub use resolve::{NameResolver, StaticNameTable};
