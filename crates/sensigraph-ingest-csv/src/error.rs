//! Fatal ingestion errors.
//!
//! Row-level variants name the physical line (`row`) and the offending value.
//! Identifier failures are not errors; see [`crate::SkipReason`].

use crate::header::HeaderMismatch;
use sensigraph_model::Vocabulary;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("{0}")]
    HeaderMismatch(#[from] HeaderMismatch),

    #[error("row {row}: expected {expected} columns, found {found}")]
    RowShape {
        row: u64,
        expected: usize,
        found: usize,
    },

    #[error("row {row}: unrecognized {vocabulary} code `{code}` in column `{column}` (known codes: {known})")]
    UnknownCode {
        row: u64,
        vocabulary: Vocabulary,
        column: &'static str,
        code: String,
        known: String,
    },

    #[error("row {row}: unrecognized disease context `{code}` in column `disease_context`")]
    UnknownDiseaseContext { row: u64, code: String },

    #[error("row {row}: column `{column}` value `{value}` is not a valid {expected}")]
    InvalidNumber {
        row: u64,
        column: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("row {row}: required column `{column}` is empty")]
    MissingValue { row: u64, column: &'static str },

    #[error("failed to read delimited input: {0}")]
    Csv(#[from] csv::Error),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid ingest config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("delimiter {0:?} is not a single ASCII character")]
    InvalidDelimiter(char),

    #[error("failed to write edge documents: {0}")]
    Output(#[source] std::io::Error),
}

impl IngestError {
    /// The input row this error refers to, when it is row-scoped.
    pub fn row(&self) -> Option<u64> {
        match self {
            IngestError::RowShape { row, .. }
            | IngestError::UnknownCode { row, .. }
            | IngestError::UnknownDiseaseContext { row, .. }
            | IngestError::InvalidNumber { row, .. }
            | IngestError::MissingValue { row, .. } => Some(*row),
            _ => None,
        }
    }
}
