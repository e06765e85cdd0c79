//! Header validation.
//!
//! Every later stage reads rows by position, so the header is an
//! environmental contract: it is checked once per file, before any data row,
//! and a mismatch aborts the run with the full expected/observed listing.

use std::fmt;

/// Expected header, in order.
pub const EXPECTED_COLUMNS: [&str; 15] = [
    "subject_name",
    "subject_id",
    "subject_category",
    "object_name",
    "object_id",
    "object_category",
    "predicate",
    "molecular_evidence",
    "response_metric",
    "statistical_test",
    "p_value",
    "sample_size",
    "disease_context",
    "dataset_id",
    "publication_id",
];

/// Column positions within [`EXPECTED_COLUMNS`].
pub mod col {
    pub const SUBJECT_NAME: usize = 0;
    pub const SUBJECT_ID: usize = 1;
    pub const SUBJECT_CATEGORY: usize = 2;
    pub const OBJECT_NAME: usize = 3;
    pub const OBJECT_ID: usize = 4;
    pub const OBJECT_CATEGORY: usize = 5;
    pub const PREDICATE: usize = 6;
    pub const MOLECULAR_EVIDENCE: usize = 7;
    pub const RESPONSE_METRIC: usize = 8;
    pub const STATISTICAL_TEST: usize = 9;
    pub const P_VALUE: usize = 10;
    pub const SAMPLE_SIZE: usize = 11;
    pub const DISEASE_CONTEXT: usize = 12;
    pub const DATASET_ID: usize = 13;
    pub const PUBLICATION_ID: usize = 14;
}

/// Stand-in for a position the observed header does not reach.
pub const MISSING_COLUMN: &str = "<missing>";
/// Stand-in for an observed column beyond the expected schema.
pub const UNEXPECTED_COLUMN: &str = "<none>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnCheck {
    pub position: usize,
    pub expected: String,
    pub observed: String,
}

impl ColumnCheck {
    pub fn matches(&self) -> bool {
        self.expected == self.observed
    }
}

/// Every column's expected vs. observed name, for a header that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMismatch {
    pub columns: Vec<ColumnCheck>,
}

impl HeaderMismatch {
    pub fn mismatched_positions(&self) -> Vec<usize> {
        self.columns
            .iter()
            .filter(|c| !c.matches())
            .map(|c| c.position)
            .collect()
    }
}

impl fmt::Display for HeaderMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positions: Vec<String> = self
            .mismatched_positions()
            .iter()
            .map(usize::to_string)
            .collect();
        writeln!(
            f,
            "header does not match the expected schema (mismatched positions: {})",
            positions.join(", ")
        )?;
        for column in &self.columns {
            let marker = if column.matches() { "" } else { "  <- mismatch" };
            writeln!(
                f,
                "  [{}] expected `{}`, found `{}`{}",
                column.position, column.expected, column.observed, marker
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for HeaderMismatch {}

/// Compare an observed header against the expected names, position by position.
///
/// Observed names are trimmed (and a leading byte-order mark dropped) before
/// comparison. Missing and surplus positions both count as mismatches.
pub fn validate_header<S: AsRef<str>>(
    expected: &[&str],
    observed: &[S],
) -> Result<(), HeaderMismatch> {
    let width = expected.len().max(observed.len());
    let columns: Vec<ColumnCheck> = (0..width)
        .map(|position| ColumnCheck {
            position,
            expected: expected
                .get(position)
                .copied()
                .unwrap_or(UNEXPECTED_COLUMN)
                .to_string(),
            observed: observed
                .get(position)
                .map(|name| clean_name(name.as_ref(), position))
                .unwrap_or_else(|| MISSING_COLUMN.to_string()),
        })
        .collect();

    if columns.iter().all(ColumnCheck::matches) {
        Ok(())
    } else {
        Err(HeaderMismatch { columns })
    }
}

fn clean_name(name: &str, position: usize) -> String {
    let name = if position == 0 {
        name.trim_start_matches('\u{feff}')
    } else {
        name
    };
    name.trim().to_string()
}
