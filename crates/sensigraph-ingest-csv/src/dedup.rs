//! Record IDs and collision handling.

use sensigraph_model::Identifier;
use std::collections::{HashMap, HashSet};

pub const RECORD_ID_DELIMITER: &str = "-";

/// `<namespace>-<subject>-<edge_label>-<object>-<discriminator>...`
pub fn compose_record_id(
    namespace: &str,
    subject: &Identifier,
    edge_label: &str,
    object: &Identifier,
    discriminators: &[&str],
) -> String {
    let mut parts = vec![namespace, subject.full_id(), edge_label, object.full_id()];
    parts.extend(discriminators.iter().map(|d| d.trim()));
    parts.join(RECORD_ID_DELIMITER)
}

/// Occurrence counts for record IDs within one run.
///
/// The first occurrence keeps its ID; the n-th repeat is emitted as `<id>-n`,
/// moving past any suffix another row already emitted verbatim. Records are
/// never dropped.
#[derive(Debug, Default)]
pub struct Deduplicator {
    occurrences: HashMap<String, u32>,
    emitted: HashSet<String>,
    duplicates: u64,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The ID to emit for `record_id` found at `row`.
    pub fn assign(&mut self, record_id: String, row: u64) -> String {
        if !self.emitted.contains(&record_id) {
            self.occurrences.entry(record_id.clone()).or_insert(1);
            self.emitted.insert(record_id.clone());
            return record_id;
        }

        let count = self.occurrences.entry(record_id.clone()).or_insert(1);
        let mut candidate;
        loop {
            *count += 1;
            candidate = format!("{record_id}{RECORD_ID_DELIMITER}{count}");
            if !self.emitted.contains(&candidate) {
                break;
            }
        }
        self.duplicates += 1;
        tracing::warn!(
            row,
            record_id = %record_id,
            occurrence = *count,
            "duplicate record id, appending suffix"
        );
        self.emitted.insert(candidate.clone());
        candidate
    }

    /// Repeats seen so far.
    pub fn duplicates(&self) -> u64 {
        self.duplicates
    }

    /// IDs emitted so far.
    pub fn len(&self) -> usize {
        self.emitted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emitted.is_empty()
    }
}
