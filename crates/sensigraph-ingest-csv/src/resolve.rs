//! Name → identifier resolution.
//!
//! Consulted only when a row leaves a subject/object identifier cell empty.
//! Network-backed resolvers live outside this crate; `StaticNameTable` covers
//! curated node tables shipped next to the data.

use crate::error::IngestError;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

pub trait NameResolver: Send + Sync {
    /// A raw identifier for `name`, or `None` when the name is unknown.
    fn resolve(&self, name: &str, category: &str) -> Option<String>;
}

/// Exact-name lookup table.
#[derive(Debug, Clone, Default)]
pub struct StaticNameTable {
    ids: HashMap<String, String>,
}

impl StaticNameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, id: impl Into<String>) {
        self.ids.insert(name.into(), id.into());
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Load a nodes table: header row, then `id,name[,category]` rows.
    pub fn from_nodes_csv<R: Read>(reader: R) -> Result<Self, IngestError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut table = Self::new();
        for record in reader.records() {
            let record = record?;
            match (record.get(0).map(str::trim), record.get(1).map(str::trim)) {
                (Some(id), Some(name)) if !id.is_empty() && !name.is_empty() => {
                    table.insert(name, id);
                }
                _ => {
                    tracing::debug!(
                        line = record.position().map(|p| p.line()),
                        "ignoring incomplete node row"
                    );
                }
            }
        }
        Ok(table)
    }

    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let file = std::fs::File::open(path).map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_nodes_csv(file)?;
        tracing::debug!(path = %path.display(), names = table.len(), "loaded node table");
        Ok(table)
    }
}

impl NameResolver for StaticNameTable {
    fn resolve(&self, name: &str, _category: &str) -> Option<String> {
        self.ids.get(name.trim()).cloned()
    }
}
