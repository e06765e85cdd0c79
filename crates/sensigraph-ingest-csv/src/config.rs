//! Ingest configuration.

use crate::error::IngestError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_NAMESPACE: &str = "gdsc";
pub const DEFAULT_ATTRIBUTE_SOURCE: &str = "infores:biothings-multiomics-drug-response";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Leading component of every record ID.
    pub namespace: String,
    /// Stamped as `attribute_source` on every edge attribute.
    pub attribute_source: String,
    /// Adds a `biolink:primary_knowledge_source` attribute when set.
    pub primary_knowledge_source: Option<String>,
    pub delimiter: char,
    /// When false, unknown disease codes drop the context attribute instead of aborting.
    pub require_disease_context: bool,
    /// Strip screening suffixes from object (drug) names.
    pub clean_object_names: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            attribute_source: DEFAULT_ATTRIBUTE_SOURCE.to_string(),
            primary_knowledge_source: None,
            delimiter: ',',
            require_disease_context: true,
            clean_object_names: false,
        }
    }
}

impl IngestConfig {
    /// Load from a JSON file; absent fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, IngestError> {
        let text = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| IngestError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn delimiter_byte(&self) -> Result<u8, IngestError> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(IngestError::InvalidDelimiter(self.delimiter))
        }
    }
}
