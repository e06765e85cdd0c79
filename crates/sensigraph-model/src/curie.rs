//! CURIE normalization.
//!
//! Raw identifiers arrive as `PREFIX:LOCAL` strings of uneven quality. A
//! normalized [`Identifier`] carries three views of the same entity:
//!
//! - `full_id`: the canonical `PREFIX:LOCAL` string (prefix possibly remapped)
//! - `prefix_key`: lowercase, dot-free property name derived from the prefix
//! - `local_id`: the value stored under `prefix_key`
//!
//! Normalization either yields a complete `Identifier` or a [`CurieError`];
//! callers treat the error as "skip this row", never as fatal.

use serde::Serialize;
use std::fmt;

/// Raw prefix → canonical namespace. Matched case-insensitively.
pub const PREFIX_ALIASES: &[(&str, &str)] = &[
    ("PUBCHEM", "PUBCHEM.COMPOUND"),
    ("CID", "PUBCHEM.COMPOUND"),
    ("CHEMBL", "CHEMBL.COMPOUND"),
    ("ENTREZ", "NCBIGene"),
];

/// Prefixes whose local ID is stored as the full CURIE (ontology term IDs).
/// Checked against the prefix as written, before aliasing.
pub const FULLY_QUALIFIED_PREFIXES: &[&str] =
    &["CHEBI", "MONDO", "GO", "HP", "DOID", "UBERON", "CL", "EFO"];

/// Bare Ensembl gene IDs (`ENSG00000141510`) are accepted without a prefix.
pub const ENSEMBL_GENE_MARKER: &str = "ENSG0";
pub const ENSEMBL_PREFIX: &str = "ENSEMBL";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurieError {
    #[error("identifier is empty")]
    Empty,
    #[error("identifier `{raw}` has no prefix separator")]
    MissingSeparator { raw: String },
    #[error("identifier `{raw}` has {separators} prefix separators, expected one")]
    TooManySeparators { raw: String, separators: usize },
    #[error("identifier `{raw}` has an empty prefix or local part")]
    EmptyComponent { raw: String },
}

/// A normalized CURIE.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier {
    full_id: String,
    prefix_key: String,
    local_id: String,
}

impl Identifier {
    pub fn parse(raw: &str) -> Result<Self, CurieError> {
        normalize_curie(raw)
    }

    pub fn full_id(&self) -> &str {
        &self.full_id
    }

    pub fn prefix_key(&self) -> &str {
        &self.prefix_key
    }

    pub fn local_id(&self) -> &str {
        &self.local_id
    }

    /// The (remapped) prefix component of `full_id`.
    pub fn prefix(&self) -> &str {
        self.full_id
            .split_once(':')
            .map(|(prefix, _)| prefix)
            .unwrap_or(&self.full_id)
    }

    /// The `(prefix_key, local_id)` property attached to a node.
    pub fn property(&self) -> (&str, &str) {
        (&self.prefix_key, &self.local_id)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_id)
    }
}

/// Normalize a raw identifier string.
pub fn normalize_curie(raw: &str) -> Result<Identifier, CurieError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CurieError::Empty);
    }

    let Some((prefix, local)) = raw.split_once(':') else {
        if raw.starts_with(ENSEMBL_GENE_MARKER) {
            return normalize_curie(&format!("{ENSEMBL_PREFIX}:{raw}"));
        }
        return Err(CurieError::MissingSeparator {
            raw: raw.to_string(),
        });
    };

    if local.contains(':') {
        return Err(CurieError::TooManySeparators {
            raw: raw.to_string(),
            separators: raw.matches(':').count(),
        });
    }
    if prefix.is_empty() || local.is_empty() {
        return Err(CurieError::EmptyComponent {
            raw: raw.to_string(),
        });
    }

    let canonical = canonical_prefix(prefix);
    let full_id = format!("{canonical}:{local}");
    let local_id = if is_fully_qualified(prefix) {
        full_id.clone()
    } else {
        local.to_string()
    };

    Ok(Identifier {
        prefix_key: prefix_key(canonical),
        full_id,
        local_id,
    })
}

/// Remap a raw prefix through [`PREFIX_ALIASES`]; unknown prefixes pass through.
pub fn canonical_prefix(prefix: &str) -> &str {
    PREFIX_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(prefix))
        .map(|(_, canonical)| *canonical)
        .unwrap_or(prefix)
}

pub fn prefix_key(prefix: &str) -> String {
    prefix.to_lowercase().replace('.', "_")
}

fn is_fully_qualified(prefix: &str) -> bool {
    FULLY_QUALIFIED_PREFIXES
        .iter()
        .any(|p| p.eq_ignore_ascii_case(prefix))
}
