//! Biolink category canonicalization.

pub const BIOLINK_PREFIX: &str = "biolink:";

/// Used when a row leaves the category blank.
pub const DEFAULT_CATEGORY: &str = "NamedThing";

/// Legacy category → current category (one-to-one).
pub const CATEGORY_RENAMES: &[(&str, &str)] = &[
    ("ChemicalSubstance", "SmallMolecule"),
    ("GeneProduct", "GeneOrGeneProduct"),
];

/// Canonical `biolink:<Category>` label for a raw category cell.
///
/// Accepts both bare (`Gene`) and prefixed (`biolink:Gene`) forms.
pub fn canonical_category(raw: &str) -> String {
    let bare = raw.trim();
    let bare = bare.strip_prefix(BIOLINK_PREFIX).unwrap_or(bare).trim();
    let bare = if bare.is_empty() { DEFAULT_CATEGORY } else { bare };
    let renamed = CATEGORY_RENAMES
        .iter()
        .find(|(legacy, _)| *legacy == bare)
        .map(|(_, current)| *current)
        .unwrap_or(bare);
    format!("{BIOLINK_PREFIX}{renamed}")
}
