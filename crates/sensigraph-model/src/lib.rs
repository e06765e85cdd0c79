//! Sensigraph edge-document model
//!
//! Typed building blocks for the subject/association/object documents the
//! ingestion pipeline emits:
//! - `curie`: CURIE parsing, prefix remapping and local-ID formatting
//! - `attribute`: structured edge annotations (optionally nested)
//! - `edge`: nodes, associations and the edge record itself
//! - `category`: biolink category canonicalization
//! - `vocab`: controlled-vocabulary code → attribute tables
//! - `disease`: cohort code → disease context table
//!
//! Nothing in this crate performs I/O.

pub mod attribute;
pub mod category;
pub mod curie;
pub mod disease;
pub mod edge;
pub mod vocab;

pub use attribute::{Attribute, AttributeValue};
pub use category::canonical_category;
pub use curie::{normalize_curie, CurieError, Identifier};
pub use disease::DiseaseContext;
pub use edge::{Association, EdgeRecord, Node};
pub use vocab::{CategoricalTables, Vocabulary};
