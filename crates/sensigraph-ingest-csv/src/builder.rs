//! Row → edge record.
//!
//! A header-validated row yields one of:
//! - `Ok(RowOutcome::Edge(..))`: a complete edge document (ID not yet deduplicated)
//! - `Ok(RowOutcome::Skipped(..))`: subject or object identifier unparseable
//! - `Err(..)`: schema drift (unknown vocabulary code, bad number, missing
//!   required value); fatal for the run

use crate::config::IngestConfig;
use crate::dedup::compose_record_id;
use crate::error::IngestError;
use crate::header::{col, EXPECTED_COLUMNS};
use crate::resolve::NameResolver;
use csv::StringRecord;
use sensigraph_model::{
    canonical_category, normalize_curie, Association, Attribute, AttributeValue,
    CategoricalTables, CurieError, DiseaseContext, EdgeRecord, Identifier, Node, Vocabulary,
};
use std::fmt;
use std::sync::Arc;

pub const P_VALUE_TYPE: &str = "biolink:p_value";
pub const SAMPLE_SIZE_TYPE: &str = "biolink:has_count";
pub const DISEASE_CONTEXT_TYPE: &str = "biolink:disease_context_qualifier";
pub const DATASET_TYPE: &str = "biolink:supporting_data_set";
pub const PUBLICATION_TYPE: &str = "biolink:publications";
pub const KNOWLEDGE_SOURCE_TYPE: &str = "biolink:primary_knowledge_source";

/// Display names treated as absent.
const EMPTY_NAMES: &[&str] = &["", "NA"];
/// Screening annotations removed from drug names when cleaning is enabled.
const SCREENING_ANNOTATIONS: &[&str] = &[" (rescreen)", " (50 uM)"];

#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Edge(EdgeRecord),
    Skipped(SkipReason),
}

/// Why a row produced no edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Subject {
        raw: String,
        name: String,
        error: CurieError,
    },
    Object {
        raw: String,
        name: String,
        error: CurieError,
    },
}

impl SkipReason {
    /// The raw identifier cell that failed.
    pub fn raw(&self) -> &str {
        match self {
            SkipReason::Subject { raw, .. } | SkipReason::Object { raw, .. } => raw,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (role, raw, name, error) = match self {
            SkipReason::Subject { raw, name, error } => ("subject", raw, name, error),
            SkipReason::Object { raw, name, error } => ("object", raw, name, error),
        };
        write!(f, "unparseable {role} identifier `{raw}` (name `{name}`): {error}")
    }
}

/// One data row plus its physical line number.
struct Row<'r> {
    line: u64,
    record: &'r StringRecord,
}

impl<'r> Row<'r> {
    fn get(&self, column: usize) -> &'r str {
        self.record.get(column).unwrap_or("").trim()
    }

    fn required(&self, column: usize) -> Result<&'r str, IngestError> {
        let value = self.get(column);
        if value.is_empty() {
            return Err(IngestError::MissingValue {
                row: self.line,
                column: EXPECTED_COLUMNS[column],
            });
        }
        Ok(value)
    }

    fn invalid_number(&self, column: usize, expected: &'static str) -> IngestError {
        IngestError::InvalidNumber {
            row: self.line,
            column: EXPECTED_COLUMNS[column],
            value: self.get(column).to_string(),
            expected,
        }
    }
}

/// Builds edge records from rows using injected vocabulary tables.
pub struct RecordBuilder {
    tables: CategoricalTables,
    config: IngestConfig,
    resolver: Option<Arc<dyn NameResolver>>,
}

impl RecordBuilder {
    pub fn new(tables: CategoricalTables, config: IngestConfig) -> Self {
        Self {
            tables,
            config,
            resolver: None,
        }
    }

    /// Built-in vocabularies stamped with the configured attribute source.
    pub fn from_config(config: IngestConfig) -> Self {
        let tables = CategoricalTables::builtin(&config.attribute_source);
        Self::new(tables, config)
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn NameResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    pub fn tables(&self) -> &CategoricalTables {
        &self.tables
    }

    /// Build the edge for the data row at physical line `line`.
    pub fn build(&self, line: u64, record: &StringRecord) -> Result<RowOutcome, IngestError> {
        if record.len() != EXPECTED_COLUMNS.len() {
            return Err(IngestError::RowShape {
                row: line,
                expected: EXPECTED_COLUMNS.len(),
                found: record.len(),
            });
        }
        let row = Row { line, record };

        let subject_name = display_name(row.get(col::SUBJECT_NAME), false);
        let subject_category = row.get(col::SUBJECT_CATEGORY);
        let subject = match self.identify(
            row.get(col::SUBJECT_ID),
            subject_name.as_deref(),
            subject_category,
        ) {
            Ok(id) => id,
            Err(error) => {
                return Ok(RowOutcome::Skipped(SkipReason::Subject {
                    raw: row.get(col::SUBJECT_ID).to_string(),
                    name: subject_name.unwrap_or_default(),
                    error,
                }));
            }
        };

        let object_name = display_name(row.get(col::OBJECT_NAME), self.config.clean_object_names);
        let object_category = row.get(col::OBJECT_CATEGORY);
        let object = match self.identify(
            row.get(col::OBJECT_ID),
            object_name.as_deref(),
            object_category,
        ) {
            Ok(id) => id,
            Err(error) => {
                return Ok(RowOutcome::Skipped(SkipReason::Object {
                    raw: row.get(col::OBJECT_ID).to_string(),
                    name: object_name.unwrap_or_default(),
                    error,
                }));
            }
        };

        let edge_label = row.required(col::PREDICATE)?;
        let edge_attributes = self.edge_attributes(&row)?;

        let id = compose_record_id(
            &self.config.namespace,
            &subject,
            edge_label,
            &object,
            &[row.get(col::DISEASE_CONTEXT), row.get(col::P_VALUE)],
        );

        Ok(RowOutcome::Edge(EdgeRecord {
            id,
            subject: Node::new(subject, subject_name, canonical_category(subject_category)),
            association: Association {
                edge_label: edge_label.to_string(),
                edge_attributes,
            },
            object: Node::new(object, object_name, canonical_category(object_category)),
        }))
    }

    fn identify(
        &self,
        raw_id: &str,
        name: Option<&str>,
        category: &str,
    ) -> Result<Identifier, CurieError> {
        if raw_id.is_empty() {
            let resolved = match (&self.resolver, name) {
                (Some(resolver), Some(name)) => resolver.resolve(name, category),
                _ => None,
            };
            if let Some(resolved) = resolved {
                return normalize_curie(&resolved);
            }
        }
        normalize_curie(raw_id)
    }

    fn edge_attributes(&self, row: &Row<'_>) -> Result<Vec<Attribute>, IngestError> {
        let source = self.config.attribute_source.as_str();

        let evidence = self.lookup(row, Vocabulary::MolecularEvidence, col::MOLECULAR_EVIDENCE)?;
        let metric = self.lookup(row, Vocabulary::ResponseMetric, col::RESPONSE_METRIC)?;
        let test = self.lookup(row, Vocabulary::StatisticalTest, col::STATISTICAL_TEST)?;

        let p_value: f64 = row
            .get(col::P_VALUE)
            .parse()
            .ok()
            .filter(|v: &f64| (0.0..=1.0).contains(v))
            .ok_or_else(|| row.invalid_number(col::P_VALUE, "probability in [0, 1]"))?;
        let sample_size: i64 = row
            .get(col::SAMPLE_SIZE)
            .parse()
            .ok()
            .filter(|n: &i64| *n >= 0)
            .ok_or_else(|| row.invalid_number(col::SAMPLE_SIZE, "non-negative integer"))?;

        let mut attributes = vec![
            evidence,
            metric,
            Attribute::new(source, P_VALUE_TYPE, p_value, "EDAM:data_1669")
                .with_description("Significance of the association")
                .with_sub_attribute(test),
            Attribute::new(source, SAMPLE_SIZE_TYPE, sample_size, "xsd:integer")
                .with_description("Number of cell lines tested"),
        ];

        if let Some(context) = self.disease_context(row)? {
            attributes.push(context);
        }

        let dataset = row.required(col::DATASET_ID)?;
        let publication: String = row
            .required(col::PUBLICATION_ID)?
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        attributes.push(
            Attribute::new(source, DATASET_TYPE, dataset, "xsd:string")
                .with_description("Dataset the association was computed from")
                .with_sub_attribute(
                    Attribute::new(source, PUBLICATION_TYPE, publication, "biolink:Publication")
                        .with_description("Publication describing the dataset"),
                ),
        );

        if let Some(knowledge_source) = &self.config.primary_knowledge_source {
            attributes.push(Attribute::new(
                source,
                KNOWLEDGE_SOURCE_TYPE,
                knowledge_source.as_str(),
                "biolink:InformationResource",
            ));
        }

        Ok(attributes)
    }

    fn lookup(
        &self,
        row: &Row<'_>,
        vocabulary: Vocabulary,
        column: usize,
    ) -> Result<Attribute, IngestError> {
        let code = row.get(column);
        self.tables
            .lookup(vocabulary, code)
            .cloned()
            .ok_or_else(|| IngestError::UnknownCode {
                row: row.line,
                vocabulary,
                column: EXPECTED_COLUMNS[column],
                code: code.to_string(),
                known: self.tables.codes(vocabulary).join(", "),
            })
    }

    fn disease_context(&self, row: &Row<'_>) -> Result<Option<Attribute>, IngestError> {
        let strict = self.config.require_disease_context;
        let code = row.get(col::DISEASE_CONTEXT);
        if code.is_empty() {
            if strict {
                return Err(IngestError::MissingValue {
                    row: row.line,
                    column: EXPECTED_COLUMNS[col::DISEASE_CONTEXT],
                });
            }
            return Ok(None);
        }

        let Some(context) = DiseaseContext::lookup(code) else {
            if strict {
                return Err(IngestError::UnknownDiseaseContext {
                    row: row.line,
                    code: code.to_string(),
                });
            }
            tracing::warn!(row = row.line, code, "unknown disease context, omitting attribute");
            return Ok(None);
        };

        let value = match context.mondo_ids {
            [single] => AttributeValue::Text(single.to_string()),
            many => AttributeValue::List(many.iter().map(|id| id.to_string()).collect()),
        };
        Ok(Some(
            Attribute::new(
                self.config.attribute_source.as_str(),
                DISEASE_CONTEXT_TYPE,
                value,
                "biolink:Disease",
            )
            .with_description(context.name),
        ))
    }
}

/// Trimmed display name; `None` for placeholders.
pub fn display_name(raw: &str, clean: bool) -> Option<String> {
    let name = raw.trim();
    let name = if clean {
        clean_drug_name(name)
    } else {
        name.to_string()
    };
    if EMPTY_NAMES.contains(&name.as_str()) {
        None
    } else {
        Some(name)
    }
}

/// Remove screening annotations wherever they occur, then keep the text
/// before the first comma.
pub fn clean_drug_name(name: &str) -> String {
    let mut cleaned = name.to_string();
    for annotation in SCREENING_ANNOTATIONS {
        cleaned = cleaned.replace(annotation, "");
    }
    cleaned.split(',').next().unwrap_or_default().trim().to_string()
}
