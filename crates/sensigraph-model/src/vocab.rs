//! Controlled-vocabulary tables.
//!
//! Each categorical column of an input row (molecular evidence, response
//! metric, statistical test) holds a short code. The code is looked up in the
//! matching table to retrieve a pre-built [`Attribute`]. A code that is not in
//! the table means the input vocabulary has drifted; callers treat that as
//! fatal.
//!
//! Tables are immutable once handed to the record builder. Lookups are
//! case-insensitive.

use crate::attribute::Attribute;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Vocabulary {
    MolecularEvidence,
    ResponseMetric,
    StatisticalTest,
}

impl Vocabulary {
    pub const ALL: [Vocabulary; 3] = [
        Vocabulary::MolecularEvidence,
        Vocabulary::ResponseMetric,
        Vocabulary::StatisticalTest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Vocabulary::MolecularEvidence => "molecular evidence",
            Vocabulary::ResponseMetric => "response metric",
            Vocabulary::StatisticalTest => "statistical test",
        }
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct VocabEntry {
    code: &'static str,
    attribute_type_id: &'static str,
    value: &'static str,
    value_type_id: &'static str,
    description: &'static str,
}

const MOLECULAR_EVIDENCE: &[VocabEntry] = &[
    VocabEntry {
        code: "variant",
        attribute_type_id: "biolink:has_evidence",
        value: "sequence_variant",
        value_type_id: "biolink:EvidenceType",
        description: "Drug response compared between cell lines with and without a somatic variant in the gene",
    },
    VocabEntry {
        code: "cnv",
        attribute_type_id: "biolink:has_evidence",
        value: "copy_number_alteration",
        value_type_id: "biolink:EvidenceType",
        description: "Drug response compared between cell lines with and without a copy number alteration of the gene",
    },
    VocabEntry {
        code: "expression",
        attribute_type_id: "biolink:has_evidence",
        value: "gene_expression",
        value_type_id: "biolink:EvidenceType",
        description: "Drug response correlated with basal expression of the gene",
    },
    VocabEntry {
        code: "methylation",
        attribute_type_id: "biolink:has_evidence",
        value: "promoter_methylation",
        value_type_id: "biolink:EvidenceType",
        description: "Drug response compared between cell lines with and without promoter methylation of the gene",
    },
];

const RESPONSE_METRICS: &[VocabEntry] = &[
    VocabEntry {
        code: "ic50",
        attribute_type_id: "biolink:has_attribute",
        value: "IC50",
        value_type_id: "xsd:string",
        description: "Half maximal inhibitory concentration of the drug",
    },
    VocabEntry {
        code: "auc",
        attribute_type_id: "biolink:has_attribute",
        value: "AUC",
        value_type_id: "xsd:string",
        description: "Area under the fitted dose-response curve",
    },
    VocabEntry {
        code: "actarea",
        attribute_type_id: "biolink:has_attribute",
        value: "ActArea",
        value_type_id: "xsd:string",
        description: "Activity area above the dose-response curve",
    },
];

const STATISTICAL_TESTS: &[VocabEntry] = &[
    VocabEntry {
        code: "t-test",
        attribute_type_id: "biolink:has_attribute",
        value: "t-test",
        value_type_id: "xsd:string",
        description: "Welch's two-sample t-test",
    },
    VocabEntry {
        code: "anova",
        attribute_type_id: "biolink:has_attribute",
        value: "ANOVA",
        value_type_id: "xsd:string",
        description: "Analysis of variance across cell line groups",
    },
    VocabEntry {
        code: "pearson",
        attribute_type_id: "biolink:has_attribute",
        value: "Pearson correlation",
        value_type_id: "xsd:string",
        description: "Significance of the Pearson correlation coefficient",
    },
    VocabEntry {
        code: "spearman",
        attribute_type_id: "biolink:has_attribute",
        value: "Spearman correlation",
        value_type_id: "xsd:string",
        description: "Significance of the Spearman rank correlation coefficient",
    },
    VocabEntry {
        code: "wilcoxon",
        attribute_type_id: "biolink:has_attribute",
        value: "Wilcoxon rank-sum test",
        value_type_id: "xsd:string",
        description: "Two-sample Wilcoxon rank-sum (Mann-Whitney U) test",
    },
];

#[derive(Debug, Clone, Default)]
pub struct CategoricalTables {
    tables: HashMap<Vocabulary, HashMap<String, Attribute>>,
}

impl CategoricalTables {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in vocabularies, every attribute stamped with `attribute_source`.
    pub fn builtin(attribute_source: &str) -> Self {
        let mut tables = Self::empty();
        for (vocabulary, entries) in [
            (Vocabulary::MolecularEvidence, MOLECULAR_EVIDENCE),
            (Vocabulary::ResponseMetric, RESPONSE_METRICS),
            (Vocabulary::StatisticalTest, STATISTICAL_TESTS),
        ] {
            for entry in entries {
                let attribute = Attribute::new(
                    attribute_source,
                    entry.attribute_type_id,
                    entry.value,
                    entry.value_type_id,
                )
                .with_description(entry.description);
                tables.insert(vocabulary, entry.code, attribute);
            }
        }
        tables
    }

    pub fn insert(&mut self, vocabulary: Vocabulary, code: &str, attribute: Attribute) {
        self.tables
            .entry(vocabulary)
            .or_default()
            .insert(code.trim().to_lowercase(), attribute);
    }

    pub fn lookup(&self, vocabulary: Vocabulary, code: &str) -> Option<&Attribute> {
        self.tables
            .get(&vocabulary)?
            .get(&code.trim().to_lowercase())
    }

    /// Known codes for a vocabulary, sorted.
    pub fn codes(&self, vocabulary: Vocabulary) -> Vec<&str> {
        let mut codes: Vec<&str> = self
            .tables
            .get(&vocabulary)
            .map(|t| t.keys().map(String::as_str).collect())
            .unwrap_or_default();
        codes.sort_unstable();
        codes
    }
}
