//! Integration tests for the complete Sensigraph pipeline
//!
//! These tests verify end-to-end functionality across crates:
//! - on-disk tables → `ingest_path` → JSON Lines file
//! - config file + nodes table → record builder
//!
//! Run with: cargo test --test integration_tests

use approx::assert_relative_eq;
use sensigraph_ingest_csv::{
    ingest_path, IngestConfig, IngestError, JsonLinesWriter, RecordBuilder, StaticNameTable,
    EXPECTED_COLUMNS,
};
use serde_json::Value;
use std::fs;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;
use tempfile::tempdir;

fn write_table(path: &Path, rows: &[&str]) {
    let mut text = EXPECTED_COLUMNS.join(",");
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    fs::write(path, text).unwrap();
}

fn read_jsonl(path: &Path) -> Vec<Value> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn attribute<'a>(doc: &'a Value, type_id: &str) -> &'a Value {
    doc["association"]["edge_attributes"]
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["attribute_type_id"] == type_id)
        .unwrap_or_else(|| panic!("no {type_id} attribute"))
}

// ============================================================================
// Tables on disk → JSON Lines
// ============================================================================

#[test]
fn test_two_files_share_one_output_with_per_file_ids() {
    let dir = tempdir().unwrap();
    let brca = dir.path().join("brca.csv");
    let skcm = dir.path().join("skcm.csv");
    let row = "EGFR,NCBIGene:1956,biolink:Gene,Erlotinib,PUBCHEM:176870,biolink:ChemicalSubstance,biolink:associated_with_sensitivity_to,cnv,AUC,anova,4.5e-6,220,BRCA,GDSC2,PMC:3349233";
    write_table(&brca, &[row, row]);
    write_table(&skcm, &[&row.replace(",BRCA,", ",SKCM,"), "bad,row-without-curie,biolink:Gene,Erlotinib,PUBCHEM:176870,biolink:SmallMolecule,biolink:associated_with_sensitivity_to,cnv,AUC,anova,0.2,10,SKCM,GDSC2,PMC:3349233"]);

    let out_path = dir.path().join("edges.jsonl");
    let builder = RecordBuilder::from_config(IngestConfig::default());
    let mut writer = JsonLinesWriter::new(BufWriter::new(fs::File::create(&out_path).unwrap()));

    let first = ingest_path(&brca, &builder, &mut writer).unwrap();
    let second = ingest_path(&skcm, &builder, &mut writer).unwrap();
    writer.flush().unwrap();

    assert_eq!((first.emitted, first.duplicates), (2, 1));
    assert_eq!((second.emitted, second.skipped), (1, 1));

    let docs = read_jsonl(&out_path);
    assert_eq!(docs.len(), 3);
    assert_eq!(
        docs[0]["_id"],
        "gdsc-NCBIGene:1956-biolink:associated_with_sensitivity_to-PUBCHEM.COMPOUND:176870-BRCA-4.5e-6"
    );
    assert_eq!(docs[1]["_id"], format!("{}-2", docs[0]["_id"].as_str().unwrap()));
    assert!(docs[2]["_id"].as_str().unwrap().ends_with("-SKCM-4.5e-6"));

    let doc = &docs[0];
    assert_eq!(doc["object"]["pubchem_compound"], "176870");
    assert_eq!(doc["object"]["type"], "biolink:SmallMolecule");
    assert_relative_eq!(attribute(doc, "biolink:p_value")["value"].as_f64().unwrap(), 4.5e-6);
    assert_eq!(attribute(doc, "biolink:p_value")["attributes"][0]["value"], "ANOVA");
    assert_eq!(attribute(doc, "biolink:has_count")["value"], 220);
    assert_eq!(
        attribute(doc, "biolink:disease_context_qualifier")["value"],
        "MONDO:0006256"
    );
}

#[test]
fn test_config_file_and_nodes_table() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("ingest.json");
    fs::write(
        &config_path,
        r#"{"namespace": "multiomics", "primary_knowledge_source": "infores:gdsc", "clean_object_names": true}"#,
    )
    .unwrap();
    let nodes_path = dir.path().join("nodes.csv");
    fs::write(&nodes_path, "id,name,category\nCHEMBL:CHEMBL1336,Sorafenib,biolink:SmallMolecule\n").unwrap();
    let table_path = dir.path().join("table.csv");
    write_table(
        &table_path,
        &["BRAF,HGNC:1097,biolink:Gene,\"Sorafenib, BAY 43-9006 (rescreen)\",,biolink:SmallMolecule,biolink:associated_with_resistance_to,variant,IC50,t-test,0.01,95,SKCM,GDSC1,PMID:22460905"],
    );

    let config = IngestConfig::from_json_file(&config_path).unwrap();
    let nodes = StaticNameTable::from_path(&nodes_path).unwrap();
    let builder = RecordBuilder::from_config(config).with_resolver(Arc::new(nodes));

    let out_path = dir.path().join("edges.jsonl");
    let mut writer = JsonLinesWriter::new(fs::File::create(&out_path).unwrap());
    let stats = ingest_path(&table_path, &builder, &mut writer).unwrap();
    assert_eq!(stats.emitted, 1);

    let docs = read_jsonl(&out_path);
    let doc = &docs[0];
    assert_eq!(doc["object"]["name"], "Sorafenib");
    assert_eq!(doc["object"]["id"], "CHEMBL.COMPOUND:CHEMBL1336");
    assert!(doc["_id"].as_str().unwrap().starts_with("multiomics-HGNC:1097-"));
    assert_eq!(
        attribute(doc, "biolink:primary_knowledge_source")["value"],
        "infores:gdsc"
    );
    assert_eq!(
        attribute(doc, "biolink:p_value")["attribute_source"],
        "infores:biothings-multiomics-drug-response"
    );
}

#[test]
fn test_header_mismatch_leaves_output_empty() {
    let dir = tempdir().unwrap();
    let table_path = dir.path().join("drifted.csv");
    let header = EXPECTED_COLUMNS.join(",").replace("subject_category", "subject_class");
    fs::write(
        &table_path,
        format!("{header}\nTP53,NCBIGene:7157,biolink:Gene,Nutlin-3a,CHEMBL:CHEMBL191334,biolink:SmallMolecule,biolink:associated_with_sensitivity_to,variant,IC50,t-test,0.001,812,BRCA,GDSC1,PMID:22460905\n"),
    )
    .unwrap();

    let builder = RecordBuilder::from_config(IngestConfig::default());
    let mut writer = JsonLinesWriter::new(Vec::new());
    let err = ingest_path(&table_path, &builder, &mut writer).unwrap_err();

    assert!(matches!(err, IngestError::HeaderMismatch(_)));
    assert!(err.to_string().contains("found `subject_class`"));
    assert_eq!(writer.written(), 0);
    assert!(writer.into_inner().is_empty());
}

#[test]
fn test_missing_input_reports_path() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.csv");
    let builder = RecordBuilder::from_config(IngestConfig::default());
    let mut writer = JsonLinesWriter::new(Vec::new());

    let err = ingest_path(&missing, &builder, &mut writer).unwrap_err();
    assert!(matches!(err, IngestError::Io { .. }));
    assert!(err.to_string().contains("nope.csv"));
}
