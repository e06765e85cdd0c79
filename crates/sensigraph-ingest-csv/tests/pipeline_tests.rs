use sensigraph_ingest_csv::{
    ingest_reader, EdgeStream, IngestConfig, IngestError, JsonLinesWriter, RecordBuilder,
    EXPECTED_COLUMNS,
};
use serde_json::Value;

const ROW_TP53_NUTLIN: &str = "TP53,NCBIGene:7157,biolink:Gene,Nutlin-3a,CHEMBL:CHEMBL191334,biolink:ChemicalSubstance,biolink:associated_with_sensitivity_to,variant,IC50,t-test,1.2e-10,812,PANCAN,GDSC1,PMID:22460905";
const ROW_BRAF_SORAFENIB: &str = "BRAF,ENSG00000157764,biolink:Gene,Sorafenib,CHEBI:50924,biolink:SmallMolecule,biolink:associated_with_resistance_to,expression,AUC,pearson,0.003,410,SKCM,GDSC2,PMID: 23180760";

fn header() -> String {
    EXPECTED_COLUMNS.join(",")
}

fn table(rows: &[&str]) -> String {
    let mut text = header();
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    text
}

fn builder() -> RecordBuilder {
    RecordBuilder::from_config(IngestConfig::default())
}

fn run(text: &str) -> (Result<(), IngestError>, Vec<Value>) {
    let b = builder();
    let mut out = JsonLinesWriter::new(Vec::new());
    let result = ingest_reader(text.as_bytes(), "test.csv", &b, &mut out).map(|_| ());
    let docs = String::from_utf8(out.into_inner())
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    (result, docs)
}

#[test]
fn emits_documents_with_stable_shape() {
    let (result, docs) = run(&table(&[ROW_TP53_NUTLIN, ROW_BRAF_SORAFENIB]));
    result.unwrap();
    assert_eq!(docs.len(), 2);

    let braf = &docs[1];
    assert_eq!(braf["subject"]["id"], "ENSEMBL:ENSG00000157764");
    assert_eq!(braf["subject"]["ensembl"], "ENSG00000157764");
    assert_eq!(braf["subject"]["type"], "biolink:Gene");
    assert_eq!(braf["object"]["id"], "CHEBI:50924");
    assert_eq!(braf["object"]["chebi"], "CHEBI:50924");
    assert_eq!(braf["association"]["edge_label"], "biolink:associated_with_resistance_to");

    let attributes = braf["association"]["edge_attributes"].as_array().unwrap();
    let dataset = attributes
        .iter()
        .find(|a| a["attribute_type_id"] == "biolink:supporting_data_set")
        .unwrap();
    assert_eq!(dataset["attributes"][0]["value"], "PMID:23180760");

    let tp53 = &docs[0];
    assert_eq!(tp53["object"]["chembl_compound"], "CHEMBL191334");
    assert_eq!(tp53["object"]["type"], "biolink:SmallMolecule");
}

#[test]
fn duplicate_record_ids_are_suffixed_not_dropped() {
    // Same discriminators, different sample size.
    let twin = ROW_TP53_NUTLIN.replace(",812,", ",640,");
    let (result, docs) = run(&table(&[ROW_TP53_NUTLIN, &twin, ROW_BRAF_SORAFENIB]));
    result.unwrap();

    assert_eq!(docs.len(), 3);
    let first = docs[0]["_id"].as_str().unwrap();
    let second = docs[1]["_id"].as_str().unwrap();
    assert_eq!(second, format!("{first}-2"));
    assert!(!docs[2]["_id"].as_str().unwrap().ends_with("-2"));
}

#[test]
fn unparseable_identifiers_skip_rows_and_processing_continues() {
    let bad_subject = ROW_TP53_NUTLIN.replace("NCBIGene:7157", "TP53");
    let bad_object = ROW_BRAF_SORAFENIB.replace("CHEBI:50924", "CHEBI:50924:extra");
    let b = builder();
    let text = table(&[&bad_subject, ROW_BRAF_SORAFENIB, &bad_object]);

    let mut stream = EdgeStream::new(text.as_bytes(), &b, "test.csv").unwrap();
    let edges: Vec<_> = stream.by_ref().collect::<Result<_, _>>().unwrap();

    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].subject.id(), "ENSEMBL:ENSG00000157764");
    let stats = stream.stats();
    assert_eq!(stats.rows_read, 3);
    assert_eq!(stats.emitted, 1);
    assert_eq!(stats.skipped, 2);
}

#[test]
fn misnamed_header_aborts_before_any_row() {
    let bad_header = header().replace("subject_category", "subject_type");
    let text = format!("{bad_header}\n{ROW_TP53_NUTLIN}\n");
    let (result, docs) = run(&text);

    match result {
        Err(IngestError::HeaderMismatch(mismatch)) => {
            assert_eq!(mismatch.mismatched_positions(), vec![2]);
        }
        other => panic!("expected header mismatch, got {other:?}"),
    }
    assert!(docs.is_empty());
}

#[test]
fn empty_input_fails_header_validation() {
    let b = builder();
    let err = EdgeStream::new("".as_bytes(), &b, "empty.csv").err().unwrap();
    assert!(matches!(err, IngestError::HeaderMismatch(_)));
}

#[test]
fn unknown_evidence_code_halts_the_run() {
    let drifted = ROW_BRAF_SORAFENIB.replace(",expression,", ",proteomics,");
    let (result, docs) = run(&table(&[ROW_TP53_NUTLIN, &drifted, ROW_TP53_NUTLIN]));

    let err = result.unwrap_err();
    assert_eq!(err.row(), Some(3));
    assert!(err.to_string().contains("`proteomics`"));
    // Only the row before the drift made it out.
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["subject"]["id"], "NCBIGene:7157");
}

#[test]
fn stream_is_fused_after_a_fatal_error() {
    let drifted = ROW_TP53_NUTLIN.replace(",IC50,", ",EC90,");
    let b = builder();
    let text = table(&[&drifted, ROW_BRAF_SORAFENIB]);
    let mut stream = EdgeStream::new(text.as_bytes(), &b, "test.csv").unwrap();

    assert!(matches!(stream.next(), Some(Err(IngestError::UnknownCode { .. }))));
    assert!(stream.next().is_none());
    assert!(stream.next().is_none());
}

#[test]
fn each_stream_has_its_own_duplicate_table() {
    let b = builder();
    let text = table(&[ROW_TP53_NUTLIN]);

    let first: Vec<_> = EdgeStream::new(text.as_bytes(), &b, "a.csv")
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    let second: Vec<_> = EdgeStream::new(text.as_bytes(), &b, "b.csv")
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(first[0].id, second[0].id);
}

#[test]
fn tab_delimited_input_follows_config() {
    let b = RecordBuilder::from_config(IngestConfig {
        delimiter: '\t',
        namespace: "ccle".to_string(),
        ..IngestConfig::default()
    });
    let text = format!(
        "{}\n{}\n",
        EXPECTED_COLUMNS.join("\t"),
        ROW_TP53_NUTLIN.replace(',', "\t")
    );
    let edges: Vec<_> = EdgeStream::new(text.as_bytes(), &b, "tab.tsv")
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert!(edges[0].id.starts_with("ccle-NCBIGene:7157-"));
}
